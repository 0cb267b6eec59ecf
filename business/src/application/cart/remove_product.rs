use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase, RemovedProduct,
};
use crate::domain::logger::Logger;

pub struct RemoveProductUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<RemovedProduct, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Removing product {} from cart", product_id));

        let mut tx = self.store.begin().await;

        let line = tx.cart_mut().remove(product_id).ok_or_else(|| {
            self.logger
                .warn(&format!("Product {} is not in the cart", product_id));
            CartError::ProductNotInCart
        })?;

        let cart = tx.commit().await?;

        self.logger
            .info(&format!("Product {} removed from cart", product_id));
        Ok(RemovedProduct { line, cart })
    }
}
