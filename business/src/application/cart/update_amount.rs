use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::catalog::services::CatalogService;
use crate::domain::logger::Logger;

pub struct UpdateProductAmountUseCaseImpl {
    pub store: Arc<CartStore>,
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductAmountUseCase for UpdateProductAmountUseCaseImpl {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;

        if params.amount <= 0 {
            self.logger.debug(&format!(
                "Ignoring amount {} for product {}",
                params.amount, product_id
            ));
            return Ok(self.store.snapshot());
        }

        self.logger.info(&format!(
            "Setting amount of product {} to {}",
            product_id, params.amount
        ));

        let mut tx = self.store.begin().await;

        let stock = self.catalog.get_stock(product_id).await.map_err(|e| {
            self.logger
                .error(&format!("Stock lookup for product {} failed: {}", product_id, e));
            CartError::from(e)
        })?;

        if params.amount > i64::from(stock.amount) {
            self.logger.warn(&format!(
                "Product {} out of stock: requested {}, available {}",
                product_id, params.amount, stock.amount
            ));
            return Err(CartError::StockExceeded);
        }
        let amount = u32::try_from(params.amount).map_err(|_| CartError::StockExceeded)?;

        if !tx.cart_mut().set_amount(product_id, amount) {
            // Kept as a silent no-op; callers get the unchanged cart back.
            self.logger.warn(&format!(
                "Product {} is not in the cart, amount left unchanged",
                product_id
            ));
            return Ok(tx.cart().clone());
        }

        let cart = tx.commit().await?;

        self.logger.info(&format!(
            "Amount of product {} set to {}",
            product_id, amount
        ));
        Ok(cart)
    }
}
