use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartLine};
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::services::CatalogService;
use crate::domain::logger::Logger;

pub struct AddProductUseCaseImpl {
    pub store: Arc<CartStore>,
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Adding product {} to cart", product_id));

        let mut tx = self.store.begin().await;

        // Threshold is the current amount (1 for a new line), not the amount after adding.
        let requested_amount = tx.cart().find(product_id).map_or(1, |line| line.amount);

        let stock = self.catalog.get_stock(product_id).await.map_err(|e| {
            self.logger
                .error(&format!("Stock lookup for product {} failed: {}", product_id, e));
            CartError::from(e)
        })?;

        if stock.amount <= requested_amount {
            self.logger.warn(&format!(
                "Product {} out of stock: requested {}, available {}",
                product_id, requested_amount, stock.amount
            ));
            return Err(CartError::StockExceeded);
        }

        if !tx.cart_mut().increment(product_id) {
            let product = self.catalog.get_product(product_id).await.map_err(|e| {
                self.logger
                    .error(&format!("Product lookup for {} failed: {}", product_id, e));
                CartError::from(e)
            })?;
            if product.id != product_id || !tx.cart_mut().append(CartLine::from_product(product)) {
                self.logger.error(&format!(
                    "Catalog returned a product that cannot be added as {}",
                    product_id
                ));
                return Err(CatalogError::MalformedResponse.into());
            }
        }

        let cart = tx.commit().await?;

        self.logger
            .info(&format!("Product {} added to cart", product_id));
        Ok(cart)
    }
}
