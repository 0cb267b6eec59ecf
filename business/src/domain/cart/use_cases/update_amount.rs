use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateProductAmountParams {
    pub product_id: ProductId,
    /// Desired absolute quantity. Zero or negative values are ignored.
    pub amount: i64,
}

#[async_trait]
pub trait UpdateProductAmountUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError>;
}
