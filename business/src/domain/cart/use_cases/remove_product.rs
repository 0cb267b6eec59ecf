use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartLine};
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveProductParams {
    pub product_id: ProductId,
}

/// Outcome of a successful removal: the line that left and the cart after it.
#[derive(Debug, Clone)]
pub struct RemovedProduct {
    pub line: CartLine,
    pub cart: Cart,
}

#[async_trait]
pub trait RemoveProductUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductParams) -> Result<RemovedProduct, CartError>;
}
