use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;

use super::errors::CatalogError;
use super::model::{Product, StockInfo};

/// Service port for the remote catalog that owns products and stock.
///
/// Both lookups are read-only and uncached: every call is a fresh request.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<StockInfo, CatalogError>;

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError>;
}
