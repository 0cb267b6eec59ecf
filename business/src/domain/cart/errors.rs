use crate::domain::catalog::errors::CatalogError;
use crate::domain::errors::RepositoryError;

/// Why a cart operation had no effect.
///
/// The operation that failed is known to the caller, so presentation code
/// combines the two to pick the notice shown to the shopper.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.stock_exceeded")]
    StockExceeded,
    #[error("cart.product_not_in_cart")]
    ProductNotInCart,
    #[error("{0}")]
    Catalog(#[from] CatalogError),
    #[error("{0}")]
    Repository(#[from] RepositoryError),
}
