/// Failures while resolving stock or product details from the catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.unavailable")]
    Unavailable,
    #[error("catalog.malformed_response")]
    MalformedResponse,
}
