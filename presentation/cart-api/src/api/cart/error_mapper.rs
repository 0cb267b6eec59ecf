use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::notice::{CartOperation, Notice};

/// A cart error together with the operation that produced it.
pub struct CartFailure {
    pub operation: CartOperation,
    pub error: CartError,
}

impl CartFailure {
    pub fn new(operation: CartOperation, error: CartError) -> Self {
        Self { operation, error }
    }
}

impl IntoErrorResponse for CartFailure {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self.error {
            CartError::StockExceeded => (StatusCode::CONFLICT, "Conflict"),
            CartError::ProductNotInCart => (StatusCode::NOT_FOUND, "NotFound"),
            CartError::Catalog(_) => (StatusCode::BAD_GATEWAY, "UpstreamError"),
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.error.to_string(),
                notice: Some(Notice::for_failure(self.operation, &self.error)),
            }),
        )
    }
}
