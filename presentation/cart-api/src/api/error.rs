use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use crate::api::notice::Notice;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Message to show the shopper, when there is one
    #[oai(skip_serializing_if_is_none)]
    pub notice: Option<Notice>,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
