use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::MalformedRequest(_) => (StatusCode::BAD_REQUEST, "MalformedRequest"),
            CartError::InvalidItem(_) => (StatusCode::BAD_REQUEST, "InvalidItem"),
            CartError::InvalidState(_) => (StatusCode::BAD_REQUEST, "InvalidState"),
            CartError::ItemNotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
