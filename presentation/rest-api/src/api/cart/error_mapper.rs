use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::InvalidLineItem => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_line_item",
            ),
            CartError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "cart.product_not_found",
            ),
            CartError::OutOfStock => {
                (StatusCode::CONFLICT, "Conflict", "cart.out_of_stock")
            }
            CartError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "cart.item_not_found")
            }
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
