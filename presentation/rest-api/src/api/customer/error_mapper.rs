use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::customer::errors::CustomerError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CustomerError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CustomerError::FieldEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "customer.field_empty",
            ),
            CustomerError::PasswordMismatch => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "customer.password_mismatch",
            ),
            CustomerError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "customer.not_found")
            }
            CustomerError::Repository(_) => (
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
