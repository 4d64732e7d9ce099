use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::industry::errors::IndustryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for IndustryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            IndustryError::FieldEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "industry.field_empty",
            ),
            IndustryError::PasswordMismatch => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "industry.password_mismatch",
            ),
            IndustryError::NoWasteTypes => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "industry.no_waste_types",
            ),
            IndustryError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "industry.not_found")
            }
            IndustryError::Repository(_) => (
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
