use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::pickup::errors::PickupError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PickupError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            PickupError::AmountNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "pickup.amount_not_positive",
            ),
            PickupError::WasteTypeNotDeclared => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "pickup.waste_type_not_declared",
            ),
            PickupError::UnknownWasteType => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "pickup.unknown_waste_type",
            ),
            PickupError::UnknownStatus => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "pickup.unknown_status",
            ),
            PickupError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "pickup.not_found"),
            PickupError::NotCancellable => {
                (StatusCode::CONFLICT, "Conflict", "pickup.not_cancellable")
            }
            PickupError::IndustryNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "pickup.industry_not_found",
            ),
            PickupError::Repository(_) => (
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
