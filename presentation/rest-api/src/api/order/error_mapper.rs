use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::EmptyCart => {
                (StatusCode::BAD_REQUEST, "ValidationError", "order.empty_cart")
            }
            OrderError::AddressIncomplete => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.address_incomplete",
            ),
            OrderError::UnknownStatus => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.unknown_status",
            ),
            OrderError::UnknownPaymentMethod => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.unknown_payment_method",
            ),
            OrderError::PaymentDeclined => (
                StatusCode::PAYMENT_REQUIRED,
                "PaymentDeclined",
                "order.payment_declined",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "order.not_found"),
            OrderError::Cart(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_line_item",
            ),
            OrderError::Repository(_) => (
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
