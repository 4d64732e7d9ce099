use async_trait::async_trait;
use bigdecimal::BigDecimal;

use super::errors::OrderError;
use super::model::PaymentMethod;

/// Outcome of a successful charge.
#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    pub reference: String,
}

/// Service port for authorizing a payment at checkout.
///
/// The contract is deliberately thin: amount and method in, confirmation or
/// `OrderError::PaymentDeclined` out. There is no retry policy; a declined
/// payment is surfaced to the customer, who retries by resubmitting.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn charge(
        &self,
        amount: &BigDecimal,
        method: &PaymentMethod,
    ) -> Result<PaymentConfirmation, OrderError>;
}
