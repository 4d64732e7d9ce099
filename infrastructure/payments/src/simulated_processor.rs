use std::time::Duration;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use rand::Rng;

use business::domain::order::errors::OrderError;
use business::domain::order::model::PaymentMethod;
use business::domain::order::services::{PaymentConfirmation, PaymentProcessor};

/// Stand-in for a real payment gateway.
///
/// Sleeps for a fixed duration to model gateway latency, then authorizes the
/// charge. A decline rate above zero makes a random fraction of charges fail
/// with `PaymentDeclined`, which is useful for exercising the checkout error
/// path.
pub struct PaymentProcessorSimulated {
    processing_delay: Duration,
    decline_rate: f64,
}

impl PaymentProcessorSimulated {
    pub fn new(processing_delay: Duration, decline_rate: f64) -> Self {
        Self {
            processing_delay,
            decline_rate: decline_rate.clamp(0.0, 1.0),
        }
    }
}

#[async_trait]
impl PaymentProcessor for PaymentProcessorSimulated {
    async fn charge(
        &self,
        _amount: &BigDecimal,
        _method: &PaymentMethod,
    ) -> Result<PaymentConfirmation, OrderError> {
        tokio::time::sleep(self.processing_delay).await;

        let mut rng = rand::rng();
        if self.decline_rate > 0.0 && rng.random::<f64>() < self.decline_rate {
            return Err(OrderError::PaymentDeclined);
        }

        Ok(PaymentConfirmation {
            reference: format!("PAY-{:08X}", rng.random::<u32>()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_authorize_when_decline_rate_is_zero() {
        let processor = PaymentProcessorSimulated::new(Duration::ZERO, 0.0);

        let result = processor
            .charge(&BigDecimal::from(26), &PaymentMethod::Card)
            .await;

        assert!(result.unwrap().reference.starts_with("PAY-"));
    }

    #[tokio::test]
    async fn should_decline_when_decline_rate_is_one() {
        let processor = PaymentProcessorSimulated::new(Duration::ZERO, 1.0);

        let result = processor
            .charge(&BigDecimal::from(26), &PaymentMethod::Paypal)
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::PaymentDeclined));
    }
}
