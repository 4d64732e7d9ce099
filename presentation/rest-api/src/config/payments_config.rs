use std::env;
use std::time::Duration;

/// Simulated payment gateway configuration
#[derive(Debug, Clone)]
pub struct PaymentsConfig {
    pub processing_delay: Duration,
    pub decline_rate: f64,
}

impl PaymentsConfig {
    /// Load payments configuration from environment variables
    ///
    /// Environment variables:
    /// - PAYMENT_PROCESSING_MS: Simulated gateway latency in milliseconds
    ///   (default: 3000)
    /// - PAYMENT_DECLINE_RATE: Fraction of charges declined, 0.0-1.0
    ///   (default: 0.0)
    pub fn from_env() -> Self {
        let processing_ms = env::var("PAYMENT_PROCESSING_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(3000);
        let decline_rate = env::var("PAYMENT_DECLINE_RATE")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0);

        Self {
            processing_delay: Duration::from_millis(processing_ms),
            decline_rate,
        }
    }
}
