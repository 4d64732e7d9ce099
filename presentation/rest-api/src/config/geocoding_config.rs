use std::env;

/// OpenCage geocoding configuration
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    pub api_key: String,
}

impl GeocodingConfig {
    /// Load geocoding configuration from environment variables
    ///
    /// Environment variables:
    /// - OPENCAGE_API_KEY: API key for the OpenCage geocoding service.
    ///   Defaults to a placeholder; lookups then fail and registrations fall
    ///   back to coordinate-rendered addresses.
    pub fn from_env() -> Self {
        let api_key = env::var("OPENCAGE_API_KEY").unwrap_or_else(|_| "YOUR_API_KEY".to_string());

        Self { api_key }
    }
}
