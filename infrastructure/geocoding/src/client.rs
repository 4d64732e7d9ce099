use reqwest::Client;

/// Shared OpenCage HTTP client configuration.
pub struct OpenCageClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl OpenCageClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://api.opencagedata.com/geocode/v1".to_string(),
        }
    }

    /// Returns the reverse geocoding endpoint URL for a coordinate pair.
    pub fn reverse_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/json?q={}+{}&key={}",
            self.base_url, latitude, longitude, self.api_key
        )
    }
}
