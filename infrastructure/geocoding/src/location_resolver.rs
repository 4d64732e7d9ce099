use async_trait::async_trait;

use business::domain::shared::services::{LocationResolver, ResolvedAddress};

use crate::client::OpenCageClient;

/// Reverse geocoding adapter backed by the OpenCage API.
///
/// The lookup is attempted once; any transport error, non-success status, or
/// empty result set falls back to the coordinate rendering required by the
/// port contract.
pub struct LocationResolverOpenCage {
    client: OpenCageClient,
}

impl LocationResolverOpenCage {
    pub fn new(client: OpenCageClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &serde_json::Value) -> Option<String> {
        let formatted = body
            .get("results")?
            .as_array()?
            .first()?
            .get("formatted")?
            .as_str()?;

        if formatted.trim().is_empty() {
            return None;
        }
        Some(formatted.to_string())
    }
}

#[async_trait]
impl LocationResolver for LocationResolverOpenCage {
    async fn reverse_lookup(&self, latitude: f64, longitude: f64) -> ResolvedAddress {
        let url = self.client.reverse_url(latitude, longitude);

        let response = match self.client.client.get(&url).send().await {
            Ok(r) => r,
            Err(_) => return ResolvedAddress::from_coordinates(latitude, longitude),
        };

        if !response.status().is_success() {
            return ResolvedAddress::from_coordinates(latitude, longitude);
        }

        let body: serde_json::Value = match response.json().await {
            Ok(b) => b,
            Err(_) => return ResolvedAddress::from_coordinates(latitude, longitude),
        };

        match Self::parse_response(&body) {
            Some(address) => ResolvedAddress {
                address,
                precise: true,
            },
            None => ResolvedAddress::from_coordinates(latitude, longitude),
        }
    }
}
