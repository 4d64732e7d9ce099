use async_trait::async_trait;

/// Result of a reverse geocoding lookup.
///
/// `precise` is false when the lookup failed and the address is only the
/// rendered coordinates.
#[derive(Debug, Clone)]
pub struct ResolvedAddress {
    pub address: String,
    pub precise: bool,
}

impl ResolvedAddress {
    /// Fallback used whenever the external lookup cannot produce a formatted
    /// address: render the coordinates themselves.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            address: format!("Lat: {:.6}, Lng: {:.6}", latitude, longitude),
            precise: false,
        }
    }
}

/// Service port for resolving coordinates to a postal address.
///
/// The port never fails: adapters must fall back to
/// [`ResolvedAddress::from_coordinates`] when the external service is
/// unavailable or returns nothing usable.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn reverse_lookup(&self, latitude: f64, longitude: f64) -> ResolvedAddress;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_coordinates_with_six_decimals() {
        let resolved = ResolvedAddress::from_coordinates(40.416775, -3.703790);
        assert_eq!(resolved.address, "Lat: 40.416775, Lng: -3.703790");
        assert!(!resolved.precise);
    }
}
