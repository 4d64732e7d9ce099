use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Identifies a consumer customer.
/// Used to scope carts and order history between customers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CustomerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifies a registered industry.
/// Used to scope pickup requests between industries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndustryId(String);

impl IndustryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IndustryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for IndustryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IndustryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// SHA-256 digest of a password, base64-encoded for storage.
/// Plain passwords never leave the registration use cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn from_raw(password: &str) -> Self {
        let hash = Sha256::digest(password.as_bytes());
        Self(base64::engine::general_purpose::STANDARD.encode(hash))
    }

    /// Constructor for digests already persisted in the repository.
    pub fn from_stored(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_customer_id_from_str() {
        let id = CustomerId::new("1704067200000");
        assert_eq!(id.as_str(), "1704067200000");
    }

    #[test]
    fn should_compare_customer_ids_for_equality() {
        assert_eq!(CustomerId::new("same"), CustomerId::new("same"));
        assert_ne!(CustomerId::new("one"), CustomerId::new("other"));
    }

    #[test]
    fn should_display_industry_id() {
        let id = IndustryId::new("1704067200001");
        assert_eq!(format!("{}", id), "1704067200001");
    }

    #[test]
    fn should_hash_password_deterministically() {
        let a = PasswordDigest::from_raw("hunter2");
        let b = PasswordDigest::from_raw("hunter2");
        assert_eq!(a, b);
    }

    #[test]
    fn should_produce_distinct_digests_for_distinct_passwords() {
        let a = PasswordDigest::from_raw("hunter2");
        let b = PasswordDigest::from_raw("hunter3");
        assert_ne!(a, b);
    }

    #[test]
    fn should_not_store_the_raw_password() {
        let digest = PasswordDigest::from_raw("hunter2");
        assert_ne!(digest.as_str(), "hunter2");
    }
}
