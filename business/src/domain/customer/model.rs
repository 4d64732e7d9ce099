use chrono::{DateTime, Utc};

use super::errors::CustomerError;
use crate::domain::shared::value_objects::{CustomerId, PasswordDigest};

/// A consumer account: profile plus the delivery details pre-filled at
/// checkout.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub password_digest: PasswordDigest,
    pub registered_at: DateTime<Utc>,
}

pub struct NewCustomerProps {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub password_digest: PasswordDigest,
}

impl Customer {
    pub fn new(props: NewCustomerProps) -> Result<Self, CustomerError> {
        let required = [
            &props.name,
            &props.email,
            &props.phone,
            &props.address,
            &props.city,
            &props.zip_code,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(CustomerError::FieldEmpty);
        }

        let registered_at = Utc::now();
        Ok(Self {
            id: CustomerId::new(registered_at.timestamp_millis().to_string()),
            name: props.name,
            email: props.email,
            phone: props.phone,
            address: props.address,
            city: props.city,
            zip_code: props.zip_code,
            latitude: props.latitude,
            longitude: props.longitude,
            password_digest: props.password_digest,
            registered_at,
        })
    }

    /// Constructor for data already persisted in the repository (no
    /// validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: CustomerId,
        name: String,
        email: String,
        phone: String,
        address: String,
        city: String,
        zip_code: String,
        latitude: Option<f64>,
        longitude: Option<f64>,
        password_digest: PasswordDigest,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            address,
            city,
            zip_code,
            latitude,
            longitude,
            password_digest,
            registered_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewCustomerProps {
        NewCustomerProps {
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            phone: "555-0101".to_string(),
            address: "12 Garden Lane".to_string(),
            city: "Portland".to_string(),
            zip_code: "97201".to_string(),
            latitude: None,
            longitude: None,
            password_digest: PasswordDigest::from_raw("hunter2"),
        }
    }

    #[test]
    fn should_create_customer_with_time_derived_id() {
        let customer = Customer::new(props()).unwrap();

        assert!(!customer.id.as_str().is_empty());
        assert_eq!(customer.name, "Sarah Johnson");
    }

    #[test]
    fn should_reject_blank_required_field() {
        let mut invalid = props();
        invalid.city = "   ".to_string();

        let result = Customer::new(invalid);

        assert!(matches!(result.unwrap_err(), CustomerError::FieldEmpty));
    }
}
