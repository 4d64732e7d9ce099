use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::customer::model::Customer;

#[derive(Debug, Clone, Object)]
pub struct RegisterCustomerRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    /// Street address; may be left empty when coordinates are supplied
    pub address: String,
    pub city: String,
    pub zip_code: String,
    /// Detected latitude, when the browser shared it
    #[oai(skip_serializing_if_is_none)]
    pub latitude: Option<f64>,
    /// Detected longitude, when the browser shared it
    #[oai(skip_serializing_if_is_none)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCustomerProfileRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
}

/// Customer profile as returned to the client. The password digest never
/// leaves the service.
#[derive(Debug, Clone, Object)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    #[oai(skip_serializing_if_is_none)]
    pub latitude: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub longitude: Option<f64>,
    pub registered_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            city: customer.city,
            zip_code: customer.zip_code,
            latitude: customer.latitude,
            longitude: customer.longitude,
            registered_at: customer.registered_at,
        }
    }
}
