use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::customer::model::Customer;
use business::domain::shared::value_objects::{CustomerId, PasswordDigest};

#[derive(Debug, FromRow)]
pub struct CustomerEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub password_digest: String,
    pub registered_at: DateTime<Utc>,
}

impl CustomerEntity {
    pub fn into_domain(self) -> Customer {
        Customer::from_repository(
            CustomerId::new(self.id),
            self.name,
            self.email,
            self.phone,
            self.address,
            self.city,
            self.zip_code,
            self.latitude,
            self.longitude,
            PasswordDigest::from_stored(self.password_digest),
            self.registered_at,
        )
    }
}
