use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::industry::model::IndustryUser;
use business::domain::pickup::model::WasteType;
use business::domain::shared::value_objects::{IndustryId, PasswordDigest};

/// Persisted industry account. Declared waste types are a JSONB array.
#[derive(Debug, FromRow)]
pub struct IndustryEntity {
    pub id: String,
    pub industry_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub waste_types: serde_json::Value,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub password_digest: String,
    pub registered_at: DateTime<Utc>,
}

impl IndustryEntity {
    pub fn into_domain(self) -> Result<IndustryUser, RepositoryError> {
        let waste_types: Vec<WasteType> =
            serde_json::from_value(self.waste_types).map_err(|_| RepositoryError::Persistence)?;

        Ok(IndustryUser::from_repository(
            IndustryId::new(self.id),
            self.industry_name,
            self.contact_person,
            self.email,
            self.phone,
            waste_types,
            self.address,
            self.latitude,
            self.longitude,
            self.description,
            PasswordDigest::from_stored(self.password_digest),
            self.registered_at,
        ))
    }
}
