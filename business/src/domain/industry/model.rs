use chrono::{DateTime, Utc};

use super::errors::IndustryError;
use crate::domain::pickup::model::WasteType;
use crate::domain::shared::value_objects::{IndustryId, PasswordDigest};

/// An industrial account in the waste management network. The declared waste
/// types bound which pickup requests the industry may submit.
#[derive(Debug, Clone)]
pub struct IndustryUser {
    pub id: IndustryId,
    pub industry_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub waste_types: Vec<WasteType>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub password_digest: PasswordDigest,
    pub registered_at: DateTime<Utc>,
}

pub struct NewIndustryProps {
    pub industry_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub waste_types: Vec<WasteType>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub password_digest: PasswordDigest,
}

impl IndustryUser {
    pub fn new(props: NewIndustryProps) -> Result<Self, IndustryError> {
        let required = [
            &props.industry_name,
            &props.contact_person,
            &props.email,
            &props.phone,
            &props.address,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(IndustryError::FieldEmpty);
        }

        if props.waste_types.is_empty() {
            return Err(IndustryError::NoWasteTypes);
        }

        let registered_at = Utc::now();
        Ok(Self {
            id: IndustryId::new(registered_at.timestamp_millis().to_string()),
            industry_name: props.industry_name,
            contact_person: props.contact_person,
            email: props.email,
            phone: props.phone,
            waste_types: props.waste_types,
            address: props.address,
            latitude: props.latitude,
            longitude: props.longitude,
            description: props.description.filter(|d| !d.trim().is_empty()),
            password_digest: props.password_digest,
            registered_at,
        })
    }

    /// Constructor for data already persisted in the repository (no
    /// validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: IndustryId,
        industry_name: String,
        contact_person: String,
        email: String,
        phone: String,
        waste_types: Vec<WasteType>,
        address: String,
        latitude: Option<f64>,
        longitude: Option<f64>,
        description: Option<String>,
        password_digest: PasswordDigest,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            industry_name,
            contact_person,
            email,
            phone,
            waste_types,
            address,
            latitude,
            longitude,
            description,
            password_digest,
            registered_at,
        }
    }

    pub fn handles_waste_type(&self, waste_type: WasteType) -> bool {
        self.waste_types.contains(&waste_type)
    }
}
