use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::industry::model::IndustryUser;

#[derive(Debug, Clone, Object)]
pub struct RegisterIndustryRequest {
    pub industry_name: String,
    pub contact_person: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    /// Waste types this industry produces (at least one)
    pub waste_types: Vec<String>,
    /// Street address; may be left empty when coordinates are supplied
    pub address: String,
    #[oai(skip_serializing_if_is_none)]
    pub latitude: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub longitude: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateIndustryProfileRequest {
    pub industry_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub waste_types: Vec<String>,
    pub address: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

/// Industry profile as returned to the client. The password digest never
/// leaves the service.
#[derive(Debug, Clone, Object)]
pub struct IndustryResponse {
    pub id: String,
    pub industry_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub waste_types: Vec<String>,
    pub address: String,
    #[oai(skip_serializing_if_is_none)]
    pub latitude: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub longitude: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl From<IndustryUser> for IndustryResponse {
    fn from(industry: IndustryUser) -> Self {
        Self {
            id: industry.id.to_string(),
            industry_name: industry.industry_name,
            contact_person: industry.contact_person,
            email: industry.email,
            phone: industry.phone,
            waste_types: industry
                .waste_types
                .iter()
                .map(|w| w.to_string())
                .collect(),
            address: industry.address,
            latitude: industry.latitude,
            longitude: industry.longitude,
            description: industry.description,
            registered_at: industry.registered_at,
        }
    }
}
