use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::pickup::model::PickupRequest;

#[derive(Debug, Clone, Object)]
pub struct CreatePickupRequestRequest {
    /// One of the waste types the industry declared at registration
    pub waste_type: String,
    /// Amount to collect, in kilograms (at least 1)
    pub amount_kg: u32,
    /// Optional instructions for the collection crew
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdatePickupStatusRequest {
    /// One of: pending, assigned, picked_up
    pub status: String,
}

#[derive(Debug, Clone, Object)]
pub struct PickupRequestResponse {
    /// Request identifier
    pub id: String,
    /// Waste type to collect
    pub waste_type: String,
    /// Amount in kilograms
    pub amount_kg: u32,
    /// Collection status
    pub status: String,
    /// When the request was submitted
    pub request_date: DateTime<Utc>,
    /// Instructions for the collection crew
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

impl From<PickupRequest> for PickupRequestResponse {
    fn from(request: PickupRequest) -> Self {
        Self {
            id: request.id,
            waste_type: request.waste_type.to_string(),
            amount_kg: request.amount_kg,
            status: request.status.to_string(),
            request_date: request.request_date,
            notes: request.notes,
        }
    }
}
