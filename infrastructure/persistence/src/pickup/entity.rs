use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::pickup::model::{PickupRequest, PickupStatus, WasteType};
use business::domain::shared::value_objects::IndustryId;

#[derive(Debug, FromRow)]
pub struct PickupRequestEntity {
    pub id: String,
    pub industry_id: String,
    pub waste_type: String,
    pub amount_kg: i32,
    pub status: String,
    pub request_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl PickupRequestEntity {
    pub fn into_domain(self) -> Result<PickupRequest, RepositoryError> {
        let waste_type = self
            .waste_type
            .parse::<WasteType>()
            .map_err(|_| RepositoryError::Persistence)?;
        let amount_kg =
            u32::try_from(self.amount_kg).map_err(|_| RepositoryError::Persistence)?;

        Ok(PickupRequest::from_repository(
            self.id,
            IndustryId::new(self.industry_id),
            waste_type,
            amount_kg,
            self.status
                .parse::<PickupStatus>()
                .unwrap_or(PickupStatus::Pending),
            self.request_date,
            self.notes,
        ))
    }
}
