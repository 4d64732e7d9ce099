use async_trait::async_trait;

use crate::domain::pickup::errors::PickupError;
use crate::domain::pickup::model::{PickupRequest, WasteType};
use crate::domain::shared::value_objects::IndustryId;

pub struct CreatePickupRequestParams {
    pub industry_id: IndustryId,
    pub waste_type: WasteType,
    pub amount_kg: u32,
    pub notes: Option<String>,
}

#[async_trait]
pub trait CreatePickupRequestUseCase: Send + Sync {
    async fn execute(&self, params: CreatePickupRequestParams)
    -> Result<PickupRequest, PickupError>;
}
