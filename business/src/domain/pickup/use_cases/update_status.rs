use async_trait::async_trait;

use crate::domain::pickup::errors::PickupError;
use crate::domain::pickup::model::{PickupRequest, PickupStatus};
use crate::domain::shared::value_objects::IndustryId;

pub struct UpdatePickupStatusParams {
    pub industry_id: IndustryId,
    pub request_id: String,
    pub status: PickupStatus,
}

/// Applies the status reported by the (simulated) collection dispatcher.
#[async_trait]
pub trait UpdatePickupStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdatePickupStatusParams)
    -> Result<PickupRequest, PickupError>;
}
