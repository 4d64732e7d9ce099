use async_trait::async_trait;

use crate::domain::pickup::errors::PickupError;
use crate::domain::pickup::model::PickupRequest;
use crate::domain::shared::value_objects::IndustryId;

#[async_trait]
pub trait GetAllPickupRequestsUseCase: Send + Sync {
    async fn execute(&self, industry_id: IndustryId) -> Result<Vec<PickupRequest>, PickupError>;
}
