use async_trait::async_trait;

use crate::domain::pickup::errors::PickupError;
use crate::domain::shared::value_objects::IndustryId;

pub struct CancelPickupRequestParams {
    pub industry_id: IndustryId,
    pub request_id: String,
}

/// Withdraws a request that has not been collected yet. Requests already
/// picked up are final.
#[async_trait]
pub trait CancelPickupRequestUseCase: Send + Sync {
    async fn execute(&self, params: CancelPickupRequestParams) -> Result<(), PickupError>;
}
