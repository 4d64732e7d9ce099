use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::IndustryId;

use super::model::PickupRequest;

#[async_trait]
pub trait PickupRequestRepository: Send + Sync {
    /// Returns the industry's requests, newest first.
    async fn get_all(&self, industry_id: &IndustryId)
    -> Result<Vec<PickupRequest>, RepositoryError>;
    async fn get_by_id(
        &self,
        id: &str,
        industry_id: &IndustryId,
    ) -> Result<PickupRequest, RepositoryError>;
    async fn save(&self, request: &PickupRequest) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &str, industry_id: &IndustryId) -> Result<(), RepositoryError>;
}
