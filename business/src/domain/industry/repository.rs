use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::IndustryId;

use super::model::IndustryUser;

#[async_trait]
pub trait IndustryRepository: Send + Sync {
    async fn get_by_id(&self, id: &IndustryId) -> Result<IndustryUser, RepositoryError>;
    async fn save(&self, industry: &IndustryUser) -> Result<(), RepositoryError>;
}
