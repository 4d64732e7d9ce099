use async_trait::async_trait;

use crate::domain::industry::errors::IndustryError;
use crate::domain::industry::model::IndustryUser;
use crate::domain::pickup::model::WasteType;
use crate::domain::shared::value_objects::IndustryId;

pub struct UpdateIndustryProfileParams {
    pub id: IndustryId,
    pub industry_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub waste_types: Vec<WasteType>,
    pub address: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateIndustryProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateIndustryProfileParams,
    ) -> Result<IndustryUser, IndustryError>;
}
