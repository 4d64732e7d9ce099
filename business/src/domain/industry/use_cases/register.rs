use async_trait::async_trait;

use crate::domain::industry::errors::IndustryError;
use crate::domain::industry::model::IndustryUser;
use crate::domain::pickup::model::WasteType;

pub struct RegisterIndustryParams {
    pub industry_name: String,
    pub contact_person: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub waste_types: Vec<WasteType>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
}

#[async_trait]
pub trait RegisterIndustryUseCase: Send + Sync {
    async fn execute(&self, params: RegisterIndustryParams) -> Result<IndustryUser, IndustryError>;
}
