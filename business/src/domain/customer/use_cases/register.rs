use async_trait::async_trait;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::model::Customer;

pub struct RegisterCustomerParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[async_trait]
pub trait RegisterCustomerUseCase: Send + Sync {
    async fn execute(&self, params: RegisterCustomerParams) -> Result<Customer, CustomerError>;
}
