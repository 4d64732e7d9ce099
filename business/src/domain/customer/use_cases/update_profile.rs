use async_trait::async_trait;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::model::Customer;
use crate::domain::shared::value_objects::CustomerId;

pub struct UpdateCustomerProfileParams {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
}

#[async_trait]
pub trait UpdateCustomerProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCustomerProfileParams)
    -> Result<Customer, CustomerError>;
}
