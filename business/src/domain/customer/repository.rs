use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::CustomerId;

use super::model::Customer;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn get_by_id(&self, id: &CustomerId) -> Result<Customer, RepositoryError>;
    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError>;
}
