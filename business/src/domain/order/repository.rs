use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::CustomerId;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Returns the customer's order history, newest first.
    async fn get_all(&self, customer_id: &CustomerId) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(
        &self,
        id: &str,
        customer_id: &CustomerId,
    ) -> Result<Order, RepositoryError>;
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
}
