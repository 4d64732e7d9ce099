use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::CustomerId;

#[async_trait]
pub trait GetAllOrdersUseCase: Send + Sync {
    async fn execute(&self, customer_id: CustomerId) -> Result<Vec<Order>, OrderError>;
}
