use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderStatus};
use crate::domain::shared::value_objects::CustomerId;

pub struct UpdateOrderStatusParams {
    pub customer_id: CustomerId,
    pub order_id: String,
    pub status: OrderStatus,
}

/// Applies the fulfilment status reported by the (simulated) carrier.
#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError>;
}
