use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use crate::domain::shared::value_objects::CustomerId;

pub struct GetAllOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllOrdersUseCase for GetAllOrdersUseCaseImpl {
    async fn execute(&self, customer_id: CustomerId) -> Result<Vec<Order>, OrderError> {
        self.logger
            .debug(&format!("Fetching orders for customer {}", customer_id));

        let orders = self.repository.get_all(&customer_id).await?;

        self.logger
            .info(&format!("Found {} orders for customer {}", orders.len(), customer_id));
        Ok(orders)
    }
}
