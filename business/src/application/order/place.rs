use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::services::PaymentProcessor;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

pub struct PlaceOrderUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub payments: Arc<dyn PaymentProcessor>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Checkout started for customer {}", params.customer_id));

        let items = self.cart_repository.get_items(&params.customer_id).await?;
        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order = Order::new(
            params.customer_id.clone(),
            items,
            params.shipping_address,
            params.payment_method,
        )?;

        let confirmation = self
            .payments
            .charge(&order.total, &order.payment_method)
            .await?;
        self.logger.info(&format!(
            "Payment authorized for order {} (ref {})",
            order.id, confirmation.reference
        ));

        self.order_repository.save(&order).await?;

        // The cart was snapshotted into the order; clearing it afterwards is
        // best-effort and must not fail the placed order.
        if let Err(e) = self.cart_repository.clear(&params.customer_id).await {
            self.logger.warn(&format!(
                "Failed to clear cart for customer {} after order {}: {}",
                params.customer_id, order.id, e
            ));
        }

        self.logger.info(&format!("Order {} placed", order.id));
        Ok(order)
    }
}
