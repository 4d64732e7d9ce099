use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, PaymentMethod, ShippingAddress};
use crate::domain::shared::value_objects::CustomerId;

pub struct PlaceOrderParams {
    pub customer_id: CustomerId,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError>;
}
