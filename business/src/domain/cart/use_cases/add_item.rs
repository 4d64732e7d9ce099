use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLineItem;
use crate::domain::shared::value_objects::CustomerId;

pub struct AddCartItemParams {
    pub customer_id: CustomerId,
    pub product_id: u32,
    pub quantity: u32,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartLineItem, CartError>;
}
