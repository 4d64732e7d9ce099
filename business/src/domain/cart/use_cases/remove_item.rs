use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::CustomerId;

pub struct RemoveCartItemParams {
    pub customer_id: CustomerId,
    pub product_id: u32,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<(), CartError>;
}
