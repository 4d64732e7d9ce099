use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::CustomerId;

#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self, customer_id: CustomerId) -> Result<u64, CartError>;
}
