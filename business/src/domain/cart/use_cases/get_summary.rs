use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::shared::value_objects::CustomerId;

#[async_trait]
pub trait GetCartSummaryUseCase: Send + Sync {
    async fn execute(&self, customer_id: CustomerId) -> Result<CartSummary, CartError>;
}
