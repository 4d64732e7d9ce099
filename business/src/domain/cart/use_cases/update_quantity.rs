use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLineItem;
use crate::domain::shared::value_objects::CustomerId;

pub struct UpdateCartQuantityParams {
    pub customer_id: CustomerId,
    pub product_id: u32,
    pub quantity: u32,
}

/// Sets a line item's quantity. A quantity of zero removes the line item
/// entirely, in which case `None` is returned.
#[async_trait]
pub trait UpdateCartQuantityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateCartQuantityParams,
    ) -> Result<Option<CartLineItem>, CartError>;
}
