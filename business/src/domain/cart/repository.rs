use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::CustomerId;

use super::model::CartLineItem;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns the cart's line items in insertion order.
    async fn get_items(&self, customer_id: &CustomerId)
    -> Result<Vec<CartLineItem>, RepositoryError>;
    async fn find_item(
        &self,
        customer_id: &CustomerId,
        product_id: u32,
    ) -> Result<Option<CartLineItem>, RepositoryError>;
    /// Inserts the line item, or replaces the existing line for the same
    /// product id.
    async fn save_item(
        &self,
        customer_id: &CustomerId,
        item: &CartLineItem,
    ) -> Result<(), RepositoryError>;
    async fn remove_item(
        &self,
        customer_id: &CustomerId,
        product_id: u32,
    ) -> Result<(), RepositoryError>;
    async fn clear(&self, customer_id: &CustomerId) -> Result<u64, RepositoryError>;
}
