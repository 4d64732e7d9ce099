use sqlx::FromRow;

use business::domain::cart::model::CartLineItem;
use business::domain::catalog::model::Product;
use business::domain::errors::RepositoryError;

/// One cart line, with the product snapshot stored as JSONB.
#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub customer_id: String,
    pub product_id: i64,
    pub product: serde_json::Value,
    pub quantity: i32,
}

impl CartItemEntity {
    pub fn into_domain(self) -> Result<CartLineItem, RepositoryError> {
        let product: Product =
            serde_json::from_value(self.product).map_err(|_| RepositoryError::Persistence)?;
        let quantity =
            u32::try_from(self.quantity).map_err(|_| RepositoryError::Persistence)?;

        Ok(CartLineItem::from_repository(product, quantity))
    }
}
