use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::cart::model::CartLineItem;
use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderStatus, PaymentMethod, ShippingAddress};
use business::domain::shared::value_objects::CustomerId;

/// Persisted order row. Line items and the shipping address are JSONB
/// snapshots; monetary columns are NUMERIC.
#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: String,
    pub customer_id: String,
    pub items: serde_json::Value,
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
    pub status: String,
    pub shipping_address: serde_json::Value,
    pub payment_method: String,
    pub order_date: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let items: Vec<CartLineItem> =
            serde_json::from_value(self.items).map_err(|_| RepositoryError::Persistence)?;
        let shipping_address: ShippingAddress = serde_json::from_value(self.shipping_address)
            .map_err(|_| RepositoryError::Persistence)?;

        Ok(Order::from_repository(
            self.id,
            CustomerId::new(self.customer_id),
            items,
            self.subtotal,
            self.tax,
            self.shipping,
            self.total,
            self.status
                .parse::<OrderStatus>()
                .unwrap_or(OrderStatus::Processing),
            shipping_address,
            self.payment_method
                .parse::<PaymentMethod>()
                .unwrap_or(PaymentMethod::Card),
            self.order_date,
            self.estimated_delivery,
        ))
    }
}
