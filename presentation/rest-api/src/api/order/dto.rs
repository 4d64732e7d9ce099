use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::{Order, ShippingAddress};

use crate::api::cart::dto::CartItemResponse;
use crate::api::money::format_amount;

#[derive(Debug, Clone, Object)]
pub struct ShippingAddressDto {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl From<ShippingAddress> for ShippingAddressDto {
    fn from(address: ShippingAddress) -> Self {
        Self {
            first_name: address.first_name,
            last_name: address.last_name,
            address: address.address,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
            country: address.country,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PlaceOrderRequest {
    /// Destination for the order
    pub shipping_address: ShippingAddressDto,
    /// One of: card, paypal, apple_pay, google_pay
    pub payment_method: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderStatusRequest {
    /// One of: processing, shipped, delivered
    pub status: String,
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    /// Order identifier (ORD-prefixed)
    pub id: String,
    /// Snapshot of the cart at checkout time
    pub items: Vec<CartItemResponse>,
    pub subtotal: String,
    pub tax: String,
    pub shipping: String,
    pub total: String,
    /// Fulfilment status
    pub status: String,
    pub shipping_address: ShippingAddressDto,
    pub payment_method: String,
    /// When the order was placed
    pub order_date: DateTime<Utc>,
    /// Projected delivery date
    pub estimated_delivery: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            items: order.items.into_iter().map(|i| i.into()).collect(),
            subtotal: format_amount(&order.subtotal),
            tax: format_amount(&order.tax),
            shipping: format_amount(&order.shipping),
            total: format_amount(&order.total),
            status: order.status.to_string(),
            shipping_address: order.shipping_address.into(),
            payment_method: order.payment_method.to_string(),
            order_date: order.order_date,
            estimated_delivery: order.estimated_delivery,
        }
    }
}
