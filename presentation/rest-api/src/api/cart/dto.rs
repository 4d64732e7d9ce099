use poem_openapi::Object;

use business::domain::cart::model::{CartLineItem, CartSummary};

use crate::api::catalog::dto::ProductResponse;
use crate::api::money::format_amount;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Catalog identifier of the product to add
    pub product_id: u32,
    /// Units to add (must be at least 1)
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartQuantityRequest {
    /// New quantity; zero removes the line item
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// The product snapshot for this line
    pub product: ProductResponse,
    /// Units of the product in the cart
    pub quantity: u32,
    /// Line total (price x quantity), rounded to cents
    pub line_total: String,
}

impl From<CartLineItem> for CartItemResponse {
    fn from(item: CartLineItem) -> Self {
        let line_total = &item.product.price * bigdecimal::BigDecimal::from(item.quantity);
        Self {
            line_total: format_amount(&line_total),
            quantity: item.quantity,
            product: item.product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartSummaryResponse {
    /// Line items in insertion order
    pub items: Vec<CartItemResponse>,
    /// Sum of line totals before tax and shipping
    pub subtotal: String,
    /// Flat 8% tax
    pub tax: String,
    /// Shipping cost; "0.00" above the free-shipping threshold
    pub shipping: String,
    /// Grand total
    pub total: String,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            items: summary.items.into_iter().map(|i| i.into()).collect(),
            subtotal: format_amount(&summary.totals.subtotal),
            tax: format_amount(&summary.totals.tax),
            shipping: format_amount(&summary.totals.shipping),
            total: format_amount(&summary.totals.total),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearCartResponse {
    /// Number of line items removed
    pub count: u64,
}
