use bigdecimal::BigDecimal;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use crate::domain::cart::model::CartLineItem;
use crate::domain::cart::pricing;
use crate::domain::shared::value_objects::CustomerId;

const DELIVERY_ESTIMATE_DAYS: i64 = 7;

/// A placed order: the checkout-time snapshot of the cart plus the derived
/// monetary values. Orders are never deleted; only the status changes after
/// placement.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub customer_id: CustomerId,
    pub items: Vec<CartLineItem>,
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub order_date: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
}

impl Order {
    /// Snapshots the cart into a new `Processing` order. Totals are computed
    /// here so the identity `total == subtotal + tax + shipping` holds for
    /// every order ever constructed.
    pub fn new(
        customer_id: CustomerId,
        items: Vec<CartLineItem>,
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
    ) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let totals = pricing::quote(&items)?;
        let order_date = Utc::now();

        Ok(Self {
            id: format!("ORD-{}", order_date.timestamp_millis()),
            customer_id,
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            shipping: totals.shipping,
            total: totals.total,
            status: OrderStatus::Processing,
            shipping_address,
            payment_method,
            order_date,
            estimated_delivery: order_date + Duration::days(DELIVERY_ESTIMATE_DAYS),
        })
    }

    /// Constructor for data already persisted in the repository (no
    /// validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: String,
        customer_id: CustomerId,
        items: Vec<CartLineItem>,
        subtotal: BigDecimal,
        tax: BigDecimal,
        shipping: BigDecimal,
        total: BigDecimal,
        status: OrderStatus,
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
        order_date: DateTime<Utc>,
        estimated_delivery: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            items,
            subtotal,
            tax,
            shipping,
            total,
            status,
            shipping_address,
            payment_method,
            order_date,
            estimated_delivery,
        }
    }
}

/// Destination fields collected at checkout. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingAddress {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        address: String,
        city: String,
        state: String,
        zip_code: String,
        country: String,
    ) -> Result<Self, OrderError> {
        let fields = [
            &first_name,
            &last_name,
            &address,
            &city,
            &state,
            &zip_code,
            &country,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(OrderError::AddressIncomplete);
        }

        Ok(Self {
            first_name,
            last_name,
            address,
            city,
            state,
            zip_code,
            country,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(OrderError::UnknownStatus),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Paypal,
    ApplePay,
    GooglePay,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Paypal => write!(f, "paypal"),
            PaymentMethod::ApplePay => write!(f, "apple_pay"),
            PaymentMethod::GooglePay => write!(f, "google_pay"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(PaymentMethod::Card),
            "paypal" => Ok(PaymentMethod::Paypal),
            "apple_pay" => Ok(PaymentMethod::ApplePay),
            "google_pay" => Ok(PaymentMethod::GooglePay),
            _ => Err(OrderError::UnknownPaymentMethod),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::str::FromStr;

    use super::*;
    use crate::domain::catalog::model::{Product, ProductCategory};

    fn address() -> ShippingAddress {
        ShippingAddress::new(
            "Sarah".to_string(),
            "Johnson".to_string(),
            "12 Garden Lane".to_string(),
            "Portland".to_string(),
            "OR".to_string(),
            "97201".to_string(),
            "United States".to_string(),
        )
        .unwrap()
    }

    fn line(price: i64, quantity: u32) -> CartLineItem {
        let product = Product {
            id: 1,
            name: "Organic Compost".to_string(),
            short_description: "Premium organic compost for gardens".to_string(),
            description: "High-quality organic compost.".to_string(),
            price: BigDecimal::from(price),
            original_price: None,
            category: ProductCategory::Organic,
            rating: 4.8,
            review_count: 124,
            in_stock: true,
            is_on_sale: false,
            features: vec![],
            specifications: BTreeMap::new(),
        };
        CartLineItem::from_repository(product, quantity)
    }

    #[test]
    fn should_snapshot_cart_with_consistent_totals() {
        let order = Order::new(
            CustomerId::new("c-1"),
            vec![line(25, 2), line(35, 1)],
            address(),
            PaymentMethod::Card,
        )
        .unwrap();

        assert_eq!(order.subtotal, BigDecimal::from(85));
        assert_eq!(order.total, &order.subtotal + &order.tax + &order.shipping);
        assert_eq!(order.status, OrderStatus::Processing);
        assert!(order.id.starts_with("ORD-"));
    }

    #[test]
    fn should_estimate_delivery_a_week_out() {
        let order = Order::new(
            CustomerId::new("c-1"),
            vec![line(25, 1)],
            address(),
            PaymentMethod::Paypal,
        )
        .unwrap();

        assert_eq!(
            order.estimated_delivery - order.order_date,
            Duration::days(7)
        );
    }

    #[test]
    fn should_reject_empty_cart() {
        let result = Order::new(
            CustomerId::new("c-1"),
            vec![],
            address(),
            PaymentMethod::Card,
        );

        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
    }

    #[test]
    fn should_reject_blank_address_field() {
        let result = ShippingAddress::new(
            "Sarah".to_string(),
            "Johnson".to_string(),
            "  ".to_string(),
            "Portland".to_string(),
            "OR".to_string(),
            "97201".to_string(),
            "United States".to_string(),
        );

        assert!(matches!(result.unwrap_err(), OrderError::AddressIncomplete));
    }

    #[test]
    fn should_parse_payment_method_round_trip() {
        let method = PaymentMethod::from_str("google_pay").unwrap();
        assert_eq!(method, PaymentMethod::GooglePay);
        assert_eq!(method.to_string(), "google_pay");
    }

    #[test]
    fn should_reject_unknown_order_status() {
        assert!(matches!(
            OrderStatus::from_str("cancelled").unwrap_err(),
            OrderError::UnknownStatus
        ));
    }
}
