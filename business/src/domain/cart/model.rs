use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::errors::CartError;
use super::pricing::CartTotals;
use crate::domain::catalog::model::Product;

/// One (product, quantity) pair in a customer's cart.
///
/// Uniqueness invariant: a cart holds at most one line item per product id.
/// Adding a product already in the cart increments the existing line instead
/// of appending a second one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: Product, quantity: u32) -> Result<Self, CartError> {
        if quantity == 0 || product.price < bigdecimal::BigDecimal::zero() {
            return Err(CartError::InvalidLineItem);
        }

        Ok(Self { product, quantity })
    }

    /// Constructor for data already persisted in the repository (no
    /// validation).
    pub fn from_repository(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }
}

/// Cart contents together with the derived monetary values.
#[derive(Debug, Clone)]
pub struct CartSummary {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use bigdecimal::BigDecimal;

    use super::*;
    use crate::domain::catalog::model::ProductCategory;

    fn product(price: i64) -> Product {
        Product {
            id: 1,
            name: "Eco Tote Bags".to_string(),
            short_description: "Reusable bags from recycled textiles".to_string(),
            description: "Stylish and durable tote bags.".to_string(),
            price: BigDecimal::from(price),
            original_price: None,
            category: ProductCategory::Textile,
            rating: 4.7,
            review_count: 156,
            in_stock: true,
            is_on_sale: false,
            features: vec![],
            specifications: BTreeMap::new(),
        }
    }

    #[test]
    fn should_create_line_item_with_positive_quantity() {
        let item = CartLineItem::new(product(18), 2).unwrap();
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn should_reject_zero_quantity() {
        let result = CartLineItem::new(product(18), 0);
        assert!(matches!(result.unwrap_err(), CartError::InvalidLineItem));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = CartLineItem::new(product(-18), 1);
        assert!(matches!(result.unwrap_err(), CartError::InvalidLineItem));
    }
}
