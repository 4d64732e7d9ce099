use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use num_traits::Zero;

use super::errors::CartError;
use super::model::CartLineItem;

/// Flat tax rate applied to every order (8%).
fn tax_rate() -> BigDecimal {
    BigDecimal::new(BigInt::from(8), 2)
}

/// Shipping charged below the free-shipping threshold.
fn flat_shipping_fee() -> BigDecimal {
    BigDecimal::new(BigInt::from(999), 2)
}

/// Orders must exceed this subtotal (strictly) to ship for free.
fn free_shipping_threshold() -> BigDecimal {
    BigDecimal::from(50)
}

/// The four derived monetary values for a cart, computed together so the
/// identity `total == subtotal + tax + shipping` holds by construction.
#[derive(Debug, Clone)]
pub struct CartTotals {
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
}

/// Sum of price x quantity across all line items.
///
/// No currency rounding is applied during summation; callers round at the
/// display boundary only. A line item with a negative price is rejected
/// rather than silently producing a negative subtotal.
pub fn subtotal(items: &[CartLineItem]) -> Result<BigDecimal, CartError> {
    let mut sum = BigDecimal::zero();
    for item in items {
        if item.product.price < BigDecimal::zero() {
            return Err(CartError::InvalidLineItem);
        }
        sum += &item.product.price * BigDecimal::from(item.quantity);
    }
    Ok(sum)
}

/// Flat 8% of the subtotal; no jurisdiction logic.
pub fn tax(items: &[CartLineItem]) -> Result<BigDecimal, CartError> {
    Ok(subtotal(items)? * tax_rate())
}

/// Business rules:
/// - subtotal strictly above 50 -> free shipping
/// - subtotal of exactly 50.00 or less -> flat 9.99 fee
/// - an empty cart still incurs the fee
pub fn shipping(items: &[CartLineItem]) -> Result<BigDecimal, CartError> {
    let subtotal = subtotal(items)?;
    if subtotal > free_shipping_threshold() {
        Ok(BigDecimal::zero())
    } else {
        Ok(flat_shipping_fee())
    }
}

pub fn total(items: &[CartLineItem]) -> Result<BigDecimal, CartError> {
    Ok(subtotal(items)? + tax(items)? + shipping(items)?)
}

/// Computes all four values in one pass over the cart.
pub fn quote(items: &[CartLineItem]) -> Result<CartTotals, CartError> {
    let subtotal = subtotal(items)?;
    let tax = &subtotal * tax_rate();
    let shipping = if subtotal > free_shipping_threshold() {
        BigDecimal::zero()
    } else {
        flat_shipping_fee()
    };
    let total = &subtotal + &tax + &shipping;

    Ok(CartTotals {
        subtotal,
        tax,
        shipping,
        total,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::str::FromStr;

    use proptest::prelude::*;

    use super::*;
    use crate::domain::catalog::model::{Product, ProductCategory};

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn line(price: &str, quantity: u32) -> CartLineItem {
        let product = Product {
            id: quantity,
            name: "Recycled Paper Notebooks".to_string(),
            short_description: "High-quality notebooks from recycled paper".to_string(),
            description: "Premium notebooks made from recycled paper waste.".to_string(),
            price: dec(price),
            original_price: None,
            category: ProductCategory::Paper,
            rating: 4.9,
            review_count: 203,
            in_stock: true,
            is_on_sale: false,
            features: vec![],
            specifications: BTreeMap::new(),
        };
        CartLineItem::from_repository(product, quantity)
    }

    #[test]
    fn should_price_cart_above_free_shipping_threshold() {
        let cart = vec![line("25", 2), line("35", 1)];

        let totals = quote(&cart).unwrap();

        assert_eq!(totals.subtotal, dec("85.00"));
        assert_eq!(totals.tax, dec("6.80"));
        assert_eq!(totals.shipping, dec("0"));
        assert_eq!(totals.total, dec("91.80"));
    }

    #[test]
    fn should_price_cart_below_free_shipping_threshold() {
        let cart = vec![line("15", 1)];

        let totals = quote(&cart).unwrap();

        assert_eq!(totals.subtotal, dec("15.00"));
        assert_eq!(totals.tax, dec("1.20"));
        assert_eq!(totals.shipping, dec("9.99"));
        assert_eq!(totals.total, dec("26.19"));
    }

    #[test]
    fn should_charge_shipping_on_empty_cart() {
        let totals = quote(&[]).unwrap();

        assert_eq!(totals.subtotal, dec("0"));
        assert_eq!(totals.tax, dec("0"));
        assert_eq!(totals.shipping, dec("9.99"));
        assert_eq!(totals.total, dec("9.99"));
    }

    #[test]
    fn should_charge_shipping_at_exactly_fifty() {
        let cart = vec![line("50.00", 1)];

        assert_eq!(shipping(&cart).unwrap(), dec("9.99"));
    }

    #[test]
    fn should_ship_free_just_above_fifty() {
        let cart = vec![line("50.01", 1)];

        assert_eq!(shipping(&cart).unwrap(), dec("0"));
    }

    #[test]
    fn should_reject_negative_price() {
        let cart = vec![line("-5", 1)];

        assert!(matches!(
            subtotal(&cart).unwrap_err(),
            CartError::InvalidLineItem
        ));
        assert!(matches!(
            quote(&cart).unwrap_err(),
            CartError::InvalidLineItem
        ));
    }

    #[test]
    fn should_be_order_independent() {
        let forward = vec![line("25", 2), line("35", 1), line("9.99", 3)];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(total(&forward).unwrap(), total(&reversed).unwrap());
    }

    proptest! {
        #[test]
        fn subtotal_is_never_negative(
            lines in prop::collection::vec((0u32..1000, 1u32..50), 0..8)
        ) {
            let cart: Vec<_> = lines
                .iter()
                .map(|(price, qty)| line(&price.to_string(), *qty))
                .collect();

            prop_assert!(subtotal(&cart).unwrap() >= BigDecimal::zero());
        }

        #[test]
        fn total_is_the_sum_of_its_parts(
            lines in prop::collection::vec((0u32..1000, 1u32..50), 0..8)
        ) {
            let cart: Vec<_> = lines
                .iter()
                .map(|(price, qty)| line(&price.to_string(), *qty))
                .collect();

            let totals = quote(&cart).unwrap();
            prop_assert_eq!(
                totals.total,
                totals.subtotal + totals.tax + totals.shipping
            );
        }

        #[test]
        fn free_shipping_iff_strictly_above_threshold(
            lines in prop::collection::vec((0u32..100, 1u32..5), 0..6)
        ) {
            let cart: Vec<_> = lines
                .iter()
                .map(|(price, qty)| line(&price.to_string(), *qty))
                .collect();

            let sub = subtotal(&cart).unwrap();
            let ship = shipping(&cart).unwrap();
            if sub > BigDecimal::from(50) {
                prop_assert_eq!(ship, BigDecimal::zero());
            } else {
                prop_assert_eq!(ship, dec("9.99"));
            }
        }
    }
}
