use bigdecimal::{BigDecimal, RoundingMode};

/// Renders a monetary amount rounded to cents.
///
/// Domain arithmetic is exact; rounding happens only here, at the display
/// boundary.
pub fn format_amount(amount: &BigDecimal) -> String {
    amount
        .with_scale_round(2, RoundingMode::HalfUp)
        .to_string()
}
