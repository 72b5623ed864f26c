//! Money helpers using rust_decimal for precision
//!
//! Prices and totals are stored as `f64` in the remote store. Sums and
//! products are computed as `Decimal` and converted back rounded to
//! 2 decimal places, half away from zero.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Non-finite input logs an error and becomes zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum monetary amounts without accumulating float error
pub fn sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    to_f64(values.into_iter().map(to_decimal).sum())
}

/// Line total: unit price times quantity
pub fn line_total(price: f64, quantity: i32) -> f64 {
    to_f64(to_decimal(price) * Decimal::from(quantity))
}

/// Mean of the amounts, 0 for an empty set
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total: Decimal = values.iter().copied().map(to_decimal).sum();
    to_f64(total / Decimal::from(values.len()))
}

/// Render an amount as `$12.34`
pub fn format_currency(value: f64) -> String {
    let rounded = to_decimal(value).round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// Parse a user-typed price, rejecting negatives and non-numbers
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim().trim_start_matches('$');
    let value = Decimal::from_str(trimmed).ok()?;
    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }
    Some(to_f64(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_avoids_float_drift() {
        assert_eq!(sum([0.1, 0.2]), 0.3);
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_line_total_rounds_half_up() {
        assert_eq!(line_total(2.99, 3), 8.97);
        assert_eq!(line_total(0.125, 1), 0.13);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[10.0, 20.0, 30.0]), 20.0);
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-3.0), "-$3.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("4.99"), Some(4.99));
        assert_eq!(parse_amount(" $10 "), Some(10.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount(""), None);
    }
}
