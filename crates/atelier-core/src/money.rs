//! Centralized coercion of prices and counts.
//!
//! Every monetary or count value that enters the order passes through one of
//! these functions. Malformed input (NaN, negative numbers, non-numeric
//! strings, `null`) coerces to zero instead of poisoning the invoice total.

use std::str::FromStr;

use rust_decimal::prelude::*;
use serde_json::Value;

/// Largest price any single package, add-on or branding item may carry.
///
/// Keeps every invoice sum far from `Decimal::MAX` and every stored price
/// exactly representable as a JSON float down to the cent.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Decimal places kept on a price.
const DECIMAL_PLACES: u32 = 2;

/// Clamp a price to `0..=MAX_PRICE`, round it to cents and strip trailing
/// zeros.
pub fn sanitize_price(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        return Decimal::ZERO;
    }
    value
        .min(MAX_PRICE)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Parse user-entered text as a price.
///
/// # Examples
///
/// ```rust
/// use atelier_core::money::{parse_price, MAX_PRICE};
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_price("150"), Decimal::from(150));
/// assert_eq!(parse_price(" 19.99 "), Decimal::new(1999, 2));
/// assert_eq!(parse_price("abc"), Decimal::ZERO);
/// assert_eq!(parse_price("-40"), Decimal::ZERO);
/// assert_eq!(parse_price("1e40"), MAX_PRICE);
/// ```
pub fn parse_price(text: &str) -> Decimal {
    let text = text.trim();
    match Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
        Ok(parsed) => sanitize_price(parsed),
        Err(_) => text.parse::<f64>().map_or(Decimal::ZERO, price_from_f64),
    }
}

/// Convert a float price, treating non-finite values as zero and values too
/// large for a `Decimal` as [`MAX_PRICE`].
pub fn price_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    match Decimal::from_f64(value) {
        Some(price) => sanitize_price(price),
        None if value > 0.0 => MAX_PRICE,
        None => Decimal::ZERO,
    }
}

/// Coerce an arbitrary JSON value to a price.
///
/// Numbers are read through their textual form so that `19.99` stays exactly
/// `19.99` rather than the nearest binary float.
pub fn coerce_price(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_price(&n.to_string()),
        Value::String(s) => parse_price(s),
        _ => Decimal::ZERO,
    }
}

/// Coerce an arbitrary JSON value to an optional price.
///
/// `null` and missing values stay `None`; anything else is coerced.
pub fn coerce_optional_price(value: Option<&Value>) -> Option<Decimal> {
    match value {
        None | Some(Value::Null) => None,
        Some(other) => Some(coerce_price(other)),
    }
}

/// Coerce an arbitrary JSON value to a non-negative count.
pub fn coerce_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).unwrap_or(u32::MAX)
            } else {
                n.as_f64().map_or(0, count_from_f64)
            }
        }
        Value::String(s) => s.trim().parse::<f64>().map_or(0, count_from_f64),
        _ => 0,
    }
}

fn count_from_f64(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.floor().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_sanitize_price_clamps_negative() {
        assert_eq!(sanitize_price(Decimal::from(-5)), Decimal::ZERO);
        assert_eq!(sanitize_price(Decimal::new(15000, 2)), Decimal::from(150));
    }

    #[test]
    fn test_sanitize_price_caps_and_rounds() {
        assert_eq!(sanitize_price(Decimal::MAX), MAX_PRICE);
        assert_eq!(sanitize_price(MAX_PRICE + Decimal::ONE), MAX_PRICE);
        assert_eq!(sanitize_price(Decimal::new(19995, 3)), Decimal::from(20));
        assert_eq!(sanitize_price(Decimal::new(12345, 3)), Decimal::new(1235, 2));
    }

    #[test]
    fn test_coerce_price_caps_huge_numbers() {
        assert_eq!(coerce_price(&json!(5e28)), MAX_PRICE);
        assert_eq!(coerce_price(&json!(1e300)), MAX_PRICE);
        assert_eq!(coerce_price(&json!("79228162514264337593543950335")), MAX_PRICE);
    }

    #[test]
    fn test_coerce_price_from_json() {
        assert_eq!(coerce_price(&json!(1000)), Decimal::from(1000));
        assert_eq!(coerce_price(&json!(19.99)), Decimal::new(1999, 2));
        assert_eq!(coerce_price(&json!("250")), Decimal::from(250));
        assert_eq!(coerce_price(&json!("n/a")), Decimal::ZERO);
        assert_eq!(coerce_price(&json!(null)), Decimal::ZERO);
        assert_eq!(coerce_price(&json!(true)), Decimal::ZERO);
        assert_eq!(coerce_price(&json!(-3)), Decimal::ZERO);
    }

    #[test]
    fn test_coerce_optional_price() {
        assert_eq!(coerce_optional_price(None), None);
        assert_eq!(coerce_optional_price(Some(&json!(null))), None);
        assert_eq!(
            coerce_optional_price(Some(&json!(300))),
            Some(Decimal::from(300))
        );
        assert_eq!(
            coerce_optional_price(Some(&json!("oops"))),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count(&json!(5)), 5);
        assert_eq!(coerce_count(&json!(5.9)), 5);
        assert_eq!(coerce_count(&json!("7")), 7);
        assert_eq!(coerce_count(&json!(-2)), 0);
        assert_eq!(coerce_count(&json!("many")), 0);
        assert_eq!(coerce_count(&json!(null)), 0);
    }

    #[test]
    fn test_price_from_f64_non_finite() {
        assert_eq!(price_from_f64(f64::NAN), Decimal::ZERO);
        assert_eq!(price_from_f64(f64::INFINITY), Decimal::ZERO);
        assert_eq!(price_from_f64(50.0), Decimal::from(50));
        assert_eq!(price_from_f64(1e40), MAX_PRICE);
        assert_eq!(price_from_f64(-1e40), Decimal::ZERO);
    }
}
