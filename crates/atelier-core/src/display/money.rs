//! Currency formatting.

use std::fmt;

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

/// A wrapper around `Decimal` that formats as US dollars.
///
/// Whole amounts print without cents (`$1,100`); fractional amounts print
/// with exactly two decimal places (`$1,234.50`).
///
/// # Examples
///
/// ```rust
/// use atelier_core::display::Dollars;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Dollars(Decimal::from(1100)).to_string(), "$1,100");
/// assert_eq!(Dollars(Decimal::new(123450, 2)).to_string(), "$1,234.50");
/// assert_eq!(Dollars(Decimal::ZERO).to_string(), "$0");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dollars(pub Decimal);

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let abs = rounded.abs();
        let whole = abs.trunc();
        let cents = ((abs - whole) * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u32()
            .unwrap_or_default();

        write!(f, "{sign}${}", group_thousands(&whole.normalize().to_string()))?;
        if cents > 0 {
            write!(f, ".{cents:02}")?;
        }
        Ok(())
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
