//! Decimal-safe amount handling.
//!
//! Amounts travel through the system as the exact strings the exchange
//! (or the operator) produced. They are only parsed where a numeric
//! decision is needed, and then always as `Decimal`, never `f64`.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse an exchange amount string into a `Decimal`.
///
/// Accepts plain notation (`"0.00000001"`) and scientific notation
/// (`"1e-8"`). Surrounding whitespace is ignored. Returns `None` for
/// anything else, including the empty string.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Whether `raw` is a strictly positive amount.
///
/// `"0"`, `"0.0"` and `"-0"` are all zero. Unparseable input is not positive.
pub fn is_positive(raw: &str) -> bool {
    parse_amount(raw).is_some_and(|d| d > Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_and_scientific() {
        assert_eq!(parse_amount("0.5"), Some(dec!(0.5)));
        assert_eq!(parse_amount(" 3 "), Some(dec!(3)));
        assert_eq!(parse_amount("1e-8"), Some(dec!(0.00000001)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_zero_spellings_are_not_positive() {
        for raw in ["0", "0.0", "0.000", "-0", "00"] {
            assert!(!is_positive(raw), "{raw} must not be positive");
        }
    }

    #[test]
    fn test_smallest_unit_is_positive() {
        assert!(is_positive("0.00000001"));
    }

    #[test]
    fn test_negative_is_not_positive() {
        assert!(!is_positive("-0.1"));
    }
}
