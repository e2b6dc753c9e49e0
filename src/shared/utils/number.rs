//! Number parsing and arithmetic helpers
//!
//! Parsing helpers never fail: they fall back to the supplied default.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("valid numeric regex"));

/// Optional minus sign, digits, optional fractional part.
pub fn is_numeric(s: &str) -> bool {
    !s.trim().is_empty() && NUMERIC_RE.is_match(s)
}

pub fn to_i32(s: &str, default: i32) -> i32 {
    s.parse().unwrap_or(default)
}

pub fn to_i64(s: &str, default: i64) -> i64 {
    s.parse().unwrap_or(default)
}

/// Surrounding whitespace is ignored.
pub fn to_f64(s: &str, default: f64) -> f64 {
    s.trim().parse().unwrap_or(default)
}

/// Round half-up to `scale` fractional digits.
///
/// Rounding is applied to the shortest decimal representation of `value`,
/// so `round(2.345, 2)` is `2.35`. Values that do not fit a `Decimal`
/// (NaN, infinities, huge magnitudes) are returned unchanged.
pub fn round(value: f64, scale: u32) -> f64 {
    Decimal::from_str(&value.to_string())
        .ok()
        .map(|d| d.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or(value)
}

/// Inclusive on both ends.
pub fn is_in_range(value: i32, min: i32, max: i32) -> bool {
    (min..=max).contains(&value)
}

/// `part / total` as a percentage with two decimals, `0.0` for `total == 0`.
pub fn percent(part: i32, total: i32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round(part as f64 * 100.0 / total as f64, 2)
}

pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings() {
        assert!(is_numeric("42"));
        assert!(is_numeric("-3.14"));
        assert!(!is_numeric("3."));
        assert!(!is_numeric("+1"));
        assert!(!is_numeric("   "));
        assert!(!is_numeric("1e5"));
    }

    #[test]
    fn non_ascii_digits_are_not_numeric() {
        assert!(!is_numeric("١٢٣"));
        assert!(!is_numeric("-٣.١٤"));
        assert_eq!(to_i32("١٢٣", -1), -1);
    }

    #[test]
    fn parse_with_fallback() {
        assert_eq!(to_i32("123", 0), 123);
        assert_eq!(to_i32("12a", -1), -1);
        assert_eq!(to_i32("99999999999", 7), 7);
        assert_eq!(to_i64("99999999999", 0), 99_999_999_999);
        assert_eq!(to_i64("", 5), 5);
        assert_eq!(to_f64(" 2.5 ", 0.0), 2.5);
        assert_eq!(to_f64("abc", 1.5), 1.5);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round(2.345, 2), 2.35);
        assert_eq!(round(2.344, 2), 2.34);
        assert_eq!(round(-2.5, 0), -3.0);
        assert_eq!(round(1.0, 3), 1.0);
        assert!(round(f64::NAN, 2).is_nan());
    }

    #[test]
    fn ranges_and_division() {
        assert!(is_in_range(5, 1, 5));
        assert!(is_in_range(1, 1, 5));
        assert!(!is_in_range(6, 1, 5));
        assert_eq!(safe_divide(10.0, 4.0), 2.5);
        assert_eq!(safe_divide(10.0, 0.0), 0.0);
    }

    #[test]
    fn percentages() {
        assert_eq!(percent(1, 3), 33.33);
        assert_eq!(percent(2, 3), 66.67);
        assert_eq!(percent(3, 4), 75.0);
        assert_eq!(percent(5, 0), 0.0);
    }
}
