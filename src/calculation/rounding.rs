//! Legacy truncation semantics.
//!
//! The source payroll system truncates toward zero at every intermediate
//! step: hour sums to four decimal places, currency amounts to two. This is
//! a reproduction requirement — replacing it with round-half-up changes
//! synthesized paychecks by a cent and breaks the cross-period ledger.

use rust_decimal::Decimal;

/// Truncates an hour quantity to four decimal places (toward zero).
///
/// # Example
///
/// ```
/// use paytrack_engine::calculation::truncate_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = Decimal::from_str("7.99999").unwrap();
/// assert_eq!(truncate_hours(hours), Decimal::from_str("7.9999").unwrap());
/// ```
pub fn truncate_hours(value: Decimal) -> Decimal {
    value.trunc_with_scale(4)
}

/// Truncates a currency amount to whole cents (toward zero).
///
/// # Example
///
/// ```
/// use paytrack_engine::calculation::truncate_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("4300.019").unwrap();
/// assert_eq!(truncate_cents(amount), Decimal::from_str("4300.01").unwrap());
/// ```
pub fn truncate_cents(value: Decimal) -> Decimal {
    value.trunc_with_scale(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// RND-001: cents truncate, never round up
    #[test]
    fn test_truncate_cents_drops_fraction() {
        assert_eq!(truncate_cents(dec("10.999")), dec("10.99"));
        assert_eq!(truncate_cents(dec("10.991")), dec("10.99"));
        assert_eq!(truncate_cents(dec("10.99")), dec("10.99"));
    }

    /// RND-002: hours truncate at four places
    #[test]
    fn test_truncate_hours_four_places() {
        assert_eq!(truncate_hours(dec("0.333333")), dec("0.3333"));
        assert_eq!(truncate_hours(dec("80.00009")), dec("80.0000"));
    }

    /// RND-003: truncation is toward zero for negatives
    #[test]
    fn test_truncate_toward_zero_for_negatives() {
        assert_eq!(truncate_cents(dec("-10.999")), dec("-10.99"));
        assert_eq!(truncate_hours(dec("-0.33339")), dec("-0.3333"));
    }

    #[test]
    fn test_truncate_is_identity_on_exact_values() {
        assert_eq!(truncate_cents(dec("4300.00")), dec("4300.00"));
        assert_eq!(truncate_hours(dec("84.0000")), dec("84.0000"));
    }
}
