//! Mixed hours.minutes leave-balance arithmetic.
//!
//! Leave balances on the statements use a dot notation where the fractional
//! part is literal minutes: `6.45` means 6 hours 45 minutes, not 6.75 hours.
//! All balance math therefore happens in integer minutes.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Converts a dot-notation balance to integer minutes.
///
/// # Example
///
/// ```
/// use paytrack_engine::calculation::dot_to_minutes;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(dot_to_minutes(Decimal::from_str("6.45").unwrap()), 405);
/// assert_eq!(dot_to_minutes(Decimal::from_str("2.30").unwrap()), 150);
/// ```
pub fn dot_to_minutes(value: Decimal) -> i64 {
    let hours = value.trunc();
    let minutes = ((value - hours) * Decimal::from(100)).round();
    hours.to_i64().unwrap_or(0) * 60 + minutes.to_i64().unwrap_or(0)
}

/// Converts integer minutes back to dot notation.
///
/// Negative balances keep sign-magnitude form, so -90 minutes renders as
/// `-1.30` and converts back to -90 exactly.
///
/// # Example
///
/// ```
/// use paytrack_engine::calculation::minutes_to_dot;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(minutes_to_dot(495), Decimal::from_str("8.15").unwrap());
/// ```
pub fn minutes_to_dot(minutes: i64) -> Decimal {
    let magnitude = minutes.abs();
    let dot = Decimal::from(magnitude / 60) + Decimal::new(magnitude % 60, 2);
    if minutes < 0 { -dot } else { dot }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// LM-001: 6.45 is 405 minutes
    #[test]
    fn test_dot_to_minutes_basic() {
        assert_eq!(dot_to_minutes(dec("6.45")), 405);
        assert_eq!(dot_to_minutes(dec("4.00")), 240);
        assert_eq!(dot_to_minutes(dec("2.30")), 150);
        assert_eq!(dot_to_minutes(dec("0.00")), 0);
    }

    /// LM-002: round trip through minutes
    #[test]
    fn test_minutes_to_dot_round_trip() {
        assert_eq!(minutes_to_dot(405), dec("6.45"));
        assert_eq!(minutes_to_dot(495), dec("8.15"));
        assert_eq!(minutes_to_dot(dot_to_minutes(dec("127.59"))), dec("127.59"));
    }

    /// LM-003: the statement's worked example
    #[test]
    fn test_leave_identity_example() {
        let start = dot_to_minutes(dec("6.45"));
        let earned = dot_to_minutes(dec("4.00"));
        let used = dot_to_minutes(dec("2.30"));
        assert_eq!(start + earned - used, 495);
        assert_eq!(minutes_to_dot(start + earned - used), dec("8.15"));
    }

    #[test]
    fn test_minute_carry_across_the_hour() {
        // 45 minutes + 30 minutes carries into the hour digit.
        let total = dot_to_minutes(dec("0.45")) + dot_to_minutes(dec("0.30"));
        assert_eq!(minutes_to_dot(total), dec("1.15"));
    }

    #[test]
    fn test_single_digit_minutes_keep_two_places() {
        assert_eq!(minutes_to_dot(65), dec("1.05"));
    }

    #[test]
    fn test_negative_balance_keeps_sign_magnitude() {
        assert_eq!(minutes_to_dot(-90), dec("-1.30"));
        assert_eq!(dot_to_minutes(minutes_to_dot(-90)), -90);
    }
}
