//! FLSA weighted-average overtime premium.
//!
//! The half-time premium is not 0.5 times the base rate. It is half of the
//! "regular rate of pay": total straight-time remuneration — base pay plus
//! every differential and incentive amount — divided by total hours worked.
//! Differentials therefore raise the overtime premium.

use rust_decimal::Decimal;

use super::rounding::truncate_cents;

/// The half-time premium rate and amount for a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlsaPremium {
    /// Half of the regular rate of pay, truncated to cents.
    pub rate: Decimal,
    /// Premium amount: overtime hours times the premium rate.
    pub amount: Decimal,
}

impl FlsaPremium {
    /// A zero premium (no overtime this period).
    pub fn zero() -> Self {
        Self {
            rate: Decimal::ZERO,
            amount: Decimal::ZERO,
        }
    }
}

/// Computes the weighted-average half-time premium.
///
/// # Arguments
///
/// * `straight_time_remuneration` - Base pay plus true overtime, all
///   differentials, incentive pay, and supplemental amounts
/// * `hours_worked` - Regular plus holiday-leave plus overtime hours
/// * `overtime_hours` - The overtime hours the premium applies to
///
/// Zero overtime or zero hours worked yield a zero premium rather than a
/// divide fault.
///
/// # Example
///
/// ```
/// use paytrack_engine::calculation::calculate_flsa_premium;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // Base 4000 + true OT 200 over 84 hours: RRP 50.00, premium rate 25.00.
/// let premium = calculate_flsa_premium(
///     Decimal::from_str("4200.00").unwrap(),
///     Decimal::from_str("84").unwrap(),
///     Decimal::from_str("4").unwrap(),
/// );
/// assert_eq!(premium.rate, Decimal::from_str("25.00").unwrap());
/// assert_eq!(premium.amount, Decimal::from_str("100.00").unwrap());
/// ```
pub fn calculate_flsa_premium(
    straight_time_remuneration: Decimal,
    hours_worked: Decimal,
    overtime_hours: Decimal,
) -> FlsaPremium {
    if overtime_hours <= Decimal::ZERO || hours_worked <= Decimal::ZERO {
        return FlsaPremium::zero();
    }

    let regular_rate_of_pay = straight_time_remuneration / hours_worked;
    let rate = truncate_cents(regular_rate_of_pay * Decimal::new(5, 1));
    FlsaPremium {
        rate,
        amount: truncate_cents(overtime_hours * rate),
    }
}
