//! Incentive-pay factor derivation.
//!
//! Incentive pay is not a published rate; it is reverse-engineered from the
//! most recent real paycheck as the ratio of the incentive line to the
//! regular-pay line, then applied to the current period's base pay.

use rust_decimal::Decimal;

use crate::models::ReferenceContext;

use super::rounding::truncate_cents;

/// An incentive-pay amount and its implied hourly rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncentivePay {
    /// The implied hourly rate (base rate times the historical factor).
    pub rate: Decimal,
    /// The incentive amount for the current period.
    pub amount: Decimal,
}

impl IncentivePay {
    fn zero() -> Self {
        Self {
            rate: Decimal::ZERO,
            amount: Decimal::ZERO,
        }
    }
}

/// Derives the incentive pay for the current period.
///
/// Looks up the reference paycheck's incentive and regular lines by
/// substring match ("Incentive" / "Regular"), computes the historical
/// ratio, and applies it to the current base-pay amount. Missing lines or
/// a zero historical regular amount produce zero incentive pay.
///
/// # Arguments
///
/// * `base_amount` - The current period's base-pay amount (regular plus
///   holiday leave hours at base rate)
/// * `base_rate` - The base hourly rate
/// * `reference` - The historical reference paycheck
pub fn derive_incentive_pay(
    base_amount: Decimal,
    base_rate: Decimal,
    reference: &ReferenceContext,
) -> IncentivePay {
    let find = |needle: &str| {
        reference
            .earnings
            .iter()
            .find(|line| line.line_type.to_lowercase().contains(&needle.to_lowercase()))
    };

    let (Some(incentive_line), Some(regular_line)) = (find("Incentive"), find("Regular")) else {
        return IncentivePay::zero();
    };

    if regular_line.amount_current <= Decimal::ZERO {
        return IncentivePay::zero();
    }

    let factor = incentive_line.amount_current / regular_line.amount_current;
    IncentivePay {
        rate: truncate_cents(base_rate * factor),
        amount: truncate_cents(base_amount * factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReferenceEarningLine;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn earning(line_type: &str, amount: &str) -> ReferenceEarningLine {
        ReferenceEarningLine {
            line_type: line_type.to_string(),
            rate: Decimal::ZERO,
            amount_current: dec(amount),
            amount_ytd: None,
        }
    }

    fn reference(earnings: Vec<ReferenceEarningLine>) -> ReferenceContext {
        ReferenceContext {
            base_hourly_rate: dec("61.72"),
            gross_pay: dec("6000.00"),
            earnings,
            deductions: vec![],
            is_fallback: false,
        }
    }

    /// INC-001: factor from reference, applied to current base
    #[test]
    fn test_inc_001_factor_applied_to_current_base() {
        let reference = reference(vec![
            earning("Regular Pay", "4000.00"),
            earning("Controller Incentive Pay", "400.00"),
        ]);

        // Factor is 0.10; base 5000 gives 500, rate 61.72 gives 6.17.
        let result = derive_incentive_pay(dec("5000.00"), dec("61.72"), &reference);
        assert_eq!(result.amount, dec("500.00"));
        assert_eq!(result.rate, dec("6.17"));
    }

    /// INC-002: missing incentive line gives zero
    #[test]
    fn test_inc_002_missing_incentive_line() {
        let reference = reference(vec![earning("Regular Pay", "4000.00")]);
        let result = derive_incentive_pay(dec("5000.00"), dec("61.72"), &reference);
        assert_eq!(result, IncentivePay::zero());
    }

    /// INC-003: missing regular line gives zero
    #[test]
    fn test_inc_003_missing_regular_line() {
        let reference = reference(vec![earning("Controller Incentive Pay", "400.00")]);
        let result = derive_incentive_pay(dec("5000.00"), dec("61.72"), &reference);
        assert_eq!(result, IncentivePay::zero());
    }

    /// INC-004: zero historical regular amount guards the division
    #[test]
    fn test_inc_004_zero_regular_amount() {
        let reference = reference(vec![
            earning("Regular Pay", "0.00"),
            earning("Controller Incentive Pay", "400.00"),
        ]);
        let result = derive_incentive_pay(dec("5000.00"), dec("61.72"), &reference);
        assert_eq!(result, IncentivePay::zero());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let reference = reference(vec![
            earning("REGULAR PAY", "4000.00"),
            earning("controller incentive pay", "400.00"),
        ]);
        let result = derive_incentive_pay(dec("5000.00"), dec("61.72"), &reference);
        assert_eq!(result.amount, dec("500.00"));
    }

    #[test]
    fn test_amount_truncates_not_rounds() {
        let reference = reference(vec![
            earning("Regular Pay", "3000.00"),
            earning("Controller Incentive Pay", "1000.00"),
        ]);
        // Factor 1/3: 100 * 1/3 = 33.333..., truncated to 33.33; the rate
        // 61.72/3 = 20.5733... truncates to 20.57.
        let result = derive_incentive_pay(dec("100.00"), dec("61.72"), &reference);
        assert_eq!(result.amount, dec("33.33"));
        assert_eq!(result.rate, dec("20.57"));
    }
}
