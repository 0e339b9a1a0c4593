//! Pay period and cross-period ledger models.
//!
//! A [`PayPeriod`] names one biweekly period by its ending date and carries
//! the gross pay the official statement declared for it. [`LedgerRow`] is
//! one row of the chronological expected-vs-declared variance ledger.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The number of calendar days in one pay period.
pub const PAY_PERIOD_DAYS: u64 = 14;

/// One biweekly pay period as known to the statement archive.
///
/// # Example
///
/// ```
/// use paytrack_engine::models::PayPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod {
///     period_ending: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
///     declared_gross: Decimal::new(493760, 2),
/// };
/// let dates = period.dates();
/// assert_eq!(dates.len(), 14);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 2, 23).unwrap());
/// assert_eq!(dates[13], period.period_ending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The last calendar date of the period.
    pub period_ending: NaiveDate,
    /// The gross pay printed on the official statement for this period.
    pub declared_gross: Decimal,
}

impl PayPeriod {
    /// The first calendar date of the period.
    pub fn start_date(&self) -> NaiveDate {
        self.period_ending - Days::new(PAY_PERIOD_DAYS - 1)
    }

    /// All fourteen calendar dates of the period, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let start = self.start_date();
        (0..PAY_PERIOD_DAYS)
            .map(|offset| start + Days::new(offset))
            .collect()
    }
}

/// Audit status of one ledger row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerStatus {
    /// No detailed shift data was ever saved; declared gross is taken as
    /// authoritative.
    Unaudited,
    /// Expected and declared gross agree within the balanced threshold.
    Balanced,
    /// Declared gross fell short of expected — the worker was underpaid.
    GovOwesYou,
    /// Declared gross exceeded expected — an overpayment subject to
    /// clawback.
    Backpay,
}

impl std::fmt::Display for LedgerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerStatus::Unaudited => write!(f, "Unaudited"),
            LedgerStatus::Balanced => write!(f, "Balanced"),
            LedgerStatus::GovOwesYou => write!(f, "Gov Owes You"),
            LedgerStatus::Backpay => write!(f, "Backpay"),
        }
    }
}

/// One row of the cross-period variance ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// The period this row describes.
    pub period_ending: NaiveDate,
    /// Gross pay re-derived from saved shift entries with that period's own
    /// historical rate. Equals the declared gross for unaudited periods.
    pub expected_gross: Decimal,
    /// Gross pay printed on the official statement.
    pub declared_gross: Decimal,
    /// `declared_gross - expected_gross`; zero for unaudited periods.
    pub diff: Decimal,
    /// Left-fold accumulation of `diff` in chronological order.
    pub running_balance: Decimal,
    /// The audit status of this period.
    pub status: LedgerStatus,
}
