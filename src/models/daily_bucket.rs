//! Per-day pay-category hour buckets.
//!
//! A [`DailyBucket`] is the output of the daily breakdown engine: the hours
//! of one calendar day sorted into the pay categories the synthesizer rates.
//! Buckets are ephemeral — recomputed on every invocation, never stored.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LeaveKind;

/// Categorized hours for one calendar day.
///
/// The same worked hour can appear in several buckets at once: an hour
/// worked on an observed holiday contributes to `regular_hours` (base pay)
/// *and* `holiday_worked_hours` (the stacked premium), and a night hour
/// contributes to both `regular_hours` and `night_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    /// The calendar date these buckets describe.
    pub date: NaiveDate,
    /// Hours paid at base rate, capped at the scheduled day length.
    pub regular_hours: Decimal,
    /// Hours beyond the scheduled day length, or every worked hour on a
    /// day off.
    pub overtime_hours: Decimal,
    /// Quarter-hour increments falling in the night window [18:00, 06:00).
    pub night_hours: Decimal,
    /// Sunday premium hours (touch rule on scheduled days, calendar rule
    /// on days off).
    pub sunday_hours: Decimal,
    /// Hours worked on an observed holiday, premium-paid on top of base.
    pub holiday_worked_hours: Decimal,
    /// Schedule gap credited as paid holiday leave (uncharged).
    pub holiday_leave_hours: Decimal,
    /// Schedule gap charged under `leave_kind`.
    pub charged_leave_hours: Decimal,
    /// The designation the charged gap is billed under, if any.
    pub leave_kind: Option<LeaveKind>,
    /// On-the-job-training instructor hours, passed through for rating.
    pub ojti_hours: Decimal,
    /// Controller-in-charge hours, passed through for rating.
    pub cic_hours: Decimal,
}

impl DailyBucket {
    /// Creates an all-zero bucket for a date.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            sunday_hours: Decimal::ZERO,
            holiday_worked_hours: Decimal::ZERO,
            holiday_leave_hours: Decimal::ZERO,
            charged_leave_hours: Decimal::ZERO,
            leave_kind: None,
            ojti_hours: Decimal::ZERO,
            cic_hours: Decimal::ZERO,
        }
    }

    /// Total hours actually on the clock for the day.
    pub fn worked_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bucket_is_all_zero() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let bucket = DailyBucket::empty(date);
        assert_eq!(bucket.date, date);
        assert_eq!(bucket.regular_hours, Decimal::ZERO);
        assert_eq!(bucket.overtime_hours, Decimal::ZERO);
        assert_eq!(bucket.worked_hours(), Decimal::ZERO);
        assert!(bucket.leave_kind.is_none());
    }

    #[test]
    fn test_worked_hours_sums_regular_and_overtime() {
        let mut bucket = DailyBucket::empty(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        bucket.regular_hours = Decimal::from(8);
        bucket.overtime_hours = Decimal::from(2);
        assert_eq!(bucket.worked_hours(), Decimal::from(10));
    }

    #[test]
    fn test_bucket_serialization_round_trip() {
        let mut bucket = DailyBucket::empty(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        bucket.charged_leave_hours = Decimal::from(4);
        bucket.leave_kind = Some(LeaveKind::Sick);
        let json = serde_json::to_string(&bucket).unwrap();
        let back: DailyBucket = serde_json::from_str(&json).unwrap();
        assert_eq!(bucket, back);
    }
}
