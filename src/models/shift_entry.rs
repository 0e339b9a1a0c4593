//! Actual-worked shift entry model.
//!
//! A [`ShiftEntry`] is one calendar day's self-reported record: the actual
//! clock-in/clock-out times, an optional leave designation covering a gap
//! against the schedule, and supplemental premium hours (on-the-job-training
//! instruction and controller-in-charge time).

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The designation used to charge a gap between scheduled and worked hours.
///
/// # Example
///
/// ```
/// use paytrack_engine::models::LeaveKind;
///
/// assert_eq!(LeaveKind::Annual.to_string(), "Annual");
/// assert_eq!(LeaveKind::Lwop.to_string(), "LWOP");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Annual (vacation) leave, charged against the annual balance.
    Annual,
    /// Sick leave, charged against the sick balance.
    Sick,
    /// Holiday leave; paid at base rate without charging a balance.
    Holiday,
    /// Credit hours previously earned.
    Credit,
    /// Compensatory time previously earned.
    Comp,
    /// Leave without pay.
    Lwop,
}

impl std::fmt::Display for LeaveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveKind::Annual => write!(f, "Annual"),
            LeaveKind::Sick => write!(f, "Sick"),
            LeaveKind::Holiday => write!(f, "Holiday"),
            LeaveKind::Credit => write!(f, "Credit"),
            LeaveKind::Comp => write!(f, "Comp"),
            LeaveKind::Lwop => write!(f, "LWOP"),
        }
    }
}

/// One calendar day's actual-worked record.
///
/// Start and end times are both optional; a day with neither is a day not
/// worked (a full leave day or a day off). Times are clock times on
/// `date` — midnight-crossing disambiguation happens in the daily
/// breakdown engine, not here.
///
/// # Example
///
/// ```
/// use paytrack_engine::models::ShiftEntry;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let entry = ShiftEntry {
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     start_time: Some(NaiveTime::from_hms_opt(7, 0, 0).unwrap()),
///     end_time: Some(NaiveTime::from_hms_opt(15, 0, 0).unwrap()),
///     leave_kind: None,
///     ojti_hours: Decimal::ZERO,
///     cic_hours: Decimal::ZERO,
/// };
/// assert!(entry.leave_kind.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// The calendar date this entry belongs to.
    pub date: NaiveDate,
    /// Actual clock-in time, if the day was worked.
    pub start_time: Option<NaiveTime>,
    /// Actual clock-out time, if the day was worked.
    pub end_time: Option<NaiveTime>,
    /// Designation used to charge any gap against the scheduled hours.
    pub leave_kind: Option<LeaveKind>,
    /// On-the-job-training instructor hours for the day.
    #[serde(default)]
    pub ojti_hours: Decimal,
    /// Controller-in-charge hours for the day.
    #[serde(default)]
    pub cic_hours: Decimal,
}

impl ShiftEntry {
    /// Creates an empty (not worked, no leave) entry for a date.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            start_time: None,
            end_time: None,
            leave_kind: None,
            ojti_hours: Decimal::ZERO,
            cic_hours: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_kind_display() {
        assert_eq!(LeaveKind::Annual.to_string(), "Annual");
        assert_eq!(LeaveKind::Sick.to_string(), "Sick");
        assert_eq!(LeaveKind::Holiday.to_string(), "Holiday");
        assert_eq!(LeaveKind::Credit.to_string(), "Credit");
        assert_eq!(LeaveKind::Comp.to_string(), "Comp");
        assert_eq!(LeaveKind::Lwop.to_string(), "LWOP");
    }

    #[test]
    fn test_empty_entry_has_no_times() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let entry = ShiftEntry::empty(date);
        assert_eq!(entry.date, date);
        assert!(entry.start_time.is_none());
        assert!(entry.end_time.is_none());
        assert_eq!(entry.ojti_hours, Decimal::ZERO);
    }

    #[test]
    fn test_deserialization_defaults_supplemental_hours() {
        let json = r#"{
            "date": "2025-03-03",
            "start_time": "07:00:00",
            "end_time": "15:00:00",
            "leave_kind": null
        }"#;
        let entry: ShiftEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.ojti_hours, Decimal::ZERO);
        assert_eq!(entry.cic_hours, Decimal::ZERO);
    }

    #[test]
    fn test_leave_kind_serializes_snake_case() {
        let json = serde_json::to_string(&LeaveKind::Lwop).unwrap();
        assert_eq!(json, "\"lwop\"");
        let back: LeaveKind = serde_json::from_str("\"annual\"").unwrap();
        assert_eq!(back, LeaveKind::Annual);
    }
}
