//! Weekly schedule and holiday calendar models.
//!
//! This module defines the [`ScheduleEntry`], [`WeekSchedule`], and
//! [`Holiday`] types that describe what a worker was *expected* to work.
//! Schedules are supplied per year; a weekday with no entry (or with
//! `is_workday = false`) is a regular day off.

use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The standard schedule for one weekday of the week.
///
/// Weekdays are numbered 0 (Monday) through 6 (Sunday), matching
/// [`chrono::Datelike::weekday`] via `num_days_from_monday`.
///
/// # Example
///
/// ```
/// use paytrack_engine::models::ScheduleEntry;
/// use chrono::NaiveTime;
///
/// let monday = ScheduleEntry {
///     day_of_week: 0,
///     is_workday: true,
///     start_time: Some(NaiveTime::from_hms_opt(7, 0, 0).unwrap()),
///     end_time: Some(NaiveTime::from_hms_opt(15, 0, 0).unwrap()),
/// };
/// assert!(monday.is_workday);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The weekday this entry applies to (0 = Monday .. 6 = Sunday).
    pub day_of_week: u32,
    /// Whether this weekday is a scheduled workday.
    pub is_workday: bool,
    /// The scheduled start time, present when `is_workday` is true.
    pub start_time: Option<NaiveTime>,
    /// The scheduled end time. May be numerically at or before `start_time`
    /// when the scheduled shift crosses midnight.
    pub end_time: Option<NaiveTime>,
}

impl ScheduleEntry {
    /// Returns the scheduled shift length in hours.
    ///
    /// An end time at or before the start time is interpreted as a
    /// midnight-crossing shift. Non-workdays and entries without both times
    /// have zero scheduled hours.
    pub fn scheduled_hours(&self) -> Decimal {
        if !self.is_workday {
            return Decimal::ZERO;
        }
        let (Some(start), Some(end)) = (self.start_time, self.end_time) else {
            return Decimal::ZERO;
        };
        let mut minutes = (end - start).num_minutes();
        if minutes <= 0 {
            minutes += 24 * 60;
        }
        Decimal::from(minutes) / Decimal::from(60)
    }
}

/// The standard weekly schedule for one calendar year.
///
/// Lookup degrades gracefully: a weekday that was never configured is
/// treated as a non-workday with zero expected hours rather than an error.
///
/// # Example
///
/// ```
/// use paytrack_engine::models::{ScheduleEntry, WeekSchedule};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let schedule = WeekSchedule::new(2025, (0..5).map(|d| ScheduleEntry {
///     day_of_week: d,
///     is_workday: true,
///     start_time: Some(NaiveTime::from_hms_opt(7, 0, 0).unwrap()),
///     end_time: Some(NaiveTime::from_hms_opt(15, 0, 0).unwrap()),
/// }).collect());
///
/// // 2025-03-03 is a Monday, 2025-03-08 a Saturday.
/// assert!(schedule.is_workday(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()));
/// assert!(!schedule.is_workday(NaiveDate::from_ymd_opt(2025, 3, 8).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// The calendar year this schedule applies to.
    pub year: i32,
    entries: BTreeMap<u32, ScheduleEntry>,
}

impl WeekSchedule {
    /// Creates a schedule for a year from its per-weekday entries.
    ///
    /// When several entries share a weekday the last one wins; weekdays with
    /// no entry are non-workdays.
    pub fn new(year: i32, entries: Vec<ScheduleEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (e.day_of_week, e))
            .collect::<BTreeMap<_, _>>();
        Self { year, entries }
    }

    /// Returns the schedule entry for a weekday (0 = Monday .. 6 = Sunday).
    pub fn entry(&self, day_of_week: u32) -> Option<&ScheduleEntry> {
        self.entries.get(&day_of_week)
    }

    /// Returns whether the given date falls on a scheduled workday.
    pub fn is_workday(&self, date: NaiveDate) -> bool {
        self.entry(date.weekday().num_days_from_monday())
            .is_some_and(|e| e.is_workday)
    }

    /// Returns the scheduled hours for the given date, zero for days off
    /// and for weekdays missing from the schedule.
    pub fn scheduled_hours(&self, date: NaiveDate) -> Decimal {
        self.entry(date.weekday().num_days_from_monday())
            .map(ScheduleEntry::scheduled_hours)
            .unwrap_or(Decimal::ZERO)
    }
}

/// A calendar holiday, prior to observed-date resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The name of the holiday (e.g., "Independence Day").
    pub name: String,
    /// The calendar date the holiday falls on.
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn workday(day_of_week: u32, start: NaiveTime, end: NaiveTime) -> ScheduleEntry {
        ScheduleEntry {
            day_of_week,
            is_workday: true,
            start_time: Some(start),
            end_time: Some(end),
        }
    }

    fn mon_fri_schedule() -> WeekSchedule {
        WeekSchedule::new(
            2025,
            (0..5).map(|d| workday(d, time(7, 0), time(15, 0))).collect(),
        )
    }

    /// SCH-001: standard 8 hour day
    #[test]
    fn test_scheduled_hours_standard_day() {
        let entry = workday(0, time(7, 0), time(15, 0));
        assert_eq!(entry.scheduled_hours(), dec("8"));
    }

    /// SCH-002: midnight-crossing scheduled shift
    #[test]
    fn test_scheduled_hours_crossing_midnight() {
        let entry = workday(0, time(22, 0), time(6, 0));
        assert_eq!(entry.scheduled_hours(), dec("8"));
    }

    /// SCH-003: non-workday has zero hours
    #[test]
    fn test_scheduled_hours_non_workday() {
        let entry = ScheduleEntry {
            day_of_week: 5,
            is_workday: false,
            start_time: None,
            end_time: None,
        };
        assert_eq!(entry.scheduled_hours(), Decimal::ZERO);
    }

    /// SCH-004: workday missing times degrades to zero
    #[test]
    fn test_scheduled_hours_missing_times() {
        let entry = ScheduleEntry {
            day_of_week: 0,
            is_workday: true,
            start_time: Some(time(7, 0)),
            end_time: None,
        };
        assert_eq!(entry.scheduled_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_is_workday_weekday_vs_weekend() {
        let schedule = mon_fri_schedule();
        // 2025-03-05 is a Wednesday; 2025-03-09 a Sunday.
        assert!(schedule.is_workday(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()));
        assert!(!schedule.is_workday(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()));
    }

    #[test]
    fn test_missing_weekday_is_non_workday() {
        let schedule = WeekSchedule::new(2025, vec![]);
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert!(!schedule.is_workday(date));
        assert_eq!(schedule.scheduled_hours(date), Decimal::ZERO);
    }

    #[test]
    fn test_scheduled_hours_for_date() {
        let schedule = mon_fri_schedule();
        let wednesday = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(schedule.scheduled_hours(wednesday), dec("8"));
    }

    #[test]
    fn test_schedule_serialization_round_trip() {
        let schedule = mon_fri_schedule();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: WeekSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, back);
    }

    #[test]
    fn test_holiday_deserialization() {
        let json = r#"{"name": "Independence Day", "date": "2025-07-04"}"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.name, "Independence Day");
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
    }
}
