//! Daily breakdown engine.
//!
//! Turns one calendar day's schedule expectation, actual clock times, leave
//! designation, and supplemental hours into categorized pay buckets. This is
//! where the midnight-crossing heuristic, the night window scan, the two
//! Sunday premium policies, and the schedule-gap analysis live.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;

use crate::config::PayRules;
use crate::models::{DailyBucket, Holiday, LeaveKind, ShiftEntry, WeekSchedule};

use super::observed_holiday::resolve_observed_holiday;

/// Clock hour at which the night window opens.
const NIGHT_WINDOW_START_HOUR: u32 = 18;
/// Clock hour at which the night window closes.
const NIGHT_WINDOW_END_HOUR: u32 = 6;
/// Start hour at or after which an inverted time pair is read as a shift
/// that began the previous evening rather than one ending tomorrow.
const LATE_START_HOUR: u32 = 19;
/// Scan step for the night and Sunday windows, credited as 0.25 h each.
const SCAN_MINUTES: i64 = 15;

/// Resolves the actual worked interval for a day's clock times.
///
/// Start and end are clock times on `date`. When `end <= start` the pair
/// crosses midnight; a start at or after 19:00 is read as a shift that
/// began the previous evening, anything else as a shift running into the
/// next morning. This resolves the common late-start overnight shift
/// without asking the caller which day the shift belongs to.
fn resolve_worked_interval(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> (NaiveDateTime, NaiveDateTime) {
    let mut start_dt = date.and_time(start);
    let mut end_dt = date.and_time(end);
    if end_dt <= start_dt {
        if start.hour() >= LATE_START_HOUR {
            start_dt -= chrono::Duration::days(1);
        } else {
            end_dt += chrono::Duration::days(1);
        }
    }
    (start_dt, end_dt)
}

/// Accumulates quarter-hour increments of the interval that fall inside the
/// night window [18:00, 06:00).
fn night_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    scan_quarter_hours(start, end, |cursor| {
        let hour = cursor.hour();
        hour >= NIGHT_WINDOW_START_HOUR || hour < NIGHT_WINDOW_END_HOUR
    })
}

/// Accumulates quarter-hour increments whose literal clock date is a
/// Sunday (the calendar rule, used for unscheduled overtime shifts).
fn sunday_calendar_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    scan_quarter_hours(start, end, |cursor| cursor.weekday() == Weekday::Sun)
}

/// Steps through the interval in 15-minute increments, crediting 0.25 h for
/// each increment the predicate accepts. Quarter-hour granularity matches
/// the legacy system's output and must not be refined.
fn scan_quarter_hours<F: Fn(NaiveDateTime) -> bool>(
    start: NaiveDateTime,
    end: NaiveDateTime,
    in_window: F,
) -> Decimal {
    let mut hours = Decimal::ZERO;
    let quarter = Decimal::new(25, 2);
    let mut cursor = start;
    while cursor < end {
        if in_window(cursor) {
            hours += quarter;
        }
        cursor += chrono::Duration::minutes(SCAN_MINUTES);
    }
    hours
}

/// Checks whether `date` is the observed date of any holiday in the list.
fn is_observed_holiday(
    date: NaiveDate,
    schedule: &WeekSchedule,
    holidays: &[Holiday],
    rules: &PayRules,
) -> bool {
    holidays
        .iter()
        .any(|h| resolve_observed_holiday(h.date, schedule, rules) == date)
}

/// Computes the categorized hour buckets for one calendar day.
///
/// The engine never fabricates data: a weekday missing from the schedule is
/// a zero-expectation day off, and a schedule gap with no leave designation
/// stays uncredited for the caller to surface.
///
/// # Arguments
///
/// * `entry` - The day's actual-worked record
/// * `schedule` - The standard weekly schedule for the entry's year
/// * `holidays` - The holiday calendar for the entry's year
/// * `rules` - Pay rules (caps and slide policy)
///
/// # Example
///
/// ```
/// use paytrack_engine::calculation::calculate_daily_breakdown;
/// use paytrack_engine::config::PayRules;
/// use paytrack_engine::models::{ScheduleEntry, ShiftEntry, WeekSchedule};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let schedule = WeekSchedule::new(2025, (0..5).map(|d| ScheduleEntry {
///     day_of_week: d,
///     is_workday: true,
///     start_time: Some(NaiveTime::from_hms_opt(7, 0, 0).unwrap()),
///     end_time: Some(NaiveTime::from_hms_opt(15, 0, 0).unwrap()),
/// }).collect());
///
/// // A 10-hour Monday against an 8-hour schedule: 8 regular + 2 overtime.
/// let entry = ShiftEntry {
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     start_time: Some(NaiveTime::from_hms_opt(7, 0, 0).unwrap()),
///     end_time: Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
///     leave_kind: None,
///     ojti_hours: Decimal::ZERO,
///     cic_hours: Decimal::ZERO,
/// };
/// let bucket = calculate_daily_breakdown(&entry, &schedule, &[], &PayRules::default());
/// assert_eq!(bucket.regular_hours, Decimal::from(8));
/// assert_eq!(bucket.overtime_hours, Decimal::from(2));
/// ```
pub fn calculate_daily_breakdown(
    entry: &ShiftEntry,
    schedule: &WeekSchedule,
    holidays: &[Holiday],
    rules: &PayRules,
) -> DailyBucket {
    let mut bucket = DailyBucket::empty(entry.date);
    bucket.ojti_hours = entry.ojti_hours;
    bucket.cic_hours = entry.cic_hours;

    let is_workday = schedule.is_workday(entry.date);
    let std_hours = schedule.scheduled_hours(entry.date);
    let observed_holiday = is_observed_holiday(entry.date, schedule, holidays, rules);

    let mut worked_hours = Decimal::ZERO;
    if let (Some(start), Some(end)) = (entry.start_time, entry.end_time) {
        if start != end {
            let (start_dt, end_dt) = resolve_worked_interval(entry.date, start, end);
            worked_hours = Decimal::from((end_dt - start_dt).num_minutes()) / Decimal::from(60);

            bucket.night_hours = night_hours(start_dt, end_dt);

            if is_workday {
                // Touch rule: a scheduled shift touching Sunday at either
                // end is Sunday-premium eligible for up to the cap.
                if start_dt.weekday() == Weekday::Sun || end_dt.weekday() == Weekday::Sun {
                    bucket.sunday_hours = rules.caps.sunday_premium.min(worked_hours);
                }
            } else {
                // Calendar rule: overtime on a day off only earns Sunday
                // premium for the increments literally on a Sunday.
                bucket.sunday_hours = sunday_calendar_hours(start_dt, end_dt);
            }
        }
    }

    // Gap analysis: scheduled hours not covered by actual work.
    if is_workday {
        let gap = (std_hours - worked_hours).max(Decimal::ZERO);
        if gap > Decimal::ZERO {
            if entry.leave_kind == Some(LeaveKind::Holiday) || observed_holiday {
                bucket.holiday_leave_hours = gap;
            } else if let Some(kind) = entry.leave_kind {
                bucket.charged_leave_hours = gap;
                bucket.leave_kind = Some(kind);
            }
            // No designation: the gap stays uncredited for the caller to
            // surface as an unresolved entry.
        }
    }

    if is_workday {
        bucket.regular_hours = rules.caps.scheduled_day.min(worked_hours);
        bucket.overtime_hours = (worked_hours - rules.caps.scheduled_day).max(Decimal::ZERO);
    } else {
        bucket.overtime_hours = worked_hours;
    }

    if observed_holiday && worked_hours > Decimal::ZERO {
        bucket.holiday_worked_hours = rules.caps.holiday_worked.min(worked_hours);
    }

    bucket
}
