//! Holiday observed-date resolution (the slide rule).
//!
//! A holiday falling on a regular day off is credited on the nearest
//! scheduled workday: forward when the holiday is a Sunday, backward
//! otherwise (typically a Saturday holiday sliding to Friday).

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::warn;

use crate::config::PayRules;
use crate::models::WeekSchedule;

/// Resolves the date a calendar holiday is actually credited on.
///
/// * Holiday on a scheduled workday: credited that day.
/// * Holiday on a Sunday day off: slides forward to the next workday.
/// * Holiday on any other day off: slides backward to the previous workday.
///
/// The search is capped at `rules.holiday.slide_limit_days` steps; a
/// schedule with no workdays at all gets the calendar date back unchanged.
///
/// # Example
///
/// ```
/// use paytrack_engine::calculation::resolve_observed_holiday;
/// use paytrack_engine::config::PayRules;
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
/// // 2025-07-04 falls on a Friday: observed as-is.
/// let independence_day = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
/// let rules = PayRules::default();
/// assert_eq!(resolve_observed_holiday(independence_day, &schedule, &rules), independence_day);
/// ```
pub fn resolve_observed_holiday(
    holiday_date: NaiveDate,
    schedule: &WeekSchedule,
    rules: &PayRules,
) -> NaiveDate {
    if schedule.is_workday(holiday_date) {
        return holiday_date;
    }

    let forward = holiday_date.weekday() == Weekday::Sun;

    for offset in 1..=u64::from(rules.holiday.slide_limit_days) {
        let candidate = if forward {
            holiday_date + Days::new(offset)
        } else {
            holiday_date - Days::new(offset)
        };
        if schedule.is_workday(candidate) {
            return candidate;
        }
    }

    warn!(
        holiday = %holiday_date,
        limit = rules.holiday.slide_limit_days,
        "no workday found within slide limit; observing holiday on its calendar date"
    );
    holiday_date
}
