//! Cross-period variance ledger.
//!
//! Re-runs the daily breakdown and pay synthesis over every saved pay
//! period using that period's own historical reference, compares the
//! synthesized gross to the gross the agency declared, and folds the
//! per-period variance into a running balance. Periods with no saved
//! shift detail pass through unaudited and contribute nothing.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayRules;
use crate::error::EngineResult;
use crate::models::{
    DailyBucket, Holiday, LedgerRow, LedgerStatus, PayPeriod, ReferenceContext, ShiftEntry,
    WeekSchedule,
};

use super::daily_breakdown::calculate_daily_breakdown;
use super::pay_synthesis::synthesize_paycheck;

/// Supplies the per-period and per-year data the ledger replays.
///
/// Implemented by the persistence layer; the engine stays storage-free.
/// The reference context must be the one that was in force for the given
/// period, not the caller's current one, so back-dated periods settle at
/// their historical rates.
pub trait PeriodDataSource {
    /// Whether any detailed shift entries were ever saved for the period.
    fn has_saved_entries(&self, period: &PayPeriod) -> EngineResult<bool>;

    /// The saved shift entries for the period.
    fn shift_entries(&self, period: &PayPeriod) -> EngineResult<Vec<ShiftEntry>>;

    /// The reference paycheck context in force for the period.
    fn reference_context(&self, period: &PayPeriod) -> EngineResult<ReferenceContext>;

    /// The weekly schedule for a calendar year.
    fn schedule_for_year(&self, year: i32) -> EngineResult<WeekSchedule>;

    /// The holiday list for a calendar year.
    fn holidays_for_year(&self, year: i32) -> EngineResult<Vec<Holiday>>;
}

/// Year-keyed cache so a multi-year ledger fetches each schedule and
/// holiday list once.
struct YearCache {
    schedules: BTreeMap<i32, WeekSchedule>,
    holidays: BTreeMap<i32, Vec<Holiday>>,
}

impl YearCache {
    fn new() -> Self {
        Self {
            schedules: BTreeMap::new(),
            holidays: BTreeMap::new(),
        }
    }

    fn ensure_year(&mut self, source: &dyn PeriodDataSource, year: i32) -> EngineResult<()> {
        if !self.schedules.contains_key(&year) {
            self.schedules.insert(year, source.schedule_for_year(year)?);
        }
        if !self.holidays.contains_key(&year) {
            self.holidays.insert(year, source.holidays_for_year(year)?);
        }
        Ok(())
    }
}

fn status_for(diff: Decimal, rules: &PayRules) -> LedgerStatus {
    let threshold = rules.ledger.balanced_threshold;
    if diff < -threshold {
        LedgerStatus::GovOwesYou
    } else if diff > threshold {
        LedgerStatus::Backpay
    } else {
        LedgerStatus::Balanced
    }
}

/// Builds the variance ledger over every known pay period.
///
/// Periods may arrive in any order; they are sorted ascending by period
/// end before the fold, since the running balance is order-sensitive.
/// `diff` is declared gross minus synthesized gross, so a negative diff
/// beyond the threshold means the worker was underpaid.
///
/// # Errors
///
/// Propagates any [`crate::error::EngineError`] raised by the data source.
pub fn build_ledger(
    periods: &[PayPeriod],
    source: &dyn PeriodDataSource,
    rules: &PayRules,
) -> EngineResult<Vec<LedgerRow>> {
    let mut ordered: Vec<&PayPeriod> = periods.iter().collect();
    ordered.sort_by_key(|p| p.period_ending);

    let mut cache = YearCache::new();
    let mut rows = Vec::with_capacity(ordered.len());
    let mut running_balance = Decimal::ZERO;

    for period in ordered {
        if !source.has_saved_entries(period)? {
            debug!(period_ending = %period.period_ending, "no saved entries; passing through unaudited");
            rows.push(LedgerRow {
                period_ending: period.period_ending,
                expected_gross: period.declared_gross,
                declared_gross: period.declared_gross,
                diff: Decimal::ZERO,
                running_balance,
                status: LedgerStatus::Unaudited,
            });
            continue;
        }

        let entries = source.shift_entries(period)?;
        let reference = source.reference_context(period)?;

        let mut buckets: Vec<DailyBucket> = Vec::with_capacity(entries.len());
        for entry in &entries {
            let year = entry.date.year();
            cache.ensure_year(source, year)?;
            let schedule = &cache.schedules[&year];
            let holidays = &cache.holidays[&year];
            buckets.push(calculate_daily_breakdown(entry, schedule, holidays, rules));
        }

        let breakdown =
            synthesize_paycheck(&buckets, &reference, &[], period.period_ending, rules);
        let diff = period.declared_gross - breakdown.gross_pay;
        running_balance += diff;

        debug!(
            period_ending = %period.period_ending,
            expected = %breakdown.gross_pay,
            declared = %period.declared_gross,
            %diff,
            "audited period"
        );

        rows.push(LedgerRow {
            period_ending: period.period_ending,
            expected_gross: breakdown.gross_pay,
            declared_gross: period.declared_gross,
            diff,
            running_balance,
            status: status_for(diff, rules),
        });
    }

    Ok(rows)
}
