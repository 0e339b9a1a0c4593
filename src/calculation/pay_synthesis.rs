//! Period pay synthesis.
//!
//! Aggregates a period's daily buckets and a historical reference paycheck
//! into a full synthesized statement: base pay, differentials, incentive
//! pay, the FLSA half-time premium, projected deductions, year-to-date
//! continuity, and forward leave projections. Every intermediate value is
//! truncated — hours at four places, currency at cents — to reproduce the
//! legacy system exactly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::PayRules;
use crate::models::{
    DailyBucket, DeclaredLeaveRow, EarningCategory, EarningLine, LeaveProjection,
    PaycheckBreakdown, ReferenceContext,
};

use super::deduction_projection::project_deductions;
use super::flsa_premium::{FlsaPremium, calculate_flsa_premium};
use super::incentive::derive_incentive_pay;
use super::leave_math::{dot_to_minutes, minutes_to_dot};
use super::rounding::{truncate_cents, truncate_hours};

/// Period-wide hour totals, each truncated to four decimal places.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HourTotals {
    regular: Decimal,
    overtime: Decimal,
    night: Decimal,
    sunday: Decimal,
    holiday_worked: Decimal,
    holiday_leave: Decimal,
    ojti: Decimal,
    cic: Decimal,
}

impl HourTotals {
    fn sum(buckets: &[DailyBucket]) -> Self {
        let total = |pick: fn(&DailyBucket) -> Decimal| {
            truncate_hours(buckets.iter().map(pick).sum::<Decimal>())
        };
        Self {
            regular: total(|b| b.regular_hours),
            overtime: total(|b| b.overtime_hours),
            night: total(|b| b.night_hours),
            sunday: total(|b| b.sunday_hours),
            holiday_worked: total(|b| b.holiday_worked_hours),
            holiday_leave: total(|b| b.holiday_leave_hours),
            ojti: total(|b| b.ojti_hours),
            cic: total(|b| b.cic_hours),
        }
    }

    /// Hours paid at base rate: regular work plus paid holiday leave.
    fn base_hours(&self) -> Decimal {
        self.regular + self.holiday_leave
    }
}

/// Continues a year-to-date figure from the matching reference line.
///
/// `None` when the reference has no matching line with a positive YTD; the
/// engine never invents a year-to-date number.
fn continue_ytd(
    reference: &ReferenceContext,
    category: &EarningCategory,
    new_current: Decimal,
) -> Option<Decimal> {
    let key = category.match_key().to_lowercase();
    let line = reference
        .earnings
        .iter()
        .find(|l| l.line_type.to_lowercase().contains(&key))?;
    match line.amount_ytd {
        Some(ytd) if ytd > Decimal::ZERO => Some(ytd - line.amount_current + new_current),
        _ => None,
    }
}

/// Projects the chargeable leave balances forward one period.
///
/// Forward projection assumes zero usage; reconciling actual usage against
/// the declared statement is the audit checker's job. Balance math happens
/// in minutes because of the dot notation.
fn project_leave(reference_leave: &[DeclaredLeaveRow], rules: &PayRules) -> Vec<LeaveProjection> {
    reference_leave
        .iter()
        .filter(|row| {
            rules
                .leave
                .chargeable
                .iter()
                .any(|kind| row.leave_type.contains(kind.as_str()))
        })
        .map(|row| {
            let end_minutes =
                dot_to_minutes(row.balance_start) + dot_to_minutes(row.earned_current);
            LeaveProjection {
                leave_type: row.leave_type.clone(),
                balance_start: row.balance_start,
                earned_current: row.earned_current,
                used_current: Decimal::ZERO,
                balance_end: minutes_to_dot(end_minutes),
            }
        })
        .collect()
}

/// Synthesizes the expected paycheck for one period.
///
/// The result is deterministic: identical buckets, reference, and rules
/// always produce an identical breakdown. A reference with no positive
/// base rate still synthesizes — every amount comes out zero — but the
/// result is marked unreliable instead of passing as a real zero paycheck.
///
/// # Arguments
///
/// * `buckets` - The period's daily hour buckets
/// * `reference` - The historical paycheck supplying rate and ratios
/// * `reference_leave` - Declared leave rows used for forward projection
/// * `period_ending` - The period this breakdown covers
/// * `rules` - The pay rules
pub fn synthesize_paycheck(
    buckets: &[DailyBucket],
    reference: &ReferenceContext,
    reference_leave: &[DeclaredLeaveRow],
    period_ending: NaiveDate,
    rules: &PayRules,
) -> PaycheckBreakdown {
    let totals = HourTotals::sum(buckets);
    let base_rate = reference.base_hourly_rate;
    let reliable = reference.has_usable_rate();

    if !reliable {
        warn!(
            %period_ending,
            "no reference paycheck with a positive base rate; synthesizing an unreliable zero-rate result"
        );
    }

    // Base pay covers worked regular hours and paid holiday leave.
    let base_amount = truncate_cents(totals.base_hours() * base_rate);

    let true_overtime_amount = if totals.overtime > Decimal::ZERO {
        truncate_cents(totals.overtime * base_rate)
    } else {
        Decimal::ZERO
    };

    let night_rate = truncate_cents(base_rate * rules.differentials.night);
    let night_amount = truncate_cents(totals.night * night_rate);
    let sunday_rate = truncate_cents(base_rate * rules.differentials.sunday);
    let sunday_amount = truncate_cents(totals.sunday * sunday_rate);
    let ojti_rate = truncate_cents(base_rate * rules.supplemental.ojti);
    let ojti_amount = truncate_cents(totals.ojti * ojti_rate);
    let cic_rate = truncate_cents(base_rate * rules.supplemental.cic);
    let cic_amount = truncate_cents(totals.cic * cic_rate);

    // Holiday-worked premium pays a second time at full base rate.
    let holiday_amount = truncate_cents(totals.holiday_worked * base_rate);

    let incentive = derive_incentive_pay(base_amount, base_rate, reference);

    let flsa = if totals.overtime > Decimal::ZERO {
        let remuneration = base_amount
            + true_overtime_amount
            + night_amount
            + sunday_amount
            + holiday_amount
            + incentive.amount
            + ojti_amount
            + cic_amount;
        let hours_worked = totals.base_hours() + totals.overtime;
        calculate_flsa_premium(remuneration, hours_worked, totals.overtime)
    } else {
        FlsaPremium::zero()
    };

    let gross_pay = base_amount
        + true_overtime_amount
        + flsa.amount
        + night_amount
        + sunday_amount
        + holiday_amount
        + incentive.amount
        + ojti_amount
        + cic_amount;

    let deductions = project_deductions(gross_pay, reference, rules);
    let total_deductions: Decimal = deductions.iter().map(|d| d.amount_current).sum();
    let net_pay = gross_pay - total_deductions;

    let mut earnings = Vec::new();
    let mut push_line = |category: EarningCategory, rate: Decimal, hours: Decimal, amount: Decimal| {
        let amount_ytd = continue_ytd(reference, &category, amount);
        earnings.push(EarningLine {
            category,
            rate,
            hours,
            amount_current: amount,
            amount_ytd,
        });
    };

    if totals.base_hours() > Decimal::ZERO {
        push_line(EarningCategory::Regular, base_rate, totals.base_hours(), base_amount);
    }
    if incentive.amount != Decimal::ZERO {
        push_line(
            EarningCategory::IncentivePay,
            incentive.rate,
            totals.base_hours(),
            incentive.amount,
        );
    }
    if totals.overtime > Decimal::ZERO {
        push_line(EarningCategory::FlsaPremium, flsa.rate, totals.overtime, flsa.amount);
        push_line(
            EarningCategory::TrueOvertime,
            base_rate,
            totals.overtime,
            true_overtime_amount,
        );
    }
    if totals.night > Decimal::ZERO {
        push_line(EarningCategory::NightDifferential, night_rate, totals.night, night_amount);
    }
    if totals.sunday > Decimal::ZERO {
        push_line(EarningCategory::SundayPremium, sunday_rate, totals.sunday, sunday_amount);
    }
    if totals.holiday_worked > Decimal::ZERO {
        push_line(
            EarningCategory::HolidayWorked,
            base_rate,
            totals.holiday_worked,
            holiday_amount,
        );
    }
    if totals.ojti > Decimal::ZERO {
        push_line(EarningCategory::Ojti, ojti_rate, totals.ojti, ojti_amount);
    }
    if totals.cic > Decimal::ZERO {
        push_line(EarningCategory::Cic, cic_rate, totals.cic, cic_amount);
    }

    let mut remark_lines = vec!["GENERATED".to_string(), "Weighted Avg FLSA".to_string()];
    if reference.is_fallback {
        remark_lines.push("Rates carried from a prior paycheck".to_string());
    }
    if !reliable {
        remark_lines.push("UNRELIABLE: no reference paycheck with a positive base rate".to_string());
    }

    PaycheckBreakdown {
        period_ending,
        earnings,
        deductions,
        leave: project_leave(reference_leave, rules),
        gross_pay,
        total_deductions,
        net_pay,
        remarks: remark_lines.join("\n"),
        reliable,
    }
}
