//! Paycheck models: reference context, synthesized breakdowns, and the
//! declared statement rows consumed by the audit checker.
//!
//! The *reference* side is a snapshot of a real historical paycheck used as
//! the source of truth for rates and deduction ratios. The *declared* side
//! is the official statement being audited. The [`PaycheckBreakdown`] is the
//! paycheck this engine synthesizes from hour buckets.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One earnings line from a historical reference paycheck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEarningLine {
    /// The earnings type as printed on the statement (e.g., "Regular Pay").
    pub line_type: String,
    /// The hourly rate printed for this line.
    pub rate: Decimal,
    /// The current-period amount.
    pub amount_current: Decimal,
    /// The year-to-date amount, when the statement carried one.
    pub amount_ytd: Option<Decimal>,
}

/// One deduction line from a historical reference paycheck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDeductionLine {
    /// The deduction type as printed (e.g., "Federal Tax", "OASDI").
    pub line_type: String,
    /// The current-period amount.
    pub amount_current: Decimal,
    /// The year-to-date amount, when the statement carried one.
    pub amount_ytd: Option<Decimal>,
}

/// Snapshot of a historical paycheck used as the rate/deduction baseline.
///
/// Supplied by a collaborator (spec'd as the reference-context provider) and
/// immutable within one computation. When the requested paycheck had no
/// positive base rate — a pay lapse, for instance — the provider falls back
/// to the most recent prior paycheck that did, and marks the snapshot with
/// `is_fallback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceContext {
    /// The base hourly rate taken from the reference regular-pay line.
    pub base_hourly_rate: Decimal,
    /// The reference paycheck's gross pay, denominator for percentage
    /// deduction ratios.
    pub gross_pay: Decimal,
    /// The reference earnings lines.
    pub earnings: Vec<ReferenceEarningLine>,
    /// The reference deduction lines.
    pub deductions: Vec<ReferenceDeductionLine>,
    /// True when these figures came from an older paycheck because the
    /// requested one had no usable rate.
    #[serde(default)]
    pub is_fallback: bool,
}

impl ReferenceContext {
    /// Returns whether the snapshot carries a usable (positive) base rate.
    pub fn has_usable_rate(&self) -> bool {
        self.base_hourly_rate > Decimal::ZERO
    }

    /// An empty, rate-less context. Synthesis against it produces a
    /// zero-rate result flagged as unreliable.
    pub fn unavailable() -> Self {
        Self {
            base_hourly_rate: Decimal::ZERO,
            gross_pay: Decimal::ZERO,
            earnings: Vec::new(),
            deductions: Vec::new(),
            is_fallback: false,
        }
    }
}

/// The category of a synthesized earnings line.
///
/// A closed enum of the known pay categories, with an `Other` passthrough
/// for statement lines this engine does not synthesize itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarningCategory {
    /// Base pay for regular hours plus paid holiday leave.
    Regular,
    /// Controller incentive pay, derived from the reference ratio.
    IncentivePay,
    /// The FLSA half-time overtime premium.
    FlsaPremium,
    /// Straight-time pay for overtime hours.
    TrueOvertime,
    /// Night differential (10% of base rate).
    NightDifferential,
    /// Sunday premium (25% of base rate).
    SundayPremium,
    /// Holiday-worked premium, stacked on base pay.
    HolidayWorked,
    /// On-the-job-training instructor differential.
    Ojti,
    /// Controller-in-charge differential.
    Cic,
    /// Any other line type carried through from a statement.
    Other(String),
}

impl EarningCategory {
    /// The substring used to find the matching line on a reference
    /// statement. Statement type names are not fully consistent, so this
    /// stays a substring match rather than an exact one.
    pub fn match_key(&self) -> &str {
        match self {
            EarningCategory::Regular => "Regular",
            EarningCategory::IncentivePay => "Incentive",
            EarningCategory::FlsaPremium => "FLSA",
            EarningCategory::TrueOvertime => "Overtime",
            EarningCategory::NightDifferential => "Night",
            EarningCategory::SundayPremium => "Sunday",
            EarningCategory::HolidayWorked => "Holiday",
            EarningCategory::Ojti => "OJTI",
            EarningCategory::Cic => "CIC",
            EarningCategory::Other(name) => name,
        }
    }
}

impl std::fmt::Display for EarningCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EarningCategory::Regular => write!(f, "Regular / Holiday Leave"),
            EarningCategory::IncentivePay => write!(f, "Controller Incentive Pay"),
            EarningCategory::FlsaPremium => write!(f, "FLSA Premium"),
            EarningCategory::TrueOvertime => write!(f, "True Overtime"),
            EarningCategory::NightDifferential => write!(f, "Night Differential"),
            EarningCategory::SundayPremium => write!(f, "Sunday Premium"),
            EarningCategory::HolidayWorked => write!(f, "Holiday Worked"),
            EarningCategory::Ojti => write!(f, "OJTI"),
            EarningCategory::Cic => write!(f, "CIC"),
            EarningCategory::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A synthesized earnings line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningLine {
    /// The pay category of this line.
    pub category: EarningCategory,
    /// The hourly rate applied.
    pub rate: Decimal,
    /// The hours rated on this line.
    pub hours: Decimal,
    /// The current-period amount.
    pub amount_current: Decimal,
    /// Projected year-to-date amount; `None` when the reference statement
    /// carried no positive YTD figure to continue from.
    pub amount_ytd: Option<Decimal>,
}

/// A synthesized deduction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The deduction type, carried from the reference statement.
    pub line_type: String,
    /// The current-period amount (recomputed for percentage-based lines,
    /// carried for fixed lines).
    pub amount_current: Decimal,
    /// Projected year-to-date amount; `None` when unknown.
    pub amount_ytd: Option<Decimal>,
}

/// A forward leave-balance projection for one leave category.
///
/// Balances use the statement's mixed hours.minutes dot notation
/// (6.45 means 6 hours 45 minutes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveProjection {
    /// The leave category (e.g., "Annual Leave").
    pub leave_type: String,
    /// The starting balance.
    pub balance_start: Decimal,
    /// Hours earned this period.
    pub earned_current: Decimal,
    /// Hours used this period (zero in forward projection).
    pub used_current: Decimal,
    /// The projected ending balance.
    pub balance_end: Decimal,
}

/// A complete synthesized paycheck.
///
/// Only non-zero lines are present; a category with no hours produces no
/// earnings line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckBreakdown {
    /// The pay period this breakdown covers (period-ending date).
    pub period_ending: NaiveDate,
    /// Synthesized earnings lines.
    pub earnings: Vec<EarningLine>,
    /// Projected deduction lines.
    pub deductions: Vec<DeductionLine>,
    /// Forward leave-balance projections.
    pub leave: Vec<LeaveProjection>,
    /// Sum of all earnings amounts.
    pub gross_pay: Decimal,
    /// Sum of all deduction amounts.
    pub total_deductions: Decimal,
    /// Gross minus total deductions.
    pub net_pay: Decimal,
    /// Free-form provenance notes for the rendered statement.
    pub remarks: String,
    /// False when no positive reference base rate existed anywhere, making
    /// every amount on this breakdown a zero-rate placeholder.
    pub reliable: bool,
}

/// One earnings row of a declared (official) statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredEarningRow {
    /// The earnings type as printed.
    pub line_type: String,
    /// The printed hourly rate.
    pub rate: Decimal,
    /// Current-period hours.
    pub hours_current: Decimal,
    /// Adjusted (retroactive correction) hours.
    pub hours_adjusted: Decimal,
    /// Current-period amount.
    pub amount_current: Decimal,
    /// Adjusted (retroactive correction) amount.
    pub amount_adjusted: Decimal,
    /// Year-to-date amount, when printed.
    pub amount_ytd: Option<Decimal>,
}

/// One deduction row of a declared statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDeductionRow {
    /// The deduction type as printed.
    pub line_type: String,
    /// Current-period amount.
    pub amount_current: Decimal,
    /// Adjusted amount.
    pub amount_adjusted: Decimal,
    /// Year-to-date amount, when printed.
    pub amount_ytd: Option<Decimal>,
}

/// One leave-balance row of a declared statement, in hours.minutes dot
/// notation (6.45 = 6h45m).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredLeaveRow {
    /// The leave category as printed.
    pub leave_type: String,
    /// Declared starting balance.
    pub balance_start: Decimal,
    /// Declared hours earned this period.
    pub earned_current: Decimal,
    /// Declared hours used this period.
    pub used_current: Decimal,
    /// Declared ending balance.
    pub balance_end: Decimal,
}

/// A declared (official) paycheck as parsed from a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredPaycheck {
    /// The pay period ending date.
    pub period_ending: NaiveDate,
    /// Declared gross pay.
    pub gross_pay: Decimal,
    /// Declared total deductions.
    pub total_deductions: Decimal,
    /// Declared net pay.
    pub net_pay: Decimal,
    /// Declared earnings rows.
    pub earnings: Vec<DeclaredEarningRow>,
    /// Declared deduction rows.
    pub deductions: Vec<DeclaredDeductionRow>,
    /// Declared leave-balance rows.
    pub leave: Vec<DeclaredLeaveRow>,
}
