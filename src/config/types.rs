//! Configuration types for the pay rules.
//!
//! This module contains the strongly-typed rule structures deserialized
//! from the YAML rules file. The defaults reproduce the legacy payroll
//! system's constants, so the engine is usable with no filesystem at all.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Differential percentages applied to the base hourly rate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DifferentialRates {
    /// Night differential as a fraction of base rate (0.10 = 10%).
    pub night: Decimal,
    /// Sunday premium as a fraction of base rate.
    pub sunday: Decimal,
}

/// Percentages for the supplemental premium categories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SupplementalRates {
    /// On-the-job-training instructor differential fraction.
    pub ojti: Decimal,
    /// Controller-in-charge differential fraction.
    pub cic: Decimal,
}

/// Hour caps used when bucketing a day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HourCaps {
    /// Regular hours cap per scheduled day; hours beyond it are overtime.
    pub scheduled_day: Decimal,
    /// Maximum Sunday premium hours creditable to one scheduled shift
    /// under the touch rule.
    pub sunday_premium: Decimal,
    /// Maximum holiday-worked premium hours per day.
    pub holiday_worked: Decimal,
}

/// Holiday observed-date policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayPolicy {
    /// Maximum days the slide-rule search may step before giving up and
    /// returning the calendar date unchanged.
    pub slide_limit_days: u32,
}

/// Leave category policy for audit and projection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeavePolicy {
    /// Categories exempt from the balance-continuity audit (they carry no
    /// running balance).
    pub audit_exempt: Vec<String>,
    /// Categories projected forward by the synthesizer (substring match
    /// against the statement's type names).
    pub chargeable: Vec<String>,
}

/// Deduction classification policy.
///
/// Substring matching against printed type names is a known fragility of
/// the source statements; the keyword lists live here so a renamed category
/// is a config edit, not a code change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeductionPolicy {
    /// Keywords marking a deduction as percentage-of-gross (recomputed
    /// against the synthesized gross).
    pub percentage_keywords: Vec<String>,
    /// Keywords marking a deduction as a tax for the effective-rate
    /// summary.
    pub tax_keywords: Vec<String>,
}

/// Ledger status thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LedgerPolicy {
    /// Absolute per-period variance below which a period counts as
    /// balanced.
    pub balanced_threshold: Decimal,
}

/// The complete rule set for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayRules {
    /// Differential percentages.
    pub differentials: DifferentialRates,
    /// Supplemental category percentages.
    pub supplemental: SupplementalRates,
    /// Hour caps.
    pub caps: HourCaps,
    /// Holiday slide policy.
    pub holiday: HolidayPolicy,
    /// Leave category policy.
    pub leave: LeavePolicy,
    /// Deduction classification policy.
    pub deductions: DeductionPolicy,
    /// Ledger thresholds.
    pub ledger: LedgerPolicy,
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            differentials: DifferentialRates {
                night: Decimal::new(10, 2),
                sunday: Decimal::new(25, 2),
            },
            supplemental: SupplementalRates {
                ojti: Decimal::new(25, 2),
                cic: Decimal::new(10, 2),
            },
            caps: HourCaps {
                scheduled_day: Decimal::from(8),
                sunday_premium: Decimal::from(8),
                holiday_worked: Decimal::from(8),
            },
            holiday: HolidayPolicy {
                slide_limit_days: 14,
            },
            leave: LeavePolicy {
                audit_exempt: vec![
                    "Admin".to_string(),
                    "Change of Station Leave".to_string(),
                    "Time Off Award".to_string(),
                    "Gov Shutdown-Excepted".to_string(),
                ],
                chargeable: vec![
                    "Annual".to_string(),
                    "Sick".to_string(),
                    "Credit".to_string(),
                ],
            },
            deductions: DeductionPolicy {
                percentage_keywords: vec![
                    "Tax".to_string(),
                    "OASDI".to_string(),
                    "Medicare".to_string(),
                    "Retirement".to_string(),
                    "TSP".to_string(),
                ],
                tax_keywords: vec![
                    "Tax".to_string(),
                    "OASDI".to_string(),
                    "Medicare".to_string(),
                ],
            },
            ledger: LedgerPolicy {
                balanced_threshold: Decimal::ONE,
            },
        }
    }
}
