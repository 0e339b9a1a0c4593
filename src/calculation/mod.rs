//! Calculation logic for the pay reconciliation engine.
//!
//! This module contains all the calculation functions for reconstructing
//! pay, including observed-holiday resolution against a weekly schedule,
//! per-day hour bucketing with night and Sunday premium windows, leave gap
//! analysis, incentive-pay derivation from a reference paycheck, the
//! weighted-average FLSA overtime premium, deduction projection, full
//! period pay synthesis, declared-paycheck auditing, leave balance math in
//! the hours.minutes notation, and the cross-period variance ledger.

mod daily_breakdown;
mod deduction_projection;
mod flsa_premium;
mod incentive;
mod leave_math;
mod ledger;
mod observed_holiday;
mod pay_synthesis;
mod paycheck_audit;
mod rounding;

pub use daily_breakdown::calculate_daily_breakdown;
pub use deduction_projection::{is_percentage_deduction, project_deductions};
pub use flsa_premium::{FlsaPremium, calculate_flsa_premium};
pub use incentive::{IncentivePay, derive_incentive_pay};
pub use leave_math::{dot_to_minutes, minutes_to_dot};
pub use ledger::{PeriodDataSource, build_ledger};
pub use observed_holiday::resolve_observed_holiday;
pub use pay_synthesis::synthesize_paycheck;
pub use paycheck_audit::{AuditFlags, audit_paycheck, compare_line_codes, effective_tax_rate};
pub use rounding::{truncate_cents, truncate_hours};
