//! Data models for the Pay Reconciliation Engine.
//!
//! This module contains the input models (schedules, holidays, shift entries,
//! reference paychecks), the computed models (daily hour buckets, synthesized
//! paycheck breakdowns), and the cross-period ledger types.

mod daily_bucket;
mod pay_period;
mod paycheck;
mod schedule;
mod shift_entry;

pub use daily_bucket::DailyBucket;
pub use pay_period::{LedgerRow, LedgerStatus, PayPeriod, PAY_PERIOD_DAYS};
pub use paycheck::{
    DeclaredDeductionRow, DeclaredEarningRow, DeclaredLeaveRow, DeclaredPaycheck, DeductionLine,
    EarningCategory, EarningLine, LeaveProjection, PaycheckBreakdown, ReferenceContext,
    ReferenceDeductionLine, ReferenceEarningLine,
};
pub use schedule::{Holiday, ScheduleEntry, WeekSchedule};
pub use shift_entry::{LeaveKind, ShiftEntry};
