//! Configuration loading and types for the Pay Reconciliation Engine.
//!
//! Pay rules (differential percentages, caps, leave and deduction policy)
//! are loaded from a YAML file into a typed structure, with defaults
//! reproducing the legacy system's constants.

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{
    DeductionPolicy, DifferentialRates, HolidayPolicy, HourCaps, LeavePolicy, LedgerPolicy,
    PayRules, SupplementalRates,
};
