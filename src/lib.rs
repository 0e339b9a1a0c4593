//! Pay Reconciliation Engine for federal time-and-attendance statements
//!
//! This crate reconciles a worker's self-reported shift log against a biweekly
//! earnings and leave statement under a government pay scheme with night,
//! Sunday, and holiday differentials, the FLSA weighted-average overtime
//! premium, and the legacy truncation convention of the source payroll system.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
