//! Declared-paycheck auditing.
//!
//! Checks a paycheck as the agency printed it for internal arithmetic
//! errors: leave balance continuity in the hours.minutes notation, the
//! gross total against its earning lines, and net against gross minus
//! deductions. Also ships two statement-level helpers: line-code drift
//! detection between consecutive paychecks and the effective tax rate.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use crate::config::PayRules;
use crate::models::DeclaredPaycheck;

use super::leave_math::{dot_to_minutes, minutes_to_dot};
use super::rounding::truncate_cents;

/// Audit findings keyed by the field they concern, in deterministic order.
pub type AuditFlags = BTreeMap<String, String>;

/// Cent-level tolerance for the gross and net checks.
fn money_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Audits a declared paycheck for internal arithmetic errors.
///
/// Leave continuity is checked in minute space with a one-minute
/// tolerance, skipping the administrative categories that carry no real
/// balance. Gross is compared against the sum of current and adjusted
/// earning amounts, net against gross minus total deductions, both within
/// a cent.
///
/// # Returns
///
/// A map of field keys to human-readable findings; empty when the
/// statement is internally consistent.
pub fn audit_paycheck(declared: &DeclaredPaycheck, rules: &PayRules) -> AuditFlags {
    let mut flags = AuditFlags::new();
    let tolerance = money_tolerance();

    for row in &declared.leave {
        if rules
            .leave
            .audit_exempt
            .iter()
            .any(|exempt| row.leave_type.contains(exempt.as_str()))
        {
            continue;
        }
        let expected_minutes = dot_to_minutes(row.balance_start)
            + dot_to_minutes(row.earned_current)
            - dot_to_minutes(row.used_current);
        let declared_minutes = dot_to_minutes(row.balance_end);
        if (expected_minutes - declared_minutes).abs() > 1 {
            let key = format!(
                "leave_{}_end",
                row.leave_type.to_lowercase().replace(' ', "_")
            );
            flags.insert(
                key,
                format!(
                    "Math Error: {} + {} - {} should be {}, statement says {}",
                    row.balance_start,
                    row.earned_current,
                    row.used_current,
                    minutes_to_dot(expected_minutes),
                    row.balance_end
                ),
            );
        }
    }

    let earned_total: Decimal = declared
        .earnings
        .iter()
        .map(|row| row.amount_current + row.amount_adjusted)
        .sum();
    if (earned_total - declared.gross_pay).abs() > tolerance {
        flags.insert(
            "gross_pay".to_string(),
            format!(
                "Math Error: earnings total {} but gross pay says {}",
                earned_total, declared.gross_pay
            ),
        );
    }

    let expected_net = declared.gross_pay - declared.total_deductions;
    if (expected_net - declared.net_pay).abs() > tolerance {
        flags.insert(
            "net_pay".to_string(),
            format!(
                "Math Error: gross {} - deductions {} should be {}, statement says {}",
                declared.gross_pay, declared.total_deductions, expected_net, declared.net_pay
            ),
        );
    }

    flags
}

/// Reports earning and deduction codes that appear or vanish between two
/// consecutive paychecks.
///
/// A new deduction is flagged CRITICAL since it takes money without
/// warning; a vanished one is only a WARNING. New earning codes are
/// informational.
pub fn compare_line_codes(older: &DeclaredPaycheck, newer: &DeclaredPaycheck) -> Vec<String> {
    let older_earnings: BTreeSet<&str> =
        older.earnings.iter().map(|r| r.line_type.as_str()).collect();
    let newer_earnings: BTreeSet<&str> =
        newer.earnings.iter().map(|r| r.line_type.as_str()).collect();
    let older_deductions: BTreeSet<&str> =
        older.deductions.iter().map(|r| r.line_type.as_str()).collect();
    let newer_deductions: BTreeSet<&str> =
        newer.deductions.iter().map(|r| r.line_type.as_str()).collect();

    let mut findings = Vec::new();
    for code in newer_earnings.difference(&older_earnings) {
        findings.push(format!("New earning code: {code}"));
    }
    for code in newer_deductions.difference(&older_deductions) {
        findings.push(format!("CRITICAL - New deduction code: {code}"));
    }
    for code in older_deductions.difference(&newer_deductions) {
        findings.push(format!("WARNING - Deduction no longer present: {code}"));
    }
    findings
}

/// Computes the effective tax rate of a declared paycheck, as a percent.
///
/// Sums the deduction lines matching the configured tax keywords and
/// divides by gross. Zero when gross is not positive.
pub fn effective_tax_rate(declared: &DeclaredPaycheck, rules: &PayRules) -> Decimal {
    if declared.gross_pay <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let tax_total: Decimal = declared
        .deductions
        .iter()
        .filter(|row| {
            let lowered = row.line_type.to_lowercase();
            rules
                .deductions
                .tax_keywords
                .iter()
                .any(|kw| lowered.contains(&kw.to_lowercase()))
        })
        .map(|row| row.amount_current + row.amount_adjusted)
        .sum();
    truncate_cents(tax_total / declared.gross_pay * Decimal::ONE_HUNDRED)
}
