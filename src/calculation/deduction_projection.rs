//! Deduction projection against a synthesized gross.
//!
//! Reference deductions are classified by printed name into
//! percentage-of-gross lines (taxes, retirement contributions), which are
//! recomputed against the synthesized gross, and fixed lines (insurance
//! premiums, union dues), which carry over unchanged.

use rust_decimal::Decimal;

use crate::config::PayRules;
use crate::models::{DeductionLine, ReferenceContext};

use super::rounding::truncate_cents;

/// Returns whether a deduction line is percentage-of-gross based on its
/// printed name.
///
/// Substring matching is a known fragility of the source statements
/// (renamed categories silently fall back to fixed treatment); the keyword
/// list lives in the rules file.
pub fn is_percentage_deduction(line_type: &str, rules: &PayRules) -> bool {
    let lowered = line_type.to_lowercase();
    rules
        .deductions
        .percentage_keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}

/// Projects the reference deductions onto a synthesized gross.
///
/// Percentage lines become `gross * (reference_amount / reference_gross)`,
/// truncated to cents; fixed lines keep the reference amount. A
/// non-positive reference gross skips the recomputation and carries every
/// line fixed. Year-to-date figures continue from the reference when it
/// carried a positive one.
pub fn project_deductions(
    gross: Decimal,
    reference: &ReferenceContext,
    rules: &PayRules,
) -> Vec<DeductionLine> {
    reference
        .deductions
        .iter()
        .map(|line| {
            let amount_current = if is_percentage_deduction(&line.line_type, rules)
                && reference.gross_pay > Decimal::ZERO
            {
                truncate_cents(gross * (line.amount_current / reference.gross_pay))
            } else {
                line.amount_current
            };

            let amount_ytd = match line.amount_ytd {
                Some(ytd) if ytd > Decimal::ZERO => {
                    Some(ytd - line.amount_current + amount_current)
                }
                _ => None,
            };

            DeductionLine {
                line_type: line.line_type.clone(),
                amount_current,
                amount_ytd,
            }
        })
        .collect()
}
