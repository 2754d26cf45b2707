//! Amount range lookup functionality.
//!
//! This module provides the function for selecting the minimum and maximum
//! eligible amounts from the amount tables.

use crate::config::AmountTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{AmountRange, AuditStep, Category, Gender};

/// The result of an amount range lookup, including the range and audit step.
#[derive(Debug, Clone)]
pub struct AmountRangeLookupResult {
    /// The minimum and maximum eligible amounts.
    pub range: AmountRange,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Looks up the eligible amount range for a worker.
///
/// Reads the minimum and maximum tables for `gender` at
/// `[category][normalized_tenure]`.
///
/// # Errors
///
/// Returns [`EngineError::TableEntryMissing`] if `normalized_tenure` is not one
/// of `gender`'s breakpoints.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::lookup_amount_range;
/// use credit_line_engine::config::AmountTables;
/// use credit_line_engine::models::{Category, Gender};
///
/// let tables = AmountTables::builtin();
/// let result = lookup_amount_range(&tables, Category::B, Gender::Female, 26, 1).unwrap();
/// assert_eq!(result.range.minimum, 100);
/// assert_eq!(result.range.maximum, 4500);
/// ```
pub fn lookup_amount_range(
    tables: &AmountTables,
    category: Category,
    gender: Gender,
    normalized_tenure: u32,
    step_number: u32,
) -> EngineResult<AmountRangeLookupResult> {
    let range = tables
        .range(category, gender, normalized_tenure)
        .ok_or_else(|| EngineError::TableEntryMissing {
            category: category.to_string(),
            gender: gender.to_string(),
            tenure: normalized_tenure,
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "amount_range_lookup".to_string(),
        rule_name: "Amount Range Lookup".to_string(),
        input: serde_json::json!({
            "category": category.as_str(),
            "gender": gender.as_str(),
            "normalized_tenure": normalized_tenure
        }),
        output: serde_json::json!({
            "minimum_amount": range.minimum,
            "maximum_amount": range.maximum
        }),
        reasoning: format!(
            "Category '{}', gender '{}' at {} months: minimum {}, maximum {}",
            category, gender, normalized_tenure, range.minimum, range.maximum
        ),
    };

    Ok(AmountRangeLookupResult { range, audit_step })
}
