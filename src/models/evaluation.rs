//! Evaluation result models for the Credit Line Engine.
//!
//! This module contains the [`CreditEvaluation`] type and its associated structures
//! that capture all outputs from a credit evaluation, including the amount range,
//! the optimal line and the audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, Gender};

/// The eligible amount range for a worker.
///
/// # Example
///
/// ```
/// use credit_line_engine::models::AmountRange;
///
/// let range = AmountRange { minimum: 100, maximum: 4900 };
/// assert_eq!(range.spread(), Some(4800));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRange {
    /// The minimum eligible amount.
    pub minimum: u32,
    /// The maximum eligible amount.
    pub maximum: u32,
}

impl AmountRange {
    /// Returns `maximum - minimum`, or `None` when the range is inverted.
    pub fn spread(&self) -> Option<u32> {
        self.maximum.checked_sub(self.minimum)
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for an evaluation.
///
/// # Example
///
/// ```
/// use credit_line_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a credit evaluation.
///
/// Besides the amount range and optimal line this records the raw and
/// normalized tenure that the amounts were looked up with, so callers never
/// need to recompute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEvaluation {
    /// Unique identifier for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The payroll category evaluated.
    pub category: Category,
    /// The gender evaluated.
    pub gender: Gender,
    /// The worker's first employment date.
    pub first_employment_date: NaiveDate,
    /// The date tenure was measured against.
    pub as_of: NaiveDate,
    /// Whole months of employment.
    pub tenure_months: u32,
    /// The tenure breakpoint the amounts were looked up with.
    pub normalized_tenure: u32,
    /// The minimum eligible amount.
    pub minimum_amount: u32,
    /// The maximum eligible amount.
    pub maximum_amount: u32,
    /// The recommended credit line.
    pub optimal_line: u32,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CreditEvaluation {
    /// Returns the `(minimum, maximum, optimal)` triple.
    pub fn amounts(&self) -> (u32, u32, u32) {
        (self.minimum_amount, self.maximum_amount, self.optimal_line)
    }
}
