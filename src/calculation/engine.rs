//! The credit evaluation engine.
//!
//! This module chains tenure calculation, tenure normalization, range lookup
//! and optimal line calculation into a single evaluation with an audit trace.

use std::path::Path;
use std::sync::{Arc, LazyLock};
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{ConfigLoader, EngineConfig};
use crate::error::EngineResult;
use crate::models::{AuditTrace, CreditEvaluation, CreditQuery};

use super::optimal_line::calculate_optimal_line;
use super::range_lookup::lookup_amount_range;
use super::tenure::calculate_tenure;
use super::tenure_normalization::normalize_tenure;

static BUILTIN_ENGINE: LazyLock<CreditEngine> = LazyLock::new(CreditEngine::default);

/// Evaluates credit lines against a set of amount tables.
///
/// The engine is cheap to clone and can be shared between threads; the
/// tables are never mutated after construction.
///
/// # Example
///
/// ```
/// use credit_line_engine::CreditEngine;
/// use chrono::NaiveDate;
///
/// let engine = CreditEngine::default();
/// let first_job = NaiveDate::from_ymd_opt(2025, 4, 4).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
///
/// let evaluation = engine.evaluate("A", first_job, "m", as_of).unwrap();
/// assert_eq!(evaluation.amounts(), (100, 4900, 184));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreditEngine {
    config: Arc<EngineConfig>,
}

impl CreditEngine {
    /// Creates an engine over the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the shared engine over the built-in tables.
    pub fn builtin() -> &'static CreditEngine {
        &BUILTIN_ENGINE
    }

    /// Creates an engine over tables loaded from a configuration directory.
    pub fn from_config_dir<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let loader = ConfigLoader::load(path)?;
        Ok(Self::new(loader.into_config()))
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluates a worker given raw category and gender tags.
    ///
    /// The gender is validated before the category, so a request with both
    /// invalid reports [`EngineError::InvalidGender`](crate::error::EngineError::InvalidGender).
    pub fn evaluate(
        &self,
        category: &str,
        first_employment_date: NaiveDate,
        gender: &str,
        as_of: NaiveDate,
    ) -> EngineResult<CreditEvaluation> {
        let query = CreditQuery::parse(category, first_employment_date, gender).inspect_err(|err| {
            warn!(
                category = %category,
                gender = %gender,
                error = %err,
                "Rejected credit evaluation request"
            );
        })?;

        self.evaluate_query(&query, as_of)
    }

    /// Evaluates an already validated query.
    pub fn evaluate_query(
        &self,
        query: &CreditQuery,
        as_of: NaiveDate,
    ) -> EngineResult<CreditEvaluation> {
        let start_time = Instant::now();
        let mut steps = Vec::with_capacity(4);

        let tenure = calculate_tenure(query.first_employment_date, as_of, 1).inspect_err(|err| {
            warn!(error = %err, "Tenure calculation failed");
        })?;
        steps.push(tenure.audit_step);

        let normalized = normalize_tenure(tenure.months, query.gender, 2);
        steps.push(normalized.audit_step);

        let lookup = lookup_amount_range(
            self.config.tables(),
            query.category,
            query.gender,
            normalized.tenure,
            3,
        )?;
        steps.push(lookup.audit_step);

        let optimal = calculate_optimal_line(lookup.range, 4)?;
        steps.push(optimal.audit_step);

        let duration = start_time.elapsed();
        info!(
            category = %query.category,
            gender = %query.gender,
            tenure_months = tenure.months,
            normalized_tenure = normalized.tenure,
            minimum_amount = lookup.range.minimum,
            maximum_amount = lookup.range.maximum,
            optimal_line = optimal.optimal_line,
            duration_us = duration.as_micros(),
            "Credit evaluation completed"
        );

        Ok(CreditEvaluation {
            evaluation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            category: query.category,
            gender: query.gender,
            first_employment_date: query.first_employment_date,
            as_of,
            tenure_months: tenure.months,
            normalized_tenure: normalized.tenure,
            minimum_amount: lookup.range.minimum,
            maximum_amount: lookup.range.maximum,
            optimal_line: optimal.optimal_line,
            audit_trace: AuditTrace {
                steps,
                duration_us: duration.as_micros() as u64,
            },
        })
    }
}

/// Evaluates a worker against the built-in tables as of today (UTC).
///
/// Returns the minimum amount, maximum amount and optimal line inside a
/// [`CreditEvaluation`], or the first validation error.
///
/// # Example
///
/// ```
/// use credit_line_engine::evaluate;
/// use chrono::NaiveDate;
///
/// let first_job = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
/// let evaluation = evaluate("D", first_job, "f").unwrap();
/// assert_eq!(evaluation.normalized_tenure, 28);
/// assert_eq!(evaluation.amounts(), (700, 4300, 763));
/// ```
pub fn evaluate(
    category: &str,
    first_employment_date: NaiveDate,
    gender: &str,
) -> EngineResult<CreditEvaluation> {
    CreditEngine::builtin().evaluate(
        category,
        first_employment_date,
        gender,
        Utc::now().date_naive(),
    )
}
