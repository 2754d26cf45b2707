//! Optimal credit line calculation functionality.
//!
//! This module derives the single recommended credit line from an eligible
//! amount range.

use rust_decimal::Decimal;
use rust_decimal::prelude::{MathematicalOps, ToPrimitive};

use crate::error::{EngineError, EngineResult};
use crate::models::{AmountRange, AuditStep};

/// Share of the amount spread added to the minimum by the spread candidate (1.75%).
pub const OPTIMAL_LINE_SPREAD_FACTOR: Decimal = Decimal::from_parts(175, 0, 0, false, 4);

/// The result of an optimal line calculation, including both candidates and
/// the audit step.
#[derive(Debug, Clone)]
pub struct OptimalLineResult {
    /// The recommended credit line.
    pub optimal_line: u32,
    /// `minimum + sqrt(maximum - minimum)`, rounded to 2 decimal places.
    pub sqrt_candidate: Decimal,
    /// `minimum + 0.0175 x (maximum - minimum)`.
    pub spread_candidate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the optimal credit line for an amount range.
///
/// Two candidates are computed:
/// - `p1 = minimum + sqrt(maximum - minimum)`
/// - `p2 = minimum + 0.0175 x (maximum - minimum)`
///
/// The optimal line is `floor(max(p1, p2))`. Because `minimum` is whole,
/// `floor(p1)` is `minimum` plus the integer square root of the spread, so
/// perfect squares are never rounded down by a square root approximation.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAmountRange`] if `maximum < minimum`.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::calculate_optimal_line;
/// use credit_line_engine::models::AmountRange;
///
/// let range = AmountRange { minimum: 100, maximum: 4900 };
/// let result = calculate_optimal_line(range, 1).unwrap();
/// assert_eq!(result.optimal_line, 184);
/// ```
pub fn calculate_optimal_line(range: AmountRange, step_number: u32) -> EngineResult<OptimalLineResult> {
    let AmountRange { minimum, maximum } = range;
    let spread = range
        .spread()
        .ok_or(EngineError::InvalidAmountRange { minimum, maximum })?;

    let spread_share = Decimal::from(spread) * OPTIMAL_LINE_SPREAD_FACTOR;
    let spread_candidate = (Decimal::from(minimum) + spread_share).normalize();
    let sqrt_candidate = Decimal::from(spread)
        .sqrt()
        .map(|root| (Decimal::from(minimum) + root).round_dp(2))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("square root of {} could not be computed", spread),
        })?;

    let whole_share = spread_share
        .trunc()
        .to_u32()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("spread share {} does not fit an amount", spread_share),
        })?;
    let optimal_line = minimum + spread.isqrt().max(whole_share);

    let audit_step = AuditStep {
        step_number,
        rule_id: "optimal_line".to_string(),
        rule_name: "Optimal Line Calculation".to_string(),
        input: serde_json::json!({
            "minimum_amount": minimum,
            "maximum_amount": maximum
        }),
        output: serde_json::json!({
            "sqrt_candidate": sqrt_candidate.to_string(),
            "spread_candidate": spread_candidate.to_string(),
            "optimal_line": optimal_line
        }),
        reasoning: format!(
            "floor(max({} + sqrt({}), {} + {} x {})) = floor(max({}, {})) = {}",
            minimum,
            spread,
            minimum,
            OPTIMAL_LINE_SPREAD_FACTOR,
            spread,
            sqrt_candidate,
            spread_candidate,
            optimal_line
        ),
    };

    Ok(OptimalLineResult {
        optimal_line,
        sqrt_candidate,
        spread_candidate,
        audit_step,
    })
}
