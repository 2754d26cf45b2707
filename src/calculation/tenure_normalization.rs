//! Tenure normalization functionality.
//!
//! The amount tables only hold entries for a small band of tenure breakpoints
//! per gender. This module clamps a raw month count onto that band.

use crate::models::{AuditStep, Gender};

/// The result of normalizing a tenure, including the breakpoint and audit step.
#[derive(Debug, Clone)]
pub struct NormalizedTenureResult {
    /// The tenure breakpoint to look amounts up with.
    pub tenure: u32,
    /// Whether the raw tenure was clamped to the floor or ceiling.
    pub clamped: bool,
    /// The audit step recording this normalization.
    pub audit_step: AuditStep,
}

/// Clamps a month count onto `gender`'s tenure breakpoints.
///
/// Male tenure is clamped to `26..=30`, female tenure to `24..=28`. Values
/// strictly between the bounds pass through unchanged.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::clamp_tenure;
/// use credit_line_engine::models::Gender;
///
/// assert_eq!(clamp_tenure(18, Gender::Male), 26);
/// assert_eq!(clamp_tenure(27, Gender::Female), 27);
/// assert_eq!(clamp_tenure(40, Gender::Female), 28);
/// ```
pub fn clamp_tenure(months: u32, gender: Gender) -> u32 {
    months.clamp(gender.tenure_floor(), gender.tenure_ceiling())
}

/// Normalizes a raw tenure into a lookup key, recording an audit step.
pub fn normalize_tenure(months: u32, gender: Gender, step_number: u32) -> NormalizedTenureResult {
    let tenure = clamp_tenure(months, gender);
    let clamped = tenure != months;

    let reasoning = if months < gender.tenure_floor() {
        format!(
            "{} months is below the {} month floor for gender '{}'",
            months,
            gender.tenure_floor(),
            gender
        )
    } else if months > gender.tenure_ceiling() {
        format!(
            "{} months is above the {} month ceiling for gender '{}'",
            months,
            gender.tenure_ceiling(),
            gender
        )
    } else {
        format!(
            "{} months is a breakpoint for gender '{}'",
            months, gender
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure_normalization".to_string(),
        rule_name: "Tenure Normalization".to_string(),
        input: serde_json::json!({
            "tenure_months": months,
            "gender": gender.as_str()
        }),
        output: serde_json::json!({
            "normalized_tenure": tenure,
            "clamped": clamped
        }),
        reasoning,
    };

    NormalizedTenureResult {
        tenure,
        clamped,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn gender_strategy() -> impl Strategy<Value = Gender> {
        prop_oneof![Just(Gender::Male), Just(Gender::Female)]
    }

    /// NT-001: male tenure at or below 26 clamps to 26
    #[test]
    fn test_male_floor() {
        assert_eq!(clamp_tenure(0, Gender::Male), 26);
        assert_eq!(clamp_tenure(18, Gender::Male), 26);
        assert_eq!(clamp_tenure(26, Gender::Male), 26);
    }

    /// NT-002: male tenure strictly between bounds passes through
    #[test]
    fn test_male_pass_through() {
        assert_eq!(clamp_tenure(27, Gender::Male), 27);
        assert_eq!(clamp_tenure(28, Gender::Male), 28);
        assert_eq!(clamp_tenure(29, Gender::Male), 29);
    }

    /// NT-003: male tenure at or above 30 clamps to 30
    #[test]
    fn test_male_ceiling() {
        assert_eq!(clamp_tenure(30, Gender::Male), 30);
        assert_eq!(clamp_tenure(31, Gender::Male), 30);
        assert_eq!(clamp_tenure(400, Gender::Male), 30);
    }

    /// NT-004: female tenure clamps to 24..=28
    #[test]
    fn test_female_domain() {
        assert_eq!(clamp_tenure(0, Gender::Female), 24);
        assert_eq!(clamp_tenure(24, Gender::Female), 24);
        assert_eq!(clamp_tenure(25, Gender::Female), 25);
        assert_eq!(clamp_tenure(27, Gender::Female), 27);
        assert_eq!(clamp_tenure(28, Gender::Female), 28);
        assert_eq!(clamp_tenure(29, Gender::Female), 28);
    }

    #[test]
    fn test_clamped_flag() {
        assert!(normalize_tenure(18, Gender::Male, 1).clamped);
        assert!(!normalize_tenure(26, Gender::Male, 1).clamped);
        assert!(!normalize_tenure(28, Gender::Male, 1).clamped);
        assert!(normalize_tenure(36, Gender::Female, 1).clamped);
    }

    #[test]
    fn test_audit_step_below_floor() {
        let result = normalize_tenure(18, Gender::Male, 2);

        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "tenure_normalization");
        assert_eq!(result.audit_step.input["gender"].as_str().unwrap(), "m");
        assert_eq!(result.audit_step.output["normalized_tenure"], 26);
        assert!(result.audit_step.reasoning.contains("below the 26 month floor"));
    }

    #[test]
    fn test_audit_step_above_ceiling() {
        let result = normalize_tenure(60, Gender::Female, 2);
        assert!(result.audit_step.reasoning.contains("above the 28 month ceiling"));
    }

    proptest! {
        #[test]
        fn prop_normalized_tenure_is_a_breakpoint(months in 0u32..=100, gender in gender_strategy()) {
            let tenure = clamp_tenure(months, gender);
            prop_assert!(gender.breakpoints().contains(&tenure));
        }

        #[test]
        fn prop_normalization_is_monotonic(months in 0u32..100, gender in gender_strategy()) {
            prop_assert!(clamp_tenure(months, gender) <= clamp_tenure(months + 1, gender));
        }

        #[test]
        fn prop_constant_above_ceiling(months in 0u32..=100, gender in gender_strategy()) {
            if months >= gender.tenure_ceiling() {
                prop_assert_eq!(clamp_tenure(months, gender), gender.tenure_ceiling());
            }
        }
    }
}
