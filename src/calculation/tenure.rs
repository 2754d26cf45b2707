//! Tenure calculation functionality.
//!
//! This module provides the function for counting the whole calendar months
//! a worker has been employed.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of a tenure calculation, including the month count and audit step.
#[derive(Debug, Clone)]
pub struct TenureResult {
    /// Whole calendar months elapsed since first employment.
    pub months: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Counts the whole calendar months between `first_employment_date` and `as_of`.
///
/// The count is `(year difference x 12) + month difference`, less one when the
/// day of month of `as_of` is earlier than that of `first_employment_date`,
/// since the final month is then incomplete.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEmploymentDate`] if `first_employment_date`
/// is after `as_of`.
///
/// # Examples
///
/// ```
/// use credit_line_engine::calculation::calculate_tenure;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 4, 4).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
///
/// let result = calculate_tenure(start, as_of, 1).unwrap();
/// assert_eq!(result.months, 18);
/// ```
pub fn calculate_tenure(
    first_employment_date: NaiveDate,
    as_of: NaiveDate,
    step_number: u32,
) -> EngineResult<TenureResult> {
    if first_employment_date > as_of {
        return Err(EngineError::InvalidEmploymentDate {
            date: first_employment_date,
            as_of,
        });
    }

    let years = as_of.year() - first_employment_date.year();
    let mut months = years * 12 + as_of.month() as i32 - first_employment_date.month() as i32;
    if as_of.day() < first_employment_date.day() {
        months -= 1;
    }
    // first_employment_date <= as_of, so the count cannot go below zero
    let months = u32::try_from(months).unwrap_or(0);

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure_calculation".to_string(),
        rule_name: "Tenure Calculation".to_string(),
        input: serde_json::json!({
            "first_employment_date": first_employment_date.to_string(),
            "as_of": as_of.to_string()
        }),
        output: serde_json::json!({
            "tenure_months": months
        }),
        reasoning: format!(
            "{} whole months employed between {} and {}",
            months, first_employment_date, as_of
        ),
    };

    Ok(TenureResult { months, audit_step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Months};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn one_year_six_months_fifteen_days_before(as_of: NaiveDate) -> NaiveDate {
        as_of
            .checked_sub_months(Months::new(18))
            .and_then(|d| d.checked_sub_days(Days::new(15)))
            .unwrap()
    }

    /// TN-001: 1 year 6 months 15 days is 18 months
    #[test]
    fn test_one_year_six_months_fifteen_days_is_18_months() {
        let as_of = date(2026, 10, 19);
        let start = one_year_six_months_fifteen_days_before(as_of);

        let result = calculate_tenure(start, as_of, 1).unwrap();

        assert_eq!(start, date(2025, 4, 4));
        assert_eq!(result.months, 18);
    }

    /// TN-002: offset holds when the 15 days cross a month boundary
    #[test]
    fn test_offset_crossing_month_boundary_is_18_months() {
        let as_of = date(2026, 10, 10);
        let start = one_year_six_months_fifteen_days_before(as_of);

        assert_eq!(start, date(2025, 3, 26));
        assert_eq!(calculate_tenure(start, as_of, 1).unwrap().months, 18);
    }

    /// TN-003: offset holds from the last day of a month
    #[test]
    fn test_offset_from_month_end_is_18_months() {
        let as_of = date(2026, 3, 31);
        let start = one_year_six_months_fifteen_days_before(as_of);

        assert_eq!(calculate_tenure(start, as_of, 1).unwrap().months, 18);
    }

    #[test]
    fn test_offset_from_today_is_18_months() {
        let as_of = chrono::Utc::now().date_naive();
        let start = one_year_six_months_fifteen_days_before(as_of);

        assert_eq!(calculate_tenure(start, as_of, 1).unwrap().months, 18);
    }

    #[test]
    fn test_same_day_is_zero_months() {
        let today = date(2026, 10, 19);
        assert_eq!(calculate_tenure(today, today, 1).unwrap().months, 0);
    }

    #[test]
    fn test_earlier_day_in_same_month_is_zero_months() {
        let result = calculate_tenure(date(2026, 10, 1), date(2026, 10, 19), 1).unwrap();
        assert_eq!(result.months, 0);
    }

    #[test]
    fn test_incomplete_final_month_is_not_counted() {
        let result = calculate_tenure(date(2024, 1, 31), date(2024, 2, 29), 1).unwrap();
        assert_eq!(result.months, 0);
    }

    #[test]
    fn test_month_borrow_across_year_boundary() {
        // two years, less the nine months borrowed from November to February
        let result = calculate_tenure(date(2023, 11, 5), date(2025, 2, 5), 1).unwrap();
        assert_eq!(result.months, 15);
    }

    #[test]
    fn test_exactly_one_year_is_12_months() {
        let result = calculate_tenure(date(2025, 6, 1), date(2026, 6, 1), 1).unwrap();
        assert_eq!(result.months, 12);
    }

    #[test]
    fn test_future_start_date_returns_error() {
        let result = calculate_tenure(date(2026, 11, 1), date(2026, 10, 19), 1);

        match result {
            Err(EngineError::InvalidEmploymentDate { date: d, as_of }) => {
                assert_eq!(d, date(2026, 11, 1));
                assert_eq!(as_of, date(2026, 10, 19));
            }
            other => panic!("Expected InvalidEmploymentDate, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_step_records_dates_and_months() {
        let result = calculate_tenure(date(2025, 4, 4), date(2026, 10, 19), 3).unwrap();

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "tenure_calculation");
        assert_eq!(
            result.audit_step.input["first_employment_date"].as_str().unwrap(),
            "2025-04-04"
        );
        assert_eq!(result.audit_step.output["tenure_months"], 18);
        assert!(result.audit_step.reasoning.contains("18 whole months"));
    }
}
