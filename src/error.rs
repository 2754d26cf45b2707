//! Error types for the Credit Line Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a credit evaluation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Credit Line Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use credit_line_engine::error::EngineError;
///
/// let error = EngineError::InvalidGender {
///     gender: "x".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid gender: x");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The gender tag was not one of the recognized values.
    #[error("Invalid gender: {gender}")]
    InvalidGender {
        /// The rejected gender tag.
        gender: String,
    },

    /// The payroll category was not one of the recognized symbols.
    #[error("Invalid payroll category: {category}")]
    InvalidCategory {
        /// The rejected category.
        category: String,
    },

    /// The first employment date lies after the evaluation date.
    #[error("Invalid first employment date {date}: after evaluation date {as_of}")]
    InvalidEmploymentDate {
        /// The first employment date supplied.
        date: NaiveDate,
        /// The date the evaluation was made against.
        as_of: NaiveDate,
    },

    /// The maximum amount was below the minimum amount.
    #[error("Invalid amount range: maximum {maximum} is below minimum {minimum}")]
    InvalidAmountRange {
        /// The minimum amount.
        minimum: u32,
        /// The maximum amount.
        maximum: u32,
    },

    /// No amount table entry exists for the given key.
    #[error("No amount table entry for category '{category}', gender '{gender}', tenure {tenure}")]
    TableEntryMissing {
        /// The category code.
        category: String,
        /// The gender tag.
        gender: String,
        /// The tenure key that was looked up.
        tenure: u32,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A loaded amount table violates a table invariant.
    #[error("Invalid amount table: {message}")]
    InvalidTable {
        /// A description of the violation.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_gender_displays_tag() {
        let error = EngineError::InvalidGender {
            gender: "x".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid gender: x");
    }

    #[test]
    fn test_invalid_category_displays_code() {
        let error = EngineError::InvalidCategory {
            category: "Z".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid payroll category: Z");
    }

    #[test]
    fn test_invalid_employment_date_displays_both_dates() {
        let error = EngineError::InvalidEmploymentDate {
            date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            as_of: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid first employment date 2027-01-01: after evaluation date 2026-10-19"
        );
    }

    #[test]
    fn test_invalid_amount_range_displays_amounts() {
        let error = EngineError::InvalidAmountRange {
            minimum: 500,
            maximum: 400,
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount range: maximum 400 is below minimum 500"
        );
    }

    #[test]
    fn test_table_entry_missing_displays_key() {
        let error = EngineError::TableEntryMissing {
            category: "A".to_string(),
            gender: "f".to_string(),
            tenure: 30,
        };
        assert_eq!(
            error.to_string(),
            "No amount table entry for category 'A', gender 'f', tenure 30"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_gender() -> EngineResult<()> {
            Err(EngineError::InvalidGender {
                gender: "x".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_gender()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
