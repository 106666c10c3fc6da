//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every validation and configuration failure the engine can report.
//! Malformed attendance data is not an error: it is tolerated and logged.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, so callers
/// can render a message to the end user without any other error handling.
///
/// # Example
///
/// ```
/// use bordro_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidDateRange {
///     start: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: start 2025-02-01 is after end 2025-01-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// No statutory rate file is effective on the given date.
    #[error("No statutory rates effective on {date}")]
    RateNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// The report start date is after the end date.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The report selection contained no employees.
    #[error("No employees selected for the report")]
    EmptySelection,

    /// A termination calculation was requested for an employee without a hire date.
    #[error("Employee '{employee_id}' has no hire date")]
    MissingHireDate {
        /// The employee ID.
        employee_id: String,
    },

    /// The termination date precedes the hire date.
    #[error("Termination date {termination_date} is before hire date {hire_date}")]
    TerminationBeforeHire {
        /// The employee's hire date.
        hire_date: NaiveDate,
        /// The requested termination date.
        termination_date: NaiveDate,
    },

    /// A report could not be written out.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by caller input rather than configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidDateRange { .. }
                | EngineError::EmptySelection
                | EngineError::MissingHireDate { .. }
                | EngineError::TerminationBeforeHire { .. }
        )
    }
}

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        EngineError::ExportError {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
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
    fn test_rate_not_found_displays_date() {
        let error = EngineError::RateNotFound {
            date: date(2020, 1, 1),
        };
        assert_eq!(error.to_string(), "No statutory rates effective on 2020-01-01");
    }

    #[test]
    fn test_termination_before_hire_displays_both_dates() {
        let error = EngineError::TerminationBeforeHire {
            hire_date: date(2024, 5, 1),
            termination_date: date(2024, 4, 30),
        };
        assert_eq!(
            error.to_string(),
            "Termination date 2024-04-30 is before hire date 2024-05-01"
        );
    }

    #[test]
    fn test_missing_hire_date_displays_employee() {
        let error = EngineError::MissingHireDate {
            employee_id: "12345678901".to_string(),
        };
        assert_eq!(error.to_string(), "Employee '12345678901' has no hire date");
    }

    #[test]
    fn test_validation_classification() {
        assert!(EngineError::EmptySelection.is_validation());
        assert!(
            EngineError::MissingHireDate {
                employee_id: "x".to_string()
            }
            .is_validation()
        );
        assert!(
            !EngineError::RateNotFound {
                date: date(2020, 1, 1)
            }
            .is_validation()
        );
        assert!(
            !EngineError::ExportError {
                message: "disk full".to_string()
            }
            .is_validation()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty_selection() -> EngineResult<()> {
            Err(EngineError::EmptySelection)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_empty_selection()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
