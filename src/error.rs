//! Error types for the Pay Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Business anomalies (audit findings, missing reference rates, unresolved
//! schedule gaps) are returned as data, not as errors; only structural
//! problems such as an unreadable rules file or a failing data source
//! surface through [`EngineError`].

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Pay Reconciliation Engine.
///
/// # Example
///
/// ```
/// use paytrack_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
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

    /// A period data source could not supply data for a pay period.
    #[error("Data source failure for period ending {period_ending}: {message}")]
    DataSourceError {
        /// The period-ending date being processed.
        period_ending: NaiveDate,
        /// A description of the failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
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
    fn test_data_source_error_displays_period() {
        let error = EngineError::DataSourceError {
            period_ending: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
            message: "store unavailable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Data source failure for period ending 2025-03-08: store unavailable"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "negative hours".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: negative hours");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
