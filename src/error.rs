//! Error types for the shift pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a pay calculation or a config load.

use thiserror::Error;

/// The main error type for the shift pay engine.
///
/// Calculations are pure, so none of these are transient: a failed call
/// should be surfaced to the caller as a validation failure, not retried.
///
/// # Example
///
/// ```
/// use shift_pay::error::EngineError;
///
/// let error = EngineError::MalformedDate {
///     value: "2024-02-30".to_string(),
///     message: "input is out of range".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed date '2024-02-30': input is out of range");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The shift date did not parse as a calendar date.
    #[error("Malformed date '{value}': {message}")]
    MalformedDate {
        /// The raw date value.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A time failed to parse, or the interval was empty or reversed.
    #[error("Malformed interval {start}-{end}: {message}")]
    MalformedInterval {
        /// The raw start time.
        start: String,
        /// The raw end time.
        end: String,
        /// A description of what made the interval invalid.
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

    /// Configuration parsed but holds values the engine cannot use.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the offending value.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_date_displays_value_and_message() {
        let error = EngineError::MalformedDate {
            value: "04/03/2024".to_string(),
            message: "input contains invalid characters".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed date '04/03/2024': input contains invalid characters"
        );
    }

    #[test]
    fn test_malformed_interval_displays_bounds() {
        let error = EngineError::MalformedInterval {
            start: "09:00".to_string(),
            end: "09:00".to_string(),
            message: "start must be before end".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed interval 09:00-09:00: start must be before end"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
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
    fn test_invalid_config_displays_message() {
        let error = EngineError::InvalidConfig {
            message: "slot_minutes must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: slot_minutes must be positive"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_malformed_interval() -> EngineResult<()> {
            Err(EngineError::MalformedInterval {
                start: "10:00".to_string(),
                end: "09:00".to_string(),
                message: "start must be before end".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_malformed_interval()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
