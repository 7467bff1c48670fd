//! Error types for the Leave Accrual & Ledger Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The core calculations are total functions and never fail; errors only
//! arise at the edges, such as loading configuration or planning ledger
//! entries from records that violate their preconditions.

use thiserror::Error;

/// The main error type for the Leave Accrual & Ledger Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A week-key string did not match the `YYYY-Www` form.
    #[error("Invalid week key '{value}': expected the form YYYY-Www, e.g. 2026-W08")]
    InvalidWeekKey {
        /// The string that failed to parse.
        value: String,
    },

    /// A leave request did not satisfy a planner precondition.
    #[error("Invalid leave request '{request_id}': {reason}")]
    InvalidRequest {
        /// The ID of the offending request.
        request_id: String,
        /// A description of the violated precondition.
        reason: String,
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
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
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
    fn test_invalid_week_key_displays_value() {
        let error = EngineError::InvalidWeekKey {
            value: "2026-08".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid week key '2026-08': expected the form YYYY-Www, e.g. 2026-W08"
        );
    }

    #[test]
    fn test_invalid_request_displays_id_and_reason() {
        let error = EngineError::InvalidRequest {
            request_id: "req_001".to_string(),
            reason: "request is not approved (status: pending)".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid leave request 'req_001': request is not approved (status: pending)"
        );
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
