//! Error types for the benefits cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while serving and calculating
//! benefits.

use thiserror::Error;

/// The main error type for the benefits cost engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use benefits_engine::error::EngineError;
///
/// let error = EngineError::NotFound {
///     resource: "employee".to_string(),
///     id: 42,
/// };
/// assert_eq!(error.to_string(), "employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No record exists with the requested id.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// The kind of record that was looked up ("employee" or "dependent").
        resource: String,
        /// The id that was not found.
        id: u64,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A dependent record was invalid or contained inconsistent data.
    #[error("Invalid dependent field '{field}': {message}")]
    InvalidDependent {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Rate table file was not found at the specified path.
    #[error("Rate configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rate table file could not be parsed.
    #[error("Failed to parse rate configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Creates a `NotFound` error for an employee id.
    pub fn employee_not_found(id: u64) -> Self {
        EngineError::NotFound {
            resource: "employee".to_string(),
            id,
        }
    }

    /// Creates a `NotFound` error for a dependent id.
    pub fn dependent_not_found(id: u64) -> Self {
        EngineError::NotFound {
            resource: "dependent".to_string(),
            id,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_displays_resource_and_id() {
        let error = EngineError::employee_not_found(7);
        assert_eq!(error.to_string(), "employee not found: 7");

        let error = EngineError::dependent_not_found(3);
        assert_eq!(error.to_string(), "dependent not found: 3");
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "salary".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'salary': must not be negative"
        );
    }

    #[test]
    fn test_invalid_dependent_displays_field_and_message() {
        let error = EngineError::InvalidDependent {
            field: "date_of_birth".to_string(),
            message: "cannot be in the future".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid dependent field 'date_of_birth': cannot be in the future"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Rate configuration file not found: /missing/rates.yaml"
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
            "Failed to parse rate configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::employee_not_found(99))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
