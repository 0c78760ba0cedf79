//! # Error Types
//!
//! Structured error types for shotcrete_core. The load model is the only
//! component that raises for malformed input; capacity/demand formulas
//! degrade to zero instead, so a single bad material property yields a
//! failing mode rather than an aborted evaluation.
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::errors::{DesignError, CalcResult};
//!
//! fn validate_spacing(s_m: f64) -> CalcResult<()> {
//!     if s_m <= 0.0 {
//!         return Err(DesignError::invalid_input(
//!             "s_m",
//!             s_m.to_string(),
//!             "Bolt spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for shotcrete_core operations
pub type CalcResult<T> = Result<T, DesignError>;

/// Structured error type for design-engine operations.
///
/// Each variant provides specific context about what went wrong so a
/// presentation layer can surface it as a form-validation message rather
/// than a system fault.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value violates a geometric/physical precondition
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch when loading a scenario file
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DesignError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        DesignError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INVALID_INPUT",
            DesignError::MissingField { .. } => "MISSING_FIELD",
            DesignError::FileError { .. } => "FILE_ERROR",
            DesignError::SerializationError { .. } => "SERIALIZATION_ERROR",
            DesignError::VersionMismatch { .. } => "VERSION_MISMATCH",
            DesignError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// True when this error came from a user-supplied value, i.e. the
    /// presentation layer should display it next to the offending field.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DesignError::InvalidInput { .. } | DesignError::MissingField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DesignError::invalid_input("s_m", "-1.5", "Bolt spacing must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: DesignError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DesignError::missing_field("h_block_m").error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            DesignError::invalid_input("gamma_rock", "0", "must be > 0").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(DesignError::invalid_input("t_m", "0", "must be > 0").is_input_error());
        assert!(!DesignError::Internal {
            message: "oops".to_string()
        }
        .is_input_error());
    }
}
