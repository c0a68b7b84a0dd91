//! # Error Types
//!
//! Structured error types for beam_core. A failed analysis always returns one
//! of these — the engine never hands back a partial result. Numerical checks
//! that merely look suspicious are *not* errors; they live as data inside
//! [`crate::analysis::ValidationReport`].
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{EngineError, EngineResult};
//!
//! fn validate_length(length: f64) -> EngineResult<()> {
//!     if length <= 0.0 {
//!         return Err(EngineError::InvalidInput {
//!             field: "length".to_string(),
//!             value: length.to_string(),
//!             reason: "Beam length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Structured error type for the statics engine.
///
/// Each variant provides specific context about what went wrong, so callers
/// (GUIs, CLIs, LLM integrations) can handle failures programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EngineError {
    /// An input value is invalid (out of range, degenerate, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The support arrangement is not one of the two statically
    /// determinate configurations this engine solves
    #[error("Unsupported configuration: {reason}")]
    UnsupportedConfiguration { reason: String },

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

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl EngineError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedConfiguration error
    pub fn unsupported_configuration(reason: impl Into<String>) -> Self {
        EngineError::UnsupportedConfiguration {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EngineError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error stems from the beam definition itself
    /// (as opposed to I/O or serialization trouble)
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput { .. } | EngineError::UnsupportedConfiguration { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::InvalidInput { .. } => "INVALID_INPUT",
            EngineError::UnsupportedConfiguration { .. } => "UNSUPPORTED_CONFIGURATION",
            EngineError::FileError { .. } => "FILE_ERROR",
            EngineError::SerializationError { .. } => "SERIALIZATION_ERROR",
            EngineError::VersionMismatch { .. } => "VERSION_MISMATCH",
            EngineError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EngineError::invalid_input("length", "-5.0", "Beam length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EngineError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EngineError::unsupported_configuration("three supports").error_code(),
            "UNSUPPORTED_CONFIGURATION"
        );
        assert_eq!(
            EngineError::file_error("open", "beam.spn", "not found").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_configuration_error_class() {
        assert!(EngineError::unsupported_configuration("x").is_configuration_error());
        assert!(EngineError::invalid_input("a", "b", "c").is_configuration_error());
        assert!(!EngineError::file_error("open", "p", "r").is_configuration_error());
    }
}
