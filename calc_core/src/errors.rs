//! # Error Types
//!
//! Structured error types for calc_core. Input validation has its own
//! enum because the calculator contract surfaces validation failures as
//! plain messages on the result object rather than as `Err` values; the
//! message strings below are that contract.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::ValidationError;
//!
//! let err = ValidationError::SectionNotFound;
//! assert_eq!(err.to_string(), "Standard section not found");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// A beam input failed validation.
///
/// `calculate` never returns these as `Err`; it stores the `Display`
/// string on an invalid [`CalculationResult`](crate::calculations::CalculationResult).
/// Every failure is a normal, expected outcome of incomplete user input,
/// and the next call with corrected input recomputes from scratch.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Load or span is missing or non-positive
    #[error("Load and span length must be greater than zero")]
    NonPositiveLoadOrSpan,

    /// Modulus of elasticity is missing or non-positive
    #[error("Modulus of elasticity must be greater than zero")]
    NonPositiveModulus,

    /// Standard beam type chosen but no section name given
    #[error("Standard section must be selected")]
    SectionNotSelected,

    /// Section name does not resolve in the table for the input's units
    #[error("Standard section not found")]
    SectionNotFound,

    /// Custom beam type chosen but width or height is absent
    #[error("Width and height are required for custom beams")]
    MissingCustomDimensions,

    /// Custom width or height is non-positive
    #[error("Width and height must be greater than zero")]
    NonPositiveCustomDimensions,
}

/// Structured error type for fallible operations outside the pure
/// calculation path (file output, JSON interchange).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A beam input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

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
}

impl CalcError {
    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization_error(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Validation(_) => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
