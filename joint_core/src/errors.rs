//! # Error Types
//!
//! Structured error types for joint_core. Each variant carries enough
//! context to tell a caller which table, band, or field was at fault.
//!
//! Only conditions that abort an operation live here. Usability reports
//! (unresolved fields, unknown keys, symmetric moment sums) are returned as
//! [`Diagnostics`](crate::diagnostics::Diagnostics) instead.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::errors::{CalcError, CalcResult};
//!
//! fn validate_diameter(diameter_in: f64) -> CalcResult<()> {
//!     if diameter_in <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "diameter_in".to_string(),
//!             value: diameter_in.to_string(),
//!             reason: "Diameter must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for joint_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A reference table has no entry for the requested key
    #[error("No entry in {table} for {key}")]
    LookupMiss { table: String, key: String },

    /// A value falls outside every band a banded table defines
    #[error("{field} = {value} is outside every band of {table}")]
    UndefinedBand {
        table: String,
        field: String,
        value: String,
    },

    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A value needed by the operation has not been supplied or computed
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

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create a LookupMiss error
    pub fn lookup_miss(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::LookupMiss {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create an UndefinedBand error
    pub fn undefined_band(table: impl Into<String>, field: impl Into<String>, value: f64) -> Self {
        CalcError::UndefinedBand {
            table: table.into(),
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Domain-data errors: the reference data cannot answer the question.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, CalcError::LookupMiss { .. } | CalcError::UndefinedBand { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::LookupMiss { .. } => "LOOKUP_MISS",
            CalcError::UndefinedBand { .. } => "UNDEFINED_BAND",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

/// Reject non-finite and non-positive values for a named field.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a positive, finite number",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::lookup_miss("Table 8-2", "d=0.3, tpi=13");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"LookupMiss\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::undefined_band("Table 8-12", "grip_length_in", 1.5).error_code(),
            "UNDEFINED_BAND"
        );
    }

    #[test]
    fn test_domain_error_classification() {
        assert!(CalcError::lookup_miss("Table 8-2", "x").is_domain_error());
        assert!(CalcError::undefined_band("Table 8-12", "grip_length_in", 0.5).is_domain_error());
        assert!(!CalcError::missing_field("preload_lb").is_domain_error());
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("h", 0.25).is_ok());
        assert!(require_positive("h", 0.0).is_err());
        assert!(require_positive("h", -1.0).is_err());
        assert!(require_positive("h", f64::NAN).is_err());
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::undefined_band("Table 8-12", "grip_length_in", 1.5);
        assert_eq!(error.to_string(), "grip_length_in = 1.5 is outside every band of Table 8-12");
    }
}
