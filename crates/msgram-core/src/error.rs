//! Error types and exit codes for msgram
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, wrong file type)
//! - 3: Data error (missing file, malformed pre-configuration or Sonar export)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the msgram CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while reading and validating documents.
///
/// Validation is fail-fast: the first defect found aborts the traversal and
/// surfaces as one of these variants.
#[derive(Error, Debug)]
pub enum MsgramError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("only JSON files are accepted: {path:?}")]
    InvalidFileType { path: PathBuf },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("missing field: {field}")]
    MissingField { field: String },

    #[error("invalid field {field}: expected {expected}, found {found}")]
    InvalidField {
        field: String,
        expected: String,
        found: String,
    },

    #[error("invalid Sonar file attributes: {0}")]
    InvalidSonarFileAttributes(String),

    #[error("invalid baseComponent: {0}")]
    InvalidBaseComponent(String),

    #[error("invalid characteristic: {0}")]
    InvalidCharacteristic(String),

    #[error("invalid subcharacteristic: {0}")]
    InvalidSubcharacteristic(String),

    #[error("invalid measure: {0}")]
    InvalidMeasure(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl MsgramError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        MsgramError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MsgramError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a required document field that is absent
    pub fn missing_field(field: &str) -> Self {
        MsgramError::MissingField {
            field: field.to_string(),
        }
    }

    /// Create an error for a document field holding the wrong JSON type
    pub fn invalid_field(field: &str, expected: &str, found: &serde_json::Value) -> Self {
        MsgramError::InvalidField {
            field: field.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            MsgramError::UnknownFormat(_)
            | MsgramError::UsageError(_)
            | MsgramError::InvalidFileType { .. }
            | MsgramError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            MsgramError::FileNotFound { .. }
            | MsgramError::MissingField { .. }
            | MsgramError::InvalidField { .. }
            | MsgramError::InvalidSonarFileAttributes(_)
            | MsgramError::InvalidBaseComponent(_)
            | MsgramError::InvalidCharacteristic(_)
            | MsgramError::InvalidSubcharacteristic(_)
            | MsgramError::InvalidMeasure(_) => ExitCode::Data,

            // Generic failures
            MsgramError::Io(_)
            | MsgramError::Json(_)
            | MsgramError::Toml(_)
            | MsgramError::FailedOperationWithTarget { .. }
            | MsgramError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MsgramError::UnknownFormat(_) => "unknown_format",
            MsgramError::UsageError(_) => "usage_error",
            MsgramError::InvalidFileType { .. } => "invalid_file_type",
            MsgramError::InvalidValue { .. } => "invalid_value",
            MsgramError::FileNotFound { .. } => "file_not_found",
            MsgramError::MissingField { .. } => "missing_field",
            MsgramError::InvalidField { .. } => "invalid_field",
            MsgramError::InvalidSonarFileAttributes(_) => "invalid_sonar_file_attributes",
            MsgramError::InvalidBaseComponent(_) => "invalid_base_component",
            MsgramError::InvalidCharacteristic(_) => "invalid_characteristic",
            MsgramError::InvalidSubcharacteristic(_) => "invalid_subcharacteristic",
            MsgramError::InvalidMeasure(_) => "invalid_measure",
            MsgramError::Io(_) => "io_error",
            MsgramError::Json(_) => "json_error",
            MsgramError::Toml(_) => "toml_error",
            MsgramError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            MsgramError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for msgram operations
pub type Result<T> = std::result::Result<T, MsgramError>;
