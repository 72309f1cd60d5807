//! Error types and exit codes for forgetit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range values)
//! - 3: Data/store error (unknown resource, unreadable store file)
//!
//! The scoring and condensation engine itself is infallible; these errors
//! belong to the store, configuration, and CLI layers around it.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the forgetit CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing resource, corrupt store (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during forgetit operations
#[derive(Error, Debug)]
pub enum ForgetItError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data/store errors (exit code 3)
    #[error("resource not found: {id}")]
    ResourceNotFound { id: String },

    #[error("invalid store file {path:?}: {reason}")]
    InvalidStore { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl ForgetItError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ForgetItError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        ForgetItError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a resource id missing from the store
    pub fn resource_not_found(id: impl std::fmt::Display) -> Self {
        ForgetItError::ResourceNotFound { id: id.to_string() }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        ForgetItError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ForgetItError::UnknownFormat(_)
            | ForgetItError::UsageError(_)
            | ForgetItError::InvalidValue { .. }
            | ForgetItError::Unsupported { .. } => ExitCode::Usage,

            ForgetItError::ResourceNotFound { .. } | ForgetItError::InvalidStore { .. } => {
                ExitCode::Data
            }

            ForgetItError::Io(_)
            | ForgetItError::Json(_)
            | ForgetItError::Toml(_)
            | ForgetItError::TomlSer(_)
            | ForgetItError::FailedOperation { .. }
            | ForgetItError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ForgetItError::UnknownFormat(_) => "unknown_format",
            ForgetItError::UsageError(_) => "usage_error",
            ForgetItError::InvalidValue { .. } => "invalid_value",
            ForgetItError::Unsupported { .. } => "unsupported",
            ForgetItError::ResourceNotFound { .. } => "resource_not_found",
            ForgetItError::InvalidStore { .. } => "invalid_store",
            ForgetItError::Io(_) => "io_error",
            ForgetItError::Json(_) => "json_error",
            ForgetItError::Toml(_) | ForgetItError::TomlSer(_) => "toml_error",
            ForgetItError::FailedOperation { .. } => "failed_operation",
            ForgetItError::Other(_) => "other",
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

/// Result type alias for forgetit operations
pub type Result<T> = std::result::Result<T, ForgetItError>;
