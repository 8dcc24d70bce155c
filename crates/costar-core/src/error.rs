//! Error types and exit codes for costar
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including broken graph invariants)
//! - 2: Usage error (bad flags/args/values)
//! - 3: Data error (missing actor, malformed data file, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the costar binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown actor, malformed record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during costar operations
#[derive(Error, Debug)]
pub enum CostarError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid record in {path:?} line {line}: {reason}")]
    InvalidRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    // Graph contract violations (exit code 1)
    #[error("no edge from {from} to {to}")]
    NoSuchEdge { from: String, to: String },

    #[error("malformed spanning tree at {vertex}: {reason}")]
    MalformedTree { vertex: String, reason: String },

    // Generic failures (exit code 1)
    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl CostarError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        CostarError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CostarError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        CostarError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    pub fn no_such_edge(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        CostarError::NoSuchEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub fn malformed_tree(vertex: impl std::fmt::Debug, reason: &str) -> Self {
        CostarError::MalformedTree {
            vertex: format!("{:?}", vertex),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CostarError::UsageError(_) | CostarError::InvalidValue { .. } => ExitCode::Usage,

            CostarError::NotFound { .. } | CostarError::InvalidRecord { .. } => ExitCode::Data,

            CostarError::NoSuchEdge { .. }
            | CostarError::MalformedTree { .. }
            | CostarError::FailedOperationWithTarget { .. }
            | CostarError::Io(_)
            | CostarError::Toml(_)
            | CostarError::Json(_)
            | CostarError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            CostarError::UsageError(_) => "usage_error",
            CostarError::InvalidValue { .. } => "invalid_value",
            CostarError::NotFound { .. } => "not_found",
            CostarError::InvalidRecord { .. } => "invalid_record",
            CostarError::NoSuchEdge { .. } => "no_such_edge",
            CostarError::MalformedTree { .. } => "malformed_tree",
            CostarError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            CostarError::Io(_) => "io_error",
            CostarError::Toml(_) => "toml_error",
            CostarError::Json(_) => "json_error",
            CostarError::Other(_) => "other",
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

/// Result type alias for costar operations
pub type Result<T> = std::result::Result<T, CostarError>;
