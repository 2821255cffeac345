//! Error types and exit codes for keygraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO)
//! - 2: Usage error (bad arguments, bad configuration values, mismatched link arity)
//! - 3: Data error (missing vertex, invalid weight, negative cycle, unusable key)

use thiserror::Error;

/// Exit codes used by the keygraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - the graph cannot answer the question asked (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building a graph or running an algorithm on it
#[derive(Error, Debug)]
pub enum GraphError {
    // Data errors (exit code 3)
    #[error("vertex not found: {key}")]
    VertexNotFound { key: String },

    #[error("invalid weight {weight} on edge {from}|{to}: weights must be non-negative numbers")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("negative-weight cycle reachable from source (edge {from}|{to} still relaxes)")]
    NegativeCycle { from: String, to: String },

    #[error("payload has no usable key field '{field}'")]
    MissingKey { field: String },

    #[error("key field '{field}' holds a value that cannot be used as a key: {value}")]
    InvalidKey { field: String, value: String },

    // Usage errors (exit code 2)
    #[error("link arity mismatch: {targets} target(s) but {weights} weight(s)")]
    MismatchedArity { targets: usize, weights: usize },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GraphError {
    /// Create an error for a key that is absent from the graph
    pub fn vertex_not_found(key: impl std::fmt::Display) -> Self {
        GraphError::VertexNotFound {
            key: key.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::MismatchedArity { .. }
            | GraphError::InvalidValue { .. }
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::VertexNotFound { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::NegativeCycle { .. }
            | GraphError::MissingKey { .. }
            | GraphError::InvalidKey { .. }
            | GraphError::Toml(_) => ExitCode::Data,

            GraphError::Io(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::NegativeCycle { .. } => "negative_cycle",
            GraphError::MissingKey { .. } => "missing_key",
            GraphError::InvalidKey { .. } => "invalid_key",
            GraphError::MismatchedArity { .. } => "mismatched_arity",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
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

/// Result type alias for keygraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
