//! Error types and exit codes for negcycle
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown strategy or scenario)
//! - 3: Data error (malformed graph, node index out of range, bad rate)

mod macros;

use thiserror::Error;

/// Exit codes for the negcycle CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph or out-of-range node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running strategies
#[derive(Error, Debug)]
pub enum NegCycleError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("unknown strategy: {0} (expected: early-exit, exact-passes, cycle-membership, or fifo)")]
    UnknownStrategy(String),

    #[error("unknown scenario: {0} (run `negcycle scenarios` to list them)")]
    UnknownScenario(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node {index} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { index: usize, node_count: usize },

    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("malformed graph: {reason}")]
    MalformedGraph { reason: String },

    #[error("invalid exchange rate {rate} for {from} -> {to}")]
    InvalidRate { from: String, to: String, rate: f64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl NegCycleError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NegCycleError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node index outside `[0, node_count)`
    pub fn node_out_of_range(index: usize, node_count: usize) -> Self {
        NegCycleError::NodeOutOfRange { index, node_count }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NegCycleError::UnknownFormat(_)
            | NegCycleError::DuplicateFormat
            | NegCycleError::UsageError(_)
            | NegCycleError::UnknownStrategy(_)
            | NegCycleError::UnknownScenario(_)
            | NegCycleError::InvalidValue { .. } => ExitCode::Usage,

            NegCycleError::NodeOutOfRange { .. }
            | NegCycleError::EmptyGraph
            | NegCycleError::MalformedGraph { .. }
            | NegCycleError::InvalidRate { .. } => ExitCode::Data,

            NegCycleError::Io(_)
            | NegCycleError::Json(_)
            | NegCycleError::Toml(_)
            | NegCycleError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NegCycleError::UnknownFormat(_) => "unknown_format",
            NegCycleError::DuplicateFormat => "duplicate_format",
            NegCycleError::UsageError(_) => "usage_error",
            NegCycleError::UnknownStrategy(_) => "unknown_strategy",
            NegCycleError::UnknownScenario(_) => "unknown_scenario",
            NegCycleError::InvalidValue { .. } => "invalid_value",
            NegCycleError::NodeOutOfRange { .. } => "node_out_of_range",
            NegCycleError::EmptyGraph => "empty_graph",
            NegCycleError::MalformedGraph { .. } => "malformed_graph",
            NegCycleError::InvalidRate { .. } => "invalid_rate",
            NegCycleError::Io(_) => "io_error",
            NegCycleError::Json(_) => "json_error",
            NegCycleError::Toml(_) => "toml_error",
            NegCycleError::Other(_) => "other",
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

/// Result type alias for negcycle operations
pub type Result<T> = std::result::Result<T, NegCycleError>;
