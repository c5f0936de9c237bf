//! Error types for CLI operations

use crate::agent::AgentError;
use crate::invoker::InvokerError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur during CLI command execution
#[derive(Error, Debug)]
pub enum CliError {
    /// Error executing a command or operation
    #[error("Execution error: {0}")]
    ExecutionError(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Tool registry or invocation error
    #[error("Tool registry error: {0}")]
    ToolError(String),

    /// A tool ran and reported an error result
    #[error("{0}")]
    ToolReported(String),

    /// Agent team validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerdeError(String),

    /// Invalid argument or input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// Conversions from common error types
impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::SerdeError(err.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ExecutionError(format!("{:#}", err))
    }
}

impl From<InvokerError> for CliError {
    fn from(err: InvokerError) -> Self {
        match err {
            InvokerError::InvalidArguments { .. } => CliError::InvalidInput(err.to_string()),
            other => CliError::ToolError(other.to_string()),
        }
    }
}

impl From<AgentError> for CliError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::UnknownVariant { .. } => CliError::ConfigError(err.to_string()),
            other => CliError::ValidationError(other.to_string()),
        }
    }
}
