//! Agent error types

use thiserror::Error;

/// Errors that can abort an agent run
///
/// Tool-level problems (unknown tool name, tool fault) are deliberately not
/// here: they are reported back to the model as error-text tool results and
/// the run continues.
#[derive(Error, Debug)]
pub enum AgentError {
    /// The LLM proxy could not be reached, or refused the request
    #[error("Oracle unavailable: {0}")]
    OracleUnavailable(String),

    /// The LLM proxy answered, but the response does not parse into an
    /// assistant turn (missing choices, unparseable tool arguments, ...)
    #[error("Oracle returned a malformed response: {0}")]
    OracleMalformedResponse(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AgentError {
    /// Create an `OracleUnavailable` error from a message
    pub fn unavailable(msg: impl Into<String>) -> Self {
        AgentError::OracleUnavailable(msg.into())
    }

    /// Create an `OracleMalformedResponse` error from a message
    pub fn malformed(msg: impl Into<String>) -> Self {
        AgentError::OracleMalformedResponse(msg.into())
    }
}

/// Result type alias for agent operations
pub type AgentResult<T> = Result<T, AgentError>;
