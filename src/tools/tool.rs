//! Tool trait definition
//!
//! All tools implement this trait to provide a consistent interface.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm::ToolDescriptor;

/// Result of executing a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The textual observation fed back into the conversation
    pub text: String,
    /// Whether the execution resulted in an error
    pub is_error: bool,
}

impl ToolOutput {
    /// Create a successful tool output
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Create an error tool output
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            is_error: true,
        }
    }
}

/// Trait for tools that the agent can use
///
/// Tools report missing information as a negative/low-confidence result
/// string rather than failing: an `Err` is reserved for genuine faults, and
/// the executor converts those to error-text results instead of aborting the
/// run.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the name of this tool
    fn name(&self) -> &str;

    /// Get a description of this tool
    fn description(&self) -> &str;

    /// Get the descriptor advertised to the oracle
    fn descriptor(&self) -> ToolDescriptor;

    /// Execute the tool with the given arguments
    ///
    /// The arguments are a JSON value matching the descriptor's schema.
    async fn execute(&self, arguments: &Value) -> Result<ToolOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_output_success() {
        let output = ToolOutput::success("Available: we have spare SAP licenses.");
        assert_eq!(output.text, "Available: we have spare SAP licenses.");
        assert!(!output.is_error);
    }

    #[test]
    fn test_tool_output_error() {
        let output = ToolOutput::error("bad input");
        assert_eq!(output.text, "bad input");
        assert!(output.is_error);
    }
}
