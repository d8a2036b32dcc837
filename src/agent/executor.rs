//! Tool executor
//!
//! Turns one requested tool call into exactly one textual observation. A
//! registry miss or a tool fault never fails the run; both become error-text
//! results the model can react to, matching the demo tools' habit of
//! reporting missing information as text.

use crate::conversation::ToolCall;
use crate::tools::{ToolOutput, ToolRegistry};

/// Handles dispatch of a single tool call against the registry
pub struct ToolExecutor;

impl ToolExecutor {
    /// Execute one tool call, always producing an output
    pub async fn execute(tools: &ToolRegistry, call: &ToolCall) -> ToolOutput {
        let Some(tool) = tools.get(&call.name) else {
            tracing::warn!("[Executor] Unknown tool requested: {}", call.name);
            return ToolOutput::error(format!(
                "Tool '{}' is not available. Treat this as no information.",
                call.name
            ));
        };

        tracing::info!("[Executor] Executing tool: {} ({})", call.name, call.id);
        tracing::debug!("[Executor] Arguments: {}", call.arguments);

        match tool.execute(&call.arguments).await {
            Ok(output) => {
                tracing::debug!(
                    "[Executor] Tool {} completed. Is error: {}",
                    call.name,
                    output.is_error
                );
                output
            }
            Err(e) => {
                tracing::warn!("[Executor] Tool {} failed: {}", call.name, e);
                ToolOutput::error(format!("Tool '{}' failed: {}", call.name, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ToolCall;
    use crate::tools::CheckSoftwareLicenseTool;
    use serde_json::json;
    use tokio_test::block_on;

    #[test]
    fn test_unknown_tool_is_error_text() {
        let registry = ToolRegistry::new();
        let call = ToolCall::new("c1", "check_foo", json!({}));

        let output = block_on(ToolExecutor::execute(&registry, &call));
        assert!(output.is_error);
        assert!(output.text.contains("check_foo"));
        assert!(output.text.contains("not available"));
    }

    #[test]
    fn test_tool_fault_is_error_text() {
        let mut registry = ToolRegistry::new();
        registry.register(CheckSoftwareLicenseTool::new());
        // Missing required argument makes the tool itself fail
        let call = ToolCall::new("c1", "check_software_license", json!({}));

        let output = block_on(ToolExecutor::execute(&registry, &call));
        assert!(output.is_error);
        assert!(output.text.contains("check_software_license"));
    }

    #[test]
    fn test_successful_dispatch() {
        let mut registry = ToolRegistry::new();
        registry.register(CheckSoftwareLicenseTool::new());
        let call = ToolCall::new("c1", "check_software_license", json!({"software_name": "SAP"}));

        let output = block_on(ToolExecutor::execute(&registry, &call));
        assert!(!output.is_error);
        assert_eq!(output.text, "Available: we have spare SAP licenses.");
    }
}
