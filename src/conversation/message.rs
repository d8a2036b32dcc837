//! Transcript message types
//!
//! The transcript is the full ordered message history handed to the oracle on
//! each consultation. The system prompt is deliberately not a transcript
//! variant: it lives in `AgentConfig` and is re-supplied on every oracle call,
//! so edits to the role description take effect without rewriting history.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool invocation requested by the assistant
///
/// The `id` correlates this call to the `ToolResult` message produced for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Opaque token assigned by the model
    pub id: String,
    /// Registry name of the requested tool
    pub name: String,
    /// Argument object for the tool
    pub arguments: Value,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }
}

/// One entry in a conversation transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    /// Something the user said
    User { text: String },

    /// An oracle decision: explanation text plus zero or more tool calls.
    /// An empty `tool_calls` list means this is a final answer.
    Assistant {
        text: String,
        tool_calls: Vec<ToolCall>,
    },

    /// The textual observation produced by executing one tool call
    ToolResult { tool_call_id: String, text: String },
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Message::User { text: text.into() }
    }

    /// Create an assistant message with no tool calls (a final answer)
    pub fn assistant(text: impl Into<String>) -> Self {
        Message::Assistant {
            text: text.into(),
            tool_calls: Vec::new(),
        }
    }

    /// Create an assistant message that requests tool calls
    pub fn assistant_with_tool_calls(text: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Message::Assistant {
            text: text.into(),
            tool_calls,
        }
    }

    /// Create a tool result message for the given call id
    pub fn tool_result(tool_call_id: impl Into<String>, text: impl Into<String>) -> Self {
        Message::ToolResult {
            tool_call_id: tool_call_id.into(),
            text: text.into(),
        }
    }

    /// Tool calls carried by this message (empty for non-assistant messages)
    pub fn tool_calls(&self) -> &[ToolCall] {
        match self {
            Message::Assistant { tool_calls, .. } => tool_calls,
            _ => &[],
        }
    }

    /// The text content of this message
    pub fn text(&self) -> &str {
        match self {
            Message::User { text } => text,
            Message::Assistant { text, .. } => text,
            Message::ToolResult { text, .. } => text,
        }
    }

    /// Whether this is an assistant message carrying a final answer
    pub fn is_final_answer(&self) -> bool {
        matches!(self, Message::Assistant { tool_calls, .. } if tool_calls.is_empty())
    }
}
