//! Decision oracle trait
//!
//! Abstracts the LLM behind the agent loop so different backends (the hosted
//! proxy, a scripted oracle in tests) can be used interchangeably.

use async_trait::async_trait;

use crate::conversation::{Message, ToolCall};
use crate::core::AgentResult;

use super::types::ToolDescriptor;

/// The outcome of one oracle consultation: the assistant's explanation text
/// plus any tool calls it wants executed. No tool calls means the reply is a
/// final answer.
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub text: String,
    pub tool_calls: Vec<ToolCall>,
}

impl AssistantReply {
    /// Create a final-answer reply with no tool calls
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tool_calls: Vec::new(),
        }
    }

    /// Create a reply that requests tool calls
    pub fn with_tool_calls(text: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            text: text.into(),
            tool_calls,
        }
    }

    /// Convert this reply into the assistant message appended to the transcript
    pub fn into_message(self) -> Message {
        Message::assistant_with_tool_calls(self.text, self.tool_calls)
    }
}

/// Trait for the decision step of the agent loop
///
/// Implementations must be side-effect free with respect to the transcript:
/// the caller owns message history and appends the returned reply itself.
#[async_trait]
pub trait DecisionOracle: Send + Sync {
    /// Consult the oracle for the next assistant turn.
    ///
    /// `system_prompt` is the agent's role description, re-supplied on every
    /// call rather than stored in `messages`. `tools` describes what the
    /// oracle may request; it does not change within a run.
    async fn consult(
        &self,
        system_prompt: &str,
        messages: &[Message],
        tools: &[ToolDescriptor],
    ) -> AgentResult<AssistantReply>;
}
