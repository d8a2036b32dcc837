//! Wire types for the OpenAI-compatible chat-completions proxy
//!
//! These types serialize/deserialize against the proxy's REST surface. Tool
//! arguments travel as a JSON-encoded string inside `function.arguments`; an
//! argument string that does not parse back into JSON is treated as a
//! malformed oracle response rather than silently dropped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::conversation::{Message, ToolCall};
use crate::core::{AgentError, AgentResult};

use super::oracle::AssistantReply;

// ============================================================================
// Tool descriptors
// ============================================================================

/// Description of a tool as advertised to the oracle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Registry name of the tool
    pub name: String,
    /// What the tool does, for the model's benefit
    pub description: String,
    /// JSON schema of the argument object
    pub parameters: Value,
}

impl ToolDescriptor {
    /// Create a new tool descriptor
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// A tool entry in a chat request (always a function declaration)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDeclaration,
}

/// Function declaration carried inside a `ChatTool`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl From<&ToolDescriptor> for ChatTool {
    fn from(descriptor: &ToolDescriptor) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDeclaration {
                name: descriptor.name.clone(),
                description: descriptor.description.clone(),
                parameters: descriptor.parameters.clone(),
            },
        }
    }
}

// ============================================================================
// Request types
// ============================================================================

/// Request body for the chat completions endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The model to use
    pub model: String,

    /// Conversation so far, system message first
    pub messages: Vec<ChatMessage>,

    /// Tools available to the model (omitted when empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ChatTool>>,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

/// A message on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user", "assistant" or "tool"
    pub role: String,

    /// Text content; assistant messages that only request tools may omit it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Tool calls requested by an assistant message
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<WireToolCall>,

    /// For role "tool": the call this result answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: Some(text.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        match message {
            Message::User { text } => Self {
                role: "user".to_string(),
                content: Some(text.clone()),
                tool_calls: Vec::new(),
                tool_call_id: None,
            },
            Message::Assistant { text, tool_calls } => Self {
                role: "assistant".to_string(),
                content: Some(text.clone()),
                tool_calls: tool_calls.iter().map(WireToolCall::from).collect(),
                tool_call_id: None,
            },
            Message::ToolResult { tool_call_id, text } => Self {
                role: "tool".to_string(),
                content: Some(text.clone()),
                tool_calls: Vec::new(),
                tool_call_id: Some(tool_call_id.clone()),
            },
        }
    }
}

/// A tool call on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: WireFunctionCall,
}

/// Function name + JSON-encoded arguments inside a wire tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    /// JSON-encoded argument object
    pub arguments: String,
}

impl From<&ToolCall> for WireToolCall {
    fn from(call: &ToolCall) -> Self {
        Self {
            id: call.id.clone(),
            call_type: "function".to_string(),
            function: WireFunctionCall {
                name: call.name.clone(),
                arguments: call.arguments.to_string(),
            },
        }
    }
}

// ============================================================================
// Response types
// ============================================================================

/// Response body from the chat completions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Build the wire message list for one consultation: the system message
/// followed by the transcript.
pub fn to_wire_messages(system_prompt: &str, messages: &[Message]) -> Vec<ChatMessage> {
    let mut wire = Vec::with_capacity(messages.len() + 1);
    wire.push(ChatMessage::system(system_prompt));
    wire.extend(messages.iter().map(ChatMessage::from));
    wire
}

/// Parse a wire assistant message into an `AssistantReply`
///
/// An empty `arguments` string is read as an empty argument object; anything
/// else that is not valid JSON makes the whole reply malformed.
pub fn parse_assistant_reply(message: ChatMessage) -> AgentResult<AssistantReply> {
    if message.role != "assistant" {
        return Err(AgentError::malformed(format!(
            "expected assistant message, got role '{}'",
            message.role
        )));
    }

    let mut tool_calls = Vec::with_capacity(message.tool_calls.len());
    for call in message.tool_calls {
        let arguments: Value = if call.function.arguments.trim().is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str(&call.function.arguments).map_err(|e| {
                AgentError::malformed(format!(
                    "tool call '{}' carries unparseable arguments: {}",
                    call.function.name, e
                ))
            })?
        };
        tool_calls.push(ToolCall::new(call.id, call.function.name, arguments));
    }

    Ok(AssistantReply {
        text: message.content.unwrap_or_default(),
        tool_calls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_messages_prepend_system() {
        let messages = vec![Message::user("Can IT get an SAP license?")];
        let wire = to_wire_messages("You are a procurement assistant.", &messages);

        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0].role, "system");
        assert_eq!(wire[1].role, "user");
    }

    #[test]
    fn test_tool_result_on_wire() {
        let msg = Message::tool_result("call_1", "Budget: 10000 USD remaining.");
        let wire = ChatMessage::from(&msg);

        assert_eq!(wire.role, "tool");
        assert_eq!(wire.tool_call_id.as_deref(), Some("call_1"));
    }

    #[test]
    fn test_parse_reply_with_tool_calls() {
        let body = json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "Checking availability first.",
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {
                            "name": "check_software_license",
                            "arguments": "{\"software_name\": \"SAP\"}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        });

        let response: ChatResponse = serde_json::from_value(body).unwrap();
        let choice = response.choices.into_iter().next().unwrap();
        let reply = parse_assistant_reply(choice.message).unwrap();

        assert_eq!(reply.tool_calls.len(), 1);
        assert_eq!(reply.tool_calls[0].name, "check_software_license");
        assert_eq!(reply.tool_calls[0].arguments["software_name"], "SAP");
    }

    #[test]
    fn test_parse_reply_rejects_bad_arguments() {
        let message = ChatMessage {
            role: "assistant".to_string(),
            content: None,
            tool_calls: vec![WireToolCall {
                id: "call_1".to_string(),
                call_type: "function".to_string(),
                function: WireFunctionCall {
                    name: "check_team_budget".to_string(),
                    arguments: "{not json".to_string(),
                },
            }],
            tool_call_id: None,
        };

        let err = parse_assistant_reply(message).unwrap_err();
        assert!(matches!(
            err,
            crate::core::AgentError::OracleMalformedResponse(_)
        ));
    }

    #[test]
    fn test_parse_reply_empty_arguments_as_empty_object() {
        let message = ChatMessage {
            role: "assistant".to_string(),
            content: Some("".to_string()),
            tool_calls: vec![WireToolCall {
                id: "call_1".to_string(),
                call_type: "function".to_string(),
                function: WireFunctionCall {
                    name: "check_team_budget".to_string(),
                    arguments: "".to_string(),
                },
            }],
            tool_call_id: None,
        };

        let reply = parse_assistant_reply(message).unwrap();
        assert!(reply.tool_calls[0].arguments.as_object().unwrap().is_empty());
    }
}
