//! Conversation transcript types

mod conversation;
mod message;

pub use conversation::Conversation;
pub use message::{Message, ToolCall};
