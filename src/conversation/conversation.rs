//! Caller-owned conversation transcript
//!
//! The agent core never persists state between turns; whoever drives the
//! agent keeps a `Conversation` alive for the process lifetime and feeds its
//! messages back in on every turn.

use uuid::Uuid;

use super::message::Message;

/// An ordered, append-only message transcript with a stable id
#[derive(Debug, Clone)]
pub struct Conversation {
    id: String,
    messages: Vec<Message>,
}

impl Conversation {
    /// Create a new empty conversation with a fresh id
    pub fn new() -> Self {
        let id = Uuid::new_v4().to_string();
        tracing::debug!("Created conversation {}", id);
        Self {
            id,
            messages: Vec::new(),
        }
    }

    /// Get the conversation id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the transcript so far
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append a message to the transcript
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replace the transcript with the output of an agent run and return the
    /// slice of messages the run appended.
    ///
    /// Agent runs only ever extend the transcript they were given, so the
    /// prior messages are an unchanged prefix of `updated`.
    pub fn absorb_run(&mut self, updated: Vec<Message>) -> &[Message] {
        debug_assert!(updated.len() >= self.messages.len());
        let prior_len = self.messages.len();
        self.messages = updated;
        &self.messages[prior_len..]
    }

    /// Number of messages in the transcript
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
