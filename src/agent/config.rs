//! Agent configuration

/// Default cap on oracle consultations per run
pub const DEFAULT_MAX_DECISIONS: usize = 5;

/// Configuration for an `Agent`
///
/// Use the builder pattern to configure the agent:
///
/// ```ignore
/// let config = AgentConfig::new("You are a procurement assistant.")
///     .with_max_decisions(5);
/// ```
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// System prompt describing the agent's role and required procedure.
    /// Supplied to the oracle on every consultation, never stored in the
    /// transcript.
    pub system_prompt: String,

    /// Maximum number of oracle consultations per run. Must be at least 1;
    /// `Agent::run` rejects a zero cap.
    pub max_decisions: usize,
}

impl AgentConfig {
    /// Create a new agent configuration with a system prompt
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            max_decisions: DEFAULT_MAX_DECISIONS,
        }
    }

    /// Set the decision cap
    pub fn with_max_decisions(mut self, max: usize) -> Self {
        self.max_decisions = max;
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new("You are a helpful assistant.")
    }
}
