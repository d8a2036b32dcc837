//! Agent loop controller
//!
//! Drives a bounded sequence of (decide, possibly act) steps over a growing
//! transcript. Each step consults the oracle with the role prompt plus the
//! transcript; if the reply requests tools they are executed sequentially, in
//! the order listed, and the loop goes around again. The run ends when the
//! oracle gives a final answer or the decision cap is reached.

use std::sync::Arc;

use crate::conversation::Message;
use crate::core::{AgentError, AgentResult};
use crate::llm::DecisionOracle;
use crate::tools::ToolRegistry;

use super::config::AgentConfig;
use super::executor::ToolExecutor;

/// Agent that orchestrates the decide/act loop
pub struct Agent {
    config: AgentConfig,
    oracle: Arc<dyn DecisionOracle>,
    tools: Arc<ToolRegistry>,
}

impl Agent {
    /// Create a new agent from a config, oracle and tool registry
    pub fn new(config: AgentConfig, oracle: Arc<dyn DecisionOracle>, tools: Arc<ToolRegistry>) -> Self {
        Self {
            config,
            oracle,
            tools,
        }
    }

    /// Caller-facing entry point: append a new user message to the prior
    /// transcript and run the loop.
    pub async fn run_turn(
        &self,
        prior: &[Message],
        user_text: impl Into<String>,
    ) -> AgentResult<Vec<Message>> {
        let mut transcript = prior.to_vec();
        transcript.push(Message::user(user_text));
        self.run(transcript).await
    }

    /// Run the loop over `messages` until the oracle produces a final answer
    /// or the decision cap is reached.
    ///
    /// The returned transcript is the input plus every assistant and tool
    /// result message produced, in production order. A cap-hit is a normal
    /// outcome: the last assistant message may then still carry tool calls
    /// with no matching results.
    pub async fn run(&self, mut messages: Vec<Message>) -> AgentResult<Vec<Message>> {
        if self.config.max_decisions == 0 {
            return Err(AgentError::InvalidConfig(
                "max_decisions must be at least 1".to_string(),
            ));
        }

        let descriptors = self.tools.descriptors();
        let mut decision_count = 0usize;

        loop {
            tracing::info!(
                "[Agent] Consulting oracle with {} messages (decision {}/{})",
                messages.len(),
                decision_count + 1,
                self.config.max_decisions
            );

            let reply = self
                .oracle
                .consult(&self.config.system_prompt, &messages, &descriptors)
                .await?;
            decision_count += 1;

            let tool_calls = reply.tool_calls.clone();
            messages.push(reply.into_message());

            if tool_calls.is_empty() {
                tracing::info!("[Agent] Final answer after {} decision(s)", decision_count);
                break;
            }

            // The cap is enforced before executing a just-issued batch and
            // before any further consultation: hitting it here leaves these
            // tool calls pending in the transcript, which callers can observe.
            if decision_count >= self.config.max_decisions {
                tracing::warn!(
                    "[Agent] Decision cap ({}) reached with {} pending tool call(s)",
                    self.config.max_decisions,
                    tool_calls.len()
                );
                break;
            }

            for call in &tool_calls {
                let output = ToolExecutor::execute(&self.tools, call).await;
                messages.push(Message::tool_result(&call.id, output.text));
            }
        }

        Ok(messages)
    }
}
