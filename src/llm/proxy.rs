//! Hosted LLM proxy client
//!
//! Direct HTTP client for an OpenAI-compatible chat-completions proxy.
//! Configuration comes from the `LLM_*` environment variables shared by the
//! workshop demos.

use async_trait::async_trait;
use reqwest::Client;
use std::env;

use crate::conversation::Message;
use crate::core::{AgentError, AgentResult};

use super::oracle::{AssistantReply, DecisionOracle};
use super::types::{self, ChatRequest, ChatResponse, ChatTool, ToolDescriptor};

const DEFAULT_MODEL: &str = "gpt-4.1";
const DEFAULT_MAX_TOKENS: u32 = 2000;
const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Decision oracle backed by the hosted chat-completions proxy
pub struct ProxyProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl ProxyProvider {
    /// Create a provider from environment variables.
    ///
    /// `LLM_BASE_URL` and `LLM_API_KEY` are required; `LLM_MODEL`,
    /// `LLM_MAX_TOKENS` and `LLM_TEMPERATURE` fall back to workshop defaults.
    pub fn from_env() -> AgentResult<Self> {
        tracing::info!("Creating proxy provider from environment");

        let base_url = env::var("LLM_BASE_URL").map_err(|_| {
            AgentError::InvalidConfig("LLM_BASE_URL is not set".to_string())
        })?;
        let api_key = env::var("LLM_API_KEY").map_err(|_| {
            AgentError::InvalidConfig("LLM_API_KEY is not set".to_string())
        })?;

        let model = env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let max_tokens = match env::var("LLM_MAX_TOKENS") {
            Ok(raw) => raw.parse().map_err(|_| {
                AgentError::InvalidConfig(format!("LLM_MAX_TOKENS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_MAX_TOKENS,
        };
        let temperature = match env::var("LLM_TEMPERATURE") {
            Ok(raw) => raw.parse().map_err(|_| {
                AgentError::InvalidConfig(format!("LLM_TEMPERATURE is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_TEMPERATURE,
        };

        tracing::info!("Using model: {}", model);
        tracing::debug!("Max tokens: {}, temperature: {}", max_tokens, temperature);

        Ok(Self::new(base_url, api_key)
            .with_model(model)
            .with_max_tokens(max_tokens)
            .with_temperature(temperature))
    }

    /// Create a provider with explicit endpoint and credentials
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the max tokens for responses
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl DecisionOracle for ProxyProvider {
    async fn consult(
        &self,
        system_prompt: &str,
        messages: &[Message],
        tools: &[ToolDescriptor],
    ) -> AgentResult<AssistantReply> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: types::to_wire_messages(system_prompt, messages),
            tools: if tools.is_empty() {
                None
            } else {
                Some(tools.iter().map(ChatTool::from).collect())
            },
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        tracing::info!(
            "Consulting proxy with {} messages, {} tools",
            request.messages.len(),
            tools.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Proxy returned {}: {}", status, body);
            return Err(AgentError::unavailable(format!(
                "proxy returned {}: {}",
                status, body
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AgentError::malformed(format!("unparseable response body: {}", e)))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::malformed("response contains no choices"))?;

        tracing::debug!("Finish reason: {:?}", choice.finish_reason);

        types::parse_assistant_reply(choice.message)
    }
}
