//! The agent loop: a bounded decide/act cycle over a conversation transcript

mod agent_loop;
mod config;
mod executor;

pub use agent_loop::Agent;
pub use config::{AgentConfig, DEFAULT_MAX_DECISIONS};
pub use executor::ToolExecutor;
