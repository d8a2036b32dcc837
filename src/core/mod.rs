//! Core types shared across the crate

mod error;

pub use error::{AgentError, AgentResult};
