pub mod core;
pub mod conversation;
pub mod llm;
pub mod tools;

// Standardized agent implementation
pub mod agent;

// Optional components
pub mod cli;
pub mod logging;
