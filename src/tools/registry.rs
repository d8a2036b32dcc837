//! Tool registry for managing available tools
//!
//! The registry is built once at startup and read-only afterwards; dispatch
//! is by tool name, with a lookup miss surfaced as `None` so callers can
//! report an unavailable tool instead of crashing the run.

use std::collections::HashMap;
use std::sync::Arc;

use crate::llm::ToolDescriptor;

use super::tool::Tool;

/// Registry that holds all available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        tracing::info!("Registering tool: {}", name);
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Get all tool descriptors for the oracle
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.values().map(|t| t.descriptor()).collect()
    }

    /// Get the list of tool names
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{BudgetLedger, CheckTeamBudgetTool};
    use std::sync::Arc;

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_register_and_lookup() {
        let ledger = Arc::new(BudgetLedger::with_demo_teams());
        let mut registry = ToolRegistry::new();
        registry.register(CheckTeamBudgetTool::new(ledger));

        assert_eq!(registry.len(), 1);
        assert!(registry.get("check_team_budget").is_some());
        assert_eq!(registry.descriptors().len(), 1);
        assert_eq!(registry.tool_names(), vec!["check_team_budget"]);
    }
}
