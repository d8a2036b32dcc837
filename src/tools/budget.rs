//! Team budget tools (Finance view)
//!
//! Both tools share one `BudgetLedger`; `check_team_budget` reads it and
//! `deduct_budget` books a purchase against it.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::llm::ToolDescriptor;

use super::ledger::BudgetLedger;
use super::tool::{Tool, ToolOutput};

/// Checks the remaining budget for a team
pub struct CheckTeamBudgetTool {
    ledger: Arc<BudgetLedger>,
}

#[derive(Debug, Deserialize)]
struct CheckBudgetInput {
    /// Team whose budget to look up (required)
    team_name: String,
}

impl CheckTeamBudgetTool {
    /// Create a new budget check tool backed by the given ledger
    pub fn new(ledger: Arc<BudgetLedger>) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl Tool for CheckTeamBudgetTool {
    fn name(&self) -> &str {
        "check_team_budget"
    }

    fn description(&self) -> &str {
        "Check the remaining budget for a specific team."
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            self.name(),
            self.description(),
            json!({
                "type": "object",
                "properties": {
                    "team_name": {
                        "type": "string",
                        "description": "Name of the team, e.g. 'IT' or 'Marketing'"
                    }
                },
                "required": ["team_name"]
            }),
        )
    }

    async fn execute(&self, arguments: &Value) -> Result<ToolOutput> {
        let input: CheckBudgetInput = serde_json::from_value(arguments.clone())?;

        let text = match self.ledger.remaining(&input.team_name) {
            Some(remaining) => format!("Budget: {:.0} USD remaining.", remaining),
            None => format!(
                "Budget for team '{}' is unknown. Treat as very low.",
                input.team_name
            ),
        };

        Ok(ToolOutput::success(text))
    }
}

/// Deducts an amount from a team's budget (simulates booking a purchase)
pub struct DeductBudgetTool {
    ledger: Arc<BudgetLedger>,
}

#[derive(Debug, Deserialize)]
struct DeductBudgetInput {
    /// Team whose budget to deduct from (required)
    team_name: String,
    /// Amount to deduct in USD (required)
    amount_usd: f64,
}

impl DeductBudgetTool {
    /// Create a new budget deduction tool backed by the given ledger
    pub fn new(ledger: Arc<BudgetLedger>) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl Tool for DeductBudgetTool {
    fn name(&self) -> &str {
        "deduct_budget"
    }

    fn description(&self) -> &str {
        "Deduct an amount from the team's budget to book a purchase."
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            self.name(),
            self.description(),
            json!({
                "type": "object",
                "properties": {
                    "team_name": {
                        "type": "string",
                        "description": "Name of the team to book the purchase against"
                    },
                    "amount_usd": {
                        "type": "number",
                        "description": "Cost estimate in USD"
                    }
                },
                "required": ["team_name", "amount_usd"]
            }),
        )
    }

    async fn execute(&self, arguments: &Value) -> Result<ToolOutput> {
        let input: DeductBudgetInput = serde_json::from_value(arguments.clone())?;

        let text = match self.ledger.deduct(&input.team_name, input.amount_usd) {
            Some(new_balance) => {
                tracing::info!(
                    "Booked {:.2} USD against team '{}'",
                    input.amount_usd,
                    input.team_name
                );
                format!(
                    "Deducted {:.2} USD from {}. New budget: {:.2} USD.",
                    input.amount_usd, input.team_name, new_balance
                )
            }
            None => format!("Cannot deduct from unknown team '{}'.", input.team_name),
        };

        Ok(ToolOutput::success(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn demo_ledger() -> Arc<BudgetLedger> {
        Arc::new(BudgetLedger::with_demo_teams())
    }

    #[test]
    fn test_check_known_team() {
        let tool = CheckTeamBudgetTool::new(demo_ledger());
        let output = block_on(tool.execute(&json!({"team_name": "IT"}))).unwrap();
        assert_eq!(output.text, "Budget: 10000 USD remaining.");
    }

    #[test]
    fn test_check_unknown_team_reports_low() {
        let tool = CheckTeamBudgetTool::new(demo_ledger());
        let output = block_on(tool.execute(&json!({"team_name": "Legal"}))).unwrap();
        assert_eq!(
            output.text,
            "Budget for team 'Legal' is unknown. Treat as very low."
        );
        assert!(!output.is_error);
    }

    #[test]
    fn test_deduct_books_purchase() {
        let ledger = demo_ledger();
        let tool = DeductBudgetTool::new(ledger.clone());
        let output = block_on(tool.execute(&json!({"team_name": "IT", "amount_usd": 3000.0})))
            .unwrap();
        assert_eq!(
            output.text,
            "Deducted 3000.00 USD from IT. New budget: 7000.00 USD."
        );
        assert_eq!(ledger.remaining("it"), Some(7_000.0));
    }

    #[test]
    fn test_deduct_unknown_team() {
        let tool = DeductBudgetTool::new(demo_ledger());
        let output = block_on(tool.execute(&json!({"team_name": "Legal", "amount_usd": 100.0})))
            .unwrap();
        assert_eq!(output.text, "Cannot deduct from unknown team 'Legal'.");
    }

    #[test]
    fn test_both_tools_share_one_ledger() {
        let ledger = demo_ledger();
        let deduct = DeductBudgetTool::new(ledger.clone());
        let check = CheckTeamBudgetTool::new(ledger);

        block_on(deduct.execute(&json!({"team_name": "Finance", "amount_usd": 5000.0}))).unwrap();
        let output = block_on(check.execute(&json!({"team_name": "Finance"}))).unwrap();
        assert_eq!(output.text, "Budget: 0 USD remaining.");
    }
}
