use std::sync::Arc;

use license_agent::agent::{Agent, AgentConfig};
use license_agent::cli::Console;
use license_agent::conversation::{Conversation, Message};
use license_agent::llm::ProxyProvider;
use license_agent::logging;
use license_agent::tools::{
    BudgetLedger, CheckSoftwareLicenseTool, CheckTeamBudgetTool, DeductBudgetTool, ToolRegistry,
};

/// System prompt for the procurement agent
const SYSTEM_PROMPT: &str = "You are a software license procurement assistant. \
For each request, you must:\n\
1) Check if the requested SOFTWARE has licenses available using tools.\n\
2) Check the TEAM budget using tools.\n\
3) If you approve a request, you MUST call the 'deduct_budget' tool with a reasonable cost estimate\n\
   (for example: ~3000 USD for an SAP license, ~600 USD for an Adobe license).\n\
Only approve the request if there is a license available AND the team has reasonable budget.\n\
Explain clearly why you approve or reject a request using the tool results, and mention any budget deduction.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging system; the guard keeps file logging alive
    let _log_guard = logging::init_logging()?;

    tracing::info!("=== License Procurement Agent Starting ===");

    // Create console for terminal I/O
    let console = Console::new();

    // Create the proxy-backed oracle from environment
    let oracle = Arc::new(ProxyProvider::from_env()?);
    tracing::info!("Using model: {}", oracle.model());

    // Shared budget ledger: the Finance tools' view of team budgets
    let ledger = Arc::new(BudgetLedger::with_demo_teams());

    // Create tool registry with the IT and Finance tools
    let mut registry = ToolRegistry::new();
    registry.register(CheckSoftwareLicenseTool::new());
    registry.register(CheckTeamBudgetTool::new(ledger.clone()));
    registry.register(DeductBudgetTool::new(ledger));
    tracing::info!("Registered {} tools", registry.len());

    let config = AgentConfig::new(SYSTEM_PROMPT);
    let agent = Agent::new(config, oracle, Arc::new(registry));

    // Conversation history lives here for the process lifetime; the agent
    // itself persists nothing between turns.
    let mut conversation = Conversation::new();
    tracing::info!("Conversation initialized: {}", conversation.id());

    console.print_banner();

    loop {
        let user_input = match console.read_input() {
            Ok(input) => input,
            Err(e) => {
                tracing::error!("Failed to read user input: {}", e);
                console.print_error(&format!("Failed to read input: {}", e));
                continue;
            }
        };

        if user_input.is_empty() {
            console.print_system("Goodbye.");
            break;
        }

        tracing::info!("Processing user message");
        let updated = match agent.run_turn(conversation.messages(), user_input.as_str()).await {
            Ok(updated) => updated,
            Err(e) => {
                tracing::error!("Error processing turn: {:?}", e);
                console.print_error(&format!("Error processing message: {}", e));
                continue;
            }
        };

        let appended = conversation.absorb_run(updated);
        console.print_audit_log(appended);

        if let Some(answer) = appended.iter().rev().find(|m| m.is_final_answer()) {
            console.print_assistant(answer.text());
        }

        console.print_separator();
    }

    tracing::info!("=== License Procurement Agent Shutting Down ===");

    Ok(())
}
