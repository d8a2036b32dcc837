//! Tools the agent can use
//!
//! The demo tools mirror a license procurement workflow: an IT view
//! (license inventory) and a Finance view (team budgets).

mod budget;
mod ledger;
mod license;
mod registry;
mod tool;

pub use budget::{CheckTeamBudgetTool, DeductBudgetTool};
pub use ledger::BudgetLedger;
pub use license::CheckSoftwareLicenseTool;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolOutput};
