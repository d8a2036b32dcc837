//! In-memory team budget ledger
//!
//! Stands in for the Finance/ERP system a real deployment would query. The
//! agent loop never touches the ledger directly; the budget tools own access
//! to it, and the internal mutex is what serializes concurrent runs sharing
//! one ledger.

use std::collections::HashMap;
use std::sync::Mutex;

/// Shared team budget store, keyed by normalized team name
#[derive(Debug)]
pub struct BudgetLedger {
    budgets: Mutex<HashMap<String, f64>>,
}

impl BudgetLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            budgets: Mutex::new(HashMap::new()),
        }
    }

    /// Create a ledger seeded with the workshop demo teams
    pub fn with_demo_teams() -> Self {
        let ledger = Self::new();
        ledger.set("it", 10_000.0);
        ledger.set("marketing", 100.0);
        ledger.set("finance", 5_000.0);
        ledger
    }

    /// Set a team's budget
    pub fn set(&self, team: &str, amount_usd: f64) {
        let mut budgets = self.budgets.lock().expect("budget ledger lock poisoned");
        budgets.insert(Self::normalize(team), amount_usd);
    }

    /// Remaining budget for a team, or `None` if the team is unknown
    pub fn remaining(&self, team: &str) -> Option<f64> {
        let budgets = self.budgets.lock().expect("budget ledger lock poisoned");
        budgets.get(&Self::normalize(team)).copied()
    }

    /// Deduct an amount from a team's budget, clamping at zero.
    ///
    /// Returns the new balance, or `None` if the team is unknown.
    pub fn deduct(&self, team: &str, amount_usd: f64) -> Option<f64> {
        let mut budgets = self.budgets.lock().expect("budget ledger lock poisoned");
        let entry = budgets.get_mut(&Self::normalize(team))?;
        *entry = (*entry - amount_usd).max(0.0);
        Some(*entry)
    }

    /// Normalize a team name: "IT Team" and "it" address the same budget
    fn normalize(team: &str) -> String {
        team.trim()
            .to_lowercase()
            .replace(" team", "")
            .trim()
            .to_string()
    }
}

impl Default for BudgetLedger {
    fn default() -> Self {
        Self::new()
    }
}
