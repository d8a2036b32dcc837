//! Console handles all terminal I/O with colored formatting

use colored::*;
use std::io::{self, Write};

use crate::conversation::Message;

/// Console for the procurement agent demo
pub struct Console {
    user_color: Color,
    assistant_color: Color,
    tool_color: Color,
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            user_color: Color::Cyan,
            assistant_color: Color::Green,
            tool_color: Color::Magenta,
        }
    }

    /// Print a welcome banner
    pub fn print_banner(&self) {
        println!("{}", "=".repeat(60).bright_blue());
        println!(
            "{}",
            "  Software License Procurement Agent".bright_blue().bold()
        );
        println!("{}", "=".repeat(60).bright_blue());
        println!();
        println!("Ask about license requests, e.g. \"Can IT get an SAP license?\"");
        println!("Press Enter on an empty line to exit.");
        println!();
    }

    /// Read a line of input from the user
    pub fn read_input(&self) -> io::Result<String> {
        print!("{} ", "You:".color(self.user_color).bold());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Print a complete assistant message with colored formatting
    pub fn print_assistant(&self, message: &str) {
        println!(
            "{} {}",
            "Assistant:".color(self.assistant_color).bold(),
            message.color(self.assistant_color)
        );
    }

    /// Print a system message (info, goodbyes, etc.)
    pub fn print_system(&self, message: &str) {
        println!("{} {}", "System:".yellow().bold(), message);
    }

    /// Print an error message
    pub fn print_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    /// Print the audit trail of one agent run
    ///
    /// Shows, for workshop participants, when the agent decided to call tools,
    /// what the tools returned, and the final response.
    pub fn print_audit_log(&self, messages: &[Message]) {
        println!();
        println!("{}", "--- AGENT AUDIT LOG ---".bright_black());
        for message in messages {
            match message {
                Message::Assistant { text, tool_calls } if !tool_calls.is_empty() => {
                    println!(
                        "{} Needs tool: {}",
                        "[AGENT DECISION]".color(self.tool_color).bold(),
                        tool_calls[0].name
                    );
                    if !text.is_empty() {
                        println!("  Reasoning: {}", text);
                    }
                }
                Message::Assistant { text, .. } => {
                    println!(
                        "{} {}",
                        "[AGENT RESPONSE]".color(self.assistant_color).bold(),
                        text
                    );
                }
                Message::ToolResult { text, .. } => {
                    println!("{} {}", "[TOOL RESULT]".color(self.tool_color).bold(), text);
                }
                Message::User { .. } => {}
            }
        }
        println!("{}", "-----------------------".bright_black());
        println!();
    }

    /// Print a separator line
    pub fn print_separator(&self) {
        println!("{}", "-".repeat(60).bright_black());
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
