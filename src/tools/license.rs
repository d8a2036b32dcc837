//! License inventory tool (IT view)
//!
//! Mocked implementation for the workshop; a real deployment would query an
//! internal IT inventory system.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::llm::ToolDescriptor;

use super::tool::{Tool, ToolOutput};

const SAP_NAMES: &[&str] = &["sap", "sap hana", "sap s/4hana"];
const ADOBE_NAMES: &[&str] = &["adobe", "adobe cc", "adobe creative cloud"];

/// Checks whether a license is available for a given piece of software
pub struct CheckSoftwareLicenseTool;

#[derive(Debug, Deserialize)]
struct LicenseInput {
    /// Name of the software to look up (required)
    software_name: String,
}

impl CheckSoftwareLicenseTool {
    /// Create a new license inventory tool
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheckSoftwareLicenseTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CheckSoftwareLicenseTool {
    fn name(&self) -> &str {
        "check_software_license"
    }

    fn description(&self) -> &str {
        "Check if a license is available for the given software."
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            self.name(),
            self.description(),
            json!({
                "type": "object",
                "properties": {
                    "software_name": {
                        "type": "string",
                        "description": "Name of the software to check, e.g. 'SAP' or 'Adobe CC'"
                    }
                },
                "required": ["software_name"]
            }),
        )
    }

    async fn execute(&self, arguments: &Value) -> Result<ToolOutput> {
        let input: LicenseInput = serde_json::from_value(arguments.clone())?;
        let name = input.software_name.trim().to_lowercase();

        tracing::debug!("License lookup for '{}'", input.software_name);

        let text = if SAP_NAMES.contains(&name.as_str()) {
            "Available: we have spare SAP licenses.".to_string()
        } else if ADOBE_NAMES.contains(&name.as_str()) {
            "Out of stock: no Adobe licenses available.".to_string()
        } else {
            // Absence of information is reported as a negative result string,
            // not as an error.
            format!(
                "Unknown availability for '{}'. Assume not available.",
                input.software_name
            )
        };

        Ok(ToolOutput::success(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_sap_is_available() {
        let tool = CheckSoftwareLicenseTool::new();
        let output = block_on(tool.execute(&json!({"software_name": "SAP"}))).unwrap();
        assert_eq!(output.text, "Available: we have spare SAP licenses.");
        assert!(!output.is_error);
    }

    #[test]
    fn test_adobe_is_out_of_stock() {
        let tool = CheckSoftwareLicenseTool::new();
        let output =
            block_on(tool.execute(&json!({"software_name": "Adobe Creative Cloud"}))).unwrap();
        assert_eq!(output.text, "Out of stock: no Adobe licenses available.");
    }

    #[test]
    fn test_unknown_software_assumed_unavailable() {
        let tool = CheckSoftwareLicenseTool::new();
        let output = block_on(tool.execute(&json!({"software_name": "Slack"}))).unwrap();
        assert_eq!(
            output.text,
            "Unknown availability for 'Slack'. Assume not available."
        );
        assert!(!output.is_error);
    }

    #[test]
    fn test_missing_argument_is_a_fault() {
        let tool = CheckSoftwareLicenseTool::new();
        assert!(block_on(tool.execute(&json!({}))).is_err());
    }
}
