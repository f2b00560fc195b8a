//! Output reporters for audit results
//!
//! Supports three output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON of the full result
//! - `blocks` - Notification segments for chat/email dispatch

mod blocks;
mod json;
mod text;

pub use blocks::{to_notification_blocks, Block, BlockText, TextKind};

use anyhow::{anyhow, Result};
use std::str::FromStr;

use crate::models::AuditResult;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Blocks,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "blocks" | "slack" => Ok(OutputFormat::Blocks),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, blocks",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Blocks => write!(f, "blocks"),
        }
    }
}

/// Render an audit result in the specified format
pub fn report(audit: &AuditResult, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(audit, fmt)
}

/// Render an audit result using an OutputFormat enum
pub fn report_with_format(audit: &AuditResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(audit),
        OutputFormat::Json => json::render(audit),
        OutputFormat::Blocks => blocks_render(audit),
    }
}

fn blocks_render(audit: &AuditResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_notification_blocks(
        audit,
    ))?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A mid-grade audit with two failing checks for reporter tests
    pub(crate) fn test_audit() -> AuditResult {
        use crate::models::{Check, Importance};

        let checks = vec![
            Check {
                name: "HTTPS Enabled".into(),
                passed: true,
                value: "Yes".into(),
                recommendation: Some("Site should use HTTPS for security".into()),
                importance: Importance::Critical,
            },
            Check {
                name: "Meta Description".into(),
                passed: false,
                value: "Missing".into(),
                recommendation: Some("Add a meta description".into()),
                importance: Importance::Critical,
            },
            Check {
                name: "Open Graph Tags".into(),
                passed: false,
                value: "Missing".into(),
                recommendation: Some("Add Open Graph tags for social sharing".into()),
                importance: Importance::Minor,
            },
            Check {
                name: "Canonical Tag".into(),
                passed: true,
                value: "Present".into(),
                recommendation: None,
                importance: Importance::Important,
            },
        ];

        AuditResult {
            url: "https://example.com".into(),
            score: 83,
            grade: "B".into(),
            checks,
            summary: "Good foundation! 2/4 checks passed. Ready for Local SEO.".into(),
            can_help: true,
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("blocks").unwrap(),
            OutputFormat::Blocks
        );
        assert_eq!(
            OutputFormat::from_str("slack").unwrap(),
            OutputFormat::Blocks
        );
        assert!(OutputFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_report_dispatch() {
        let audit = test_audit();
        assert!(report(&audit, "text").is_ok());
        assert!(report(&audit, "json").is_ok());
        assert!(report(&audit, "blocks").is_ok());
        assert!(report(&audit, "sarif").is_err());
    }
}
