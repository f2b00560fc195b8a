//! JSON reporter
//!
//! Outputs the full AuditResult as pretty-printed JSON, matching the wire
//! shape downstream consumers already parse (camelCase `canHelp`,
//! lowercase importance).

use anyhow::Result;

use crate::models::AuditResult;

/// Render result as JSON
pub fn render(audit: &AuditResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(audit)?)
}

/// Render result as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(audit: &AuditResult) -> Result<String> {
    Ok(serde_json::to_string(audit)?)
}
