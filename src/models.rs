//! Core data models for sitegrade
//!
//! These models are the engine's entire output surface: one `Check` per
//! heuristic and one immutable `AuditResult` per audit. Field names on the
//! wire match the original JSON shape consumed by downstream notifiers
//! (`canHelp`, lowercase importance).

use serde::{Deserialize, Serialize};

/// Importance tiers for checks, weighted 3/2/1 in score aggregation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Critical,
    #[default]
    Important,
    Minor,
}

impl Importance {
    /// Weight used by the scorer
    pub fn weight(self) -> u32 {
        match self {
            Importance::Critical => 3,
            Importance::Important => 2,
            Importance::Minor => 1,
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Importance::Critical => write!(f, "critical"),
            Importance::Important => write!(f, "important"),
            Importance::Minor => write!(f, "minor"),
        }
    }
}

/// One heuristic's pass/fail evaluation plus display evidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub passed: bool,
    /// Human-readable evidence ("Present", "1/3 images (33%)", ...)
    pub value: String,
    /// Canned advice; present when the check failed, or always for checks
    /// that unconditionally emit one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub importance: Importance,
}

/// Result of one full audit of a single URL
///
/// Immutable once constructed. `checks` always holds exactly ten entries in
/// the fixed heuristic order; a failed fetch produces no result at all
/// rather than a partial one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// Normalized, scheme-qualified URL that was fetched
    pub url: String,
    /// Weighted score, 0-100
    pub score: u32,
    /// Letter grade A-F derived from the score
    pub grade: String,
    pub checks: Vec<Check>,
    pub summary: String,
    /// Whether enough critical checks pass for optimization work to be viable
    pub can_help: bool,
}
