//! Text (terminal) reporter with colors and formatting

use anyhow::Result;

use crate::models::{AuditResult, Importance};

/// Grade colors (ANSI escape codes)
fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A" => "\x1b[32m", // Green
        "B" => "\x1b[92m", // Light green
        "C" => "\x1b[33m", // Yellow
        "D" => "\x1b[91m", // Light red
        "F" => "\x1b[31m", // Red
        _ => "\x1b[0m",
    }
}

/// Importance colors
fn importance_color(importance: Importance) -> &'static str {
    match importance {
        Importance::Critical => "\x1b[31m",  // Red
        Importance::Important => "\x1b[33m", // Yellow
        Importance::Minor => "\x1b[34m",     // Blue
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Importance tag
fn importance_tag(importance: Importance) -> &'static str {
    match importance {
        Importance::Critical => "[C]",
        Importance::Important => "[I]",
        Importance::Minor => "[M]",
    }
}

/// Render result as formatted terminal output
pub fn render(audit: &AuditResult) -> Result<String> {
    let mut out = String::new();

    // Header
    let grade_c = grade_color(&audit.grade);
    out.push_str(&format!("\n{BOLD}SEO Audit{RESET}  {DIM}{}{RESET}\n", audit.url));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}\n\n",
        audit.score, audit.grade
    ));

    // Check table
    out.push_str(&format!(
        "{DIM}  STATUS  IMP   CHECK                 VALUE{RESET}\n"
    ));
    out.push_str(&format!(
        "{DIM}  ─────────────────────────────────────────────────────────{RESET}\n"
    ));
    for check in &audit.checks {
        let (mark, mark_c) = if check.passed {
            ("\u{2713}", "\x1b[32m")
        } else {
            ("\u{2717}", "\x1b[31m")
        };
        let imp_c = importance_color(check.importance);
        out.push_str(&format!(
            "  {mark_c}{mark}{RESET}       {imp_c}{}{RESET}   {:<20}  {}\n",
            importance_tag(check.importance),
            check.name,
            check.value
        ));
        if !check.passed {
            if let Some(rec) = &check.recommendation {
                out.push_str(&format!("                {DIM}{rec}{RESET}\n"));
            }
        }
    }
    out.push('\n');

    // Summary and gate
    out.push_str(&format!("{BOLD}{}{RESET}\n", audit.summary));
    if audit.can_help {
        out.push_str(&format!(
            "{DIM}Solid enough foundation for optimization work.{RESET}\n"
        ));
    } else {
        out.push_str(&format!(
            "{DIM}Basic fixes needed before optimization will be effective.{RESET}\n"
        ));
    }

    Ok(out)
}
