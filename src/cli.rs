//! CLI command definition and handler

use anyhow::Result;
use clap::Parser;

use crate::{audit, reporters};

/// sitegrade - single-page SEO audit
///
/// Fetches one page, runs ten on-page heuristics, and prints a weighted
/// score with a letter grade.
#[derive(Parser, Debug)]
#[command(name = "sitegrade")]
#[command(
    version,
    about = "Audit a single web page for on-page SEO signals",
    long_about = "Sitegrade fetches the given page once (10 second timeout), evaluates ten \
on-page SEO heuristics, and prints a weighted 0-100 score with a letter grade.\n\n\
A page that cannot be fetched reports 'audit unavailable' and exits non-zero; \
that is distinct from a page that audits with a low score.",
    after_help = "\
Examples:
  sitegrade example.com                        Audit with terminal output
  sitegrade https://example.com --format json  JSON output for scripting
  sitegrade example.com --format blocks        Notification payload for a webhook"
)]
pub struct Cli {
    /// Website address; https:// is assumed when no scheme is given
    pub url: String,

    /// Output format (text, json, blocks)
    #[arg(long, default_value = "text", value_parser = ["text", "json", "blocks"])]
    pub format: String,
}

pub fn run(cli: Cli) -> Result<()> {
    match audit::run_audit(&cli.url) {
        Ok(result) => {
            println!("{}", reporters::report(&result, &cli.format)?);
            Ok(())
        }
        Err(e) => {
            // Unavailable is not a low score; keep the two distinguishable
            eprintln!("audit unavailable: {e}");
            std::process::exit(2);
        }
    }
}
