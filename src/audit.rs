//! Audit pipeline: fetch, evaluate, score, assemble
//!
//! One call, one fetch, one immutable result. A failed fetch yields the
//! boundary error instead of a partial result, so "audit unavailable" and
//! "audited with a low score" never look alike to callers.

use tracing::info;

use crate::checks::{self, CheckContext};
use crate::fetcher::{FetchOutcome, FetchUnavailable, Fetcher};
use crate::models::AuditResult;
use crate::scoring;

/// Assemble the result from a completed fetch. Pure: identical outcomes
/// produce identical results.
pub fn build_result(outcome: &FetchOutcome) -> AuditResult {
    let ctx = CheckContext {
        html: &outcome.body,
        url: &outcome.url,
        fetch_ok: outcome.ok,
        elapsed_ms: outcome.elapsed_ms,
    };
    let checks = checks::run_all(&ctx);
    let card = scoring::calculate(&checks);
    AuditResult {
        url: outcome.url.clone(),
        score: card.score,
        grade: card.grade,
        checks,
        summary: card.summary,
        can_help: card.can_help,
    }
}

/// Run a full audit against a single URL.
///
/// `Err` is the absence signal: the page could not be retrieved, and no
/// result exists for this call.
pub fn run_audit(url: &str) -> Result<AuditResult, FetchUnavailable> {
    let outcome = Fetcher::new().fetch(url)?;
    let result = build_result(&outcome);
    info!(
        "audited {}: score={} grade={}",
        result.url, result.score, result.grade
    );
    Ok(result)
}
