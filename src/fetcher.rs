//! Page fetcher
//!
//! One bounded GET per audit. Uses ureq (sync HTTP) — no async runtime
//! needed. Every failure mode (timeout, DNS, connection, non-text body)
//! collapses into the single `FetchUnavailable` error; the engine never
//! sees partial data.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

/// Request timeout; the in-flight request is cancelled when it elapses
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Identifying client-agent header sent with every fetch
const USER_AGENT: &str = "Mozilla/5.0 (compatible; SEOAuditBot/1.0)";

/// The single boundary error: the page could not be retrieved as text
#[derive(Error, Debug)]
#[error("fetch unavailable for {url}: {reason}")]
pub struct FetchUnavailable {
    pub url: String,
    pub reason: String,
}

/// Everything the checks need from one completed fetch
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Normalized, scheme-qualified URL
    pub url: String,
    /// Whether the response status was 2xx
    pub ok: bool,
    /// Raw body text
    pub body: String,
    /// Wall-clock ms from request start to body fully read
    pub elapsed_ms: u64,
}

/// Prefix `https://` when the address carries no scheme.
///
/// String-prefix test on `http`, preserved from the source behavior.
pub fn normalize_url(raw: &str) -> String {
    let url = raw.trim();
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

pub struct Fetcher {
    agent: ureq::Agent,
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // Non-2xx still audits; status feeds the HTTPS check
        .timeout_global(Some(FETCH_TIMEOUT))
        .build()
        .new_agent()
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            agent: make_agent(),
        }
    }

    /// Issue the single GET and read the body as text.
    ///
    /// Elapsed time covers request start through body fully read.
    pub fn fetch(&self, raw_url: &str) -> Result<FetchOutcome, FetchUnavailable> {
        let url = normalize_url(raw_url);
        let start = Instant::now();

        let response = self
            .agent
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| FetchUnavailable {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let ok = response.status().is_success();

        if let Some(content_type) = response
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
        {
            if !is_text_content_type(content_type) {
                return Err(FetchUnavailable {
                    url,
                    reason: format!("non-text response: {content_type}"),
                });
            }
        }

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| FetchUnavailable {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!("fetched {} ({} bytes) in {}ms", url, body.len(), elapsed_ms);

        Ok(FetchOutcome {
            url,
            ok,
            body,
            elapsed_ms,
        })
    }
}

fn is_text_content_type(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.starts_with("text/")
        || ct.contains("html")
        || ct.contains("xml")
        || ct.contains("json")
        || ct.contains("javascript")
}
