//! sitegrade - single-page SEO audit engine
//!
//! Given a website address, fetch the page once, inspect its markup for
//! ten on-page SEO signals, and produce a weighted score, letter grade,
//! and per-signal findings. Matching is deliberately text-pattern based
//! rather than a DOM parse; the documented quirks are part of the
//! contract.

pub mod audit;
pub mod checks;
pub mod cli;
pub mod fetcher;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use audit::{build_result, run_audit};
pub use fetcher::{FetchOutcome, FetchUnavailable};
pub use models::{AuditResult, Check, Importance};
pub use reporters::to_notification_blocks;
