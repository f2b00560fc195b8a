//! The ten on-page SEO heuristics
//!
//! Checks are deliberately text-pattern based rather than a real HTML
//! parse: first `<title>` match wins, `<img>` tags are scanned naively,
//! and deeply nested or malformed markup can misclassify. Downstream
//! consumers depend on these exact quirks, so keep the patterns in sync
//! with the documented value formats rather than tightening them.
//!
//! Every heuristic is pure over the fetch outcome; none depends on
//! another's result, and evaluation order is the fixed definition order
//! of `CHECKS`.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Check, Importance};

/// Immutable inputs shared by all checks for one audit
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// Raw page body
    pub html: &'a str,
    /// Normalized, scheme-qualified URL
    pub url: &'a str,
    /// Whether the fetch returned a 2xx status
    pub fetch_ok: bool,
    /// Wall-clock fetch time in ms
    pub elapsed_ms: u64,
}

struct CheckOutcome {
    passed: bool,
    value: String,
    recommendation: Option<String>,
}

/// One entry in the closed, order-fixed heuristic set
struct CheckDef {
    name: &'static str,
    importance: Importance,
    eval: fn(&CheckContext) -> CheckOutcome,
}

/// The closed heuristic set, in report order
const CHECKS: [CheckDef; 10] = [
    CheckDef {
        name: "HTTPS Enabled",
        importance: Importance::Critical,
        eval: check_https,
    },
    CheckDef {
        name: "Page Load Speed",
        importance: Importance::Important,
        eval: check_load_speed,
    },
    CheckDef {
        name: "Title Tag",
        importance: Importance::Critical,
        eval: check_title,
    },
    CheckDef {
        name: "Meta Description",
        importance: Importance::Critical,
        eval: check_meta_description,
    },
    CheckDef {
        name: "H1 Tag",
        importance: Importance::Critical,
        eval: check_h1,
    },
    CheckDef {
        name: "Mobile Viewport",
        importance: Importance::Critical,
        eval: check_viewport,
    },
    CheckDef {
        name: "Image Alt Text",
        importance: Importance::Important,
        eval: check_image_alt,
    },
    CheckDef {
        name: "Open Graph Tags",
        importance: Importance::Minor,
        eval: check_open_graph,
    },
    CheckDef {
        name: "Canonical Tag",
        importance: Importance::Important,
        eval: check_canonical,
    },
    CheckDef {
        name: "Schema Markup",
        importance: Importance::Important,
        eval: check_schema,
    },
];

/// Evaluate all ten checks in definition order
pub fn run_all(ctx: &CheckContext) -> Vec<Check> {
    CHECKS
        .iter()
        .map(|def| {
            let outcome = (def.eval)(ctx);
            tracing::debug!(
                "check {}: passed={} value={:?}",
                def.name,
                outcome.passed,
                outcome.value
            );
            Check {
                name: def.name.to_string(),
                passed: outcome.passed,
                value: outcome.value,
                recommendation: outcome.recommendation,
                importance: def.importance,
            }
        })
        .collect()
}

// Compiled matchers, scoped to this module so no cross-call state exists

static TITLE_RE: OnceLock<Regex> = OnceLock::new();
static META_DESC_NAME_FIRST_RE: OnceLock<Regex> = OnceLock::new();
static META_DESC_CONTENT_FIRST_RE: OnceLock<Regex> = OnceLock::new();
static H1_RE: OnceLock<Regex> = OnceLock::new();
static TAG_STRIP_RE: OnceLock<Regex> = OnceLock::new();
static VIEWPORT_RE: OnceLock<Regex> = OnceLock::new();
static IMG_RE: OnceLock<Regex> = OnceLock::new();
static IMG_ALT_RE: OnceLock<Regex> = OnceLock::new();
static OG_RE: OnceLock<Regex> = OnceLock::new();
static CANONICAL_RE: OnceLock<Regex> = OnceLock::new();
static JSON_LD_RE: OnceLock<Regex> = OnceLock::new();
static ITEMTYPE_RE: OnceLock<Regex> = OnceLock::new();

fn title_re() -> &'static Regex {
    TITLE_RE.get_or_init(|| Regex::new(r"(?i)<title[^>]*>([^<]*)</title>").expect("valid regex"))
}

fn meta_desc_name_first_re() -> &'static Regex {
    META_DESC_NAME_FIRST_RE.get_or_init(|| {
        Regex::new(r#"(?i)<meta[^>]*name=["']description["'][^>]*content=["']([^"']*)["']"#)
            .expect("valid regex")
    })
}

fn meta_desc_content_first_re() -> &'static Regex {
    META_DESC_CONTENT_FIRST_RE.get_or_init(|| {
        Regex::new(r#"(?i)<meta[^>]*content=["']([^"']*)["'][^>]*name=["']description["']"#)
            .expect("valid regex")
    })
}

fn h1_re() -> &'static Regex {
    H1_RE.get_or_init(|| Regex::new(r"(?is)<h1[^>]*>.*?</h1>").expect("valid regex"))
}

fn tag_strip_re() -> &'static Regex {
    TAG_STRIP_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"))
}

fn viewport_re() -> &'static Regex {
    VIEWPORT_RE
        .get_or_init(|| Regex::new(r#"(?i)<meta[^>]*name=["']viewport["']"#).expect("valid regex"))
}

fn img_re() -> &'static Regex {
    IMG_RE.get_or_init(|| Regex::new(r"(?i)<img[^>]*>").expect("valid regex"))
}

fn img_alt_re() -> &'static Regex {
    IMG_ALT_RE.get_or_init(|| Regex::new(r#"(?i)alt=["'][^"']+["']"#).expect("valid regex"))
}

fn og_re() -> &'static Regex {
    OG_RE.get_or_init(|| Regex::new(r#"(?i)<meta[^>]*property=["']og:"#).expect("valid regex"))
}

fn canonical_re() -> &'static Regex {
    CANONICAL_RE
        .get_or_init(|| Regex::new(r#"(?i)<link[^>]*rel=["']canonical["']"#).expect("valid regex"))
}

fn json_ld_re() -> &'static Regex {
    JSON_LD_RE.get_or_init(|| Regex::new(r"(?i)application/ld\+json").expect("valid regex"))
}

fn itemtype_re() -> &'static Regex {
    ITEMTYPE_RE.get_or_init(|| {
        Regex::new(r#"(?i)itemtype=["']https?://schema\.org"#).expect("valid regex")
    })
}

/// Truncate to 50 chars with ellipsis and append the full character count
fn excerpt_with_count(text: &str) -> String {
    let count = text.chars().count();
    let head: String = text.chars().take(50).collect();
    let ellipsis = if count > 50 { "..." } else { "" };
    format!("{head}{ellipsis} ({count} chars)")
}

// Pass condition conjoins scheme with fetch success, while the displayed
// value reflects the scheme alone. The asymmetry is intentional upstream
// behavior; do not align the two.
fn check_https(ctx: &CheckContext) -> CheckOutcome {
    let is_https = ctx.url.starts_with("https://");
    CheckOutcome {
        passed: is_https && ctx.fetch_ok,
        value: if is_https { "Yes" } else { "No" }.to_string(),
        recommendation: Some("Site should use HTTPS for security".to_string()),
    }
}

fn check_load_speed(ctx: &CheckContext) -> CheckOutcome {
    let passed = ctx.elapsed_ms < 3000;
    CheckOutcome {
        passed,
        value: format!("{:.2}s", ctx.elapsed_ms as f64 / 1000.0),
        recommendation: (!passed).then(|| "Page loads slowly (>3s)".to_string()),
    }
}

fn check_title(ctx: &CheckContext) -> CheckOutcome {
    let title = title_re()
        .captures(ctx.html)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();
    let len = title.chars().count();
    CheckOutcome {
        passed: (10..=70).contains(&len),
        value: if title.is_empty() {
            "Missing".to_string()
        } else {
            excerpt_with_count(&title)
        },
        recommendation: if title.is_empty() {
            Some("Add a title tag".to_string())
        } else if len < 10 {
            Some("Title too short".to_string())
        } else if len > 70 {
            Some("Title too long".to_string())
        } else {
            None
        },
    }
}

fn check_meta_description(ctx: &CheckContext) -> CheckOutcome {
    // Attribute order varies in the wild; try name-first then content-first
    let desc = meta_desc_name_first_re()
        .captures(ctx.html)
        .or_else(|| meta_desc_content_first_re().captures(ctx.html))
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();
    let len = desc.chars().count();
    CheckOutcome {
        passed: (50..=160).contains(&len),
        value: if desc.is_empty() {
            "Missing".to_string()
        } else {
            excerpt_with_count(&desc)
        },
        recommendation: if desc.is_empty() {
            Some("Add a meta description".to_string())
        } else if len < 50 {
            Some("Description too short".to_string())
        } else if len > 160 {
            Some("Description too long".to_string())
        } else {
            None
        },
    }
}

fn check_h1(ctx: &CheckContext) -> CheckOutcome {
    let blocks: Vec<&str> = h1_re().find_iter(ctx.html).map(|m| m.as_str()).collect();
    let count = blocks.len();
    let value = match count {
        0 => "Missing".to_string(),
        1 => {
            let stripped = tag_strip_re().replace_all(blocks[0], "");
            stripped.trim().chars().take(50).collect()
        }
        n => format!("{n} found (should be 1)"),
    };
    CheckOutcome {
        passed: count == 1,
        value,
        recommendation: match count {
            0 => Some("Add an H1 tag".to_string()),
            1 => None,
            _ => Some("Use only one H1 tag per page".to_string()),
        },
    }
}

fn check_viewport(ctx: &CheckContext) -> CheckOutcome {
    present_or_missing(
        viewport_re().is_match(ctx.html),
        "Add viewport meta tag for mobile",
    )
}

fn check_image_alt(ctx: &CheckContext) -> CheckOutcome {
    let tags: Vec<&str> = img_re().find_iter(ctx.html).map(|m| m.as_str()).collect();
    if tags.is_empty() {
        // No images counts as fully covered
        return CheckOutcome {
            passed: true,
            value: "No images found".to_string(),
            recommendation: None,
        };
    }
    let with_alt = tags.iter().filter(|t| img_alt_re().is_match(t)).count();
    let percent = ((with_alt as f64 / tags.len() as f64) * 100.0).round() as u32;
    let passed = percent >= 80;
    CheckOutcome {
        passed,
        value: format!("{}/{} images ({}%)", with_alt, tags.len(), percent),
        recommendation: (!passed).then(|| "Add alt text to images".to_string()),
    }
}

fn check_open_graph(ctx: &CheckContext) -> CheckOutcome {
    present_or_missing(
        og_re().is_match(ctx.html),
        "Add Open Graph tags for social sharing",
    )
}

fn check_canonical(ctx: &CheckContext) -> CheckOutcome {
    present_or_missing(
        canonical_re().is_match(ctx.html),
        "Add canonical tag to prevent duplicate content",
    )
}

fn check_schema(ctx: &CheckContext) -> CheckOutcome {
    let found = json_ld_re().is_match(ctx.html) || itemtype_re().is_match(ctx.html);
    present_or_missing(found, "Add schema markup for rich results")
}

fn present_or_missing(found: bool, recommendation: &str) -> CheckOutcome {
    CheckOutcome {
        passed: found,
        value: if found { "Present" } else { "Missing" }.to_string(),
        recommendation: (!found).then(|| recommendation.to_string()),
    }
}
