//! Notification block transform
//!
//! Turns an `AuditResult` into the ordered, structured segment list a
//! downstream notifier (chat webhook or email renderer) consumes. The
//! segment shapes and markers follow the Slack Block Kit layout the
//! original notifier used, so the serialized form can be posted as-is.

use serde::{Deserialize, Serialize};

use crate::models::{AuditResult, Importance};

/// One structured notification segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: BlockText },
    Section { text: BlockText },
    Divider,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockText {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    PlainText,
    Mrkdwn,
}

impl Block {
    fn header(text: impl Into<String>) -> Self {
        Block::Header {
            text: BlockText {
                kind: TextKind::PlainText,
                text: text.into(),
                emoji: Some(true),
            },
        }
    }

    fn section(text: impl Into<String>) -> Self {
        Block::Section {
            text: BlockText {
                kind: TextKind::Mrkdwn,
                text: text.into(),
                emoji: None,
            },
        }
    }
}

fn grade_emoji(grade: &str) -> &'static str {
    match grade {
        "A" | "B" => "\u{1F7E2}", // green circle
        "C" => "\u{1F7E1}",       // yellow circle
        "D" => "\u{1F7E0}",       // orange circle
        "F" => "\u{1F534}",       // red circle
        _ => "\u{26AA}",          // white circle
    }
}

fn importance_marker(importance: Importance) -> &'static str {
    match importance {
        Importance::Critical => "\u{1F534}",
        Importance::Important => "\u{1F7E0}",
        Importance::Minor => "\u{1F7E1}",
    }
}

/// Build the ordered notification segments for one audit result
pub fn to_notification_blocks(audit: &AuditResult) -> Vec<Block> {
    let mut blocks = vec![
        Block::header(format!(
            "\u{1F4CA} SEO Audit: {} ({}/100)",
            audit.grade, audit.score
        )),
        Block::section(format!(
            "{} *{}*\n\u{1F517} {}",
            grade_emoji(&audit.grade),
            audit.summary,
            audit.url
        )),
        Block::Divider,
    ];

    let failed: Vec<_> = audit.checks.iter().filter(|c| !c.passed).collect();
    let passed: Vec<_> = audit.checks.iter().filter(|c| c.passed).collect();

    if !failed.is_empty() {
        let failed_text = failed
            .iter()
            .map(|c| {
                let mut line = format!(
                    "{} *{}:* {}",
                    importance_marker(c.importance),
                    c.name,
                    c.value
                );
                if let Some(rec) = &c.recommendation {
                    line.push_str(&format!("\n     _{rec}_"));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n");
        blocks.push(Block::section(format!(
            "*Issues Found ({}):*\n{}",
            failed.len(),
            failed_text
        )));
    }

    if !passed.is_empty() {
        let passed_text = passed
            .iter()
            .map(|c| format!("\u{2705} {}", c.name))
            .collect::<Vec<_>>()
            .join("\n");
        blocks.push(Block::section(format!(
            "*Passing ({}):*\n{}",
            passed.len(),
            passed_text
        )));
    }

    blocks.push(Block::section(if audit.can_help {
        "\u{2705} *Recommendation:* This site has a solid enough foundation for Local SEO services."
            .to_string()
    } else {
        "\u{26A0}\u{FE0F} *Recommendation:* Site may need basic fixes before Local SEO will be effective."
            .to_string()
    }));

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_audit;

    #[test]
    fn test_block_order() {
        let blocks = to_notification_blocks(&test_audit());
        assert!(matches!(blocks[0], Block::Header { .. }));
        assert!(matches!(blocks[1], Block::Section { .. }));
        assert!(matches!(blocks[2], Block::Divider));
        // failed section, passed section, closing recommendation
        assert_eq!(blocks.len(), 6);
    }

    #[test]
    fn test_header_text() {
        let blocks = to_notification_blocks(&test_audit());
        let Block::Header { text } = &blocks[0] else {
            panic!("expected header");
        };
        assert_eq!(text.text, "\u{1F4CA} SEO Audit: B (83/100)");
        assert_eq!(text.emoji, Some(true));
    }

    #[test]
    fn test_failed_section_carries_recommendation() {
        let blocks = to_notification_blocks(&test_audit());
        let Block::Section { text } = &blocks[3] else {
            panic!("expected issues section");
        };
        assert!(text.text.starts_with("*Issues Found (2):*"));
        assert!(text.text.contains("_Add a meta description_"));
    }

    #[test]
    fn test_closing_recommendation_follows_can_help() {
        let mut audit = test_audit();
        audit.can_help = false;
        let blocks = to_notification_blocks(&audit);
        let Some(Block::Section { text }) = blocks.last() else {
            panic!("expected closing section");
        };
        assert!(text.text.contains("may need basic fixes"));
    }

    #[test]
    fn test_serialized_shape_is_block_kit() {
        let blocks = to_notification_blocks(&test_audit());
        let json = serde_json::to_value(&blocks).expect("serialize blocks");
        assert_eq!(json[0]["type"], "header");
        assert_eq!(json[0]["text"]["type"], "plain_text");
        assert_eq!(json[2]["type"], "divider");
    }
}
