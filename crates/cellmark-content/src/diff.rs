//! Round-trip verification
//!
//! Parses a document, writes it back, and reports any line that did not
//! survive. A document the writer produced itself always comes back
//! identical; hand-written Markdown may not (untagged fences gain the
//! default language tag, unclosed fences gain a closing fence).

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

use crate::parser::parse;
use crate::writer::write;

/// A line that differs between the source and its re-serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum LineChange {
    /// Line only present in the re-serialized text (1-based line number there)
    Added { line: usize, content: String },
    /// Line only present in the source (1-based line number there)
    Removed { line: usize, content: String },
}

/// Result of comparing a document with its round trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundTripReport {
    /// Number of blocks the document parsed into
    pub blocks: usize,
    /// Are source and output byte-identical?
    pub is_identical: bool,
    /// Line changes, empty when identical
    pub changes: Vec<LineChange>,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f64,
    #[serde(skip)]
    pub output: String,
}

impl RoundTripReport {
    /// Parse and re-write `source`, then compare
    pub fn check(source: &str, default_language: &str) -> Self {
        let blocks = parse(source, default_language);
        let output = write(&blocks);
        let mut report = Self::compare(source, &output);
        report.blocks = blocks.len();
        report.output = output;

        if !report.is_identical {
            tracing::debug!(
                changes = report.changes.len(),
                similarity = report.similarity,
                "round trip drifted"
            );
        }
        report
    }

    /// Line diff between two texts
    pub fn compare(old: &str, new: &str) -> Self {
        if old == new {
            return Self {
                blocks: 0,
                is_identical: true,
                changes: Vec::new(),
                similarity: 1.0,
                output: new.to_string(),
            };
        }

        let text_diff = TextDiff::from_lines(old, new);
        let similarity = text_diff.ratio() as f64;

        let changes = text_diff
            .iter_all_changes()
            .filter_map(|change| {
                let content = change.value().trim_end_matches(['\r', '\n']).to_string();
                match change.tag() {
                    ChangeTag::Delete => Some(LineChange::Removed {
                        line: change.old_index().map_or(0, |i| i + 1),
                        content,
                    }),
                    ChangeTag::Insert => Some(LineChange::Added {
                        line: change.new_index().map_or(0, |i| i + 1),
                        content,
                    }),
                    ChangeTag::Equal => None,
                }
            })
            .collect();

        Self {
            blocks: 0,
            is_identical: false,
            changes,
            similarity,
            output: new.to_string(),
        }
    }
}
