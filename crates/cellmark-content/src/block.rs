//! Block types produced by the parser and consumed by the writer

use serde::{Deserialize, Serialize};

/// Language recorded on every prose block the parser produces
pub const MARKUP_LANGUAGE: &str = "markdown";

/// Whether a block is fenced code or prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Code,
    Markup,
}

/// One contiguous unit of a Markdown document
///
/// `content` never carries the surrounding blank lines; those live in the
/// whitespace fields. A `None` whitespace field means the block has no
/// whitespace metadata, which is the case for blocks a host inserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Canonical language identifier
    pub language: String,
    /// Text with fences, indentation and surrounding blank lines stripped
    pub content: String,
    /// Prefix that preceded the opening fence, re-applied on write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indentation: Option<String>,
    /// Blank-line run before the block (only non-empty on the first block)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading_whitespace: Option<String>,
    /// Blank-line run after the block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_whitespace: Option<String>,
}

impl Block {
    /// A prose block without whitespace metadata
    pub fn markup(content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Markup,
            language: MARKUP_LANGUAGE.to_string(),
            content: content.into(),
            indentation: None,
            leading_whitespace: None,
            trailing_whitespace: None,
        }
    }

    /// A code block without whitespace metadata
    pub fn code(language: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Code,
            language: language.into(),
            content: content.into(),
            indentation: None,
            leading_whitespace: None,
            trailing_whitespace: None,
        }
    }

    /// Indentation as a string slice, empty when absent
    pub fn indentation(&self) -> &str {
        self.indentation.as_deref().unwrap_or("")
    }
}
