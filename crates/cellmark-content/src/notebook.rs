//! Structured notebook document
//!
//! The JSON form a host persists for a notebook: an ordered list of blocks,
//! each with identity, trace ids and captured outputs. Field names follow
//! the protobuf JSON mapping (`traceIds`, `textData`, `"CODE"`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::block::Block;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::parser::parse;
use crate::writer::write;

/// Language of the shell executor; the usual default for untagged fences
pub const BASH_LANGUAGE: &str = "bash";

/// Fence tag used when rendering captured outputs as Markdown
pub const OUTPUT_LANGUAGE: &str = "output";

/// Kind of a notebook block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotebookBlockKind {
    #[default]
    #[serde(rename = "UNKNOWN_BLOCK_KIND")]
    Unknown,
    Markup,
    Code,
}

impl NotebookBlockKind {
    fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// One item of a block's output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookOutputItem {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mime: String,
    #[serde(default, alias = "text_data", skip_serializing_if = "String::is_empty")]
    pub text_data: String,
}

/// Output produced by running a block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NotebookOutputItem>,
}

/// A block of a notebook document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookBlock {
    #[serde(default, skip_serializing_if = "NotebookBlockKind::is_unknown")]
    pub kind: NotebookBlockKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contents: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<NotebookOutput>,
    #[serde(default, alias = "trace_ids", skip_serializing_if = "Vec::is_empty")]
    pub trace_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl NotebookBlock {
    pub fn markup(contents: impl Into<String>) -> Self {
        Self {
            kind: NotebookBlockKind::Markup,
            contents: contents.into(),
            ..Self::default()
        }
    }

    pub fn code(language: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            kind: NotebookBlockKind::Code,
            language: language.into(),
            contents: contents.into(),
            ..Self::default()
        }
    }

    /// Core blocks for this block: itself, then one fence per output item
    fn to_markdown_blocks(&self) -> Vec<Block> {
        match self.kind {
            NotebookBlockKind::Code => {
                let outputs = self
                    .outputs
                    .iter()
                    .flat_map(|output| &output.items)
                    .map(|item| Block::code(OUTPUT_LANGUAGE, item.text_data.as_str()));
                std::iter::once(Block::code(self.language.as_str(), self.contents.as_str()))
                    .chain(outputs)
                    .collect()
            }
            NotebookBlockKind::Markup | NotebookBlockKind::Unknown => {
                vec![Block::markup(self.contents.as_str())]
            }
        }
    }
}

/// A notebook document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<NotebookBlock>,
}

impl NotebookDocument {
    pub fn new(blocks: Vec<NotebookBlock>) -> Self {
        Self { blocks }
    }

    /// Decode a document from JSON
    ///
    /// Blank input is an empty document. Anything else that fails to decode
    /// is reported as [`Error::UnparsableDocument`].
    pub fn from_json(source: &str) -> Result<Self> {
        let source = source.trim();
        if source.is_empty() {
            tracing::debug!("empty notebook source, returning empty document");
            return Ok(Self::default());
        }

        serde_json::from_str(source).map_err(|e| Error::unparsable(e.to_string()))
    }

    /// Encode as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        tracing::debug!(blocks = self.blocks.len(), bytes = json.len(), "encoded notebook");
        Ok(json)
    }

    /// Build a document from Markdown, one notebook block per parsed block
    pub fn from_markdown(markdown: &str, default_language: &str) -> Self {
        let blocks = parse(markdown, default_language)
            .into_iter()
            .map(|block| Cell::from(block).to_notebook_block())
            .collect();
        Self { blocks }
    }

    /// Render as Markdown
    ///
    /// Blocks carry no whitespace metadata here, so they are separated by a
    /// blank line. Output items follow their code block as `output` fences.
    pub fn to_markdown(&self) -> String {
        let blocks: Vec<Block> = self
            .blocks
            .iter()
            .flat_map(NotebookBlock::to_markdown_blocks)
            .collect();
        write(&blocks)
    }

    /// Give every block without an id a fresh one; returns how many were set
    pub fn assign_missing_ids(&mut self) -> usize {
        let mut assigned = 0;
        for block in self.blocks.iter_mut().filter(|b| b.id.is_empty()) {
            block.id = Uuid::new_v4().to_string();
            assigned += 1;
        }
        assigned
    }
}
