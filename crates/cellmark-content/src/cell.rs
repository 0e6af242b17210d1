//! Host cell boundary
//!
//! A [`Cell`] is what an editor holds for each notebook cell. Its
//! [`CellMetadata`] carries both the identity fields of the notebook
//! document and the whitespace the parser recorded, so a document can go
//! Markdown -> cells -> Markdown without losing formatting.

use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockKind, MARKUP_LANGUAGE};
use crate::notebook::{NotebookBlock, NotebookBlockKind, NotebookOutput, NotebookOutputItem};
use crate::writer::write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Markup,
    Code,
}

impl From<BlockKind> for CellKind {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Code => Self::Code,
            BlockKind::Markup => Self::Markup,
        }
    }
}

impl From<CellKind> for BlockKind {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Code => Self::Code,
            CellKind::Markup => Self::Markup,
        }
    }
}

/// Typed per-cell metadata
///
/// Every field is optional: a cell the user just inserted has none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading_whitespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_whitespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellOutputItem {
    pub mime: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellOutput {
    pub items: Vec<CellOutputItem>,
}

/// An editor cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub value: String,
    pub language_id: String,
    #[serde(default)]
    pub metadata: CellMetadata,
    #[serde(default)]
    pub outputs: Vec<CellOutput>,
}

impl Cell {
    /// A cell with no metadata, as inserted by a user
    pub fn new(kind: CellKind, value: impl Into<String>, language_id: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            language_id: language_id.into(),
            metadata: CellMetadata::default(),
            outputs: Vec::new(),
        }
    }

    /// Convert a notebook block into a cell
    ///
    /// Code blocks without a language get `default_language`. Output items
    /// with no text are dropped.
    pub fn from_notebook_block(block: &NotebookBlock, default_language: &str) -> Self {
        let kind = match block.kind {
            NotebookBlockKind::Code => CellKind::Code,
            NotebookBlockKind::Markup | NotebookBlockKind::Unknown => CellKind::Markup,
        };

        let language_id = if block.language.is_empty() && kind == CellKind::Code {
            default_language.to_string()
        } else {
            block.language.clone()
        };

        let outputs = block
            .outputs
            .iter()
            .map(|output| CellOutput {
                items: output
                    .items
                    .iter()
                    .filter(|item| {
                        if item.text_data.is_empty() {
                            tracing::debug!(mime = %item.mime, "dropping output item without text");
                            return false;
                        }
                        true
                    })
                    .map(|item| CellOutputItem {
                        mime: item.mime.clone(),
                        data: item.text_data.as_bytes().to_vec(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            kind,
            value: block.contents.clone(),
            language_id,
            metadata: CellMetadata {
                id: (!block.id.is_empty()).then(|| block.id.clone()),
                trace_ids: block.trace_ids.clone(),
                ..CellMetadata::default()
            },
            outputs,
        }
    }

    /// Convert back into a notebook block
    pub fn to_notebook_block(&self) -> NotebookBlock {
        let kind = match self.kind {
            CellKind::Code => NotebookBlockKind::Code,
            CellKind::Markup => NotebookBlockKind::Markup,
        };

        let outputs = self
            .outputs
            .iter()
            .map(|output| NotebookOutput {
                items: output
                    .items
                    .iter()
                    .map(|item| NotebookOutputItem {
                        mime: item.mime.clone(),
                        text_data: String::from_utf8_lossy(&item.data).into_owned(),
                    })
                    .collect(),
            })
            .collect();

        NotebookBlock {
            kind,
            language: self.language_id.clone(),
            contents: self.value.clone(),
            outputs,
            trace_ids: self.metadata.trace_ids.clone(),
            id: self.metadata.id.clone().unwrap_or_default(),
        }
    }
}

impl From<Block> for Cell {
    fn from(block: Block) -> Self {
        Self {
            kind: block.kind.into(),
            value: block.content,
            language_id: block.language,
            metadata: CellMetadata {
                leading_whitespace: block.leading_whitespace,
                trailing_whitespace: block.trailing_whitespace,
                indentation: block.indentation,
                ..CellMetadata::default()
            },
            outputs: Vec::new(),
        }
    }
}

impl From<&Cell> for Block {
    fn from(cell: &Cell) -> Self {
        let language = match cell.kind {
            CellKind::Markup if cell.language_id.is_empty() => MARKUP_LANGUAGE.to_string(),
            _ => cell.language_id.clone(),
        };

        Self {
            kind: cell.kind.into(),
            language,
            content: cell.value.clone(),
            indentation: cell.metadata.indentation.clone(),
            leading_whitespace: cell.metadata.leading_whitespace.clone(),
            trailing_whitespace: cell.metadata.trailing_whitespace.clone(),
        }
    }
}

/// Write editor cells to Markdown
pub fn write_cells(cells: &[Cell]) -> String {
    let blocks: Vec<Block> = cells.iter().map(Block::from).collect();
    write(&blocks)
}
