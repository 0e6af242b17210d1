//! Lossless conversion between Markdown text and notebook blocks
//!
//! A Markdown document is segmented into an ordered sequence of code and
//! prose blocks, and the sequence can be written back into Markdown that is
//! byte-identical to the source when no block was edited.

pub mod block;
pub mod cell;
pub mod classify;
pub mod diff;
pub mod error;
pub mod language;
pub mod notebook;
pub mod parser;
pub mod writer;

pub use block::{Block, BlockKind, MARKUP_LANGUAGE};
pub use cell::{Cell, CellKind, CellMetadata, CellOutput, CellOutputItem, write_cells};
pub use diff::{LineChange, RoundTripReport};
pub use error::{Error, Result};
pub use language::{LanguageTable, abbrev_of, canonical_of};
pub use notebook::{BASH_LANGUAGE, NotebookBlock, NotebookBlockKind, NotebookDocument};
pub use parser::{MarkdownParser, parse};
pub use writer::{MarkdownWriter, write};
