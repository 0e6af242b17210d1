//! Markdown writer, the inverse of the parser
//!
//! Re-derives fence syntax and indentation for code blocks and re-joins the
//! blank-line runs recorded on each block. Blocks without whitespace metadata
//! are separated by one blank line.

use crate::block::{Block, BlockKind};
use crate::language::LanguageTable;

const FENCE: &str = "```";

/// Write blocks to Markdown with the built-in language table
pub fn write(blocks: &[Block]) -> String {
    MarkdownWriter::new().write(blocks)
}

/// Configured Markdown writer
#[derive(Debug, Clone, Copy)]
pub struct MarkdownWriter<'a> {
    languages: &'a LanguageTable,
}

impl MarkdownWriter<'static> {
    pub fn new() -> Self {
        Self {
            languages: LanguageTable::builtin(),
        }
    }
}

impl Default for MarkdownWriter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MarkdownWriter<'a> {
    pub fn with_languages(languages: &'a LanguageTable) -> Self {
        Self { languages }
    }

    pub fn write(&self, blocks: &[Block]) -> String {
        let mut out = String::new();

        for (idx, block) in blocks.iter().enumerate() {
            if idx == 0 {
                if let Some(leading) = &block.leading_whitespace {
                    out.push_str(leading);
                }
            }

            match block.kind {
                BlockKind::Code => self.write_code(&mut out, block),
                BlockKind::Markup => out.push_str(&block.content),
            }

            out.push_str(&separator(block, blocks.get(idx + 1)));
        }

        tracing::trace!(blocks = blocks.len(), bytes = out.len(), "wrote markdown");
        out
    }

    fn write_code(&self, out: &mut String, block: &Block) {
        let indentation = block.indentation();

        out.push_str(indentation);
        out.push_str(FENCE);
        out.push_str(self.languages.abbrev_of(&block.language));
        out.push('\n');

        for (idx, line) in block.content.split('\n').enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            out.push_str(indentation);
            out.push_str(line.trim_end_matches('\r'));
        }

        out.push('\n');
        out.push_str(indentation);
        out.push_str(FENCE);
    }
}

/// Whitespace emitted after `current`, merged with the leading run of `next`
fn separator(current: &Block, next: Option<&Block>) -> String {
    let trailing = current.trailing_whitespace.as_deref();

    let Some(next) = next else {
        return trailing.unwrap_or("\n").to_string();
    };
    let leading = next.leading_whitespace.as_deref();

    if let (Some(trailing), Some(leading)) = (trailing, leading) {
        return format!("{trailing}{leading}");
    }

    // At least one side was inserted by the host without metadata.
    let combined = format!("{}{}", trailing.unwrap_or(""), leading.unwrap_or(""));
    if combined.is_empty() || combined == "\n" {
        "\n\n".to_string()
    } else {
        combined
    }
}
