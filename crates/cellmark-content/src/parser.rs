//! Markdown segmenter
//!
//! Splits a document into code and prose blocks in one pass over its lines.
//! Every sub-routine takes the cursor position it starts at and returns the
//! position after the last line it consumed.
//!
//! Blank-line runs are owned by the block before them. Only the first block
//! records a leading run; every later run is the previous block's trailing
//! whitespace, so the writer can re-join them without emitting anything twice.

use crate::block::{Block, BlockKind, MARKUP_LANGUAGE};
use crate::classify::{self, FenceStart};
use crate::language::LanguageTable;

/// Parse Markdown with the built-in language table
///
/// `default_language` is given to code fences that carry no tag.
pub fn parse(text: &str, default_language: &str) -> Vec<Block> {
    MarkdownParser::new(default_language).parse(text)
}

/// Configured Markdown segmenter
#[derive(Debug, Clone)]
pub struct MarkdownParser<'a> {
    default_language: String,
    languages: &'a LanguageTable,
}

impl MarkdownParser<'static> {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            languages: LanguageTable::builtin(),
        }
    }
}

impl<'a> MarkdownParser<'a> {
    /// Use a different alias table for fence tags
    pub fn with_languages<'b>(self, languages: &'b LanguageTable) -> MarkdownParser<'b> {
        MarkdownParser {
            default_language: self.default_language,
            languages,
        }
    }

    /// Segment `text` into blocks
    pub fn parse(&self, text: &str) -> Vec<Block> {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        let segmenter = Segmenter {
            lines,
            languages: self.languages,
            default_language: &self.default_language,
        };
        let blocks = segmenter.run();

        tracing::debug!(
            blocks = blocks.len(),
            bytes = text.len(),
            "segmented markdown"
        );
        blocks
    }
}

struct Segmenter<'s> {
    lines: Vec<&'s str>,
    languages: &'s LanguageTable,
    default_language: &'s str,
}

impl<'s> Segmenter<'s> {
    fn run(&self) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut position = 0;

        while position < self.lines.len() {
            let leading = if position == 0 {
                let (run, next) = self.whitespace_run(position, true);
                position = next;
                run
            } else {
                String::new()
            };

            if position >= self.lines.len() {
                break;
            }

            let (block, next) = match classify::fence_start(self.lines[position]) {
                Some(fence) => self.code_block(position, fence, leading),
                None => self.paragraph(position, leading),
            };
            blocks.push(block);
            position = next;
        }

        blocks
    }

    /// Consume consecutive empty lines starting at `start`.
    ///
    /// A run between two blocks gets one extra newline for the terminator of
    /// the line before it. Runs at the start or end of the document do not.
    fn whitespace_run(&self, start: usize, at_document_start: bool) -> (String, usize) {
        let blank = self.lines[start..]
            .iter()
            .take_while(|line| line.is_empty())
            .count();
        let end = start + blank;
        let reaches_end = end == self.lines.len();

        let newlines = if at_document_start || reaches_end {
            blank
        } else {
            blank + 1
        };
        ("\n".repeat(newlines), end)
    }

    fn code_block(&self, start: usize, fence: FenceStart<'s>, leading: String) -> (Block, usize) {
        let tag = self.languages.canonical_of(fence.tag);
        let language = if tag.is_empty() {
            self.default_language
        } else {
            tag
        };

        let body_start = start + 1;
        let closing = self.lines[body_start..]
            .iter()
            .position(|line| classify::is_fence_end(line))
            .map(|offset| body_start + offset);

        let (body_end, next) = match closing {
            Some(end) => (end, end + 1),
            None => {
                // Trailing blank lines of an unterminated fence stay whitespace.
                let trailing_blank = self.lines[body_start..]
                    .iter()
                    .rev()
                    .take_while(|line| line.is_empty())
                    .count();
                let body_end = self.lines.len() - trailing_blank;
                tracing::debug!(line = start + 1, "code fence is never closed");
                (body_end, body_end)
            }
        };

        let content = self.lines[body_start..body_end]
            .iter()
            .map(|line| strip_indentation(line, fence.indentation))
            .collect::<Vec<_>>()
            .join("\n");

        let (trailing, next) = self.whitespace_run(next, false);
        let block = Block {
            kind: BlockKind::Code,
            language: language.to_string(),
            content,
            indentation: (!fence.indentation.is_empty()).then(|| fence.indentation.to_string()),
            leading_whitespace: Some(leading),
            trailing_whitespace: Some(trailing),
        };
        (block, next)
    }

    fn paragraph(&self, start: usize, leading: String) -> (Block, usize) {
        let length = self.lines[start..]
            .iter()
            .take_while(|line| !line.is_empty() && !classify::is_fence_start(line))
            .count();
        let end = start + length;

        let (trailing, next) = self.whitespace_run(end, false);
        let block = Block {
            kind: BlockKind::Markup,
            language: MARKUP_LANGUAGE.to_string(),
            content: self.lines[start..end].join("\n"),
            indentation: None,
            leading_whitespace: Some(leading),
            trailing_whitespace: Some(trailing),
        };
        (block, next)
    }
}

/// Remove the fence indentation from a content line when it is present
fn strip_indentation<'l>(line: &'l str, indentation: &str) -> &'l str {
    if indentation.is_empty() {
        return line;
    }
    line.strip_prefix(indentation).unwrap_or(line)
}
