//! Parse command implementation

use std::path::Path;

use cellmark_content::MarkdownParser;

use super::read_file;
use crate::error::Result;

/// Run the parse command
///
/// Prints the blocks of a Markdown file as a pretty JSON array.
pub fn run_parse(file: &Path, default_language: &str) -> Result<()> {
    println!("{}", parse_file(file, default_language)?);
    Ok(())
}

fn parse_file(file: &Path, default_language: &str) -> Result<String> {
    let text = read_file(file)?;
    let blocks = MarkdownParser::new(default_language).parse(&text);
    tracing::info!(file = %file.display(), blocks = blocks.len(), "parsed");
    Ok(serde_json::to_string_pretty(&blocks)?)
}
