//! Write command implementation

use std::path::Path;

use cellmark_content::{Block, write};

use super::read_file;
use crate::error::Result;

/// Run the write command
///
/// Reads a JSON array of blocks and prints the Markdown exactly, without
/// adding a final newline.
pub fn run_write(file: &Path) -> Result<()> {
    print!("{}", write_file(file)?);
    Ok(())
}

fn write_file(file: &Path) -> Result<String> {
    let json = read_file(file)?;
    let blocks: Vec<Block> = serde_json::from_str(&json)?;
    tracing::info!(file = %file.display(), blocks = blocks.len(), "writing");
    Ok(write(&blocks))
}
