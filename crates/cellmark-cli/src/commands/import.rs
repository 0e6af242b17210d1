//! Import command implementation

use std::path::Path;

use cellmark_content::NotebookDocument;

use super::read_file;
use crate::error::Result;

/// Run the import command
///
/// Prints the notebook document for a Markdown file.
pub fn run_import(file: &Path, default_language: &str, assign_ids: bool) -> Result<()> {
    let doc = import_file(file, default_language, assign_ids)?;
    println!("{}", doc.to_json()?);
    Ok(())
}

fn import_file(file: &Path, default_language: &str, assign_ids: bool) -> Result<NotebookDocument> {
    let text = read_file(file)?;
    let mut doc = NotebookDocument::from_markdown(&text, default_language);

    if assign_ids {
        let assigned = doc.assign_missing_ids();
        tracing::debug!(assigned, "assigned block ids");
    }
    Ok(doc)
}
