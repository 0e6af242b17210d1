//! Convert command implementation
//!
//! Walks directories and renders every notebook document it finds as a
//! Markdown file next to it.

use std::path::{Path, PathBuf};

use colored::Colorize;

use cellmark_content::NotebookDocument;

use super::read_file;
use crate::config::ConvertConfig;
use crate::error::{CliError, Result};

/// Files handled by one conversion run
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Markdown files written
    pub converted: Vec<PathBuf>,
    /// Notebooks whose Markdown file already existed
    pub skipped: Vec<PathBuf>,
}

/// Run the convert command
pub fn run_convert(dirs: &[PathBuf], config: &ConvertConfig) -> Result<()> {
    let mut report = ConvertReport::default();
    for dir in dirs {
        convert_dir(dir, config, &mut report)?;
    }

    for path in &report.converted {
        println!("{} {}", "Converted".green().bold(), path.display());
    }
    for path in &report.skipped {
        println!("{} {} (exists)", "Skipped".yellow().bold(), path.display());
    }
    if report.converted.is_empty() && report.skipped.is_empty() {
        println!(
            "{} No *.{} files found.",
            "=>".blue().bold(),
            config.extension
        );
    }
    Ok(())
}

/// Convert every matching notebook under `dir`
///
/// Stops at the first notebook that cannot be read or decoded.
pub fn convert_dir(dir: &Path, config: &ConvertConfig, report: &mut ConvertReport) -> Result<()> {
    if !dir.is_dir() {
        return Err(CliError::user(format!(
            "Directory {} doesn't exist",
            dir.display()
        )));
    }

    let mut notebooks = Vec::new();
    collect_notebooks(dir, &config.extension, &mut notebooks)?;
    notebooks.sort();

    for notebook in notebooks {
        let target = notebook.with_extension("md");
        if target.exists() && !config.overwrite {
            tracing::debug!(markdown = %target.display(), "markdown exists, skipping");
            report.skipped.push(target);
            continue;
        }

        let json = read_file(&notebook)?;
        let doc = NotebookDocument::from_json(&json).map_err(|e| {
            CliError::user(format!("Failed to convert {}: {}", notebook.display(), e))
        })?;
        std::fs::write(&target, doc.to_markdown())?;

        tracing::info!(markdown = %target.display(), "Converted file");
        report.converted.push(target);
    }
    Ok(())
}

fn collect_notebooks(dir: &Path, extension: &str, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_notebooks(&path, extension, out)?;
        } else if path.extension().is_some_and(|ext| ext == extension) {
            out.push(path);
        }
    }
    Ok(())
}
