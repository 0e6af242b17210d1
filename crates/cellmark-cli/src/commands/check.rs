//! Check command implementation
//!
//! Parses each file, writes it back, and reports files whose Markdown does
//! not survive unchanged.

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde_json::json;

use cellmark_content::{LineChange, RoundTripReport};

use super::read_file;
use crate::error::{CliError, Result};

/// Run the check command
///
/// Fails when at least one file drifts.
pub fn run_check(files: &[PathBuf], default_language: &str, json: bool) -> Result<()> {
    let reports = check_files(files, default_language)?;

    if json {
        let json_output: Vec<_> = reports
            .iter()
            .map(|(file, report)| {
                json!({
                    "file": file.display().to_string(),
                    "blocks": report.blocks,
                    "is_identical": report.is_identical,
                    "similarity": report.similarity,
                    "changes": report.changes,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else {
        for (file, report) in &reports {
            print_report(file, report);
        }
    }

    let drifted = reports.iter().filter(|(_, r)| !r.is_identical).count();
    if drifted > 0 {
        return Err(CliError::user(format!(
            "{} of {} file(s) do not round-trip",
            drifted,
            reports.len()
        )));
    }
    Ok(())
}

fn check_files<'a>(
    files: &'a [PathBuf],
    default_language: &str,
) -> Result<Vec<(&'a Path, RoundTripReport)>> {
    files
        .iter()
        .map(|file| {
            let text = read_file(file)?;
            let report = RoundTripReport::check(&text, default_language);
            tracing::debug!(
                file = %file.display(),
                blocks = report.blocks,
                identical = report.is_identical,
                "checked"
            );
            Ok((file.as_path(), report))
        })
        .collect()
}

fn print_report(file: &Path, report: &RoundTripReport) {
    if report.is_identical {
        println!(
            "{} {} ({} blocks)",
            "OK".green().bold(),
            file.display(),
            report.blocks
        );
        return;
    }

    println!(
        "{} {} ({:.1}% similar)",
        "DRIFT".red().bold(),
        file.display(),
        report.similarity * 100.0
    );
    for change in &report.changes {
        match change {
            LineChange::Removed { line, content } => {
                println!("  {} {:>4}: {}", "-".red(), line, content.red());
            }
            LineChange::Added { line, content } => {
                println!("  {} {:>4}: {}", "+".green(), line, content.green());
            }
        }
    }
}
