//! Command implementations for cellmark-cli

pub mod check;
pub mod convert;
pub mod import;
pub mod parse;
pub mod write;

pub use check::run_check;
pub use convert::run_convert;
pub use import::run_import;
pub use parse::run_parse;
pub use write::run_write;

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{CliError, Result};

/// Read a UTF-8 file, naming the path when it is missing
fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CliError::user(format!("File not found: {}", path.display())),
        _ => CliError::Io(e),
    })
}
