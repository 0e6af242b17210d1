//! CLI end-to-end tests that invoke the compiled `cellmark` binary.
//!
//! These tests use `env!("CARGO_BIN_EXE_cellmark")` to locate the binary and
//! `std::process::Command` to run it against temporary directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn cellmark_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cellmark"))
}

/// Run `cellmark` with the given args in the given directory.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(cellmark_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("CELLMARK_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute cellmark binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

const RUNBOOK: &str = "\n# Deploy\n\nSteps to ship.\n\n```sh\nmake release\n```\n\n    ```py\n    print('indented')\n    ```\n";

#[test]
fn test_parse_then_write_reproduces_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("runbook.md"), RUNBOOK).unwrap();

    let out = run(temp.path(), &["parse", "runbook.md"]);
    assert!(out.status.success(), "parse failed: {}", stderr(&out));
    fs::write(temp.path().join("blocks.json"), stdout(&out)).unwrap();

    let out = run(temp.path(), &["write", "blocks.json"]);
    assert!(out.status.success(), "write failed: {}", stderr(&out));
    assert_eq!(stdout(&out), RUNBOOK);
}

#[test]
fn test_parse_uses_configured_default_language() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doc.md"), "```\nGet-Process\n```\n").unwrap();
    fs::write(
        temp.path().join("cellmark.toml"),
        "[parse]\ndefault_language = \"powershell\"\n",
    )
    .unwrap();

    let out = run(temp.path(), &["parse", "doc.md"]);
    assert!(out.status.success());
    let blocks: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(blocks[0]["language"], "powershell");

    let out = run(temp.path(), &["parse", "doc.md", "--language", "bash"]);
    let blocks: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(blocks[0]["language"], "bash");
}

#[test]
fn test_check_clean_and_drifting_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("clean.md"), RUNBOOK).unwrap();
    fs::write(temp.path().join("untagged.md"), "```\nls\n```\n").unwrap();

    let out = run(temp.path(), &["check", "clean.md"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("OK"));

    let out = run(temp.path(), &["check", "clean.md", "untagged.md"]);
    assert!(!out.status.success());
    assert!(stdout(&out).contains("DRIFT"));
    assert!(stdout(&out).contains("```bash"));
    assert!(stderr(&out).contains("1 of 2 file(s) do not round-trip"));
}

#[test]
fn test_check_json_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("clean.md"), RUNBOOK).unwrap();

    let out = run(temp.path(), &["check", "--json", "clean.md"]);
    assert!(out.status.success());

    let reports: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(reports[0]["file"], "clean.md");
    assert_eq!(reports[0]["is_identical"], true);
    assert_eq!(reports[0]["blocks"], 4);
}

#[test]
fn test_import_with_ids() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("runbook.md"), RUNBOOK).unwrap();

    let out = run(temp.path(), &["import", "runbook.md", "--assign-ids"]);
    assert!(out.status.success(), "import failed: {}", stderr(&out));

    let doc: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let blocks = doc["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[2]["kind"], "CODE");
    assert_eq!(blocks[2]["language"], "sh");
    assert!(blocks.iter().all(|b| b["id"].as_str().is_some_and(|id| !id.is_empty())));
}

#[test]
fn test_convert_directory() {
    let temp = TempDir::new().unwrap();
    let docs = temp.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(
        docs.join("a.notebook"),
        r#"{"blocks": [{"kind": "CODE", "language": "bash", "contents": "uptime"}]}"#,
    )
    .unwrap();

    let out = run(temp.path(), &["convert", "docs"]);
    assert!(out.status.success(), "convert failed: {}", stderr(&out));
    assert!(stdout(&out).contains("Converted"));
    assert_eq!(
        fs::read_to_string(docs.join("a.md")).unwrap(),
        "```bash\nuptime\n```\n"
    );

    let out = run(temp.path(), &["convert", "docs"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Skipped"));
}

#[test]
fn test_missing_file_reports_error() {
    let temp = TempDir::new().unwrap();
    let out = run(temp.path(), &["parse", "nope.md"]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("File not found: nope.md"));
}

#[test]
fn test_missing_explicit_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doc.md"), "# hi\n").unwrap();

    let out = run(temp.path(), &["--config", "missing.toml", "parse", "doc.md"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Config file not found"));
}
