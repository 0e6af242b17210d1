//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cellmark - Convert Markdown documents to notebook blocks and back
#[derive(Parser, Debug)]
#[command(name = "cellmark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a cellmark.toml (defaults to ./cellmark.toml when present)
    #[arg(short, long, global = true, env = "CELLMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Parse a Markdown file and print its blocks as JSON
    Parse {
        /// Markdown file to parse
        file: PathBuf,

        /// Language for fences without a tag (overrides config)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Write a JSON array of blocks back to Markdown
    Write {
        /// JSON file produced by `cellmark parse`
        file: PathBuf,
    },

    /// Verify that Markdown files survive a parse/write round trip
    ///
    /// Exits with an error when any file drifts.
    ///
    /// Examples:
    ///   cellmark check README.md
    ///   cellmark check docs/*.md --json
    Check {
        /// Markdown files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Import a Markdown file as a notebook document
    Import {
        /// Markdown file to import
        file: PathBuf,

        /// Give every block a fresh id
        #[arg(long)]
        assign_ids: bool,
    },

    /// Convert notebook documents under directories into Markdown
    ///
    /// Every file with the configured extension gets a sibling `.md` file.
    Convert {
        /// Directories to walk
        #[arg(required = true)]
        dirs: Vec<PathBuf>,

        /// Replace Markdown files that already exist
        #[arg(long)]
        overwrite: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_describes_the_tool() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("notebook blocks"), "{help}");
        assert!(help.contains("convert"), "{help}");
    }

    #[test]
    fn parse_requires_a_command() {
        assert!(Cli::try_parse_from(["cellmark"]).is_err());
    }

    #[test]
    fn parse_verbose_flag_after_command() {
        let cli = Cli::parse_from(["cellmark", "parse", "doc.md", "-v"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Commands::Parse {
                file: PathBuf::from("doc.md"),
                language: None,
            }
        );
    }

    #[test]
    fn parse_config_flag() {
        let cli = Cli::parse_from(["cellmark", "--config", "my.toml", "write", "blocks.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert!(matches!(cli.command, Commands::Write { .. }));
    }

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["cellmark", "check", "a.md", "b.md", "--json"]);
        assert_eq!(
            cli.command,
            Commands::Check {
                files: vec![PathBuf::from("a.md"), PathBuf::from("b.md")],
                json: true,
            }
        );
    }

    #[test]
    fn check_requires_files() {
        assert!(Cli::try_parse_from(["cellmark", "check"]).is_err());
    }

    #[test]
    fn parse_import_command() {
        let cli = Cli::parse_from(["cellmark", "import", "doc.md", "--assign-ids"]);
        assert_eq!(
            cli.command,
            Commands::Import {
                file: PathBuf::from("doc.md"),
                assign_ids: true,
            }
        );
    }

    #[test]
    fn parse_convert_command() {
        let cli = Cli::parse_from(["cellmark", "convert", "notes", "more"]);
        assert_eq!(
            cli.command,
            Commands::Convert {
                dirs: vec![PathBuf::from("notes"), PathBuf::from("more")],
                overwrite: false,
            }
        );
    }
}
