//! cellmark CLI
//!
//! Parses Markdown into notebook blocks, writes blocks back, and checks that
//! documents survive the round trip.

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use config::Config;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        return Err(CliError::user(format!("Failed to set up logging: {e}")));
    }

    let cwd = std::env::current_dir()?;
    let config = Config::load(cli.config.as_deref(), &cwd)?;

    execute_command(cli.command, config)
}

fn execute_command(cmd: Commands, mut config: Config) -> Result<()> {
    let default_language = config.parse.default_language.clone();

    match cmd {
        Commands::Parse { file, language } => {
            commands::run_parse(&file, language.as_deref().unwrap_or(&default_language))
        }
        Commands::Write { file } => commands::run_write(&file),
        Commands::Check { files, json } => commands::run_check(&files, &default_language, json),
        Commands::Import { file, assign_ids } => {
            commands::run_import(&file, &default_language, assign_ids)
        }
        Commands::Convert { dirs, overwrite } => {
            config.convert.overwrite |= overwrite;
            commands::run_convert(&dirs, &config.convert)
        }
    }
}
