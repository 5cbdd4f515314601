//! Command-line interface for build environment documents.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use buildenv_core::{init_logging, BuildenvConfig, LogLevel};

mod commands;
mod output;

pub use commands::*;
pub use output::*;

/// CLI arguments parser
#[derive(Parser, Debug)]
#[command(name = "buildenv", author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an environment document and run strict validation on it
    Check {
        /// Environment document (.json or .toml)
        file: PathBuf,
    },

    /// Print the request body for an environment document
    Render {
        /// Environment document (.json or .toml)
        file: PathBuf,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
}

/// Load the tool configuration named on the command line, or the defaults
pub fn load_config(path: Option<&PathBuf>) -> Result<BuildenvConfig> {
    let config = match path {
        Some(path) => BuildenvConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BuildenvConfig::default(),
    };
    Ok(config.with_env_overrides())
}

/// Run the CLI application
pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

/// Run an already-parsed command line
pub fn run_with(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;

    let level = if cli.verbose {
        config.log_level.max(LogLevel::Debug)
    } else {
        config.log_level
    };
    init_logging(level, cli.verbose);
    debug!("Running {:?} with {:?}", cli.command, config);

    match &cli.command {
        Commands::Check { file } => execute_check(file, &config.validation, &Logger::new())?,
        Commands::Render { file, compact } => execute_render(file, !compact)?,
    }

    Ok(())
}
