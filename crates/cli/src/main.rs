//! bmake-shim CLI - reports and checks the shim's version identifier

mod config;
mod logging;

use anyhow::{Context, Result};
use bmake_shim_core::{
    BuildVersionProvider, VersionIdentifier, VersionProvider, VersionValidator, PACKAGE_NAME,
    VERSION,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::config::{CliConfig, DEFAULT_LOG_FORMAT};

#[derive(Parser, Debug)]
#[command(name = "bmake-shim")]
#[command(about = "Version information for the bmake shim", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log format (pretty or json)
    #[arg(long, global = true, env = "BMAKE_SHIM_LOG_FORMAT", default_value = DEFAULT_LOG_FORMAT)]
    log_format: String,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Print the version identifier
    Version {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the version identifier is non-empty
    Check,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Version { json: false }
    }
}

#[derive(Serialize)]
struct VersionReport<'a> {
    name: &'a str,
    version: &'a VersionIdentifier,
}

fn render_version(version: &VersionIdentifier, json: bool) -> Result<String> {
    if json {
        let report = VersionReport {
            name: PACKAGE_NAME,
            version,
        };
        serde_json::to_string(&report).context("Failed to serialize version report")
    } else {
        Ok(version.to_string())
    }
}

/// Dispatch a command and return what goes to stdout.
fn run(command: Commands, provider: Arc<dyn VersionProvider>) -> Result<String> {
    match command {
        Commands::Version { json } => render_version(&provider.version(), json),

        Commands::Check => {
            let version = VersionValidator::new(provider).validate()?;
            Ok(format!("{} {} {}", "✓".green(), PACKAGE_NAME.bold(), version))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::new(&cli.log_format)?;
    logging::init_logging(&config)?;

    let provider: Arc<dyn VersionProvider> = Arc::new(BuildVersionProvider);
    let command = cli.command.unwrap_or_default();
    debug!(command = ?command, "Running command");

    match run(command, provider) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e.to_string().red());
            Err(e)
        }
    }
}
