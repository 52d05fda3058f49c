//! Chainauth CLI - tamper-evident authentication audit trail.
//!
//! Runs the login/registration flow against an in-memory hash-chained
//! ledger, exports trails to JSON and re-verifies them.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config_bridge;
mod theme;
mod trail;

use commands::{config, demo, trail as trail_cmd};
use config_bridge::DisplayOptions;

/// Chainauth - tamper-evident authentication audit trail
#[derive(Parser)]
#[command(name = "chainauth")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CHAINAUTH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the register, login and logout flow and print the trail
    Demo {
        /// Username to act as
        #[arg(short, long, default_value = "alice")]
        user: String,

        /// Write the resulting trail to this file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Print an exported trail
    Show {
        /// Trail file
        file: PathBuf,

        /// List the oldest entry first
        #[arg(long)]
        oldest_first: bool,
    },

    /// Verify an exported trail; exits non-zero if tampered
    Verify {
        /// Trail file
        file: PathBuf,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the resolved configuration
    Show {
        /// Output format: toml or json
        #[arg(short, long, default_value = "toml")]
        format: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let resolved = chainauth_config::Config::load(cli.config.as_deref());

    // Set up logging from config, with --verbose override.
    let log_config = if let Ok(r) = &resolved {
        let mut lc = config_bridge::to_log_config(&r.config);
        if cli.verbose {
            "debug".clone_into(&mut lc.level);
        }
        lc
    } else {
        let level = if cli.verbose { "debug" } else { "warn" };
        chainauth_telemetry::LogConfig::new(level)
            .with_format(chainauth_telemetry::LogFormat::Compact)
    };
    if let Err(e) = chainauth_telemetry::setup_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let resolved = resolved?;
    let mut display = DisplayOptions::from(&resolved.config);

    match cli.command {
        Commands::Demo { user, export } => {
            let algorithm = config_bridge::hash_algorithm(&resolved.config)?;
            demo::run_demo(&user, export.as_deref(), algorithm, display)?;
        },
        Commands::Show { file, oldest_first } => {
            if oldest_first {
                display.newest_first = false;
            }
            trail_cmd::show_trail(&file, display)?;
        },
        Commands::Verify { file } => {
            if !trail_cmd::verify_trail(&file)? {
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show { format } => config::show_config(&resolved, &format)?,
        },
    }

    Ok(ExitCode::SUCCESS)
}
