// ABOUTME: Ironlog CLI - progression analysis over a JSON training export
// ABOUTME: Analyzes exercises and single sets, validates progressions, and inspects configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze every exercise in an export
//! ironlog-cli --export training.json analyze
//!
//! # Analyze one exercise as of a given date, as JSON
//! ironlog-cli --export training.json --as-of 2025-06-01 --output json analyze 3
//!
//! # Per-set analysis
//! ironlog-cli --export training.json set 3 2
//!
//! # Check a candidate progression
//! ironlog-cli validate 60 65
//!
//! # Show the effective configuration and its warnings
//! ironlog-cli config show
//! ironlog-cli config check
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use ironlog::logging::LoggingConfig;
use ironlog_core::config::ProgressionConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "ironlog-cli",
    about = "Ironlog progressive-overload analysis",
    long_about = "Analyze strength-training history and decide whether to add weight, add reps, deload, or break a plateau."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Training export (JSON)
    #[arg(long, short = 'f', global = true)]
    export: Option<PathBuf>,

    /// Configuration file layered over the environment configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Date to analyze as of (YYYY-MM-DD), defaults to today
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Readable summary
    Text,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze one exercise, or every exercise in the export
    Analyze {
        /// Exercise id (all exercises when omitted)
        exercise_id: Option<i64>,
    },

    /// Analyze one set of an exercise
    Set {
        /// Exercise id
        exercise_id: i64,

        /// Set number, starting at 1
        set_number: u32,
    },

    /// Check whether a weight increase is allowed
    Validate {
        /// Current weight in kg
        old_weight: f64,

        /// Proposed weight in kg
        new_weight: f64,

        /// Maximum jump as a fraction of the current weight
        #[arg(long)]
        max_jump: Option<f64>,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration as JSON
    Show,

    /// Validate the configuration and list warnings
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env().with_level(log_level).init()?;

    let config = load_config(cli.config.as_ref())?;
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    debug!(%as_of, "Effective analysis date");

    match cli.command {
        Command::Analyze { exercise_id } => {
            let export = helpers::require_export(cli.export.as_ref())?;
            commands::analyze::run(export, config, exercise_id, as_of, cli.output).await?;
        }
        Command::Set {
            exercise_id,
            set_number,
        } => {
            let export = helpers::require_export(cli.export.as_ref())?;
            commands::set::run(export, config, exercise_id, set_number, cli.output).await?;
        }
        Command::Validate {
            old_weight,
            new_weight,
            max_jump,
        } => {
            let max_jump = max_jump.unwrap_or(config.thresholds.max_weight_jump_fraction);
            commands::validate::run(old_weight, new_weight, max_jump, cli.output)?;
        }
        Command::Config { action } => match action {
            ConfigCommand::Show => commands::config::show(&config)?,
            ConfigCommand::Check => commands::config::check(&config)?,
        },
    }

    Ok(())
}

/// Environment configuration, with an optional file layered on top
fn load_config(path: Option<&PathBuf>) -> Result<ProgressionConfig> {
    let config = ProgressionConfig::from_env()?;
    let Some(path) = path else {
        return Ok(config);
    };
    let config = config.merge_json_file(path)?;
    config.validate()?;
    Ok(config)
}
