// ABOUTME: Periodize CLI - command-line front end for plan generation and PR detection
// ABOUTME: Reads JSON profiles, readiness and sessions and writes JSON plans to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors
//!
//! Usage:
//! ```bash
//! # One day of a plan
//! periodize-cli day --profile profile.json --date 2025-01-06 --day-index 0
//!
//! # A week, using a readiness history
//! periodize-cli week --profile profile.json --start 2025-01-06 --readiness readiness.json
//!
//! # Six-week microcycle
//! periodize-cli microcycle --profile profile.json --start 2025-01-06
//!
//! # Eight-week training cycle with a summary instead of the full plan
//! periodize-cli cycle --profile profile.json --start 2025-01-06 --weeks 8 --summary
//!
//! # Personal records from a finished session
//! periodize-cli prs --session session.json --prior prs.json
//!
//! # One-rep-max estimate
//! periodize-cli estimate --weight 100 --reps 5 --rpe 8
//!
//! # Browse the exercise catalog
//! periodize-cli catalog --pattern squat --equipment barbell,rack
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use periodize::errors::AppError;
use periodize::PlannerSettings;
use tracing::info;

use helpers::output::OutputOptions;

#[derive(Parser)]
#[command(
    name = "periodize-cli",
    about = "Periodized training-plan generator",
    long_about = "Generate periodized strength, conditioning and HYROX plans from a JSON athlete profile, and detect personal records from finished sessions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a single plan day
    Day {
        /// Profile JSON file ("-" for stdin)
        #[arg(long)]
        profile: PathBuf,

        /// Calendar date of the day
        #[arg(long)]
        date: NaiveDate,

        /// Zero-based day index within the plan
        #[arg(long, default_value = "0")]
        day_index: u32,

        /// Readiness JSON file (entry or array of entries)
        #[arg(long)]
        readiness: Option<PathBuf>,
    },

    /// Generate one week
    Week {
        /// Profile JSON file ("-" for stdin)
        #[arg(long)]
        profile: PathBuf,

        /// First day of the week
        #[arg(long)]
        start: NaiveDate,

        /// Readiness JSON file (entry or array of entries)
        #[arg(long)]
        readiness: Option<PathBuf>,
    },

    /// Generate a six-week microcycle with a technique week
    Microcycle {
        /// Profile JSON file ("-" for stdin)
        #[arg(long)]
        profile: PathBuf,

        /// First day of the microcycle
        #[arg(long)]
        start: NaiveDate,

        /// Readiness JSON file (entry or array of entries)
        #[arg(long)]
        readiness: Option<PathBuf>,
    },

    /// Generate a multi-week training cycle
    Cycle {
        /// Profile JSON file ("-" for stdin)
        #[arg(long)]
        profile: PathBuf,

        /// First day of the cycle
        #[arg(long)]
        start: NaiveDate,

        /// Number of weeks (defaults to the configured cycle length)
        #[arg(long)]
        weeks: Option<u32>,

        /// Readiness JSON file (entry or array of entries)
        #[arg(long)]
        readiness: Option<PathBuf>,

        /// Print a summary instead of the full cycle
        #[arg(long)]
        summary: bool,
    },

    /// Detect personal records in a finished session
    Prs {
        /// Session log JSON file ("-" for stdin)
        #[arg(long)]
        session: PathBuf,

        /// Prior personal records JSON file
        #[arg(long)]
        prior: Option<PathBuf>,

        /// Require this minimum improvement in percent instead of any improvement
        #[arg(long)]
        min_margin: Option<f64>,
    },

    /// Estimate a one-rep-max from a set
    Estimate {
        /// Load lifted
        #[arg(long)]
        weight: f64,

        /// Repetitions performed
        #[arg(long)]
        reps: i32,

        /// Reported RPE
        #[arg(long)]
        rpe: Option<f64>,

        /// Estimation formula (epley, brzycki, blended)
        #[arg(long)]
        algorithm: Option<String>,
    },

    /// List catalog exercises
    Catalog {
        /// Only exercises of this movement pattern
        #[arg(long)]
        pattern: Option<String>,

        /// Only exercises permitted by this comma-separated equipment list
        #[arg(long, value_delimiter = ',')]
        equipment: Option<Vec<String>>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Exit status for a failed command, taken from the first `AppError` in the chain
fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<AppError>())
        .map_or(1, |app_error| app_error.code.exit_code())
}

fn run(cli: Cli) -> Result<()> {
    let settings = PlannerSettings::from_env()?;
    let logging = if cli.verbose {
        settings.logging.clone().with_level("debug")
    } else {
        settings.logging.clone()
    };
    logging.init()?;

    info!("Periodize CLI");
    let output = OutputOptions { pretty: cli.pretty };

    match cli.command {
        Command::Day {
            profile,
            date,
            day_index,
            readiness,
        } => commands::plan::day(
            &settings,
            &output,
            &profile,
            date,
            day_index,
            readiness.as_deref(),
        ),
        Command::Week {
            profile,
            start,
            readiness,
        } => commands::plan::week(&settings, &output, &profile, start, readiness.as_deref()),
        Command::Microcycle {
            profile,
            start,
            readiness,
        } => commands::plan::microcycle(&settings, &output, &profile, start, readiness.as_deref()),
        Command::Cycle {
            profile,
            start,
            weeks,
            readiness,
            summary,
        } => commands::plan::cycle(
            &settings,
            &output,
            &profile,
            start,
            weeks,
            readiness.as_deref(),
            summary,
        ),
        Command::Prs {
            session,
            prior,
            min_margin,
        } => commands::records::prs(&settings, &output, &session, prior.as_deref(), min_margin),
        Command::Estimate {
            weight,
            reps,
            rpe,
            algorithm,
        } => commands::records::estimate(&output, weight, reps, rpe, algorithm.as_deref()),
        Command::Catalog { pattern, equipment } => {
            commands::catalog::list(&output, pattern.as_deref(), equipment)
        }
    }
}
