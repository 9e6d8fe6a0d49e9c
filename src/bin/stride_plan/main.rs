// ABOUTME: stride-plan CLI for VDOT lookups and training-plan generation
// ABOUTME: Reads JSON requests and run histories, prints plans and blocks as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Command-line front end for the planning engine
//!
//! Usage:
//! ```bash
//! # VDOT, training paces and equivalent times from a race result
//! stride-plan vdot --distance 5k --time 20:00
//!
//! # Suggested target VDOT after 12 weeks of training
//! stride-plan target --vdot 45 --level beginner --weeks 12
//!
//! # Plan and the workouts of week 3 for a JSON request
//! stride-plan plan --request request.json --week 3
//!
//! # Scheduled 14-day block, estimating VDOT from logged runs
//! stride-plan block --request request.json --runs runs.json --start 2026-10-19
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use stride_coach::logging::LoggingConfig;
use stride_coach::{ExperienceLevel, PlannerConfig};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "stride-plan",
    about = "Stride Coach training-plan generator",
    long_about = "VDOT calculations, periodized training plans and scheduled 14-day blocks."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// VDOT, training paces and equivalent race times from a race result
    Vdot {
        /// Race key (5k, 10k, half_marathon, marathon) or distance in miles
        #[arg(long)]
        distance: String,

        /// Finish time as H:MM:SS, MM:SS or seconds
        #[arg(long)]
        time: String,
    },

    /// Suggested target VDOT after a training period
    Target {
        /// Current VDOT
        #[arg(long)]
        vdot: f64,

        /// Experience level (beginner, intermediate, advanced)
        #[arg(long, default_value = "intermediate")]
        level: ExperienceLevel,

        /// Weeks of training
        #[arg(long)]
        weeks: u32,
    },

    /// Plan and one week of workouts for a JSON request
    Plan {
        /// Path to a plan generation request (JSON)
        #[arg(long)]
        request: PathBuf,

        /// Week to materialize
        #[arg(long, default_value = "1")]
        week: u32,

        /// Plan start date (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,
    },

    /// Scheduled 14-day block stored as the active plan
    Block {
        /// Path to a plan generation request (JSON)
        #[arg(long)]
        request: PathBuf,

        /// Optional run history (JSON array of {distance, duration, date})
        #[arg(long)]
        runs: Option<PathBuf>,

        /// Block start date (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = PlannerConfig::load()?;
    debug!(?config, "Planner configuration loaded");

    let output = match cli.command {
        Command::Vdot { distance, time } => commands::vdot(&distance, &time)?,
        Command::Target { vdot, level, weeks } => commands::target(vdot, level, weeks),
        Command::Plan {
            request,
            week,
            start,
        } => commands::plan(config, &request, week, start)?,
        Command::Block {
            request,
            runs,
            start,
        } => commands::block(config, &request, runs.as_deref(), start)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
