// ABOUTME: Developer CLI for rating meals and inspecting daily targets from JSON files
// ABOUTME: Prints HealthRating or daily target JSON on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Rate one meal
//! nutri-rating evaluate --meal meal.json --profile profile.json --pretty
//!
//! # Rate a day of meals (JSON array) against one profile
//! nutri-rating day --meals meals.json --profile profile.json
//!
//! # Show BMR, TDEE, and daily targets for a profile
//! nutri-rating targets --profile profile.json
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use nutri_rating::logging::LoggingConfig;
use nutri_rating::models::{HealthProfile, MealEvaluationInput};
use nutri_rating::MealRatingEngine;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nutri-rating",
    about = "Nutrition health rating engine CLI",
    long_about = "Rate recognized meals against a health profile and inspect the daily targets behind the rating."
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

#[derive(Subcommand)]
enum Command {
    /// Rate a single meal
    Evaluate {
        /// Path to a `MealEvaluationInput` JSON file
        #[arg(long)]
        meal: PathBuf,
        /// Path to a `HealthProfile` JSON file
        #[arg(long)]
        profile: PathBuf,
    },
    /// Rate a JSON array of meals against one profile
    Day {
        /// Path to a JSON array of `MealEvaluationInput`
        #[arg(long)]
        meals: PathBuf,
        /// Path to a `HealthProfile` JSON file
        #[arg(long)]
        profile: PathBuf,
    },
    /// Show BMR, TDEE, and daily targets for a profile
    Targets {
        /// Path to a `HealthProfile` JSON file
        #[arg(long)]
        profile: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let engine = MealRatingEngine::new();

    match cli.command {
        Command::Evaluate { meal, profile } => {
            let meal: MealEvaluationInput = read_json(&meal)?;
            let profile: HealthProfile = read_json(&profile)?;
            let rating = engine.evaluate(&meal, &profile)?;
            info!(score = rating.score, overall = %rating.overall, "Meal rated");
            print_json(&rating, cli.pretty)
        }
        Command::Day { meals, profile } => {
            let meals: Vec<MealEvaluationInput> = read_json(&meals)?;
            let profile: HealthProfile = read_json(&profile)?;
            let ratings = engine.evaluate_day(&meals, &profile)?;
            info!(meals = ratings.len(), "Day rated");
            print_json(&ratings, cli.pretty)
        }
        Command::Targets { profile } => {
            let profile: HealthProfile = read_json(&profile)?;
            let breakdown = engine.daily_target(&profile)?;
            print_json(&breakdown, cli.pretty)
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents).map_err(|e| anyhow!("Invalid JSON in {}: {e}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}
