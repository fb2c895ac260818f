// ABOUTME: Nutrition health rating engine: daily targets, factor scoring, and suggestions
// ABOUTME: Deterministic pipeline from a recognized meal and health profile to a traffic-light rating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutri Intelligence
//!
//! Rates a recognized meal against a user's health profile. The pipeline runs leaves
//! first and every stage reads only the previous stage's output:
//!
//! 1. [`daily_targets`] derives calorie, macro, and sodium targets from the profile
//! 2. [`factors`] scores six aspects of the meal independently
//! 3. [`aggregator`] combines the factor scores with fixed weights
//! 4. [`classifier`] maps the score to red, yellow, or green
//! 5. [`suggestions`] turns weak factors and food metadata into ranked tips
//!
//! [`engine::MealRatingEngine`] validates inputs and runs the whole pipeline.

/// Weighted aggregation of factor scores
pub mod aggregator;
/// Score to traffic-light classification
pub mod classifier;
/// Rating engine configuration
pub mod config;
/// Daily target calculator
pub mod daily_targets;
/// Pipeline orchestration
pub mod engine;
/// The six factor evaluators
pub mod factors;
/// Suggestion generator
pub mod suggestions;

pub use config::{ConfigError, RatingConfig};
pub use daily_targets::{compute_breakdown, compute_daily_target, DailyTargetBreakdown};
pub use engine::{evaluate, MealRatingEngine};
