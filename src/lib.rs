// ABOUTME: Main library entry point for the nutrition health rating engine
// ABOUTME: Re-exports the engine, data models, configuration, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutri Rating
//!
//! Converts a recognized meal's nutrition payload and a user's health profile into a
//! personalized traffic-light rating, a 0-100 score, six per-factor diagnostics, and up
//! to four improvement suggestions.
//!
//! ## Architecture
//!
//! - **`nutri-core`**: error types, meal/profile/rating models, nutrition constants
//! - **`nutri-intelligence`**: configuration and the rating pipeline
//! - **this crate**: a façade over both plus logging and the `nutri-rating` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use nutri_rating::models::{
//!     ActivityLevel, FoodNutritionTotals, HealthGoal, HealthProfile, MealContext,
//!     MealEvaluationInput, NutrientRange, RecognizedFoodItem,
//! };
//! use nutri_rating::{MealRatingEngine, RatingConfig};
//!
//! let profile = HealthProfile {
//!     height_cm: 170.0,
//!     weight_kg: 70.0,
//!     age: Some(30),
//!     gender: None,
//!     activity_level: ActivityLevel::Light,
//!     goal: HealthGoal::Maintain,
//! };
//! let meal = MealEvaluationInput {
//!     total_nutrition: FoodNutritionTotals {
//!         calories: NutrientRange::new(700.0, 860.0),
//!         protein: NutrientRange::new(35.0, 45.0),
//!         carbs: NutrientRange::new(90.0, 110.0),
//!         fat: NutrientRange::new(18.0, 22.0),
//!         sodium: NutrientRange::new(350.0, 450.0),
//!     },
//!     foods: vec![RecognizedFoodItem::named("Sliced fish soup")],
//!     meal_context: MealContext::Lunch,
//! };
//!
//! let engine = MealRatingEngine::with_config(RatingConfig::default());
//! let rating = engine.evaluate(&meal, &profile)?;
//! assert_eq!(rating.factors.len(), 6);
//! # Ok::<(), nutri_rating::errors::AppError>(())
//! ```

/// Logging configuration and subscriber setup
pub mod logging;

pub use nutri_core::{constants, errors, models};
pub use nutri_intelligence::{
    aggregator, classifier, config, daily_targets, engine, factors, suggestions,
};
pub use nutri_intelligence::{
    compute_breakdown, compute_daily_target, evaluate, ConfigError, DailyTargetBreakdown,
    MealRatingEngine, RatingConfig,
};
