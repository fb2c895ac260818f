// ABOUTME: Rating engine configuration for daily targets, factor tiers, weights, and thresholds
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rating Configuration Module
//!
//! Every threshold the rating pipeline uses lives here, with defaults equal to the
//! constants in `nutri_core::constants`.
//!
//! # Module Structure
//!
//! - `daily_targets` - BMR, TDEE, goal adjustments, and macro targets
//! - `factors` - Tier thresholds and scores for the six factor evaluators
//! - `rating` - Aggregation weights, classifier thresholds, suggestion limits, engine switches
//!
//! Values can be overridden through environment variables with the `NUTRI_` prefix.

pub mod daily_targets;
pub mod error;
pub mod factors;
pub mod rating;

pub use daily_targets::{
    ActivityFactorsConfig, BmrConfig, DailyTargetConfig, GoalAdjustmentConfig,
    MacroTargetConfig, ProfileFallbackConfig,
};
pub use error::ConfigError;
pub use factors::{
    BalanceFactorConfig, CaloriesFactorConfig, FactorConfig, FatFactorConfig,
    GlycemicFactorConfig, MealSharesConfig, NutriGradeFactorConfig, PercentBand,
    SodiumFactorConfig, TierScores,
};
pub use rating::{
    AggregationConfig, ClassifierConfig, EngineConfig, FactorWeights, SuggestionConfig,
    WEIGHT_SUM_TOLERANCE,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static RATING_CONFIG: OnceLock<RatingConfig> = OnceLock::new();

/// Main rating configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Daily target calculator settings
    pub daily_targets: DailyTargetConfig,
    /// Factor evaluator settings
    pub factors: FactorConfig,
    /// Score aggregation weights
    pub aggregation: AggregationConfig,
    /// Traffic-light thresholds
    pub classifier: ClassifierConfig,
    /// Suggestion generator limits
    pub suggestions: SuggestionConfig,
    /// Engine execution switches
    pub engine: EngineConfig,
}

impl RatingConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        RATING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load rating config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config = config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found across all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.daily_targets.validate()?;
        self.factors.validate()?;
        self.aggregation.validate()?;
        self.classifier.validate()?;
        self.suggestions.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    // Long function: Systematic env var parsing for every rating subsystem
    #[allow(clippy::too_many_lines)]
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Daily targets
        Self::apply_env_var(
            "NUTRI_ACTIVITY_SEDENTARY",
            &mut self.daily_targets.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "NUTRI_ACTIVITY_LIGHT",
            &mut self.daily_targets.activity_factors.light,
        )?;
        Self::apply_env_var(
            "NUTRI_ACTIVITY_MODERATE",
            &mut self.daily_targets.activity_factors.moderate,
        )?;
        Self::apply_env_var(
            "NUTRI_ACTIVITY_ACTIVE",
            &mut self.daily_targets.activity_factors.active,
        )?;
        Self::apply_env_var(
            "NUTRI_LOSE_WEIGHT_ADJUSTMENT_KCAL",
            &mut self.daily_targets.goal_adjustments.lose_weight_kcal,
        )?;
        Self::apply_env_var(
            "NUTRI_GAIN_MUSCLE_ADJUSTMENT_KCAL",
            &mut self.daily_targets.goal_adjustments.gain_muscle_kcal,
        )?;
        Self::apply_env_var(
            "NUTRI_SODIUM_DAILY_LIMIT_MG",
            &mut self.daily_targets.sodium_limit_mg,
        )?;
        Self::apply_env_var(
            "NUTRI_FALLBACK_AGE",
            &mut self.daily_targets.fallbacks.age_years,
        )?;

        // Factor tiers
        Self::apply_env_var(
            "NUTRI_CALORIES_GOOD_DEVIATION",
            &mut self.factors.calories.good_deviation,
        )?;
        Self::apply_env_var(
            "NUTRI_CALORIES_MODERATE_DEVIATION",
            &mut self.factors.calories.moderate_deviation,
        )?;
        Self::apply_env_var(
            "NUTRI_CALORIES_GOAL_BONUS",
            &mut self.factors.calories.goal_bonus,
        )?;
        Self::apply_env_var("NUTRI_SODIUM_LOW_MG", &mut self.factors.sodium.low_mg)?;
        Self::apply_env_var(
            "NUTRI_SODIUM_MEAL_BUDGET_MG",
            &mut self.factors.sodium.meal_budget_mg,
        )?;
        Self::apply_env_var(
            "NUTRI_SODIUM_VERY_HIGH_MG",
            &mut self.factors.sodium.very_high_mg,
        )?;
        Self::apply_env_var("NUTRI_FAT_GOOD_PERCENT", &mut self.factors.fat.good_percent)?;
        Self::apply_env_var(
            "NUTRI_FAT_MODERATE_PERCENT",
            &mut self.factors.fat.moderate_percent,
        )?;

        // Aggregation weights
        let weights = &mut self.aggregation.weights;
        Self::apply_env_var("NUTRI_WEIGHT_CALORIES", &mut weights.calories)?;
        Self::apply_env_var("NUTRI_WEIGHT_SODIUM", &mut weights.sodium)?;
        Self::apply_env_var("NUTRI_WEIGHT_FAT", &mut weights.fat)?;
        Self::apply_env_var("NUTRI_WEIGHT_BALANCE", &mut weights.balance)?;
        Self::apply_env_var("NUTRI_WEIGHT_NUTRI_GRADE", &mut weights.nutri_grade)?;
        Self::apply_env_var("NUTRI_WEIGHT_GI_LEVEL", &mut weights.gi_level)?;

        // Classifier, suggestions, engine
        Self::apply_env_var(
            "NUTRI_GREEN_MIN_SCORE",
            &mut self.classifier.green_min_score,
        )?;
        Self::apply_env_var(
            "NUTRI_YELLOW_MIN_SCORE",
            &mut self.classifier.yellow_min_score,
        )?;
        Self::apply_env_var(
            "NUTRI_MAX_SUGGESTIONS",
            &mut self.suggestions.max_suggestions,
        )?;
        Self::apply_env_var("NUTRI_PARALLEL_FACTORS", &mut self.engine.parallel_factors)?;

        Ok(self)
    }
}
