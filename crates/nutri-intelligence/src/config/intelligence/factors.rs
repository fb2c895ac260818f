// ABOUTME: Factor evaluator configuration for calorie, sodium, fat, balance, grade, and GI scoring
// ABOUTME: Tier thresholds, tier scores, macro bands, and expected meal calorie shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::{ensure_finite, ConfigError};
use nutri_core::constants::{factor_tiers, meal_shares};
use nutri_core::models::{MealContext, MAX_SCORE};
use serde::{Deserialize, Serialize};

/// Settings for all six factor evaluators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorConfig {
    /// Expected share of daily calories per meal slot
    pub meal_shares: MealSharesConfig,
    /// Calorie deviation tiers and goal bonus
    pub calories: CaloriesFactorConfig,
    /// Sodium tiers
    pub sodium: SodiumFactorConfig,
    /// Fat share tiers
    pub fat: FatFactorConfig,
    /// Macro balance bands
    pub balance: BalanceFactorConfig,
    /// Nutri-Grade scores
    pub nutri_grade: NutriGradeFactorConfig,
    /// Glycemic index scores
    pub glycemic: GlycemicFactorConfig,
}

/// Scores awarded per tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierScores {
    /// Score for a good result
    pub good: u8,
    /// Score for a moderate result
    pub moderate: u8,
    /// Score for a poor result
    pub poor: u8,
}

impl TierScores {
    fn validate(self) -> Result<(), ConfigError> {
        if self.good > MAX_SCORE {
            return Err(ConfigError::ValueOutOfRange("Tier scores must be at most 100"));
        }
        if self.poor > self.moderate || self.moderate > self.good {
            return Err(ConfigError::InvalidRange(
                "Tier scores must satisfy poor <= moderate <= good",
            ));
        }
        Ok(())
    }
}

impl Default for TierScores {
    fn default() -> Self {
        Self {
            good: 100,
            moderate: 70,
            poor: 40,
        }
    }
}

/// Expected share of daily calories per meal slot (percent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSharesConfig {
    /// Breakfast: 25%
    pub breakfast_percent: f64,
    /// Lunch: 35%
    pub lunch_percent: f64,
    /// Dinner: 30%
    pub dinner_percent: f64,
    /// Snack: 10%
    pub snack_percent: f64,
}

impl MealSharesConfig {
    /// Expected percent of daily calories for a meal slot
    #[must_use]
    pub const fn expected_percent(&self, context: MealContext) -> f64 {
        match context {
            MealContext::Breakfast => self.breakfast_percent,
            MealContext::Lunch => self.lunch_percent,
            MealContext::Dinner => self.dinner_percent,
            MealContext::Snack => self.snack_percent,
        }
    }
}

impl Default for MealSharesConfig {
    fn default() -> Self {
        Self {
            breakfast_percent: meal_shares::BREAKFAST_PERCENT,
            lunch_percent: meal_shares::LUNCH_PERCENT,
            dinner_percent: meal_shares::DINNER_PERCENT,
            snack_percent: meal_shares::SNACK_PERCENT,
        }
    }
}

/// Calories factor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloriesFactorConfig {
    /// Deviation (percentage points) below which the meal is good: 10
    pub good_deviation: f64,
    /// Deviation below which the meal is moderate: 20
    pub moderate_deviation: f64,
    /// Tier scores (100/70/40)
    pub scores: TierScores,
    /// Bonus when the deviation direction suits the goal: 10
    pub goal_bonus: u8,
    /// Bumped score at which status is upgraded to good: 80
    pub bonus_upgrade_score: u8,
}

impl Default for CaloriesFactorConfig {
    fn default() -> Self {
        Self {
            good_deviation: factor_tiers::CALORIES_GOOD_DEVIATION,
            moderate_deviation: factor_tiers::CALORIES_MODERATE_DEVIATION,
            scores: TierScores::default(),
            goal_bonus: factor_tiers::CALORIES_GOAL_BONUS,
            bonus_upgrade_score: 80,
        }
    }
}

/// Sodium factor configuration (mg per meal)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SodiumFactorConfig {
    /// Below this is low: 500
    pub low_mg: f64,
    /// Below this is within the per-meal budget: 700
    pub meal_budget_mg: f64,
    /// At or above this is very high: 1000
    pub very_high_mg: f64,
    /// Score below `low_mg`: 100
    pub low_score: u8,
    /// Score below `meal_budget_mg`: 80
    pub within_budget_score: u8,
    /// Score below `very_high_mg`: 60
    pub high_score: u8,
    /// Score at or above `very_high_mg`: 30
    pub very_high_score: u8,
}

impl Default for SodiumFactorConfig {
    fn default() -> Self {
        Self {
            low_mg: factor_tiers::SODIUM_LOW_MG,
            meal_budget_mg: factor_tiers::SODIUM_MEAL_BUDGET_MG,
            very_high_mg: factor_tiers::SODIUM_VERY_HIGH_MG,
            low_score: 100,
            within_budget_score: 80,
            high_score: 60,
            very_high_score: 30,
        }
    }
}

/// Fat factor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatFactorConfig {
    /// Fat share of calories below which the meal is good: 25%
    pub good_percent: f64,
    /// Fat share below which the meal is moderate: 35%
    pub moderate_percent: f64,
    /// Tier scores (100/70/40)
    pub scores: TierScores,
}

impl Default for FatFactorConfig {
    fn default() -> Self {
        Self {
            good_percent: factor_tiers::FAT_GOOD_PERCENT,
            moderate_percent: factor_tiers::FAT_MODERATE_PERCENT,
            scores: TierScores::default(),
        }
    }
}

/// Inclusive percentage band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentBand {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl PercentBand {
    /// True when `percent` lies within the band, bounds included
    #[must_use]
    pub fn contains(&self, percent: f64) -> bool {
        (self.min..=self.max).contains(&percent)
    }
}

impl From<(f64, f64)> for PercentBand {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

/// Macro balance factor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceFactorConfig {
    /// Protein share of macro calories: 15-30%
    pub protein_band: PercentBand,
    /// Carbohydrate share of macro calories: 45-65%
    pub carbs_band: PercentBand,
    /// Fat share of macro calories: 20-35%
    pub fat_band: PercentBand,
    /// Scores for 3 / 2 / at most 1 macros in band
    pub scores: TierScores,
}

impl Default for BalanceFactorConfig {
    fn default() -> Self {
        Self {
            protein_band: factor_tiers::PROTEIN_BAND.into(),
            carbs_band: factor_tiers::CARBS_BAND.into(),
            fat_band: factor_tiers::FAT_BAND.into(),
            scores: TierScores::default(),
        }
    }
}

/// Nutri-Grade factor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutriGradeFactorConfig {
    /// Score for grade C: 60
    pub grade_c_score: u8,
    /// Score for grade D: 30
    pub grade_d_score: u8,
}

impl Default for NutriGradeFactorConfig {
    fn default() -> Self {
        Self {
            grade_c_score: 60,
            grade_d_score: 30,
        }
    }
}

/// Glycemic index factor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlycemicFactorConfig {
    /// Score when any food is high-GI: 40
    pub high_gi_score: u8,
}

impl Default for GlycemicFactorConfig {
    fn default() -> Self {
        Self { high_gi_score: 40 }
    }
}

impl FactorConfig {
    fn ensure_thresholds_finite(&self) -> Result<(), ConfigError> {
        let shares = &self.meal_shares;
        ensure_finite(
            &[
                shares.breakfast_percent,
                shares.lunch_percent,
                shares.dinner_percent,
                shares.snack_percent,
            ],
            "Meal calorie shares must be finite",
        )?;
        ensure_finite(
            &[self.calories.good_deviation, self.calories.moderate_deviation],
            "calories: deviation thresholds must be finite",
        )?;
        ensure_finite(
            &[
                self.sodium.low_mg,
                self.sodium.meal_budget_mg,
                self.sodium.very_high_mg,
            ],
            "sodium: thresholds must be finite",
        )?;
        ensure_finite(
            &[self.fat.good_percent, self.fat.moderate_percent],
            "fat: thresholds must be finite",
        )?;
        let balance = &self.balance;
        ensure_finite(
            &[
                balance.protein_band.min,
                balance.protein_band.max,
                balance.carbs_band.min,
                balance.carbs_band.max,
                balance.fat_band.min,
                balance.fat_band.max,
            ],
            "balance: macro bands must be finite",
        )
    }

    /// Validate tier ordering, bands, and scores
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a threshold is not finite, thresholds are not
    /// ascending, a band is inverted, or a score exceeds 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ensure_thresholds_finite()?;

        let shares = &self.meal_shares;
        for share in [
            shares.breakfast_percent,
            shares.lunch_percent,
            shares.dinner_percent,
            shares.snack_percent,
        ] {
            if !(0.0..=100.0).contains(&share) {
                return Err(ConfigError::ValueOutOfRange(
                    "Meal calorie shares must be between 0 and 100 percent",
                ));
            }
        }

        let calories = &self.calories;
        if calories.good_deviation <= 0.0 || calories.good_deviation >= calories.moderate_deviation
        {
            return Err(ConfigError::InvalidRange(
                "calories: good_deviation must be positive and < moderate_deviation",
            ));
        }
        calories.scores.validate()?;
        if calories.bonus_upgrade_score > MAX_SCORE {
            return Err(ConfigError::ValueOutOfRange(
                "calories: bonus_upgrade_score must be at most 100",
            ));
        }

        let sodium = &self.sodium;
        if sodium.low_mg >= sodium.meal_budget_mg || sodium.meal_budget_mg >= sodium.very_high_mg {
            return Err(ConfigError::InvalidRange(
                "sodium: thresholds must satisfy low < meal_budget < very_high",
            ));
        }
        if sodium.low_score > MAX_SCORE
            || sodium.very_high_score > sodium.high_score
            || sodium.high_score > sodium.within_budget_score
            || sodium.within_budget_score > sodium.low_score
        {
            return Err(ConfigError::InvalidRange(
                "sodium: scores must descend as sodium rises and stay at most 100",
            ));
        }

        if self.fat.good_percent >= self.fat.moderate_percent {
            return Err(ConfigError::InvalidRange(
                "fat: good_percent must be < moderate_percent",
            ));
        }
        self.fat.scores.validate()?;

        let balance = &self.balance;
        for band in [balance.protein_band, balance.carbs_band, balance.fat_band] {
            if band.min > band.max || band.min < 0.0 || band.max > 100.0 {
                return Err(ConfigError::InvalidRange(
                    "balance: macro bands must satisfy 0 <= min <= max <= 100",
                ));
            }
        }
        balance.scores.validate()?;

        if self.nutri_grade.grade_c_score > MAX_SCORE
            || self.nutri_grade.grade_d_score > self.nutri_grade.grade_c_score
        {
            return Err(ConfigError::InvalidRange(
                "nutri_grade: scores must satisfy D <= C <= 100",
            ));
        }
        if self.glycemic.high_gi_score > MAX_SCORE {
            return Err(ConfigError::ValueOutOfRange(
                "glycemic: high_gi_score must be at most 100",
            ));
        }

        Ok(())
    }
}
