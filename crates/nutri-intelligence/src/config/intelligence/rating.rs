// ABOUTME: Aggregation weights, classifier thresholds, suggestion limits, and engine switches
// ABOUTME: Everything downstream of the factor evaluators that the rating engine can tune
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use nutri_core::constants::{rating, suggestions, weights};
use nutri_core::models::{FactorName, MAX_SCORE};
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that weights sum to 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Aggregation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Weight per factor
    pub weights: FactorWeights,
}

/// Weight per factor, expressed as fractions summing to 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Calories: 0.25
    pub calories: f64,
    /// Sodium: 0.20
    pub sodium: f64,
    /// Fat: 0.15
    pub fat: f64,
    /// Balance: 0.15
    pub balance: f64,
    /// Nutri-Grade: 0.15
    pub nutri_grade: f64,
    /// GI Level: 0.10
    pub gi_level: f64,
}

impl FactorWeights {
    /// Weight for a factor
    #[must_use]
    pub const fn weight_for(&self, name: FactorName) -> f64 {
        match name {
            FactorName::Calories => self.calories,
            FactorName::Sodium => self.sodium,
            FactorName::Fat => self.fat,
            FactorName::Balance => self.balance,
            FactorName::NutriGrade => self.nutri_grade,
            FactorName::GiLevel => self.gi_level,
        }
    }

    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        FactorName::ALL
            .iter()
            .map(|name| self.weight_for(*name))
            .sum()
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            calories: percent(weights::CALORIES_PERCENT),
            sodium: percent(weights::SODIUM_PERCENT),
            fat: percent(weights::FAT_PERCENT),
            balance: percent(weights::BALANCE_PERCENT),
            nutri_grade: percent(weights::NUTRI_GRADE_PERCENT),
            gi_level: percent(weights::GI_LEVEL_PERCENT),
        }
    }
}

fn percent(value: u32) -> f64 {
    f64::from(value) / 100.0
}

/// Traffic-light thresholds (inclusive lower bounds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum score rated green: 80
    pub green_min_score: u8,
    /// Minimum score rated yellow: 60
    pub yellow_min_score: u8,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            green_min_score: rating::GREEN_MIN_SCORE,
            yellow_min_score: rating::YELLOW_MIN_SCORE,
        }
    }
}

/// Suggestion generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum suggestions per rating: 4
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: suggestions::MAX_SUGGESTIONS,
        }
    }
}

/// Engine execution switches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Evaluate the six factors on the rayon pool instead of sequentially
    pub parallel_factors: bool,
}

impl AggregationConfig {
    /// Validate weights
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` when any weight is negative or non-finite,
    /// or the weights do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all_valid = FactorName::ALL.iter().all(|name| {
            let weight = self.weights.weight_for(*name);
            weight.is_finite() && weight >= 0.0
        });
        if !all_valid {
            return Err(ConfigError::InvalidWeights(
                "Factor weights must be finite and non-negative",
            ));
        }
        if (self.weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("Factor weights must sum to 1.0"));
        }
        Ok(())
    }
}

impl ClassifierConfig {
    /// Validate thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` unless `yellow < green <= 100`
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.green_min_score > MAX_SCORE {
            return Err(ConfigError::ValueOutOfRange(
                "green_min_score must be at most 100",
            ));
        }
        if self.yellow_min_score >= self.green_min_score {
            return Err(ConfigError::InvalidRange(
                "yellow_min_score must be below green_min_score",
            ));
        }
        Ok(())
    }
}

impl SuggestionConfig {
    /// Validate limits
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` when `max_suggestions` is zero or above
    /// the fixed cap of four
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_suggestions == 0 || self.max_suggestions > suggestions::MAX_SUGGESTIONS {
            return Err(ConfigError::ValueOutOfRange(
                "max_suggestions must be between 1 and 4",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = AggregationConfig::default();
        assert!((config.weights.total() - 1.0).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_suggestion_limit_bounds() {
        assert!(SuggestionConfig { max_suggestions: 1 }.validate().is_ok());
        assert!(SuggestionConfig { max_suggestions: 0 }.validate().is_err());
        assert!(matches!(
            SuggestionConfig { max_suggestions: 5 }.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = AggregationConfig::default();
        config.weights.calories = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = AggregationConfig::default();
        config.weights.sodium = -0.1;
        config.weights.calories = 0.55;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_classifier_threshold_order() {
        assert!(ClassifierConfig::default().validate().is_ok());
        let inverted = ClassifierConfig {
            green_min_score: 60,
            yellow_min_score: 80,
        };
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
