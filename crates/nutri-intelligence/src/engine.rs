// ABOUTME: Meal rating engine orchestrating targets, factors, aggregation, classification, and tips
// ABOUTME: Validates inputs at the boundary, then runs the pure pipeline with no error branches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Rating Engine
//!
//! ```text
//! HealthProfile --> daily target --+
//!                                  +--> 6 factors --> score --> rating
//! MealEvaluationInput -------------+        |
//!                                           +-------------------> suggestions
//! ```

use crate::aggregator::aggregate_score;
use crate::classifier::classify;
use crate::config::intelligence::RatingConfig;
use crate::daily_targets::{compute_breakdown, DailyTargetBreakdown};
use crate::factors::{evaluate_all, evaluate_all_parallel, FactorContext};
use crate::suggestions::generate_suggestions_with_target;
use nutri_core::errors::AppResult;
use nutri_core::models::{DailyTarget, HealthProfile, HealthRating, MealEvaluationInput};
use tracing::{debug, instrument, warn};

/// Stateless evaluator bound to one configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MealRatingEngine {
    config: RatingConfig,
}

impl Default for MealRatingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MealRatingEngine {
    /// Engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RatingConfig::global().clone(),
        }
    }

    /// Engine using a caller-supplied configuration, taken as already validated
    #[must_use]
    pub const fn with_config(config: RatingConfig) -> Self {
        Self { config }
    }

    /// Engine using a caller-supplied configuration after validating it
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when the configuration fails validation
    pub fn try_with_config(config: RatingConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Daily target, BMR, and TDEE for a profile
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the profile is physically implausible
    pub fn daily_target(&self, profile: &HealthProfile) -> AppResult<DailyTargetBreakdown> {
        validate_profile(profile)?;
        Ok(compute_breakdown(profile, &self.config.daily_targets))
    }

    /// Rate one meal against a health profile
    ///
    /// # Errors
    ///
    /// Returns an error when the meal or profile violates the input contract
    #[instrument(
        skip_all,
        fields(
            meal_context = %meal.meal_context,
            goal = %profile.goal,
            foods = meal.foods.len(),
        )
    )]
    pub fn evaluate(
        &self,
        meal: &MealEvaluationInput,
        profile: &HealthProfile,
    ) -> AppResult<HealthRating> {
        validate_profile(profile)?;
        validate_meal(meal)?;

        let breakdown = compute_breakdown(profile, &self.config.daily_targets);
        debug!(
            bmr = breakdown.bmr,
            tdee = breakdown.tdee,
            calories = breakdown.target.calories,
            "Computed daily target"
        );

        Ok(self.rate(meal, profile, &breakdown.target))
    }

    /// Rate several meals against one profile, computing the daily target once
    ///
    /// # Errors
    ///
    /// Returns the first contract violation found, in input order
    #[instrument(skip_all, fields(meals = meals.len(), goal = %profile.goal))]
    pub fn evaluate_day(
        &self,
        meals: &[MealEvaluationInput],
        profile: &HealthProfile,
    ) -> AppResult<Vec<HealthRating>> {
        validate_profile(profile)?;
        let target = compute_breakdown(profile, &self.config.daily_targets).target;

        meals
            .iter()
            .map(|meal| {
                validate_meal(meal)?;
                Ok(self.rate(meal, profile, &target))
            })
            .collect()
    }

    fn rate(
        &self,
        meal: &MealEvaluationInput,
        profile: &HealthProfile,
        target: &DailyTarget,
    ) -> HealthRating {
        let context = FactorContext {
            meal,
            target,
            goal: profile.goal,
            config: &self.config.factors,
        };

        let factors = if self.config.engine.parallel_factors {
            evaluate_all_parallel(&context)
        } else {
            evaluate_all(&context)
        };

        let score = aggregate_score(&factors, &self.config.aggregation.weights);
        let overall = classify(score, &self.config.classifier);
        let suggestions =
            generate_suggestions_with_target(&factors, profile.goal, meal, target, &self.config);

        debug!(
            score,
            overall = overall.as_str(),
            suggestions = suggestions.len(),
            "Rated meal"
        );

        HealthRating {
            overall,
            score,
            factors,
            suggestions,
        }
    }
}

/// Rate one meal with the global configuration
///
/// # Errors
///
/// Returns an error when the meal or profile violates the input contract
pub fn evaluate(meal: &MealEvaluationInput, profile: &HealthProfile) -> AppResult<HealthRating> {
    MealRatingEngine::new().evaluate(meal, profile)
}

fn validate_profile(profile: &HealthProfile) -> AppResult<()> {
    profile
        .validate()
        .inspect_err(|e| warn!(error = %e, "Rejected health profile"))
}

fn validate_meal(meal: &MealEvaluationInput) -> AppResult<()> {
    meal.validate()
        .inspect_err(|e| warn!(error = %e, "Rejected meal input"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutri_core::errors::ErrorCode;
    use nutri_core::models::{
        ActivityLevel, FactorName, FoodNutritionTotals, Gender, HealthGoal, MealContext,
        NutrientRange, RatingLevel, RecognizedFoodItem,
    };

    fn profile() -> HealthProfile {
        HealthProfile {
            height_cm: 170.0,
            weight_kg: 70.0,
            age: Some(30),
            gender: Some(Gender::Male),
            activity_level: ActivityLevel::Light,
            goal: HealthGoal::Maintain,
        }
    }

    fn lunch() -> MealEvaluationInput {
        MealEvaluationInput {
            total_nutrition: FoodNutritionTotals {
                calories: NutrientRange::new(700.0, 860.0),
                protein: NutrientRange::new(35.0, 45.0),
                carbs: NutrientRange::new(90.0, 110.0),
                fat: NutrientRange::new(18.0, 22.0),
                sodium: NutrientRange::new(350.0, 450.0),
            },
            foods: vec![RecognizedFoodItem::named("Sliced fish soup")],
            meal_context: MealContext::Lunch,
        }
    }

    fn engine() -> MealRatingEngine {
        MealRatingEngine::with_config(RatingConfig::default())
    }

    #[test]
    fn test_balanced_lunch_is_green() {
        let rating = engine().evaluate(&lunch(), &profile()).unwrap();
        assert_eq!(rating.factors.len(), 6);
        assert_eq!(rating.score, 100);
        assert_eq!(rating.overall, RatingLevel::Green);
        assert!(rating.suggestions.is_empty());
        assert!(rating
            .factor(FactorName::NutriGrade)
            .is_some_and(|factor| factor.message.contains("N/A")));
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let bad = HealthProfile {
            height_cm: -1.0,
            ..profile()
        };
        let err = engine().evaluate(&lunch(), &bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut meal = lunch();
        meal.total_nutrition.sodium = NutrientRange::new(900.0, 100.0);
        assert!(engine().evaluate(&meal, &profile()).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = RatingConfig::default();
        config.classifier.yellow_min_score = 95;
        let err = MealRatingEngine::try_with_config(config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_evaluate_day_matches_single_evaluations() {
        let engine = engine();
        let mut snack = lunch();
        snack.meal_context = MealContext::Snack;
        let meals = vec![lunch(), snack];

        let day = engine.evaluate_day(&meals, &profile()).unwrap();
        assert_eq!(day.len(), 2);
        for (meal, rating) in meals.iter().zip(&day) {
            assert_eq!(&engine.evaluate(meal, &profile()).unwrap(), rating);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut config = RatingConfig::default();
        config.engine.parallel_factors = true;
        let parallel = MealRatingEngine::with_config(config);

        let mut meal = lunch();
        meal.total_nutrition.sodium = NutrientRange::exact(1200.0);
        assert_eq!(
            parallel.evaluate(&meal, &profile()).unwrap(),
            engine().evaluate(&meal, &profile()).unwrap()
        );
    }
}
