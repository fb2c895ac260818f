// ABOUTME: Factor evaluators scoring one aspect of a meal each, plus shared helpers
// ABOUTME: Fixed evaluator table in evaluation order with sequential and rayon fan-out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Factor Evaluators
//!
//! Six pure functions share one signature, [`FactorEvaluator`], and are listed in
//! [`FACTOR_EVALUATORS`] in evaluation order. None of them reads another's output, so the
//! engine can run them on the rayon pool without changing the result.
//!
//! Every nutrient is scored from the midpoint of its recognition range.

pub mod balance;
pub mod calories;
pub mod fat;
pub mod glycemic;
pub mod nutri_grade;
pub mod sodium;

use crate::config::intelligence::{FactorConfig, TierScores};
use nutri_core::constants::energy;
use nutri_core::models::{
    DailyTarget, FactorName, FactorResult, FactorStatus, FoodNutritionTotals, GiLevel,
    HealthGoal, MealEvaluationInput, NutriGrade, RecognizedFoodItem, FACTOR_COUNT,
};
use rayon::prelude::*;

/// Everything a factor evaluator may read
#[derive(Debug, Clone, Copy)]
pub struct FactorContext<'a> {
    /// Meal under evaluation
    pub meal: &'a MealEvaluationInput,
    /// Daily target derived from the profile
    pub target: &'a DailyTarget,
    /// Profile goal
    pub goal: HealthGoal,
    /// Tier thresholds and scores
    pub config: &'a FactorConfig,
}

/// Signature shared by all factor evaluators
pub type FactorEvaluator = fn(&FactorContext<'_>) -> FactorResult;

/// Every evaluator, in evaluation order
pub const FACTOR_EVALUATORS: [(FactorName, FactorEvaluator); FACTOR_COUNT] = [
    (FactorName::Calories, calories::evaluate),
    (FactorName::Sodium, sodium::evaluate),
    (FactorName::Fat, fat::evaluate),
    (FactorName::Balance, balance::evaluate),
    (FactorName::NutriGrade, nutri_grade::evaluate),
    (FactorName::GiLevel, glycemic::evaluate),
];

/// Run every evaluator on the current thread
#[must_use]
pub fn evaluate_all(context: &FactorContext<'_>) -> [FactorResult; FACTOR_COUNT] {
    FACTOR_EVALUATORS.map(|(_, evaluate)| evaluate(context))
}

/// Run every evaluator on the rayon pool; output order matches [`FACTOR_EVALUATORS`]
#[must_use]
pub fn evaluate_all_parallel(context: &FactorContext<'_>) -> [FactorResult; FACTOR_COUNT] {
    let mut results = FACTOR_EVALUATORS.map(|(name, _)| FactorResult::neutral(name, ""));
    results
        .par_iter_mut()
        .zip(FACTOR_EVALUATORS.par_iter())
        .for_each(|(slot, (_, evaluate))| *slot = evaluate(context));
    results
}

/// `part` as a percentage of `total`; zero when `total` is not a positive number
#[must_use]
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total.is_finite() && total > 0.0 {
        part * 100.0 / total
    } else {
        0.0
    }
}

/// Three-tier lookup: below `good_below` is good, below `moderate_below` is moderate
#[must_use]
pub fn tier_below(
    value: f64,
    good_below: f64,
    moderate_below: f64,
    scores: TierScores,
) -> (FactorStatus, u8) {
    if value < good_below {
        (FactorStatus::Good, scores.good)
    } else if value < moderate_below {
        (FactorStatus::Moderate, scores.moderate)
    } else {
        (FactorStatus::Poor, scores.poor)
    }
}

/// Share of macro calories contributed by protein, carbohydrates, and fat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    /// Protein share (percent)
    pub protein_percent: f64,
    /// Carbohydrate share (percent)
    pub carbs_percent: f64,
    /// Fat share (percent)
    pub fat_percent: f64,
}

impl MacroSplit {
    /// Split computed from range midpoints; all zero when there are no macro calories
    #[must_use]
    pub fn from_totals(totals: &FoodNutritionTotals) -> Self {
        let protein_kcal = totals.protein.midpoint() * energy::PROTEIN_KCAL_PER_G;
        let carbs_kcal = totals.carbs.midpoint() * energy::CARBS_KCAL_PER_G;
        let fat_kcal = totals.fat.midpoint() * energy::FAT_KCAL_PER_G;
        let total = protein_kcal + carbs_kcal + fat_kcal;

        Self {
            protein_percent: percent_of(protein_kcal, total),
            carbs_percent: percent_of(carbs_kcal, total),
            fat_percent: percent_of(fat_kcal, total),
        }
    }
}

/// Worst Nutri-Grade across foods, by severity
#[must_use]
pub fn worst_nutri_grade(foods: &[RecognizedFoodItem]) -> Option<NutriGrade> {
    foods.iter().filter_map(|food| food.nutri_grade).max()
}

/// Highest glycemic index tag across foods
#[must_use]
pub fn highest_gi(foods: &[RecognizedFoodItem]) -> Option<GiLevel> {
    foods.iter().filter_map(|food| food.gi_level).max()
}

#[cfg(test)]
pub(crate) mod test_support {
    use nutri_core::models::{
        DailyTarget, FoodNutritionTotals, MealContext, MealEvaluationInput, NutrientRange,
        RecognizedFoodItem,
    };

    pub fn target(calories: f64) -> DailyTarget {
        DailyTarget {
            calories,
            protein_g: 84.0,
            carbs_g: calories * 0.5 / 4.0,
            fat_g: calories * 0.25 / 9.0,
            sodium_mg: 2000.0,
        }
    }

    pub fn meal(totals: FoodNutritionTotals, context: MealContext) -> MealEvaluationInput {
        MealEvaluationInput {
            total_nutrition: totals,
            foods: vec![RecognizedFoodItem::named("Test dish")],
            meal_context: context,
        }
    }

    pub fn totals(
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        sodium: f64,
    ) -> FoodNutritionTotals {
        FoodNutritionTotals {
            calories: NutrientRange::exact(calories),
            protein: NutrientRange::exact(protein),
            carbs: NutrientRange::exact(carbs),
            fat: NutrientRange::exact(fat),
            sodium: NutrientRange::exact(sodium),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{meal, target, totals};
    use super::*;
    use nutri_core::models::MealContext;

    #[test]
    fn test_percent_of_guards_zero_total() {
        assert!((percent_of(50.0, 200.0) - 25.0).abs() < f64::EPSILON);
        assert!(percent_of(50.0, 0.0).abs() < f64::EPSILON);
        assert!(percent_of(50.0, -10.0).abs() < f64::EPSILON);
        assert!(percent_of(50.0, f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macro_split_exact_shares() {
        let split = MacroSplit::from_totals(&totals(900.0, 22.5, 157.5, 20.0, 0.0));
        assert!((split.protein_percent - 10.0).abs() < 1e-9);
        assert!((split.carbs_percent - 70.0).abs() < 1e-9);
        assert!((split.fat_percent - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_split_zero_macros() {
        let split = MacroSplit::from_totals(&FoodNutritionTotals::default());
        assert!(split.protein_percent.abs() < f64::EPSILON);
        assert!(split.carbs_percent.abs() < f64::EPSILON);
        assert!(split.fat_percent.abs() < f64::EPSILON);
    }

    #[test]
    fn test_worst_grade_uses_severity() {
        let mut foods = vec![
            RecognizedFoodItem::named("kopi"),
            RecognizedFoodItem::named("teh"),
            RecognizedFoodItem::named("rice"),
        ];
        foods[0].nutri_grade = Some(NutriGrade::B);
        foods[1].nutri_grade = Some(NutriGrade::C);

        assert_eq!(worst_nutri_grade(&foods), Some(NutriGrade::C));
        assert_eq!(worst_nutri_grade(&foods[2..]), None);
    }

    #[test]
    fn test_evaluators_run_in_fixed_order() {
        let config = FactorConfig::default();
        let daily = target(2000.0);
        let lunch = meal(totals(700.0, 30.0, 90.0, 20.0, 600.0), MealContext::Lunch);
        let context = FactorContext {
            meal: &lunch,
            target: &daily,
            goal: HealthGoal::Maintain,
            config: &config,
        };

        let sequential = evaluate_all(&context);
        let parallel = evaluate_all_parallel(&context);

        assert_eq!(sequential.map(|result| result.name), FactorName::ALL);
        assert_eq!(evaluate_all(&context), parallel);
        // Parallel slots are seeded with neutral results; every one must be replaced
        assert!(parallel.iter().all(|result| !result.message.is_empty()));
    }
}
