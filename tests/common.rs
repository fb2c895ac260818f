// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus reusable profiles and meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutri_rating`

use nutri_rating::models::{
    ActivityLevel, FoodNutritionTotals, Gender, GiLevel, HealthGoal, HealthProfile, MealContext,
    MealEvaluationInput, NutriGrade, NutrientRange, RecognizedFoodItem,
};
use nutri_rating::{MealRatingEngine, RatingConfig};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine with default configuration, independent of environment overrides
pub fn default_engine() -> MealRatingEngine {
    init_test_logging();
    MealRatingEngine::with_config(RatingConfig::default())
}

/// 170 cm, 70 kg, 30-year-old lightly active male
pub fn reference_profile(goal: HealthGoal) -> HealthProfile {
    HealthProfile {
        height_cm: 170.0,
        weight_kg: 70.0,
        age: Some(30),
        gender: Some(Gender::Male),
        activity_level: ActivityLevel::Light,
        goal,
    }
}

/// Totals with zero-width ranges
pub fn exact_totals(
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

/// Meal with one plain food
pub fn meal(totals: FoodNutritionTotals, context: MealContext) -> MealEvaluationInput {
    MealEvaluationInput {
        total_nutrition: totals,
        foods: vec![RecognizedFoodItem::named("Sliced fish soup")],
        meal_context: context,
    }
}

/// Balanced lunch for a maintenance profile: 780 kcal, 22/54/24 macro split, 400 mg sodium
pub fn balanced_lunch() -> MealEvaluationInput {
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

/// Hawker dinner with a sweet drink: heavy, salty, oily, high-GI
pub fn hawker_dinner() -> MealEvaluationInput {
    MealEvaluationInput {
        total_nutrition: FoodNutritionTotals {
            calories: NutrientRange::new(850.0, 950.0),
            protein: NutrientRange::new(20.0, 30.0),
            carbs: NutrientRange::new(100.0, 120.0),
            fat: NutrientRange::new(38.0, 46.0),
            sodium: NutrientRange::new(1400.0, 1800.0),
        },
        foods: vec![
            RecognizedFoodItem {
                name_local: Some("Char kway teow".into()),
                gi_level: Some(GiLevel::High),
                is_hawker_food: true,
                improvement_tip: Some("Ask for extra bean sprouts and less lard".into()),
                ..RecognizedFoodItem::named("Fried flat rice noodles")
            },
            RecognizedFoodItem {
                nutri_grade: Some(NutriGrade::D),
                gi_level: Some(GiLevel::Medium),
                ..RecognizedFoodItem::named("Bubble tea")
            },
        ],
        meal_context: MealContext::Dinner,
    }
}
