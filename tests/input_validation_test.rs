// ABOUTME: Integration tests for input contract violations at the engine boundary
// ABOUTME: Malformed ranges, empty food lists, implausible profiles, and unknown enum values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{balanced_lunch, default_engine, reference_profile};
use nutri_rating::errors::ErrorCode;
use nutri_rating::models::{HealthGoal, HealthProfile, MealContext, MealEvaluationInput};
use serde_json::json;

#[test]
fn test_inverted_range_is_rejected() {
    let mut lunch = balanced_lunch();
    lunch.total_nutrition.sodium.min = 500.0;
    lunch.total_nutrition.sodium.max = 400.0;

    let error = default_engine()
        .evaluate(&lunch, &reference_profile(HealthGoal::Maintain))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(error.message.contains("sodium"));
    assert_eq!(error.details["field"], "sodium");
}

#[test]
fn test_negative_and_non_finite_ranges_are_rejected() {
    let engine = default_engine();
    let profile = reference_profile(HealthGoal::Maintain);

    let mut negative = balanced_lunch();
    negative.total_nutrition.protein.min = -5.0;
    assert_eq!(
        engine.evaluate(&negative, &profile).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );

    let mut not_a_number = balanced_lunch();
    not_a_number.total_nutrition.calories.max = f64::NAN;
    assert_eq!(
        engine.evaluate(&not_a_number, &profile).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );

    let mut infinite = balanced_lunch();
    infinite.total_nutrition.carbs.max = f64::INFINITY;
    assert!(engine.evaluate(&infinite, &profile).is_err());
}

#[test]
fn test_empty_foods_with_nutrients_is_rejected() {
    let mut lunch = balanced_lunch();
    lunch.foods.clear();

    let error = default_engine()
        .evaluate(&lunch, &reference_profile(HealthGoal::Maintain))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.details["field"], "foods");
}

#[test]
fn test_implausible_profile_is_rejected() {
    let engine = default_engine();
    let lunch = balanced_lunch();

    let mut zero_weight = reference_profile(HealthGoal::Maintain);
    zero_weight.weight_kg = 0.0;
    assert_eq!(
        engine.evaluate(&lunch, &zero_weight).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );

    let mut ageless = reference_profile(HealthGoal::Maintain);
    ageless.age = Some(0);
    assert!(engine.evaluate(&lunch, &ageless).is_err());
    assert!(engine.daily_target(&ageless).is_err());
}

#[test]
fn test_missing_age_and_gender_are_not_errors() {
    let mut profile = reference_profile(HealthGoal::Maintain);
    profile.age = None;
    profile.gender = None;

    let fallback = default_engine().daily_target(&profile).unwrap();
    let explicit = default_engine()
        .daily_target(&reference_profile(HealthGoal::Maintain))
        .unwrap();
    assert_eq!(fallback, explicit);
}

#[test]
fn test_unknown_meal_context_fails_to_deserialize() {
    let payload = json!({
        "totalNutrition": {
            "calories": { "min": 500.0, "max": 600.0 },
            "protein": { "min": 20.0, "max": 25.0 },
            "carbs": { "min": 60.0, "max": 70.0 },
            "fat": { "min": 15.0, "max": 20.0 },
            "sodium": { "min": 400.0, "max": 500.0 }
        },
        "foods": [{ "name": "Chicken rice" }],
        "mealContext": "brunch"
    });

    assert!(serde_json::from_value::<MealEvaluationInput>(payload).is_err());
    assert!("brunch".parse::<MealContext>().is_err());
}

#[test]
fn test_unknown_goal_fails_to_deserialize() {
    let payload = json!({
        "height_cm": 170.0,
        "weight_kg": 70.0,
        "activityLevel": "light",
        "goal": "bulk-up"
    });

    assert!(serde_json::from_value::<HealthProfile>(payload).is_err());
}
