// ABOUTME: Core data models for meals, health profiles, and ratings
// ABOUTME: Re-exports the input and output types shared by every pipeline stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recognized meal input models
pub mod nutrition;
/// Health profile and daily target models
pub mod profile;
/// Rating output models
pub mod rating;

pub use nutrition::{
    FoodNutritionTotals, GiLevel, MealContext, MealEvaluationInput, NutriGrade, NutrientRange,
    RecognizedFoodItem,
};
pub use profile::{ActivityLevel, DailyTarget, Gender, HealthGoal, HealthProfile};
pub use rating::{
    FactorName, FactorResult, FactorStatus, HealthRating, RatingLevel, FACTOR_COUNT, MAX_SCORE,
};
