// ABOUTME: Criterion benchmarks for the meal rating pipeline
// ABOUTME: Measures daily target derivation, single-meal rating, and day rating throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the meal rating pipeline.
//!
//! Compares sequential and rayon-backed factor evaluation, and measures how day
//! rating scales with the number of meals.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutri_rating::models::{
    ActivityLevel, FoodNutritionTotals, Gender, GiLevel, HealthGoal, HealthProfile, MealContext,
    MealEvaluationInput, NutriGrade, NutrientRange, RecognizedFoodItem,
};
use nutri_rating::{compute_daily_target, MealRatingEngine, RatingConfig};

const CONTEXTS: [MealContext; 4] = [
    MealContext::Breakfast,
    MealContext::Lunch,
    MealContext::Dinner,
    MealContext::Snack,
];

fn bench_profile() -> HealthProfile {
    HealthProfile {
        height_cm: 165.0,
        weight_kg: 62.0,
        age: Some(35),
        gender: Some(Gender::Female),
        activity_level: ActivityLevel::Moderate,
        goal: HealthGoal::ControlSugar,
    }
}

/// Deterministic meal whose nutrients vary with `index`
#[allow(clippy::cast_precision_loss)]
fn generate_meal(index: usize) -> MealEvaluationInput {
    let scale = 1.0 + (index % 7) as f64 / 10.0;
    let range = |base: f64| NutrientRange::new(base * scale * 0.9, base * scale * 1.1);

    MealEvaluationInput {
        total_nutrition: FoodNutritionTotals {
            calories: range(550.0),
            protein: range(25.0),
            carbs: range(70.0),
            fat: range(20.0),
            sodium: range(700.0),
        },
        foods: vec![
            RecognizedFoodItem {
                gi_level: Some(if index % 3 == 0 { GiLevel::High } else { GiLevel::Low }),
                is_hawker_food: index % 2 == 0,
                improvement_tip: Some("Ask for less gravy".into()),
                ..RecognizedFoodItem::named(format!("Bench dish {index}"))
            },
            RecognizedFoodItem {
                nutri_grade: Some(if index % 4 == 0 { NutriGrade::D } else { NutriGrade::B }),
                ..RecognizedFoodItem::named("Bench drink")
            },
        ],
        meal_context: CONTEXTS[index % CONTEXTS.len()],
    }
}

fn bench_daily_target(c: &mut Criterion) {
    let profile = bench_profile();
    let config = RatingConfig::default();

    c.bench_function("compute_daily_target", |b| {
        b.iter(|| compute_daily_target(black_box(&profile), black_box(&config.daily_targets)));
    });
}

fn bench_single_meal(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_meal");
    let profile = bench_profile();
    let meal = generate_meal(0);

    let sequential = MealRatingEngine::with_config(RatingConfig::default());
    let mut parallel_config = RatingConfig::default();
    parallel_config.engine.parallel_factors = true;
    let parallel = MealRatingEngine::with_config(parallel_config);

    group.bench_function("sequential_factors", |b| {
        b.iter(|| sequential.evaluate(black_box(&meal), black_box(&profile)).unwrap());
    });
    group.bench_function("parallel_factors", |b| {
        b.iter(|| parallel.evaluate(black_box(&meal), black_box(&profile)).unwrap());
    });

    group.finish();
}

fn bench_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_day");
    let profile = bench_profile();
    let engine = MealRatingEngine::with_config(RatingConfig::default());

    for count in [4_usize, 40, 400] {
        let meals: Vec<MealEvaluationInput> = (0..count).map(generate_meal).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("meals", count), &meals, |b, meals| {
            b.iter(|| engine.evaluate_day(black_box(meals), black_box(&profile)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_daily_target, bench_single_meal, bench_day);
criterion_main!(benches);
