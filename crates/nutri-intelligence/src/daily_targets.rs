// ABOUTME: Daily nutrition target calculation from a user health profile
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, goal adjustment, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily Target Calculator
//!
//! Targets are derived fresh for every evaluation and never cached. Inputs are assumed
//! to have passed `HealthProfile::validate`, so every function here is infallible.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.

use crate::config::intelligence::{BmrConfig, DailyTargetConfig};
use nutri_core::constants::energy;
use nutri_core::models::{DailyTarget, Gender, HealthProfile};
use serde::{Deserialize, Serialize};

/// Daily target with the intermediate energy figures it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargetBreakdown {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Resulting targets
    pub target: DailyTarget,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Compute the daily target together with BMR and TDEE
#[must_use]
pub fn compute_breakdown(
    profile: &HealthProfile,
    config: &DailyTargetConfig,
) -> DailyTargetBreakdown {
    let age = profile.age.unwrap_or(config.fallbacks.age_years);
    let gender = profile.gender.unwrap_or(config.fallbacks.gender);

    let bmr = calculate_bmr(profile.weight_kg, profile.height_cm, age, gender, &config.bmr);
    let tdee = bmr * config.activity_factors.factor_for(profile.activity_level);
    let calories = (tdee + config.goal_adjustments.adjustment_for(profile.goal)).round();

    let macros = &config.macronutrients;
    let target = DailyTarget {
        calories,
        protein_g: profile.weight_kg * macros.protein_g_per_kg(profile.goal),
        carbs_g: calories * macros.carbs_calorie_share / energy::CARBS_KCAL_PER_G,
        fat_g: calories * macros.fat_calorie_share / energy::FAT_KCAL_PER_G,
        sodium_mg: config.sodium_limit_mg,
    };

    DailyTargetBreakdown { bmr, tdee, target }
}

/// Compute the daily nutrition target for a profile
#[must_use]
pub fn compute_daily_target(profile: &HealthProfile, config: &DailyTargetConfig) -> DailyTarget {
    compute_breakdown(profile, config).target
}
