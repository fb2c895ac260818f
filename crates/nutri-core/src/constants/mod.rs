// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrition science constants and rating engine defaults grouped by pipeline stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values here are the defaults behind every configurable threshold in the rating
//! engine. The configuration layer copies them into its `Default` impls so that an
//! unconfigured engine behaves exactly as documented.

/// Energy density of macronutrients (Atwater general factors)
///
/// Reference: Atwater, W.O. & Bryant, A.P. (1900). The availability and fuel value of food materials.
pub mod energy {
    /// Protein energy density (kcal/g)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate energy density (kcal/g)
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat energy density (kcal/g)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Daily target defaults
///
/// References:
/// - Mifflin, M.D., et al. (1990). DOI: 10.1093/ajcn/51.2.241
/// - WHO (2012). Guideline: Sodium intake for adults and children.
pub mod daily_targets {
    /// Mifflin-St Jeor weight coefficient
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient
    pub const MSJ_AGE_COEF: f64 = -5.0;
    /// Mifflin-St Jeor male constant
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Mifflin-St Jeor female constant
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

    /// Age assumed when the profile has none
    pub const FALLBACK_AGE_YEARS: u32 = 30;

    /// Calorie adjustment for a weight-loss goal (kcal/day)
    pub const LOSE_WEIGHT_ADJUSTMENT_KCAL: f64 = -500.0;
    /// Calorie adjustment for a muscle-gain goal (kcal/day)
    pub const GAIN_MUSCLE_ADJUSTMENT_KCAL: f64 = 300.0;

    /// Protein factor for muscle gain (g/kg)
    pub const PROTEIN_MUSCLE_GAIN_G_PER_KG: f64 = 2.0;
    /// Protein factor for every other goal (g/kg)
    pub const PROTEIN_DEFAULT_G_PER_KG: f64 = 1.2;

    /// Share of daily calories allotted to carbohydrates
    pub const CARBS_CALORIE_SHARE: f64 = 0.50;
    /// Share of daily calories allotted to fat
    pub const FAT_CALORIE_SHARE: f64 = 0.25;

    /// WHO daily sodium cap (mg)
    pub const SODIUM_DAILY_LIMIT_MG: f64 = 2000.0;
}

/// Activity multipliers applied to BMR
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
}

/// Expected share of daily calories per meal slot (percent)
pub mod meal_shares {
    /// Breakfast
    pub const BREAKFAST_PERCENT: f64 = 25.0;
    /// Lunch
    pub const LUNCH_PERCENT: f64 = 35.0;
    /// Dinner
    pub const DINNER_PERCENT: f64 = 30.0;
    /// Snack
    pub const SNACK_PERCENT: f64 = 10.0;
}

/// Factor scoring tiers
pub mod factor_tiers {
    /// Calorie deviation (percentage points) below which a meal scores full marks
    pub const CALORIES_GOOD_DEVIATION: f64 = 10.0;
    /// Calorie deviation below which a meal is moderate
    pub const CALORIES_MODERATE_DEVIATION: f64 = 20.0;
    /// Score bonus when a meal deviates in the direction the goal favours
    pub const CALORIES_GOAL_BONUS: u8 = 10;

    /// Sodium below this is low (mg)
    pub const SODIUM_LOW_MG: f64 = 500.0;
    /// Single-meal sodium budget, ~35% of the WHO daily cap (mg)
    pub const SODIUM_MEAL_BUDGET_MG: f64 = 700.0;
    /// Sodium at or above this is very high (mg)
    pub const SODIUM_VERY_HIGH_MG: f64 = 1000.0;

    /// Fat share of calories below which a meal scores full marks (percent)
    pub const FAT_GOOD_PERCENT: f64 = 25.0;
    /// Fat share of calories below which a meal is moderate (percent)
    pub const FAT_MODERATE_PERCENT: f64 = 35.0;

    /// Protein share band of macro calories (percent)
    pub const PROTEIN_BAND: (f64, f64) = (15.0, 30.0);
    /// Carbohydrate share band of macro calories (percent)
    pub const CARBS_BAND: (f64, f64) = (45.0, 65.0);
    /// Fat share band of macro calories (percent)
    pub const FAT_BAND: (f64, f64) = (20.0, 35.0);
}

/// Aggregation weights in whole percent, keyed by factor
pub mod weights {
    /// Calories factor weight
    pub const CALORIES_PERCENT: u32 = 25;
    /// Sodium factor weight
    pub const SODIUM_PERCENT: u32 = 20;
    /// Fat factor weight
    pub const FAT_PERCENT: u32 = 15;
    /// Macro balance factor weight
    pub const BALANCE_PERCENT: u32 = 15;
    /// Nutri-Grade factor weight
    pub const NUTRI_GRADE_PERCENT: u32 = 15;
    /// Glycemic index factor weight
    pub const GI_LEVEL_PERCENT: u32 = 10;

    const _: () = assert!(
        CALORIES_PERCENT
            + SODIUM_PERCENT
            + FAT_PERCENT
            + BALANCE_PERCENT
            + NUTRI_GRADE_PERCENT
            + GI_LEVEL_PERCENT
            == 100,
        "factor weights must sum to 100%"
    );
}

/// Rating classifier thresholds (inclusive lower bounds)
pub mod rating {
    /// Minimum score rated green
    pub const GREEN_MIN_SCORE: u8 = 80;
    /// Minimum score rated yellow
    pub const YELLOW_MIN_SCORE: u8 = 60;
}

/// Suggestion generator limits
pub mod suggestions {
    /// Maximum suggestions returned per rating
    pub const MAX_SUGGESTIONS: usize = 4;
}
