// ABOUTME: Daily target configuration for BMR, TDEE, goal adjustments, and macro targets
// ABOUTME: Closed-set lookup tables keyed by activity level and health goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily Target Configuration
//!
//! Every lookup table has one field per enum variant, so an unknown activity level or
//! goal cannot reach the calculator.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology
//! - Sodium: WHO (2012) Guideline: Sodium intake for adults and children

use super::error::{ensure_finite, ConfigError};
use nutri_core::constants::{activity_factors, daily_targets};
use nutri_core::models::{ActivityLevel, Gender, HealthGoal};
use serde::{Deserialize, Serialize};

/// Daily target calculation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTargetConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein factors and carb/fat calorie shares
    pub macronutrients: MacroTargetConfig,
    /// Daily sodium cap (mg), independent of the profile
    pub sodium_limit_mg: f64,
    /// Profile fallbacks for missing age/gender
    pub fallbacks: ProfileFallbackConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
        }
    }
}

/// Calorie adjustment added to TDEE per goal (kcal/day)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Lose weight: -500
    pub lose_weight_kcal: f64,
    /// Gain muscle: +300
    pub gain_muscle_kcal: f64,
    /// Control sugar: 0
    pub control_sugar_kcal: f64,
    /// Maintain: 0
    pub maintain_kcal: f64,
}

impl GoalAdjustmentConfig {
    /// Adjustment for a goal
    #[must_use]
    pub const fn adjustment_for(&self, goal: HealthGoal) -> f64 {
        match goal {
            HealthGoal::LoseWeight => self.lose_weight_kcal,
            HealthGoal::GainMuscle => self.gain_muscle_kcal,
            HealthGoal::ControlSugar => self.control_sugar_kcal,
            HealthGoal::Maintain => self.maintain_kcal,
        }
    }
}

/// Macronutrient target configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargetConfig {
    /// Protein (g/kg) for every goal except muscle gain: 1.2
    pub protein_default_g_per_kg: f64,
    /// Protein (g/kg) for muscle gain: 2.0
    pub protein_muscle_gain_g_per_kg: f64,
    /// Share of calories from carbohydrates: 0.50
    pub carbs_calorie_share: f64,
    /// Share of calories from fat: 0.25
    pub fat_calorie_share: f64,
}

impl MacroTargetConfig {
    /// Protein factor for a goal
    #[must_use]
    pub const fn protein_g_per_kg(&self, goal: HealthGoal) -> f64 {
        match goal {
            HealthGoal::GainMuscle => self.protein_muscle_gain_g_per_kg,
            HealthGoal::LoseWeight | HealthGoal::ControlSugar | HealthGoal::Maintain => {
                self.protein_default_g_per_kg
            }
        }
    }
}

/// Documented fallbacks for optional profile fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFallbackConfig {
    /// Age used when the profile has none: 30
    pub age_years: u32,
    /// Gender used when the profile has none: male
    pub gender: Gender,
}

impl Default for DailyTargetConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
            goal_adjustments: GoalAdjustmentConfig::default(),
            macronutrients: MacroTargetConfig::default(),
            sodium_limit_mg: daily_targets::SODIUM_DAILY_LIMIT_MG,
            fallbacks: ProfileFallbackConfig::default(),
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: daily_targets::MSJ_WEIGHT_COEF,
            msj_height_coef: daily_targets::MSJ_HEIGHT_COEF,
            msj_age_coef: daily_targets::MSJ_AGE_COEF,
            msj_male_constant: daily_targets::MSJ_MALE_CONSTANT,
            msj_female_constant: daily_targets::MSJ_FEMALE_CONSTANT,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            light: activity_factors::LIGHT,
            moderate: activity_factors::MODERATE,
            active: activity_factors::ACTIVE,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_weight_kcal: daily_targets::LOSE_WEIGHT_ADJUSTMENT_KCAL,
            gain_muscle_kcal: daily_targets::GAIN_MUSCLE_ADJUSTMENT_KCAL,
            control_sugar_kcal: 0.0,
            maintain_kcal: 0.0,
        }
    }
}

impl Default for MacroTargetConfig {
    fn default() -> Self {
        Self {
            protein_default_g_per_kg: daily_targets::PROTEIN_DEFAULT_G_PER_KG,
            protein_muscle_gain_g_per_kg: daily_targets::PROTEIN_MUSCLE_GAIN_G_PER_KG,
            carbs_calorie_share: daily_targets::CARBS_CALORIE_SHARE,
            fat_calorie_share: daily_targets::FAT_CALORIE_SHARE,
        }
    }
}

impl Default for ProfileFallbackConfig {
    fn default() -> Self {
        Self {
            age_years: daily_targets::FALLBACK_AGE_YEARS,
            gender: Gender::Male,
        }
    }
}

impl DailyTargetConfig {
    /// Validate coefficients, multipliers, and shares
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is not finite, coefficients are non-positive,
    /// activity factors are not ascending, or macro shares leave no room for protein
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        ensure_finite(
            &[
                bmr.msj_weight_coef,
                bmr.msj_height_coef,
                bmr.msj_age_coef,
                bmr.msj_male_constant,
                bmr.msj_female_constant,
            ],
            "BMR coefficients must be finite",
        )?;
        let factors = &self.activity_factors;
        ensure_finite(
            &[factors.sedentary, factors.light, factors.moderate, factors.active],
            "Activity factors must be finite",
        )?;
        let goals = &self.goal_adjustments;
        ensure_finite(
            &[
                goals.lose_weight_kcal,
                goals.gain_muscle_kcal,
                goals.control_sugar_kcal,
                goals.maintain_kcal,
            ],
            "Goal calorie adjustments must be finite",
        )?;
        let macros = &self.macronutrients;
        ensure_finite(
            &[
                macros.protein_default_g_per_kg,
                macros.protein_muscle_gain_g_per_kg,
                macros.carbs_calorie_share,
                macros.fat_calorie_share,
                self.sodium_limit_mg,
            ],
            "Macro and sodium targets must be finite",
        )?;

        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        if factors.sedentary < 1.0 || factors.active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if macros.protein_default_g_per_kg <= 0.0 || macros.protein_muscle_gain_g_per_kg > 3.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein factors must be between 0 and 3.0 g/kg",
            ));
        }
        if macros.carbs_calorie_share <= 0.0
            || macros.fat_calorie_share <= 0.0
            || macros.carbs_calorie_share + macros.fat_calorie_share >= 1.0
        {
            return Err(ConfigError::InvalidRange(
                "Carb and fat calorie shares must be positive and sum to less than 1.0",
            ));
        }

        if self.sodium_limit_mg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Daily sodium limit must be positive",
            ));
        }
        if !(1..=120).contains(&self.fallbacks.age_years) {
            return Err(ConfigError::ValueOutOfRange(
                "Fallback age must be between 1 and 120 years",
            ));
        }

        Ok(())
    }
}
