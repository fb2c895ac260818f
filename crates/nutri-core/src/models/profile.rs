// ABOUTME: User health profile and derived daily nutrition target models
// ABOUTME: HealthProfile, Gender, ActivityLevel, HealthGoal, and DailyTarget definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
}

impl Gender {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
}

impl ActivityLevel {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: '{other}'. Valid options: sedentary, light, moderate, active"
            ))),
        }
    }
}

/// Health goal driving calorie adjustment and closing tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthGoal {
    /// Caloric deficit
    LoseWeight,
    /// Caloric surplus, higher protein
    GainMuscle,
    /// Blood sugar management
    ControlSugar,
    /// Caloric balance
    Maintain,
}

impl HealthGoal {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose-weight",
            Self::GainMuscle => "gain-muscle",
            Self::ControlSugar => "control-sugar",
            Self::Maintain => "maintain",
        }
    }
}

impl fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose-weight" => Ok(Self::LoseWeight),
            "gain-muscle" => Ok(Self::GainMuscle),
            "control-sugar" => Ok(Self::ControlSugar),
            "maintain" => Ok(Self::Maintain),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal: '{other}'. Valid options: lose-weight, gain-muscle, control-sugar, maintain"
            ))),
        }
    }
}

/// Caller-owned health profile, supplied per evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    /// Height in centimeters
    #[serde(rename = "height_cm")]
    pub height_cm: f64,
    /// Body weight in kilograms
    #[serde(rename = "weight_kg")]
    pub weight_kg: f64,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Biological gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Health goal
    pub goal: HealthGoal,
}

impl HealthProfile {
    /// Check the profile is physically plausible
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when height or weight is not in (0, 300], or age is
    /// outside 1-120 years
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 || self.weight_kg > 300.0 {
            return Err(
                AppError::value_out_of_range("Weight must be between 0 and 300 kg")
                    .with_details(json!({ "field": "weight_kg", "value": self.weight_kg })),
            );
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 || self.height_cm > 300.0 {
            return Err(
                AppError::value_out_of_range("Height must be between 0 and 300 cm")
                    .with_details(json!({ "field": "height_cm", "value": self.height_cm })),
            );
        }
        if let Some(age) = self.age {
            if !(1..=120).contains(&age) {
                return Err(
                    AppError::value_out_of_range("Age must be between 1 and 120 years")
                        .with_details(json!({ "field": "age", "value": age })),
                );
            }
        }
        Ok(())
    }
}

/// Daily nutrition targets derived from a profile; never cached across calls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTarget {
    /// Daily energy target (kcal), rounded to a whole calorie
    pub calories: f64,
    /// Daily protein (g)
    pub protein_g: f64,
    /// Daily carbohydrates (g)
    pub carbs_g: f64,
    /// Daily fat (g)
    pub fat_g: f64,
    /// Daily sodium cap (mg)
    pub sodium_mg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> HealthProfile {
        HealthProfile {
            height_cm: 170.0,
            weight_kg: 70.0,
            age: Some(30),
            gender: Some(Gender::Male),
            activity_level: ActivityLevel::Light,
            goal: HealthGoal::LoseWeight,
        }
    }

    #[test]
    fn test_profile_wire_format() {
        let parsed: HealthProfile = serde_json::from_value(json!({
            "height_cm": 160,
            "weight_kg": 55.5,
            "activityLevel": "moderate",
            "goal": "control-sugar"
        }))
        .unwrap();

        assert_eq!(parsed.age, None);
        assert_eq!(parsed.gender, None);
        assert_eq!(parsed.activity_level, ActivityLevel::Moderate);
        assert_eq!(parsed.goal, HealthGoal::ControlSugar);
    }

    #[test]
    fn test_unknown_goal_rejected() {
        assert!("bulk".parse::<HealthGoal>().is_err());
        assert!(serde_json::from_value::<HealthProfile>(json!({
            "height_cm": 160, "weight_kg": 55, "activityLevel": "light", "goal": "bulk"
        }))
        .is_err());
    }

    #[test]
    fn test_profile_validation() {
        assert!(profile().validate().is_ok());

        let heavy = HealthProfile {
            weight_kg: 0.0,
            ..profile()
        };
        assert!(heavy.validate().is_err());

        let ageless = HealthProfile {
            age: Some(0),
            ..profile()
        };
        assert!(ageless.validate().is_err());
    }
}
