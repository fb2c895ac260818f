// ABOUTME: Recognized meal models consumed by the rating engine
// ABOUTME: NutrientRange, FoodNutritionTotals, RecognizedFoodItem, MealContext, and MealEvaluationInput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

/// Uncertainty band for one nutrient as reported by food recognition
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl NutrientRange {
    /// Create a range without validating it
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range with no uncertainty
    #[must_use]
    pub const fn exact(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Point estimate used for scoring and display
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// True when both bounds are zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    /// Check `0 <= min <= max` with finite bounds
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming `field` when the bounds are non-finite,
    /// negative, or inverted
    pub fn validate(&self, field: &str) -> AppResult<()> {
        let details = json!({ "field": field, "min": self.min, "max": self.max });

        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(AppError::value_out_of_range(format!(
                "{field} range must have finite bounds"
            ))
            .with_details(details));
        }
        if self.min < 0.0 || self.max < 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "{field} range must not be negative (min {}, max {})",
                self.min, self.max
            ))
            .with_details(details));
        }
        if self.min > self.max {
            return Err(AppError::value_out_of_range(format!(
                "{field} range is inverted (min {} > max {})",
                self.min, self.max
            ))
            .with_details(details));
        }
        Ok(())
    }
}

/// Aggregated nutrient ranges across every food in one meal photo
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodNutritionTotals {
    /// Energy (kcal)
    pub calories: NutrientRange,
    /// Protein (g)
    pub protein: NutrientRange,
    /// Carbohydrates (g)
    pub carbs: NutrientRange,
    /// Fat (g)
    pub fat: NutrientRange,
    /// Sodium (mg)
    pub sodium: NutrientRange,
}

impl FoodNutritionTotals {
    /// Every range paired with its wire name
    #[must_use]
    pub const fn named_ranges(&self) -> [(&'static str, NutrientRange); 5] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("sodium", self.sodium),
        ]
    }

    /// True when every nutrient range is zero
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.named_ranges().iter().all(|(_, range)| range.is_zero())
    }
}

/// Singapore Nutri-Grade, best (`A`) to worst (`D`)
///
/// Variant order is severity order, so `Ord` picks the worst grade with `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NutriGrade {
    /// Lowest sugar and saturated fat
    A,
    /// Low sugar and saturated fat
    B,
    /// High sugar or saturated fat
    C,
    /// Highest sugar or saturated fat
    D,
}

impl NutriGrade {
    /// Grade letter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl FromStr for NutriGrade {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(AppError::invalid_input(format!(
                "Unknown Nutri-Grade: '{other}'. Valid options: A, B, C, D"
            ))),
        }
    }
}

/// Qualitative glycemic index tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GiLevel {
    /// Slow blood-sugar rise
    Low,
    /// Moderate blood-sugar rise
    Medium,
    /// Fast blood-sugar spike
    High,
}

impl GiLevel {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl FromStr for GiLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "Unknown GI level: '{other}'. Valid options: Low, Medium, High"
            ))),
        }
    }
}

/// One food recognized in the meal photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedFoodItem {
    /// Canonical food name
    pub name: String,
    /// Name in the user's language, when recognition supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_local: Option<String>,
    /// Nutri-Grade label, for beverages and packaged snacks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutri_grade: Option<NutriGrade>,
    /// Glycemic index tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gi_level: Option<GiLevel>,
    /// Whether the dish is a hawker-centre dish
    #[serde(default)]
    pub is_hawker_food: bool,
    /// Dish-specific improvement tip from recognition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_tip: Option<String>,
}

impl RecognizedFoodItem {
    /// Food with a name and no metadata
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_local: None,
            nutri_grade: None,
            gi_level: None,
            is_hawker_food: false,
            improvement_tip: None,
        }
    }

    /// Name shown to the user: the local name when present
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name_local.as_deref().unwrap_or(&self.name)
    }
}

/// Meal slot the photo was logged against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealContext {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealContext {
    /// All meal slots
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Wire name, also used in user-facing messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealContext {
    type Err = AppError;

    /// Strict parse; unknown slots are a caller contract violation, never defaulted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            other => Err(AppError::invalid_input(format!(
                "Unknown meal context: '{other}'. Valid options: breakfast, lunch, dinner, snack"
            ))
            .with_details(json!({ "field": "mealContext", "value": other }))),
        }
    }
}

/// Everything the engine needs to know about one meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEvaluationInput {
    /// Nutrient totals across all foods
    pub total_nutrition: FoodNutritionTotals,
    /// Recognized foods, possibly empty
    #[serde(default)]
    pub foods: Vec<RecognizedFoodItem>,
    /// Meal slot
    pub meal_context: MealContext,
}

impl MealEvaluationInput {
    /// Check the input contract
    ///
    /// # Errors
    ///
    /// Returns an error when any nutrient range is malformed, or when `foods` is
    /// empty while the totals report nutrients
    pub fn validate(&self) -> AppResult<()> {
        for (field, range) in self.total_nutrition.named_ranges() {
            range.validate(field)?;
        }

        if self.foods.is_empty() && !self.total_nutrition.is_empty() {
            return Err(AppError::invalid_input(
                "totalNutrition reports nutrients but foods is empty",
            )
            .with_details(json!({ "field": "foods" })));
        }

        Ok(())
    }
}
