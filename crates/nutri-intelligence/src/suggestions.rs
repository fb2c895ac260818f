// ABOUTME: Suggestion generator turning factor diagnostics and food metadata into ranked tips
// ABOUTME: Factor tips first, then hawker tips, then one goal tip; deduplicated and capped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Suggestion Generator
//!
//! Priority order is fixed: corrective advice for factors that need attention (in factor
//! evaluation order), then hawker-food tips, then a closing tip for the user's goal.
//! The list is truncated last, so generic tips are the first to be dropped.

use crate::config::intelligence::RatingConfig;
use crate::daily_targets::compute_daily_target;
use crate::factors::calories::{calorie_position, CalorieDirection};
use crate::factors::{worst_nutri_grade, FactorContext, MacroSplit};
use nutri_core::models::{
    DailyTarget, FactorName, FactorResult, FactorStatus, HealthGoal, HealthProfile,
    MealEvaluationInput, NutriGrade,
};

/// Fixed tip texts
pub mod tips {
    /// Calories high while losing weight
    pub const PORTION_CONTROL: &str =
        "Try a smaller portion or share the dish to stay within your calorie goal";
    /// Calories high for any other goal
    pub const LIGHTER_NEXT_MEAL: &str =
        "This meal is on the heavy side; keep your next meal lighter";
    /// Calories low while gaining muscle
    pub const ADD_PROTEIN_SIDE: &str =
        "Add a protein-rich side such as eggs, tofu, or chicken to fuel muscle gain";
    /// Calories low for any other goal
    pub const ADD_FRUIT: &str = "This meal is light; add a piece of fruit to round it out";

    /// Sodium poor, first tip
    pub const SKIP_SALTY_SAUCES: &str =
        "Go easy on salty sauces and gravy, and skip drinking the soup";
    /// Sodium poor, second tip
    pub const DRINK_WATER: &str = "Drink plenty of water to help balance the extra sodium";
    /// Sodium moderate
    pub const SAUCE_ON_SIDE: &str = "Ask for sauce on the side to cut down on sodium";

    /// Fat poor, first tip
    pub const CHOOSE_STEAMED: &str =
        "Choose steamed, grilled, or soup-based dishes over fried ones";
    /// Fat poor, second tip
    pub const REMOVE_SKIN: &str = "Remove chicken skin and visible fat before eating";
    /// Fat moderate
    pub const LESS_OIL: &str = "Ask for less oil when ordering";

    /// Balance poor with too little protein
    pub const MORE_PROTEIN: &str =
        "Add lean protein such as fish, tofu, or eggs to balance the meal";
    /// Balance poor with too many carbohydrates
    pub const FEWER_CARBS: &str = "Reduce rice or noodles and add more vegetables";

    /// GI poor
    pub const LOW_GI_SWAP: &str =
        "Swap white rice for brown rice or wholemeal options to avoid blood sugar spikes";
    /// Nutri-Grade C or D
    pub const LOWER_SUGAR_DRINK: &str =
        "Pick a less sweet drink (Nutri-Grade A or B), such as kosong or siew dai";

    /// Any hawker food in the meal
    pub const HAWKER_GENERIC: &str =
        "At hawker centres, ask for more vegetables and less gravy";

    /// Closing tip for weight loss
    pub const GOAL_LOSE_WEIGHT: &str =
        "Goal: fill half your plate with vegetables to stay full on fewer calories";
    /// Closing tip for muscle gain
    pub const GOAL_GAIN_MUSCLE: &str =
        "Goal: aim for a palm-sized portion of protein at every meal";
    /// Closing tip for blood sugar control
    pub const GOAL_CONTROL_SUGAR: &str =
        "Goal: pair carbohydrates with protein or fibre to slow sugar absorption";
}

/// Ordered list that ignores repeated entries
#[derive(Debug, Default)]
struct SuggestionList {
    items: Vec<String>,
}

impl SuggestionList {
    fn push(&mut self, tip: impl Into<String>) {
        let tip = tip.into();
        if !self.items.contains(&tip) {
            self.items.push(tip);
        }
    }

    fn finish(mut self, limit: usize) -> Vec<String> {
        self.items.truncate(limit);
        self.items
    }
}

/// Generate suggestions, deriving the daily target from the profile
#[must_use]
pub fn generate_suggestions(
    factors: &[FactorResult],
    profile: &HealthProfile,
    meal: &MealEvaluationInput,
    config: &RatingConfig,
) -> Vec<String> {
    let target = compute_daily_target(profile, &config.daily_targets);
    generate_suggestions_with_target(factors, profile.goal, meal, &target, config)
}

/// Generate suggestions against an already computed daily target
#[must_use]
pub fn generate_suggestions_with_target(
    factors: &[FactorResult],
    goal: HealthGoal,
    meal: &MealEvaluationInput,
    target: &DailyTarget,
    config: &RatingConfig,
) -> Vec<String> {
    let context = FactorContext {
        meal,
        target,
        goal,
        config: &config.factors,
    };
    let mut list = SuggestionList::default();

    for factor in factors.iter().filter(|factor| factor.needs_attention()) {
        add_factor_tips(&mut list, factor, &context);
    }

    if meal.foods.iter().any(|food| food.is_hawker_food) {
        list.push(tips::HAWKER_GENERIC);
        for food in &meal.foods {
            if let Some(tip) = &food.improvement_tip {
                list.push(format!("{}: {tip}", food.display_name()));
            }
        }
    }

    if let Some(tip) = goal_tip(goal) {
        list.push(tip);
    }

    list.finish(config.suggestions.max_suggestions)
}

fn add_factor_tips(list: &mut SuggestionList, factor: &FactorResult, context: &FactorContext<'_>) {
    match (factor.name, factor.status) {
        (FactorName::Calories, _) => {
            let (_, direction) = calorie_position(context);
            let tip = match (direction, context.goal) {
                (CalorieDirection::Over, HealthGoal::LoseWeight) => tips::PORTION_CONTROL,
                (CalorieDirection::Over, _) => tips::LIGHTER_NEXT_MEAL,
                (CalorieDirection::Under, HealthGoal::GainMuscle) => tips::ADD_PROTEIN_SIDE,
                (CalorieDirection::Under, _) => tips::ADD_FRUIT,
                (CalorieDirection::OnTarget, _) => return,
            };
            list.push(tip);
        }
        (FactorName::Sodium, FactorStatus::Poor) => {
            list.push(tips::SKIP_SALTY_SAUCES);
            list.push(tips::DRINK_WATER);
        }
        (FactorName::Sodium, _) => list.push(tips::SAUCE_ON_SIDE),
        (FactorName::Fat, FactorStatus::Poor) => {
            list.push(tips::CHOOSE_STEAMED);
            list.push(tips::REMOVE_SKIN);
        }
        (FactorName::Fat, _) => list.push(tips::LESS_OIL),
        (FactorName::Balance, FactorStatus::Poor) => {
            let split = MacroSplit::from_totals(&context.meal.total_nutrition);
            let band = &context.config.balance;
            if split.protein_percent < band.protein_band.min {
                list.push(tips::MORE_PROTEIN);
            }
            if split.carbs_percent > band.carbs_band.max {
                list.push(tips::FEWER_CARBS);
            }
        }
        (FactorName::NutriGrade, _) => {
            if matches!(
                worst_nutri_grade(&context.meal.foods),
                Some(NutriGrade::C | NutriGrade::D)
            ) {
                list.push(tips::LOWER_SUGAR_DRINK);
            }
        }
        (FactorName::GiLevel, FactorStatus::Poor) => list.push(tips::LOW_GI_SWAP),
        (FactorName::Balance | FactorName::GiLevel, _) => {}
    }
}

const fn goal_tip(goal: HealthGoal) -> Option<&'static str> {
    match goal {
        HealthGoal::LoseWeight => Some(tips::GOAL_LOSE_WEIGHT),
        HealthGoal::GainMuscle => Some(tips::GOAL_GAIN_MUSCLE),
        HealthGoal::ControlSugar => Some(tips::GOAL_CONTROL_SUGAR),
        HealthGoal::Maintain => None,
    }
}
