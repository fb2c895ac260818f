// ABOUTME: Calories factor comparing a meal's energy with its expected share of the daily target
// ABOUTME: Applies a goal-aware bonus when the meal deviates in the direction the goal favours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{percent_of, tier_below, FactorContext};
use nutri_core::models::{FactorName, FactorResult, FactorStatus, HealthGoal, MAX_SCORE};

/// Where a meal sits relative to its expected share of daily calories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieDirection {
    /// Above the expected share
    Over,
    /// Below the expected share
    Under,
    /// Exactly the expected share
    OnTarget,
}

impl CalorieDirection {
    /// Compare an actual share with the expected one
    #[must_use]
    pub fn classify(percent_of_daily: f64, expected_percent: f64) -> Self {
        if percent_of_daily > expected_percent {
            Self::Over
        } else if percent_of_daily < expected_percent {
            Self::Under
        } else {
            Self::OnTarget
        }
    }

    /// True when this direction is the one `goal` rewards
    #[must_use]
    pub const fn favoured_by(self, goal: HealthGoal) -> bool {
        matches!(
            (self, goal),
            (Self::Under, HealthGoal::LoseWeight) | (Self::Over, HealthGoal::GainMuscle)
        )
    }
}

/// Percent of the daily calorie target this meal supplies, and where it sits
#[must_use]
pub fn calorie_position(context: &FactorContext<'_>) -> (f64, CalorieDirection) {
    let meal_calories = context.meal.total_nutrition.calories.midpoint();
    let percent = percent_of(meal_calories, context.target.calories);
    let expected = context
        .config
        .meal_shares
        .expected_percent(context.meal.meal_context);
    (percent, CalorieDirection::classify(percent, expected))
}

/// Score the meal's calories against the expected share for its slot
#[must_use]
pub fn evaluate(context: &FactorContext<'_>) -> FactorResult {
    let config = &context.config.calories;
    let slot = context.meal.meal_context;
    let meal_calories = context.meal.total_nutrition.calories.midpoint();
    let expected = context.config.meal_shares.expected_percent(slot);

    let (percent, direction) = calorie_position(context);
    let deviation = (percent - expected).abs();
    let (mut status, mut score) = tier_below(
        deviation,
        config.good_deviation,
        config.moderate_deviation,
        config.scores,
    );

    if direction.favoured_by(context.goal) {
        score = score.saturating_add(config.goal_bonus).min(MAX_SCORE);
        if score >= config.bonus_upgrade_score {
            status = FactorStatus::Good;
        }
    }

    // Wording follows the tier, not the bonus-upgraded status
    let within_budget = deviation < config.good_deviation;
    let kcal = meal_calories.round();
    let message = match (within_budget, direction) {
        (true, _) | (_, CalorieDirection::OnTarget) => format!(
            "{kcal:.0} kcal fits your {slot} budget ({percent:.0}% of daily target, expected {expected:.0}%)"
        ),
        (_, CalorieDirection::Over) => format!(
            "{kcal:.0} kcal is high for {slot} ({percent:.0}% of daily target, expected {expected:.0}%)"
        ),
        (_, CalorieDirection::Under) => format!(
            "{kcal:.0} kcal is low for {slot} ({percent:.0}% of daily target, expected {expected:.0}%)"
        ),
    };

    FactorResult::new(FactorName::Calories, status, score, message)
}
