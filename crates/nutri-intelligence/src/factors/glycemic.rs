// ABOUTME: Glycemic index factor flagging meals that contain any high-GI food
// ABOUTME: Meals with no GI data receive a neutral pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{highest_gi, FactorContext};
use nutri_core::models::{FactorName, FactorResult, FactorStatus, GiLevel, MAX_SCORE};

/// Score the glycemic risk of the meal
#[must_use]
pub fn evaluate(context: &FactorContext<'_>) -> FactorResult {
    match highest_gi(&context.meal.foods) {
        None => FactorResult::neutral(FactorName::GiLevel, "GI N/A: no glycemic data"),
        Some(GiLevel::High) => FactorResult::new(
            FactorName::GiLevel,
            FactorStatus::Poor,
            context.config.glycemic.high_gi_score,
            "Contains high-GI food that can spike blood sugar",
        ),
        Some(level) => FactorResult::new(
            FactorName::GiLevel,
            FactorStatus::Good,
            MAX_SCORE,
            format!("{} glycemic impact", level.as_str()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{meal, target, totals};
    use super::*;
    use crate::config::intelligence::FactorConfig;
    use nutri_core::models::{HealthGoal, MealContext, RecognizedFoodItem};

    fn rate(levels: &[Option<GiLevel>]) -> FactorResult {
        let config = FactorConfig::default();
        let daily = target(2000.0);
        let mut input = meal(totals(500.0, 20.0, 70.0, 12.0, 400.0), MealContext::Breakfast);
        input.foods = levels
            .iter()
            .map(|level| RecognizedFoodItem {
                gi_level: *level,
                ..RecognizedFoodItem::named("bread")
            })
            .collect();
        evaluate(&FactorContext {
            meal: &input,
            target: &daily,
            goal: HealthGoal::ControlSugar,
            config: &config,
        })
    }

    #[test]
    fn test_any_high_gi_is_poor() {
        let result = rate(&[Some(GiLevel::Low), Some(GiLevel::High)]);
        assert_eq!((result.status, result.score), (FactorStatus::Poor, 40));
    }

    #[test]
    fn test_medium_gi_is_good() {
        let result = rate(&[Some(GiLevel::Medium), None]);
        assert_eq!((result.status, result.score), (FactorStatus::Good, 100));
        assert!(result.message.starts_with("Medium"));
    }

    #[test]
    fn test_missing_gi_is_neutral() {
        let result = rate(&[None]);
        assert_eq!(result.score, 100);
        assert!(result.message.contains("N/A"));
    }
}
