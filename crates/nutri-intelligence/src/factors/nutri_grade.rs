// ABOUTME: Nutri-Grade factor scoring the worst graded item in the meal
// ABOUTME: Meals with no graded items receive a neutral pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{worst_nutri_grade, FactorContext};
use crate::config::intelligence::NutriGradeFactorConfig;
use nutri_core::models::{FactorName, FactorResult, FactorStatus, NutriGrade, MAX_SCORE};

/// Score the worst Nutri-Grade among the meal's foods
#[must_use]
pub fn evaluate(context: &FactorContext<'_>) -> FactorResult {
    match worst_nutri_grade(&context.meal.foods) {
        None => FactorResult::neutral(FactorName::NutriGrade, "Nutri-Grade N/A: no graded items"),
        Some(grade) => score_grade(grade, &context.config.nutri_grade),
    }
}

fn score_grade(grade: NutriGrade, config: &NutriGradeFactorConfig) -> FactorResult {
    let letter = grade.as_str();
    let (status, score, message) = match grade {
        NutriGrade::A | NutriGrade::B => (
            FactorStatus::Good,
            MAX_SCORE,
            format!("Nutri-Grade {letter}: low in sugar and saturated fat"),
        ),
        NutriGrade::C => (
            FactorStatus::Moderate,
            config.grade_c_score,
            format!("Nutri-Grade {letter}: high in sugar or saturated fat"),
        ),
        NutriGrade::D => (
            FactorStatus::Poor,
            config.grade_d_score,
            format!("Nutri-Grade {letter}: very high in sugar or saturated fat"),
        ),
    };
    FactorResult::new(FactorName::NutriGrade, status, score, message)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{meal, target, totals};
    use super::*;
    use crate::config::intelligence::FactorConfig;
    use nutri_core::models::{HealthGoal, MealContext, RecognizedFoodItem};

    fn rate(grades: &[Option<NutriGrade>]) -> FactorResult {
        let config = FactorConfig::default();
        let daily = target(2000.0);
        let mut input = meal(totals(300.0, 5.0, 50.0, 8.0, 100.0), MealContext::Snack);
        input.foods = grades
            .iter()
            .map(|grade| RecognizedFoodItem {
                nutri_grade: *grade,
                ..RecognizedFoodItem::named("drink")
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
    fn test_no_grades_is_neutral() {
        let result = rate(&[None, None]);
        assert_eq!((result.status, result.score), (FactorStatus::Good, 100));
        assert!(result.message.contains("N/A"));

        let empty = rate(&[]);
        assert!(empty.message.contains("N/A"));
    }

    #[test]
    fn test_worst_grade_wins() {
        let result = rate(&[Some(NutriGrade::A), Some(NutriGrade::D), Some(NutriGrade::B)]);
        assert_eq!((result.status, result.score), (FactorStatus::Poor, 30));

        let moderate = rate(&[Some(NutriGrade::C), None]);
        assert_eq!((moderate.status, moderate.score), (FactorStatus::Moderate, 60));

        let good = rate(&[Some(NutriGrade::B)]);
        assert_eq!((good.status, good.score), (FactorStatus::Good, 100));
    }
}
