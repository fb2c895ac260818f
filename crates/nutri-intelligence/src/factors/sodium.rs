// ABOUTME: Sodium factor scoring absolute sodium content against a per-meal budget
// ABOUTME: Four tiers from low through very high
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FactorContext;
use nutri_core::models::{FactorName, FactorResult, FactorStatus};

/// Score the meal's sodium in milligrams
#[must_use]
pub fn evaluate(context: &FactorContext<'_>) -> FactorResult {
    let config = &context.config.sodium;
    let sodium_mg = context.meal.total_nutrition.sodium.midpoint();
    let mg = sodium_mg.round();

    let (status, score, message) = if sodium_mg < config.low_mg {
        (
            FactorStatus::Good,
            config.low_score,
            format!("Low sodium ({mg:.0} mg)"),
        )
    } else if sodium_mg < config.meal_budget_mg {
        (
            FactorStatus::Good,
            config.within_budget_score,
            format!("Moderate sodium ({mg:.0} mg), within a single meal's budget"),
        )
    } else if sodium_mg < config.very_high_mg {
        (
            FactorStatus::Moderate,
            config.high_score,
            format!("High sodium ({mg:.0} mg), over a third of the daily limit"),
        )
    } else {
        (
            FactorStatus::Poor,
            config.very_high_score,
            format!("Very high sodium ({mg:.0} mg), half the daily limit or more"),
        )
    };

    FactorResult::new(FactorName::Sodium, status, score, message)
}
