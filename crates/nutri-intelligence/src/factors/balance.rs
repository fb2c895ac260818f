// ABOUTME: Macro balance factor counting how many macronutrient shares fall within their bands
// ABOUTME: Message always reports all three shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FactorContext, MacroSplit};
use crate::config::intelligence::BalanceFactorConfig;
use nutri_core::models::{FactorName, FactorResult, FactorStatus};

/// Number of macros (0-3) whose share lies within its band
#[must_use]
pub fn in_range_count(split: &MacroSplit, config: &BalanceFactorConfig) -> usize {
    [
        config.protein_band.contains(split.protein_percent),
        config.carbs_band.contains(split.carbs_percent),
        config.fat_band.contains(split.fat_percent),
    ]
    .into_iter()
    .filter(|in_band| *in_band)
    .count()
}

/// Score the protein/carbs/fat split of the meal
#[must_use]
pub fn evaluate(context: &FactorContext<'_>) -> FactorResult {
    let config = &context.config.balance;
    let split = MacroSplit::from_totals(&context.meal.total_nutrition);

    let (status, score) = match in_range_count(&split, config) {
        3 => (FactorStatus::Good, config.scores.good),
        2 => (FactorStatus::Moderate, config.scores.moderate),
        _ => (FactorStatus::Poor, config.scores.poor),
    };

    let message = format!(
        "Protein {:.0}%, carbs {:.0}%, fat {:.0}% of macro calories",
        split.protein_percent, split.carbs_percent, split.fat_percent
    );

    FactorResult::new(FactorName::Balance, status, score, message)
}
