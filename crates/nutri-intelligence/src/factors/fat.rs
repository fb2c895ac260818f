// ABOUTME: Fat factor scoring the share of meal calories that come from fat
// ABOUTME: Zero-calorie meals are treated as 0% fat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{percent_of, tier_below, FactorContext};
use nutri_core::constants::energy;
use nutri_core::models::{FactorName, FactorResult, FactorStatus};

/// Fat calories as a percentage of total meal calories
#[must_use]
pub fn fat_calorie_percent(context: &FactorContext<'_>) -> f64 {
    let totals = &context.meal.total_nutrition;
    percent_of(
        totals.fat.midpoint() * energy::FAT_KCAL_PER_G,
        totals.calories.midpoint(),
    )
}

/// Score the meal's fat share
#[must_use]
pub fn evaluate(context: &FactorContext<'_>) -> FactorResult {
    let config = &context.config.fat;
    let fat_percent = fat_calorie_percent(context);
    let (status, score) = tier_below(
        fat_percent,
        config.good_percent,
        config.moderate_percent,
        config.scores,
    );

    let message = match status {
        FactorStatus::Good => format!("Fat provides {fat_percent:.0}% of calories"),
        FactorStatus::Moderate => {
            format!("Fat provides {fat_percent:.0}% of calories, slightly high")
        }
        FactorStatus::Poor => format!("Fat provides {fat_percent:.0}% of calories, too high"),
    };

    FactorResult::new(FactorName::Fat, status, score, message)
}
