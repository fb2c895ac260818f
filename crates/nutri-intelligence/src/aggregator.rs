// ABOUTME: Weighted aggregation of factor scores into one 0-100 meal score
// ABOUTME: Normalizes by the weight actually present so missing factors do not drag the score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::FactorWeights;
use nutri_core::models::{FactorResult, MAX_SCORE};

/// Weighted average of factor scores, rounded to the nearest integer
///
/// Returns 0 when no factor carries positive weight.
#[must_use]
pub fn aggregate_score(factors: &[FactorResult], weights: &FactorWeights) -> u8 {
    let (weighted_sum, weight_total) = factors.iter().fold((0.0, 0.0), |(sum, total), factor| {
        let weight = weights.weight_for(factor.name);
        (sum + f64::from(factor.score) * weight, total + weight)
    });

    if weight_total <= 0.0 {
        return 0;
    }

    (weighted_sum / weight_total)
        .round()
        .clamp(0.0, f64::from(MAX_SCORE)) as u8
}
