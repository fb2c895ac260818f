// ABOUTME: Maps an aggregate meal score to a red, yellow, or green rating
// ABOUTME: Threshold lower bounds are inclusive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::ClassifierConfig;
use nutri_core::models::RatingLevel;

/// Classify an aggregate score
#[must_use]
pub const fn classify(score: u8, config: &ClassifierConfig) -> RatingLevel {
    if score >= config.green_min_score {
        RatingLevel::Green
    } else if score >= config.yellow_min_score {
        RatingLevel::Yellow
    } else {
        RatingLevel::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_inclusive() {
        let config = ClassifierConfig::default();
        assert_eq!(classify(100, &config), RatingLevel::Green);
        assert_eq!(classify(80, &config), RatingLevel::Green);
        assert_eq!(classify(79, &config), RatingLevel::Yellow);
        assert_eq!(classify(60, &config), RatingLevel::Yellow);
        assert_eq!(classify(59, &config), RatingLevel::Red);
        assert_eq!(classify(0, &config), RatingLevel::Red);
    }
}
