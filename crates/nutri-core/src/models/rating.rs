// ABOUTME: Rating output models produced by the nutrition health rating engine
// ABOUTME: FactorName, FactorStatus, FactorResult, RatingLevel, and HealthRating definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of every score in the engine
pub const MAX_SCORE: u8 = 100;

/// Number of factors in every rating
pub const FACTOR_COUNT: usize = 6;

/// Fixed set of factors, declared in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactorName {
    /// Calorie share of the daily target for the meal slot
    #[serde(rename = "Calories")]
    Calories,
    /// Absolute sodium content
    #[serde(rename = "Sodium")]
    Sodium,
    /// Fat share of meal calories
    #[serde(rename = "Fat")]
    Fat,
    /// Macronutrient balance
    #[serde(rename = "Balance")]
    Balance,
    /// Worst Nutri-Grade among foods
    #[serde(rename = "Nutri-Grade")]
    NutriGrade,
    /// Glycemic index risk
    #[serde(rename = "GI Level")]
    GiLevel,
}

impl FactorName {
    /// Every factor in evaluation order
    pub const ALL: [Self; FACTOR_COUNT] = [
        Self::Calories,
        Self::Sodium,
        Self::Fat,
        Self::Balance,
        Self::NutriGrade,
        Self::GiLevel,
    ];

    /// Display name, identical to the wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Sodium => "Sodium",
            Self::Fat => "Fat",
            Self::Balance => "Balance",
            Self::NutriGrade => "Nutri-Grade",
            Self::GiLevel => "GI Level",
        }
    }
}

impl fmt::Display for FactorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-factor verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    /// Within recommendations
    Good,
    /// Somewhat outside recommendations
    Moderate,
    /// Clearly outside recommendations
    Poor,
}

impl FactorStatus {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        }
    }
}

/// Diagnostic produced by one factor evaluator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorResult {
    /// Which factor produced this result
    pub name: FactorName,
    /// Verdict
    pub status: FactorStatus,
    /// User-facing explanation
    pub message: String,
    /// Score in `0..=100`
    pub score: u8,
}

impl FactorResult {
    /// Build a result, clamping the score to `0..=100`
    pub fn new(
        name: FactorName,
        status: FactorStatus,
        score: u8,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name,
            status,
            message: message.into(),
            score: score.min(MAX_SCORE),
        }
    }

    /// Neutral pass used when a factor has no data to judge
    pub fn neutral(name: FactorName, message: impl Into<String>) -> Self {
        Self::new(name, FactorStatus::Good, MAX_SCORE, message)
    }

    /// True unless the status is `Good`
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.status != FactorStatus::Good
    }
}

/// Traffic-light rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingLevel {
    /// Score below the yellow threshold
    Red,
    /// Score between the yellow and green thresholds
    Yellow,
    /// Score at or above the green threshold
    Green,
}

impl RatingLevel {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for RatingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final engine output for one meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRating {
    /// Traffic-light verdict
    pub overall: RatingLevel,
    /// Weighted aggregate score in `0..=100`
    pub score: u8,
    /// Exactly one result per factor, in evaluation order
    pub factors: [FactorResult; FACTOR_COUNT],
    /// Ranked improvement tips
    pub suggestions: Vec<String>,
}

impl HealthRating {
    /// Look up a factor result by name
    #[must_use]
    pub fn factor(&self, name: FactorName) -> Option<&FactorResult> {
        self.factors.iter().find(|factor| factor.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_names_serialize_to_display_names() {
        for name in FactorName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
    }

    #[test]
    fn test_factor_result_clamps_score() {
        let result = FactorResult::new(FactorName::Fat, FactorStatus::Good, 130, "ok");
        assert_eq!(result.score, 100);
        assert!(!result.needs_attention());
    }

    #[test]
    fn test_rating_serializes_lowercase() {
        let rating = HealthRating {
            overall: RatingLevel::Yellow,
            score: 72,
            factors: FactorName::ALL.map(|name| FactorResult::neutral(name, "N/A")),
            suggestions: Vec::new(),
        };
        let json = serde_json::to_value(&rating).unwrap();
        assert_eq!(json["overall"], "yellow");
        assert_eq!(json["factors"].as_array().unwrap().len(), FACTOR_COUNT);
        assert_eq!(json["factors"][5]["status"], "good");
        assert_eq!(json["factors"][5]["name"], "GI Level");

        let parsed: HealthRating = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, rating);
    }

    #[test]
    fn test_rating_with_missing_factor_fails_to_parse() {
        let json = serde_json::json!({
            "overall": "green",
            "score": 90,
            "factors": [{ "name": "Calories", "status": "good", "message": "ok", "score": 100 }],
            "suggestions": []
        });
        assert!(serde_json::from_value::<HealthRating>(json).is_err());
    }
}
