// ABOUTME: Configuration module for nutri-intelligence crate
// ABOUTME: Re-exports rating engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Rating engine configuration (daily targets, factor tiers, weights, thresholds)
pub mod intelligence;

pub use intelligence::{ConfigError, RatingConfig};
