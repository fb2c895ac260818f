// ABOUTME: Configuration error types for rating engine configuration validation
// ABOUTME: Defines error variants for invalid ranges, weights, and environment parsing failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for rating engine validation.

use nutri_core::errors::AppError;
use serde_json::json;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds out of order (e.g., yellow threshold above green)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access or parse error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights don't sum to required total (e.g., not 1.0)
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let kind = match &error {
            ConfigError::InvalidRange(_) => "invalid_range",
            ConfigError::EnvVar(_) => "env_var",
            ConfigError::Parse(_) => "parse",
            ConfigError::InvalidWeights(_) => "invalid_weights",
            ConfigError::ValueOutOfRange(_) => "value_out_of_range",
        };
        Self::config(error.to_string()).with_details(json!({ "kind": kind }))
    }
}

/// Reject `NaN` and infinite values
pub(super) fn ensure_finite(values: &[f64], message: &'static str) -> Result<(), ConfigError> {
    if values.iter().copied().all(f64::is_finite) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(message))
    }
}
