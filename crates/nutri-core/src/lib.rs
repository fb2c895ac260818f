// ABOUTME: Core types and constants for the nutrition health rating engine
// ABOUTME: Foundation crate with error handling, meal/profile/rating models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutri Core
//!
//! Foundation crate providing shared types and constants for the nutrition health
//! rating engine. It changes rarely, so the intelligence crate and the façade can
//! rebuild independently of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Meal input, health profile, and rating output types
//! - **constants**: Nutrition science constants and engine defaults

/// Unified error handling system with standard error codes
pub mod errors;

/// Meal, profile, and rating data models
pub mod models;

/// Nutrition constants organized by pipeline stage
pub mod constants;
