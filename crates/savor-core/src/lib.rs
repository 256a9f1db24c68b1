// ABOUTME: Core types and constants for the Savor pantry decision-support platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

#![deny(unsafe_code)]

//! # Savor Core
//!
//! Foundation crate providing shared types and constants for the Savor pantry
//! intelligence platform. The records defined here are produced upstream
//! (perception pipeline, recipe synthesis, persistence) and consumed by the
//! decision-support engine in `savor-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Pantry ingredients, saved recipes, and classifier predictions

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Ingredient, `SavedRecipe`, `ModelPrediction`)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
