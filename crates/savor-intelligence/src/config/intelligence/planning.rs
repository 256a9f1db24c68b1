// ABOUTME: Meal planning and pantry health configuration
// ABOUTME: Configures default skill level, expiry window, underuse cutoff, and suggestion limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! Meal Plan and Pantry Health Configuration

use serde::{Deserialize, Serialize};

/// Meal plan optimizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Skill level used to rank candidates (the planner takes no skill input)
    pub default_skill_level: f64,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            default_skill_level: 0.5,
        }
    }
}

/// Pantry health analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryHealthConfig {
    /// Items predicted to expire within this many days are flagged
    pub expiring_within_days: u32,
    /// Items used less than this fraction of the mean frequency are underutilized
    pub underutilized_fraction: f64,
    /// Number of suggested recipes
    pub suggestion_limit: usize,
    /// Skill level used to rank suggestions
    pub default_skill_level: f64,
}

impl Default for PantryHealthConfig {
    fn default() -> Self {
        Self {
            expiring_within_days: 5,
            underutilized_fraction: 0.5,
            suggestion_limit: 5,
            default_skill_level: 0.5,
        }
    }
}
