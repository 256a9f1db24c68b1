// ABOUTME: Core data models for pantry ingredients, saved recipes, and predictions
// ABOUTME: Records supplied by upstream collaborators and consumed by the intelligence engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! # Data Models
//!
//! Plain in-memory records. `Ingredient` and `SavedRecipe` are persisted by an
//! external repository; `ModelPrediction` is produced once per classification
//! pass and consumed by prediction fusion.

/// Pantry ingredient records
pub mod ingredient;
/// Classifier output records
pub mod prediction;
/// Saved recipe records
pub mod recipe;

pub use ingredient::{Ingredient, IngredientCategory};
pub use prediction::{ClassScore, ModelPrediction};
pub use recipe::{
    Difficulty, InstructionStep, NutritionalProfile, RecipeIngredientRef, RecipeProtocol,
    SavedRecipe,
};

/// Normalize a free-text name for set comparisons (trimmed, lowercase)
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Cherry Tomato "), "cherry tomato");
        assert_eq!(normalize_name("BASIL"), "basil");
        assert_eq!(normalize_name(""), "");
    }
}
