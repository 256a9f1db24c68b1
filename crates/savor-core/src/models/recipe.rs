// ABOUTME: Saved recipe model wrapping a synthesized recipe protocol with usage history
// ABOUTME: Defines Difficulty, InstructionStep, NutritionalProfile, and SavedRecipe lifecycle actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

use super::normalize_name;
use crate::constants::difficulty_scale;
use crate::constants::ranges::{MAX_RATING, MIN_RATING};
use crate::errors::{AppError, AppResult, ErrorCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::ops::AddAssign;
use uuid::Uuid;

/// Recipe difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Simple recipes, basic techniques
    #[default]
    Easy,
    /// Moderate complexity
    Medium,
    /// Several demanding techniques
    Hard,
    /// Restaurant-level execution
    Expert,
}

impl Difficulty {
    /// Position of this tier on the 0..1 difficulty scale
    #[must_use]
    pub const fn as_score(&self) -> f64 {
        match self {
            Self::Easy => difficulty_scale::EASY,
            Self::Medium => difficulty_scale::MEDIUM,
            Self::Hard => difficulty_scale::HARD,
            Self::Expert => difficulty_scale::EXPERT,
        }
    }

    /// Stable snake-case name of the tier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

/// Reference to an ingredient used by a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientRef {
    /// Human-readable ingredient name
    pub name: String,
    /// Quantity in grams, when known
    pub grams: Option<f64>,
}

impl RecipeIngredientRef {
    /// Reference an ingredient by name only
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grams: None,
        }
    }
}

/// One instruction step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionStep {
    /// Instruction text
    pub text: String,
    /// Cooking technique exercised by this step ("sear", "emulsify")
    pub technique: Option<String>,
}

/// Per-serving nutritional profile
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionalProfile {
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Fiber in grams
    pub fiber_g: f64,
    /// Energy in kcal
    pub calories: f64,
}

impl NutritionalProfile {
    /// Create a profile from macros; calories derived at 4/4/9 kcal per gram
    #[must_use]
    pub fn from_macros(protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            protein_g,
            carbs_g,
            fat_g,
            fiber_g: 0.0,
            calories: 4.0f64.mul_add(protein_g + carbs_g, 9.0 * fat_g),
        }
    }
}

impl AddAssign for NutritionalProfile {
    fn add_assign(&mut self, rhs: Self) {
        self.protein_g += rhs.protein_g;
        self.carbs_g += rhs.carbs_g;
        self.fat_g += rhs.fat_g;
        self.fiber_g += rhs.fiber_g;
        self.calories += rhs.calories;
    }
}

/// A synthesized recipe as embedded in a saved recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeProtocol {
    /// Recipe name
    pub name: String,
    /// Cuisine style ("italian", "thai")
    pub cuisine_style: String,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Ingredients referenced by the recipe
    pub ingredients: Vec<RecipeIngredientRef>,
    /// Ordered instruction steps
    pub instructions: Vec<InstructionStep>,
    /// Per-serving nutrition
    pub nutrition: NutritionalProfile,
}

impl RecipeProtocol {
    /// Create an empty protocol
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cuisine_style: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine_style: cuisine_style.into(),
            difficulty,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            nutrition: NutritionalProfile::default(),
        }
    }

    /// Add ingredients by name
    #[must_use]
    pub fn with_ingredients<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.ingredients
            .extend(names.into_iter().map(RecipeIngredientRef::named));
        self
    }

    /// Append an instruction step
    #[must_use]
    pub fn with_step(mut self, text: impl Into<String>, technique: Option<&str>) -> Self {
        self.instructions.push(InstructionStep {
            text: text.into(),
            technique: technique.map(str::to_owned),
        });
        self
    }

    /// Set the nutritional profile
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: NutritionalProfile) -> Self {
        self.nutrition = nutrition;
        self
    }

    /// Distinct normalized ingredient names
    #[must_use]
    pub fn ingredient_names(&self) -> HashSet<String> {
        self.ingredients
            .iter()
            .map(|ingredient| normalize_name(&ingredient.name))
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// A recipe the user saved, with its cooking history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    /// Unique recipe identifier
    pub id: Uuid,
    /// The recipe itself
    pub protocol: RecipeProtocol,
    /// Marked as favorite
    pub favorite: bool,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Number of times cooked
    pub cook_count: u32,
    /// User rating in [1, 5]
    pub rating: Option<u8>,
    /// Last time the recipe was cooked
    pub last_cooked: Option<DateTime<Utc>>,
    /// When the recipe was first saved
    pub saved_at: DateTime<Utc>,
}

impl SavedRecipe {
    /// Save a freshly synthesized recipe
    #[must_use]
    pub fn new(protocol: RecipeProtocol) -> Self {
        Self {
            id: Uuid::new_v4(),
            protocol,
            favorite: false,
            tags: Vec::new(),
            cook_count: 0,
            rating: None,
            last_cooked: None,
            saved_at: Utc::now(),
        }
    }

    /// Set the cook count
    #[must_use]
    pub const fn with_cook_count(mut self, cook_count: u32) -> Self {
        self.cook_count = cook_count;
        self
    }

    /// Set the rating without validation (fixtures, trusted storage)
    #[must_use]
    pub const fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the last-cooked timestamp
    #[must_use]
    pub const fn with_last_cooked(mut self, at: DateTime<Utc>) -> Self {
        self.last_cooked = Some(at);
        self
    }

    /// Recipe display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.protocol.name
    }

    /// Whether the user has cooked this recipe at least once
    #[must_use]
    pub const fn has_been_cooked(&self) -> bool {
        self.cook_count > 0 || self.last_cooked.is_some()
    }

    /// Record a cooking session
    pub fn record_cook(&mut self, at: DateTime<Utc>) {
        self.cook_count = self.cook_count.saturating_add(1);
        self.last_cooked = Some(at);
    }

    /// Rate the recipe
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the rating is outside 1..=5
    pub fn rate(&mut self, rating: u8) -> AppResult<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("rating {rating} must be between {MIN_RATING} and {MAX_RATING}"),
            )
            .with_details(json!({
                "rating": rating,
                "min": MIN_RATING,
                "max": MAX_RATING,
            })));
        }
        self.rating = Some(rating);
        Ok(())
    }

    /// Flip the favorite flag, returning the new state
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pasta() -> SavedRecipe {
        SavedRecipe::new(
            RecipeProtocol::new("Pomodoro", "italian", Difficulty::Easy)
                .with_ingredients(["Tomato", " basil ", "spaghetti", "tomato"])
                .with_step("Simmer the sauce", Some("simmer")),
        )
    }

    #[test]
    fn test_ingredient_names_are_normalized_and_distinct() {
        let names = pasta().protocol.ingredient_names();
        assert_eq!(names.len(), 3);
        assert!(names.contains("tomato"));
        assert!(names.contains("basil"));
    }

    #[test]
    fn test_lifecycle_actions() {
        let mut recipe = pasta();
        assert!(!recipe.has_been_cooked());

        recipe.record_cook(Utc::now());
        recipe.record_cook(Utc::now());
        assert_eq!(recipe.cook_count, 2);
        assert!(recipe.has_been_cooked());

        assert!(recipe.rate(4).is_ok());
        assert_eq!(recipe.rating, Some(4));
        let err = recipe.rate(6).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.details["rating"], 6);
        assert_eq!(err.details["max"], 5);
        assert_eq!(recipe.rating, Some(4));

        assert!(recipe.toggle_favorite());
        assert!(!recipe.toggle_favorite());
    }

    #[test]
    fn test_difficulty_scale() {
        assert!((Difficulty::Easy.as_score() - 0.2).abs() < f64::EPSILON);
        assert!((Difficulty::Medium.as_score() - 0.5).abs() < f64::EPSILON);
        assert!((Difficulty::Hard.as_score() - 0.8).abs() < f64::EPSILON);
        assert!((Difficulty::Expert.as_score() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macro_calories() {
        let profile = NutritionalProfile::from_macros(30.0, 50.0, 20.0);
        assert!((profile.calories - 500.0).abs() < 1e-9);
    }
}
