// ABOUTME: Benchmark fixtures generating realistic pantries, recipe books, and classifier outputs
// ABOUTME: Deterministic generation so measurements are reproducible between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! Deterministic data generation for benchmarks.

use chrono::{Duration, TimeZone, Utc};
use savor::models::{
    Difficulty, Ingredient, IngredientCategory, ModelPrediction, NutritionalProfile,
    RecipeProtocol, SavedRecipe,
};

/// Predefined dataset sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum DatasetSize {
    /// Small dataset (20 recipes) - new user
    Small,
    /// Medium dataset (200 recipes) - typical user
    Medium,
    /// Large dataset (1000 recipes) - heavy user
    Large,
}

impl DatasetSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 200,
            Self::Large => 1000,
        }
    }
}

const INGREDIENTS: [(&str, IngredientCategory); 16] = [
    ("tomato", IngredientCategory::Vegetable),
    ("onion", IngredientCategory::Vegetable),
    ("garlic", IngredientCategory::Vegetable),
    ("kale", IngredientCategory::Vegetable),
    ("lemon", IngredientCategory::Fruit),
    ("peach", IngredientCategory::Fruit),
    ("basil", IngredientCategory::Herb),
    ("cilantro", IngredientCategory::Herb),
    ("chicken", IngredientCategory::Protein),
    ("salmon", IngredientCategory::Seafood),
    ("yogurt", IngredientCategory::Dairy),
    ("parmesan", IngredientCategory::Dairy),
    ("rice", IngredientCategory::Grain),
    ("pasta", IngredientCategory::Grain),
    ("lentils", IngredientCategory::Legume),
    ("cumin", IngredientCategory::Spice),
];

const CUISINES: [&str; 6] = ["italian", "mexican", "indian", "japanese", "french", "thai"];

const TECHNIQUES: [&str; 8] = [
    "saute", "roast", "braise", "poach", "grill", "emulsify", "ferment", "blanch",
];

/// Pantry holding every fixture ingredient at varying freshness
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_pantry() -> Vec<Ingredient> {
    INGREDIENTS
        .iter()
        .enumerate()
        .map(|(index, (name, category))| {
            Ingredient::new(*name, *category).with_vitality(100.0 - ((index * 13) % 90) as f64)
        })
        .collect()
}

/// Recipe book of `size` recipes; every third recipe has been cooked
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn generate_recipes(size: DatasetSize) -> Vec<SavedRecipe> {
    let base_date = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single();
    (0..size.count())
        .map(|index| {
            let difficulty = match index % 4 {
                0 => Difficulty::Easy,
                1 => Difficulty::Medium,
                2 => Difficulty::Hard,
                _ => Difficulty::Expert,
            };
            let ingredients = (0..4).map(|offset| INGREDIENTS[(index * 3 + offset * 5) % 16].0);
            let protocol = (0..3).fold(
                RecipeProtocol::new(
                    format!("Recipe {index}"),
                    CUISINES[index % CUISINES.len()],
                    difficulty,
                )
                .with_ingredients(ingredients)
                .with_nutrition(NutritionalProfile::from_macros(
                    15.0 + (index % 30) as f64,
                    30.0 + (index % 40) as f64,
                    10.0 + (index % 20) as f64,
                )),
                |protocol, step| {
                    let technique = TECHNIQUES[(index + step * 3) % TECHNIQUES.len()];
                    protocol.with_step(format!("Step {step}"), Some(technique))
                },
            );

            let recipe = SavedRecipe::new(protocol);
            match base_date {
                Some(base) if index % 3 == 0 => recipe
                    .with_cook_count((index % 7) as u32 + 1)
                    .with_rating((index % 5) as u8 + 1)
                    .with_last_cooked(base - Duration::days(index as i64)),
                _ => recipe,
            }
        })
        .collect()
}

/// Cooked subset of a recipe book
#[must_use]
pub fn cooking_history(recipes: &[SavedRecipe]) -> Vec<SavedRecipe> {
    recipes
        .iter()
        .filter(|recipe| recipe.has_been_cooked())
        .cloned()
        .collect()
}

/// Outputs of three classifiers that mostly agree
#[must_use]
pub fn generate_predictions() -> Vec<ModelPrediction> {
    vec![
        ModelPrediction::new(
            "food_detector",
            [("tomato", 0.82), ("red pepper", 0.11), ("apple", 0.04)],
        ),
        ModelPrediction::new("ingredient_classifier", [("tomato", 0.77), ("cherry", 0.15)]),
        ModelPrediction::new("general_vision", [("red pepper", 0.51), ("tomato", 0.44)]),
    ]
}
