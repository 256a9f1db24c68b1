// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, a sample pantry, a recipe book, and classifier outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `savor`

use chrono::{DateTime, Duration, TimeZone, Utc};
use savor::models::{
    Difficulty, Ingredient, IngredientCategory, ModelPrediction, NutritionalProfile,
    RecipeProtocol, SavedRecipe,
};
use savor::repository::InMemoryRepository;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference time so chronology assertions are stable
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap()
}

/// Five pantry items spanning every urgency tier
///
/// | item    | category  | vitality | days | urgency  |
/// |---------|-----------|----------|------|----------|
/// | tomato  | vegetable | 40       | 4    | medium   |
/// | basil   | herb      | 100      | 5    | medium   |
/// | pasta   | grain     | 100      | 180  | low      |
/// | salmon  | seafood   | 50       | 1    | critical |
/// | cheddar | dairy     | 100      | 10   | low      |
pub fn sample_pantry() -> Vec<Ingredient> {
    vec![
        Ingredient::new("Tomato", IngredientCategory::Vegetable).with_vitality(40.0),
        Ingredient::new("basil", IngredientCategory::Herb).with_confidence(0.92),
        Ingredient::new("pasta", IngredientCategory::Grain).with_mass_grams(500.0),
        Ingredient::new("salmon", IngredientCategory::Seafood).with_vitality(50.0),
        Ingredient::new("cheddar", IngredientCategory::Dairy),
    ]
}

/// Build a recipe with one step per technique
pub fn recipe(
    name: &str,
    cuisine: &str,
    difficulty: Difficulty,
    ingredients: &[&str],
    techniques: &[&str],
) -> SavedRecipe {
    let protocol = techniques.iter().fold(
        RecipeProtocol::new(name, cuisine, difficulty)
            .with_ingredients(ingredients.iter().copied())
            .with_nutrition(NutritionalProfile::from_macros(30.0, 50.0, 20.0)),
        |protocol, technique| protocol.with_step(format!("{technique} it"), Some(*technique)),
    );
    SavedRecipe::new(protocol)
}

/// Four saved recipes; the first two have been cooked
pub fn recipe_book() -> Vec<SavedRecipe> {
    let cooked_at = reference_time();
    vec![
        recipe(
            "Caprese Pasta",
            "italian",
            Difficulty::Easy,
            &["tomato", "basil", "pasta", "mozzarella"],
            &["boil", "slice"],
        )
        .with_cook_count(3)
        .with_rating(5)
        .with_last_cooked(cooked_at - Duration::days(10)),
        recipe(
            "Salmon Teriyaki",
            "japanese",
            Difficulty::Medium,
            &["salmon", "rice", "soy sauce"],
            &["sear", "glaze"],
        )
        .with_cook_count(1)
        .with_last_cooked(cooked_at - Duration::days(2)),
        recipe(
            "Beef Wellington",
            "british",
            Difficulty::Expert,
            &["beef", "puff pastry", "mushroom"],
            &["sear", "bake", "wrap"],
        ),
        recipe(
            "Tomato Soup",
            "american",
            Difficulty::Easy,
            &["tomato", "onion", "cream"],
            &["simmer", "blend"],
        ),
    ]
}

/// Repository seeded with [`recipe_book`] and [`sample_pantry`]
pub fn sample_repository() -> InMemoryRepository {
    InMemoryRepository::seeded(recipe_book(), sample_pantry())
}

/// Classifier output from one model
pub fn prediction(model_id: &str, scores: &[(&str, f64)]) -> ModelPrediction {
    ModelPrediction::new(model_id, scores.iter().copied())
}
