// ABOUTME: Pantry ingredient model with category, mass, freshness, and detection confidence
// ABOUTME: Records are produced by the perception pipeline and clamped to range upstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

use crate::constants::ranges::MAX_VITALITY_SCORE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Storage category of a pantry ingredient
///
/// Drives shelf-life estimation. Categories unknown to this build deserialize
/// to [`IngredientCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Fresh vegetables
    Vegetable,
    /// Fresh fruit
    Fruit,
    /// Fresh herbs
    Herb,
    /// Meat, poultry, eggs, tofu
    Protein,
    /// Fish and shellfish
    Seafood,
    /// Milk, cheese, yogurt
    Dairy,
    /// Rice, pasta, flour, bread
    Grain,
    /// Dried beans and lentils
    Legume,
    /// Dried spices
    Spice,
    /// Sauces, oils, dressings
    Condiment,
    /// Sugar, baking powder, chocolate
    Baking,
    /// Drinks
    Beverage,
    /// Anything else
    #[serde(other)]
    Other,
}

impl IngredientCategory {
    /// Stable snake-case name of the category
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Herb => "herb",
            Self::Protein => "protein",
            Self::Seafood => "seafood",
            Self::Dairy => "dairy",
            Self::Grain => "grain",
            Self::Legume => "legume",
            Self::Spice => "spice",
            Self::Condiment => "condiment",
            Self::Baking => "baking",
            Self::Beverage => "beverage",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item currently in the user's pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique ingredient identifier
    pub id: Uuid,
    /// Display name ("Roma tomato")
    pub name: String,
    /// Storage category
    pub category: IngredientCategory,
    /// Estimated mass in grams
    pub mass_grams: f64,
    /// Freshness proxy in [0, 100]
    pub vitality_score: f64,
    /// Detection confidence in [0, 1], absent for manual entries
    pub confidence: Option<f64>,
    /// When the category was assigned
    pub categorized_at: DateTime<Utc>,
}

impl Ingredient {
    /// Create a fully fresh ingredient with no detection confidence
    #[must_use]
    pub fn new(name: impl Into<String>, category: IngredientCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            mass_grams: 0.0,
            vitality_score: MAX_VITALITY_SCORE,
            confidence: None,
            categorized_at: Utc::now(),
        }
    }

    /// Set the vitality (freshness) score
    #[must_use]
    pub const fn with_vitality(mut self, vitality_score: f64) -> Self {
        self.vitality_score = vitality_score;
        self
    }

    /// Set the detection confidence
    #[must_use]
    pub const fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Set the estimated mass
    #[must_use]
    pub const fn with_mass_grams(mut self, mass_grams: f64) -> Self {
        self.mass_grams = mass_grams;
        self
    }
}
