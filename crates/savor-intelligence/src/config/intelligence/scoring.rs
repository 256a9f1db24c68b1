// ABOUTME: Recipe recommendation scoring configuration
// ABOUTME: Configures factor weights, nutrition targets, history blend, and the seasonal calendar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! Recommendation Scorer Configuration
//!
//! The seasonal calendar maps each month to representative in-season
//! ingredient keywords (northern hemisphere). Keywords match by substring so
//! "tomato" also covers "cherry tomato".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recommendation scorer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weights of the five scoring factors
    pub weights: ScoringWeights,
    /// Blend of cook count and rating in historical preference
    pub history: HistoryPreferenceConfig,
    /// Per-serving macro targets for nutritional balance
    pub nutrition_targets: NutritionTargets,
    /// Seasonal relevance settings
    pub seasonal: SeasonalConfig,
}

/// Weights for the aggregate recipe score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Pantry/recipe ingredient overlap
    pub ingredient_match: f64,
    /// Cook count and rating
    pub historical_preference: f64,
    /// In-season ingredients
    pub seasonal_relevance: f64,
    /// Closeness to macro targets
    pub nutritional_balance: f64,
    /// Closeness to the user's skill level
    pub skill_level: f64,
}

impl ScoringWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.ingredient_match
            + self.historical_preference
            + self.seasonal_relevance
            + self.nutritional_balance
            + self.skill_level
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            ingredient_match: 0.35,
            historical_preference: 0.25,
            seasonal_relevance: 0.15,
            nutritional_balance: 0.15,
            skill_level: 0.10,
        }
    }
}

/// Historical preference blend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPreferenceConfig {
    /// Weight of the relative cook count
    pub cook_count_weight: f64,
    /// Weight of the rating
    pub rating_weight: f64,
    /// Cook count relative to the history average saturates here
    pub max_cook_ratio: f64,
}

impl Default for HistoryPreferenceConfig {
    fn default() -> Self {
        Self {
            cook_count_weight: 0.6,
            rating_weight: 0.4,
            max_cook_ratio: 2.0,
        }
    }
}

/// Per-serving macro targets in grams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Protein target
    pub protein_g: f64,
    /// Carbohydrate target
    pub carbs_g: f64,
    /// Fat target
    pub fat_g: f64,
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            protein_g: 30.0,
            carbs_g: 50.0,
            fat_g: 20.0,
        }
    }
}

/// Seasonal relevance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalConfig {
    /// Share of a recipe's ingredients that must be seasonal for a full score
    pub coverage_fraction: f64,
    /// Month (1-12) to in-season keywords
    pub calendar: SeasonalCalendar,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self {
            coverage_fraction: 0.3,
            calendar: SeasonalCalendar::default(),
        }
    }
}

/// Calendar of in-season ingredient keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalCalendar {
    /// Keywords keyed by month number (1 = January)
    pub months: BTreeMap<u32, Vec<String>>,
}

impl SeasonalCalendar {
    /// Keywords for a month; empty for unknown months
    #[must_use]
    pub fn keywords_for(&self, month: u32) -> &[String] {
        self.months.get(&month).map_or(&[], Vec::as_slice)
    }

    /// Whether every month 1..=12 has at least one keyword
    #[must_use]
    pub fn is_complete(&self) -> bool {
        (1..=12).all(|month| !self.keywords_for(month).is_empty())
    }
}

impl Default for SeasonalCalendar {
    fn default() -> Self {
        let table: [(u32, [&str; 5]); 12] = [
            (1, ["citrus", "kale", "cabbage", "leek", "turnip"]),
            (2, ["orange", "cauliflower", "brussels sprout", "parsnip", "grapefruit"]),
            (3, ["asparagus", "artichoke", "spinach", "radish", "pea"]),
            (4, ["asparagus", "rhubarb", "spring onion", "pea", "morel"]),
            (5, ["strawberr", "rhubarb", "fava", "lettuce", "new potato"]),
            (6, ["cherr", "zucchini", "berr", "apricot", "basil"]),
            (7, ["tomato", "corn", "peach", "cucumber", "blueberr"]),
            (8, ["tomato", "eggplant", "pepper", "watermelon", "plum"]),
            (9, ["apple", "fig", "grape", "squash", "pear"]),
            (10, ["pumpkin", "apple", "sweet potato", "cranberr", "mushroom"]),
            (11, ["squash", "pomegranate", "brussels sprout", "parsnip", "cranberr"]),
            (12, ["citrus", "chestnut", "kale", "beet", "pear"]),
        ];
        Self {
            months: table
                .into_iter()
                .map(|(month, keywords)| {
                    (month, keywords.into_iter().map(str::to_owned).collect())
                })
                .collect(),
        }
    }
}
