// ABOUTME: Ranks saved recipes against the current pantry, cooking history, season, and skill
// ABOUTME: Weighted blend of Jaccard ingredient match, preference, seasonality, nutrition, and difficulty fit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! # Recommendation Scorer
//!
//! Every factor lies in `[0, 1]` and every ratio divides by a denominator
//! floored at 1, so empty pantries and first-use histories score zero rather
//! than failing.

use crate::config::intelligence::{IntelligenceConfig, ScoringConfig};
use chrono::{Datelike, Utc};
use savor_core::models::{normalize_name, Ingredient, NutritionalProfile, SavedRecipe};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Named factor breakdown of a recipe score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreFactors {
    /// Jaccard overlap of pantry and recipe ingredient names
    pub ingredient_match: f64,
    /// Relative cook count blended with rating
    pub historical_preference: f64,
    /// Share of in-season ingredients
    pub seasonal_relevance: f64,
    /// Closeness of macros to the per-serving targets
    pub nutritional_balance: f64,
    /// Closeness of recipe difficulty to the user's skill
    pub skill_level: f64,
}

/// Aggregate ranking score for one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeScore {
    /// Scored recipe
    pub recipe_id: Uuid,
    /// Recipe display name
    pub recipe_name: String,
    /// Weighted aggregate in `[0, 1]`
    pub score: f64,
    /// Individual factors
    pub factors: ScoreFactors,
}

/// Per-call values shared by every candidate
struct ScoringContext<'a> {
    pantry_names: HashSet<String>,
    average_cook_count: f64,
    seasonal_keywords: &'a [String],
    skill_level: f64,
}

/// Weighted multi-factor recipe ranker
#[derive(Debug, Clone)]
pub struct RecommendationScorer {
    config: ScoringConfig,
}

impl Default for RecommendationScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationScorer {
    /// Create a scorer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().scoring.clone(),
        }
    }

    /// Create a scorer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Rank `all_recipes` for the current calendar month, best first
    #[must_use]
    pub fn score(
        &self,
        pantry: &[Ingredient],
        history: &[SavedRecipe],
        all_recipes: &[SavedRecipe],
        skill_level: f64,
    ) -> Vec<RecipeScore> {
        self.score_for_month(pantry, history, all_recipes, skill_level, Utc::now().month())
    }

    /// Rank `all_recipes` using the seasonal keywords of `month` (1-12)
    ///
    /// Recipes with equal scores keep their input order.
    #[must_use]
    pub fn score_for_month(
        &self,
        pantry: &[Ingredient],
        history: &[SavedRecipe],
        all_recipes: &[SavedRecipe],
        skill_level: f64,
        month: u32,
    ) -> Vec<RecipeScore> {
        let context = ScoringContext {
            pantry_names: pantry_names(pantry),
            average_cook_count: average_cook_count(history),
            seasonal_keywords: self.config.seasonal.calendar.keywords_for(month),
            skill_level,
        };

        let mut scores: Vec<RecipeScore> = all_recipes
            .iter()
            .map(|recipe| self.score_recipe(&context, recipe))
            .collect();
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            candidates = scores.len(),
            pantry_items = pantry.len(),
            history = history.len(),
            month,
            top = scores.first().map(|s| s.recipe_name.as_str()),
            "scored recipe recommendations"
        );
        scores
    }

    fn score_recipe(&self, context: &ScoringContext<'_>, recipe: &SavedRecipe) -> RecipeScore {
        let recipe_names = recipe.protocol.ingredient_names();
        let factors = ScoreFactors {
            ingredient_match: jaccard(&context.pantry_names, &recipe_names),
            historical_preference: self.historical_preference(recipe, context.average_cook_count),
            seasonal_relevance: self.seasonal_relevance(&recipe_names, context.seasonal_keywords),
            nutritional_balance: self.nutritional_balance(&recipe.protocol.nutrition),
            skill_level: skill_fit(recipe.protocol.difficulty.as_score(), context.skill_level),
        };

        let weights = &self.config.weights;
        let score = weights.skill_level.mul_add(
            factors.skill_level,
            weights.nutritional_balance.mul_add(
                factors.nutritional_balance,
                weights.seasonal_relevance.mul_add(
                    factors.seasonal_relevance,
                    weights.historical_preference.mul_add(
                        factors.historical_preference,
                        weights.ingredient_match * factors.ingredient_match,
                    ),
                ),
            ),
        );

        RecipeScore {
            recipe_id: recipe.id,
            recipe_name: recipe.protocol.name.clone(),
            score: score.clamp(0.0, 1.0),
            factors,
        }
    }

    fn historical_preference(&self, recipe: &SavedRecipe, average_cook_count: f64) -> f64 {
        let history = &self.config.history;
        let relative_cooks =
            (f64::from(recipe.cook_count) / average_cook_count.max(1.0)).min(history.max_cook_ratio);
        let rating = f64::from(recipe.rating.unwrap_or(0).min(5)) / 5.0;
        let preference = history.cook_count_weight.mul_add(
            relative_cooks / history.max_cook_ratio,
            history.rating_weight * rating,
        );
        preference.clamp(0.0, 1.0)
    }

    fn seasonal_relevance(&self, recipe_names: &HashSet<String>, keywords: &[String]) -> f64 {
        if recipe_names.is_empty() || keywords.is_empty() {
            return 0.0;
        }
        let in_season = recipe_names
            .iter()
            .filter(|name| {
                keywords
                    .iter()
                    .any(|keyword| name.contains(&normalize_name(keyword)))
            })
            .count();
        let expected = (self.config.seasonal.coverage_fraction * recipe_names.len() as f64).max(1.0);
        (in_season as f64 / expected).min(1.0)
    }

    /// `1 - mean relative deviation` from the macro targets, clamped to `[0, 1]`
    #[must_use]
    pub fn nutritional_balance(&self, nutrition: &NutritionalProfile) -> f64 {
        let targets = &self.config.nutrition_targets;
        let deviation =
            |actual: f64, target: f64| (actual - target).abs() / target.max(f64::EPSILON);
        let mean_deviation = (deviation(nutrition.protein_g, targets.protein_g)
            + deviation(nutrition.carbs_g, targets.carbs_g)
            + deviation(nutrition.fat_g, targets.fat_g))
            / 3.0;
        (1.0 - mean_deviation).clamp(0.0, 1.0)
    }
}

/// Distinct normalized pantry ingredient names
#[must_use]
pub fn pantry_names(pantry: &[Ingredient]) -> HashSet<String> {
    pantry
        .iter()
        .map(|item| normalize_name(&item.name))
        .filter(|name| !name.is_empty())
        .collect()
}

/// `|A ∩ B| / max(|A ∪ B|, 1)`
#[must_use]
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.union(b).count().max(1);
    intersection as f64 / union as f64
}

fn average_cook_count(history: &[SavedRecipe]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let total: f64 = history.iter().map(|r| f64::from(r.cook_count)).sum();
    total / history.len() as f64
}

fn skill_fit(difficulty: f64, skill_level: f64) -> f64 {
    (1.0 - (difficulty - skill_level).abs()).clamp(0.0, 1.0)
}
