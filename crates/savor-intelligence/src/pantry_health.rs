// ABOUTME: Whole-pantry health report combining expiry estimates, usage history, and recipe ranking
// ABOUTME: Flags expiring and underused items and suggests recipes that use what is on hand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

use crate::config::intelligence::{IntelligenceConfig, PantryHealthConfig};
use crate::expiration_predictor::{ExpirationPredictor, Urgency};
use crate::recommendation_scorer::{pantry_names, RecommendationScorer};
use chrono::{Datelike, Utc};
use savor_core::models::{normalize_name, Ingredient, SavedRecipe};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;
use uuid::Uuid;

/// A pantry item predicted to spoil soon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringItem {
    /// Pantry item
    pub ingredient_id: Uuid,
    /// Item name as stored
    pub name: String,
    /// Predicted days left
    pub predicted_expiration_days: u32,
    /// Urgency tier for those days
    pub urgency: Urgency,
}

/// A pantry item the user rarely cooks with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderutilizedItem {
    /// Pantry item
    pub ingredient_id: Uuid,
    /// Item name as stored
    pub name: String,
    /// Weighted number of cooked recipes that used this name
    pub usage_frequency: f64,
}

/// Summary of pantry usage and spoilage risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryHealthReport {
    /// Share of pantry items whose name appears in the cooking history
    pub utilization_rate: f64,
    /// Items expiring within the configured window, soonest first
    pub expiring_items: Vec<ExpiringItem>,
    /// Items used well below the average ingredient
    pub underutilized_items: Vec<UnderutilizedItem>,
    /// Best recipes for the current pantry
    pub suggested_recipes: Vec<Uuid>,
    /// Percentage of the pantry at risk of being wasted
    pub waste_reduction_potential: f64,
}

/// Pantry-wide health analysis
#[derive(Debug, Clone)]
pub struct PantryHealthAnalyzer {
    predictor: ExpirationPredictor,
    scorer: RecommendationScorer,
    config: PantryHealthConfig,
}

impl Default for PantryHealthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PantryHealthAnalyzer {
    /// Create an analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            predictor: ExpirationPredictor::new(),
            scorer: RecommendationScorer::new(),
            config: IntelligenceConfig::global().pantry_health.clone(),
        }
    }

    /// Create an analyzer from explicit components and configuration
    #[must_use]
    pub const fn with_config(
        predictor: ExpirationPredictor,
        scorer: RecommendationScorer,
        config: PantryHealthConfig,
    ) -> Self {
        Self {
            predictor,
            scorer,
            config,
        }
    }

    /// Analyze the pantry, ranking suggestions for the current month
    #[must_use]
    pub fn analyze(
        &self,
        pantry: &[Ingredient],
        history: &[SavedRecipe],
        all_recipes: &[SavedRecipe],
    ) -> PantryHealthReport {
        self.analyze_for_month(pantry, history, all_recipes, Utc::now().month())
    }

    /// Analyze the pantry, ranking suggestions with the seasonal keywords of `month`
    #[must_use]
    pub fn analyze_for_month(
        &self,
        pantry: &[Ingredient],
        history: &[SavedRecipe],
        all_recipes: &[SavedRecipe],
        month: u32,
    ) -> PantryHealthReport {
        let pantry_size = pantry.len().max(1) as f64;
        let frequencies = usage_frequencies(history);

        let on_hand = pantry_names(pantry);
        let used_on_hand = on_hand
            .iter()
            .filter(|name| frequencies.contains_key(*name))
            .count();
        let utilization_rate = used_on_hand as f64 / pantry_size;

        let expiring_items = self.expiring_items(pantry);
        let underutilized_items = self.underutilized_items(pantry, &frequencies);

        let suggested_recipes: Vec<Uuid> = self
            .scorer
            .score_for_month(
                pantry,
                history,
                all_recipes,
                self.config.default_skill_level,
                month,
            )
            .into_iter()
            .take(self.config.suggestion_limit)
            .map(|score| score.recipe_id)
            .collect();

        let waste_reduction_potential = 100.0 * expiring_items.len() as f64 / pantry_size;

        debug!(
            pantry_items = pantry.len(),
            utilization_rate,
            expiring = expiring_items.len(),
            underutilized = underutilized_items.len(),
            suggestions = suggested_recipes.len(),
            "analyzed pantry health"
        );

        PantryHealthReport {
            utilization_rate,
            expiring_items,
            underutilized_items,
            suggested_recipes,
            waste_reduction_potential,
        }
    }

    fn expiring_items(&self, pantry: &[Ingredient]) -> Vec<ExpiringItem> {
        let names: HashMap<Uuid, &str> = pantry
            .iter()
            .map(|item| (item.id, item.name.as_str()))
            .collect();

        self.predictor
            .predict_all(pantry)
            .into_iter()
            .filter(|p| p.predicted_expiration_days <= self.config.expiring_within_days)
            .map(|p| ExpiringItem {
                ingredient_id: p.ingredient_id,
                name: names
                    .get(&p.ingredient_id)
                    .map_or_else(String::new, |name| (*name).to_owned()),
                predicted_expiration_days: p.predicted_expiration_days,
                urgency: p.urgency,
            })
            .collect()
    }

    fn underutilized_items(
        &self,
        pantry: &[Ingredient],
        frequencies: &HashMap<String, f64>,
    ) -> Vec<UnderutilizedItem> {
        if frequencies.is_empty() {
            return Vec::new();
        }
        let mean = frequencies.values().sum::<f64>() / frequencies.len() as f64;
        let cutoff = self.config.underutilized_fraction * mean;

        pantry
            .iter()
            .filter_map(|item| {
                let usage_frequency = frequencies
                    .get(&normalize_name(&item.name))
                    .copied()
                    .unwrap_or(0.0);
                (usage_frequency < cutoff).then(|| UnderutilizedItem {
                    ingredient_id: item.id,
                    name: item.name.clone(),
                    usage_frequency,
                })
            })
            .collect()
    }
}

/// Per-name usage: each history recipe using a name adds `max(cook_count, 1)`
fn usage_frequencies(history: &[SavedRecipe]) -> HashMap<String, f64> {
    let mut frequencies: HashMap<String, f64> = HashMap::new();
    for recipe in history {
        let weight = f64::from(recipe.cook_count.max(1));
        let names: HashSet<String> = recipe.protocol.ingredient_names();
        for name in names {
            *frequencies.entry(name).or_insert(0.0) += weight;
        }
    }
    frequencies
}
