// ABOUTME: Estimates remaining shelf life of pantry items from category and freshness
// ABOUTME: Maps predicted days to urgency tiers and templated storage recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

use crate::config::intelligence::{ExpirationConfig, IntelligenceConfig};
use savor_core::models::{Ingredient, IngredientCategory};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// How soon an item needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Spoils within about a day
    Critical,
    /// Spoils within a few days
    High,
    /// Spoils within a week
    Medium,
    /// No action needed
    Low,
}

/// Shelf-life estimate for one pantry item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpirationPrediction {
    /// Ingredient this estimate refers to
    pub ingredient_id: Uuid,
    /// Whole days until the item is expected to spoil
    pub predicted_expiration_days: u32,
    /// Confidence carried over from detection
    pub confidence: f64,
    /// Urgency tier derived from `predicted_expiration_days`
    pub urgency: Urgency,
    /// Human-readable advice, most important first
    pub recommendations: Vec<String>,
}

/// Category-based shelf-life estimator
#[derive(Debug, Clone)]
pub struct ExpirationPredictor {
    config: ExpirationConfig,
}

impl Default for ExpirationPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpirationPredictor {
    /// Create a predictor using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().expiration.clone(),
        }
    }

    /// Create a predictor with an explicit configuration
    #[must_use]
    pub const fn with_config(config: ExpirationConfig) -> Self {
        Self { config }
    }

    /// Shelf life of a perfectly fresh item in this category
    #[must_use]
    pub fn base_shelf_life(&self, category: IngredientCategory) -> u32 {
        self.config
            .base_shelf_life_days
            .get(&category)
            .copied()
            .unwrap_or(self.config.default_shelf_life_days)
    }

    /// Estimate remaining shelf life of one ingredient
    #[must_use]
    pub fn predict(&self, ingredient: &Ingredient) -> ExpirationPrediction {
        let base = f64::from(self.base_shelf_life(ingredient.category));
        let days = (base * ingredient.vitality_score / 100.0).round().max(0.0) as u32;
        let urgency = self.urgency_for(days);
        let confidence = ingredient
            .confidence
            .unwrap_or(self.config.default_confidence);

        debug!(
            ingredient = %ingredient.name,
            category = %ingredient.category,
            days,
            ?urgency,
            "predicted expiration"
        );

        ExpirationPrediction {
            ingredient_id: ingredient.id,
            predicted_expiration_days: days,
            confidence,
            urgency,
            recommendations: self.recommendations(ingredient, days, urgency),
        }
    }

    /// Estimate every item, soonest first (stable for equal days)
    #[must_use]
    pub fn predict_all(&self, pantry: &[Ingredient]) -> Vec<ExpirationPrediction> {
        let mut predictions: Vec<ExpirationPrediction> =
            pantry.iter().map(|item| self.predict(item)).collect();
        predictions.sort_by_key(|p| p.predicted_expiration_days);
        predictions
    }

    /// Urgency tier for a number of remaining days
    #[must_use]
    pub const fn urgency_for(&self, days: u32) -> Urgency {
        let windows = &self.config.urgency;
        if days <= windows.critical_max_days {
            Urgency::Critical
        } else if days <= windows.high_max_days {
            Urgency::High
        } else if days <= windows.medium_max_days {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    fn recommendations(&self, ingredient: &Ingredient, days: u32, urgency: Urgency) -> Vec<String> {
        let messages = &self.config.messages;
        let windows = &self.config.urgency;
        let render = |template: &str| {
            template
                .replace("{name}", &ingredient.name)
                .replace("{days}", &days.to_string())
        };

        let primary = if days <= windows.cook_now_max_days {
            &messages.cook_immediately
        } else if days <= windows.plan_ahead_max_days {
            &messages.plan_this_week
        } else {
            &messages.reassurance
        };
        let mut advice = vec![render(primary)];

        if urgency == Urgency::Critical
            && self.config.freezable_categories.contains(&ingredient.category)
        {
            advice.push(render(&messages.freeze_hint));
        }
        if let Some(tip) = messages.storage_tips.get(&ingredient.category) {
            advice.push(tip.clone());
        }
        advice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predictor() -> ExpirationPredictor {
        ExpirationPredictor::with_config(ExpirationConfig::default())
    }

    #[test]
    fn test_half_fresh_vegetable() {
        let carrot = Ingredient::new("carrot", IngredientCategory::Vegetable).with_vitality(50.0);
        let prediction = predictor().predict(&carrot);

        assert_eq!(prediction.predicted_expiration_days, 5);
        assert_eq!(prediction.urgency, Urgency::Medium);
        assert_eq!(prediction.ingredient_id, carrot.id);
        assert!(prediction.recommendations[0].contains("this week"));
    }

    #[test]
    fn test_urgency_boundaries() {
        let cases = [
            (0.0, 0, Urgency::Critical),
            (10.0, 1, Urgency::Critical),
            (20.0, 2, Urgency::High),
            (30.0, 3, Urgency::High),
            (40.0, 4, Urgency::Medium),
            (70.0, 7, Urgency::Medium),
            (80.0, 8, Urgency::Low),
        ];
        for (vitality, days, urgency) in cases {
            let item = Ingredient::new("zucchini", IngredientCategory::Vegetable)
                .with_vitality(vitality);
            let prediction = predictor().predict(&item);
            assert_eq!(prediction.predicted_expiration_days, days, "vitality {vitality}");
            assert_eq!(prediction.urgency, urgency, "vitality {vitality}");
        }
    }

    #[test]
    fn test_unknown_category_uses_default_shelf_life() {
        let item = Ingredient::new("kombucha scoby", IngredientCategory::Other);
        let prediction = predictor().predict(&item);
        assert_eq!(prediction.predicted_expiration_days, 14);
        assert_eq!(prediction.urgency, Urgency::Low);
    }

    #[test]
    fn test_confidence_passthrough_and_default() {
        let detected = Ingredient::new("milk", IngredientCategory::Dairy).with_confidence(0.92);
        assert!((predictor().predict(&detected).confidence - 0.92).abs() < f64::EPSILON);

        let manual = Ingredient::new("milk", IngredientCategory::Dairy);
        assert!((predictor().predict(&manual).confidence - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_critical_freezable_item_gets_freeze_hint() {
        let salmon = Ingredient::new("salmon", IngredientCategory::Seafood).with_vitality(40.0);
        let prediction = predictor().predict(&salmon);

        assert_eq!(prediction.predicted_expiration_days, 1);
        assert_eq!(prediction.urgency, Urgency::Critical);
        assert!(prediction.recommendations[0].starts_with("Cook salmon immediately"));
        assert!(prediction.recommendations[1].starts_with("Freeze salmon"));
        assert_eq!(prediction.recommendations.len(), 3);
    }

    #[test]
    fn test_fresh_item_gets_reassurance() {
        let rice = Ingredient::new("rice", IngredientCategory::Grain);
        let prediction = predictor().predict(&rice);
        assert_eq!(prediction.recommendations, vec!["rice is fresh - roughly 180 days to go"]);
    }

    #[test]
    fn test_predict_all_sorts_soonest_first() {
        let pantry = vec![
            Ingredient::new("rice", IngredientCategory::Grain),
            Ingredient::new("shrimp", IngredientCategory::Seafood),
            Ingredient::new("yogurt", IngredientCategory::Dairy).with_vitality(30.0),
        ];
        let days: Vec<u32> = predictor()
            .predict_all(&pantry)
            .iter()
            .map(|p| p.predicted_expiration_days)
            .collect();
        assert_eq!(days, vec![2, 3, 180]);
    }

    #[test]
    fn test_prediction_is_idempotent() {
        let item = Ingredient::new("spinach", IngredientCategory::Vegetable).with_vitality(63.0);
        assert_eq!(predictor().predict(&item), predictor().predict(&item));
    }
}
