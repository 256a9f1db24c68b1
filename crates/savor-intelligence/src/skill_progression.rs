// ABOUTME: Derives a cooking skill profile from saved-recipe history
// ABOUTME: Technique and cuisine breadth, difficulty trend, next-level advice, and milestones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

use crate::config::intelligence::{IntelligenceConfig, MilestoneMetric, SkillConfig};
use chrono::{DateTime, Utc};
use savor_core::models::{normalize_name, Difficulty, SavedRecipe};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use uuid::Uuid;

/// Progress towards one fixed milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Display name
    pub name: String,
    /// Threshold reached
    pub achieved: bool,
    /// Fraction of the threshold reached, in `[0, 1]`
    pub progress: f64,
}

/// One point of the difficulty trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultySample {
    /// Recipe the sample comes from
    pub recipe_id: Uuid,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Tier on the 0..1 scale
    pub score: f64,
    /// When the recipe was last cooked
    pub cooked_at: Option<DateTime<Utc>>,
}

/// Skill profile recomputed from history on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMetrics {
    /// Blended skill level in `[0, 1]`
    pub overall_level: f64,
    /// Every technique label seen in the history
    pub techniques_mastered: BTreeSet<String>,
    /// Recipes per cuisine style
    pub cuisine_counts: BTreeMap<String, usize>,
    /// Difficulty trend, oldest cook first; never-cooked recipes last
    pub difficulty_progression: Vec<DifficultySample>,
    /// Mean difficulty on the 0..1 scale
    pub average_difficulty: f64,
    /// Difficulty to attempt next
    pub recommended_next_level: Difficulty,
    /// Milestone ladder
    pub milestones: Vec<Milestone>,
}

/// Cooking history analyzer
#[derive(Debug, Clone)]
pub struct SkillProgressionAnalyzer {
    config: SkillConfig,
}

impl Default for SkillProgressionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillProgressionAnalyzer {
    /// Create an analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().skill.clone(),
        }
    }

    /// Create an analyzer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: SkillConfig) -> Self {
        Self { config }
    }

    /// Build the skill profile for a cooking history
    #[must_use]
    pub fn analyze(&self, history: &[SavedRecipe]) -> SkillMetrics {
        let techniques_mastered: BTreeSet<String> = history
            .iter()
            .flat_map(|recipe| &recipe.protocol.instructions)
            .filter_map(|step| step.technique.as_deref())
            .map(normalize_name)
            .filter(|technique| !technique.is_empty())
            .collect();

        let mut cuisine_counts: BTreeMap<String, usize> = BTreeMap::new();
        for recipe in history {
            let cuisine = normalize_name(&recipe.protocol.cuisine_style);
            if !cuisine.is_empty() {
                *cuisine_counts.entry(cuisine).or_insert(0) += 1;
            }
        }

        let average_difficulty = if history.is_empty() {
            0.0
        } else {
            history
                .iter()
                .map(|recipe| recipe.protocol.difficulty.as_score())
                .sum::<f64>()
                / history.len() as f64
        };

        let technique_breadth = (techniques_mastered.len() as f64
            / self.config.technique_saturation.max(1) as f64)
            .min(1.0);
        let cuisine_breadth = (cuisine_counts.len() as f64
            / self.config.cuisine_saturation.max(1) as f64)
            .min(1.0);
        let overall_level = self
            .config
            .cuisine_weight
            .mul_add(
                cuisine_breadth,
                self.config.difficulty_weight.mul_add(
                    average_difficulty,
                    self.config.technique_weight * technique_breadth,
                ),
            )
            .clamp(0.0, 1.0);

        let measure = |metric: MilestoneMetric| match metric {
            MilestoneMetric::RecipeCount => history.len() as f64,
            MilestoneMetric::TechniqueCount => techniques_mastered.len() as f64,
            MilestoneMetric::CuisineCount => cuisine_counts.len() as f64,
            MilestoneMetric::AverageDifficulty => average_difficulty,
        };
        let milestones = self
            .config
            .milestones
            .iter()
            .map(|definition| {
                let value = measure(definition.metric);
                let progress = if definition.threshold > 0.0 {
                    (value / definition.threshold).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                Milestone {
                    name: definition.name.clone(),
                    achieved: value >= definition.threshold,
                    progress,
                }
            })
            .collect();

        let recommended_next_level = self.next_level(overall_level);

        debug!(
            recipes = history.len(),
            techniques = techniques_mastered.len(),
            cuisines = cuisine_counts.len(),
            overall_level,
            next = recommended_next_level.as_str(),
            "analyzed skill progression"
        );

        SkillMetrics {
            overall_level,
            difficulty_progression: difficulty_progression(history),
            techniques_mastered,
            cuisine_counts,
            average_difficulty,
            recommended_next_level,
            milestones,
        }
    }

    /// Step function from overall level to the difficulty to attempt next
    #[must_use]
    pub fn next_level(&self, overall_level: f64) -> Difficulty {
        let thresholds = &self.config.next_level;
        if overall_level > thresholds.expert_above {
            Difficulty::Expert
        } else if overall_level > thresholds.hard_above {
            Difficulty::Hard
        } else if overall_level > thresholds.medium_above {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }
}

fn difficulty_progression(history: &[SavedRecipe]) -> Vec<DifficultySample> {
    let mut samples: Vec<DifficultySample> = history
        .iter()
        .map(|recipe| DifficultySample {
            recipe_id: recipe.id,
            difficulty: recipe.protocol.difficulty,
            score: recipe.protocol.difficulty.as_score(),
            cooked_at: recipe.last_cooked,
        })
        .collect();
    samples.sort_by_key(|sample| (sample.cooked_at.is_none(), sample.cooked_at));
    samples
}
