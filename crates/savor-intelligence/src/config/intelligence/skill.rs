// ABOUTME: Skill progression configuration: level blend, saturation points, and milestones
// ABOUTME: Configures next-difficulty thresholds and the fixed milestone ladder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! Skill Progression Configuration

use serde::{Deserialize, Serialize};

/// Skill progression analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    /// Weight of the average recipe difficulty
    pub difficulty_weight: f64,
    /// Weight of technique breadth
    pub technique_weight: f64,
    /// Weight of cuisine breadth
    pub cuisine_weight: f64,
    /// Technique count at which breadth saturates
    pub technique_saturation: usize,
    /// Cuisine count at which breadth saturates
    pub cuisine_saturation: usize,
    /// Overall level thresholds for the recommended next difficulty
    pub next_level: NextLevelThresholds,
    /// Milestone ladder
    pub milestones: Vec<MilestoneDefinition>,
}

/// Strict lower bounds of overall level for each recommended difficulty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextLevelThresholds {
    /// Above: medium
    pub medium_above: f64,
    /// Above: hard
    pub hard_above: f64,
    /// Above: expert
    pub expert_above: f64,
}

/// Quantity a milestone measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneMetric {
    /// Recipes in the history
    RecipeCount,
    /// Distinct techniques
    TechniqueCount,
    /// Distinct cuisines
    CuisineCount,
    /// Mean difficulty on the 0..1 scale
    AverageDifficulty,
}

/// A fixed milestone threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneDefinition {
    /// Display name
    pub name: String,
    /// Measured quantity
    pub metric: MilestoneMetric,
    /// Value at which the milestone is achieved
    pub threshold: f64,
}

impl MilestoneDefinition {
    fn new(name: &str, metric: MilestoneMetric, threshold: f64) -> Self {
        Self {
            name: name.to_owned(),
            metric,
            threshold,
        }
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        use MilestoneMetric as M;
        Self {
            difficulty_weight: 0.4,
            technique_weight: 0.3,
            cuisine_weight: 0.3,
            technique_saturation: 30,
            cuisine_saturation: 8,
            next_level: NextLevelThresholds::default(),
            milestones: vec![
                MilestoneDefinition::new("First Dish", M::RecipeCount, 1.0),
                MilestoneDefinition::new("Recipe Explorer", M::RecipeCount, 10.0),
                MilestoneDefinition::new("Technique Apprentice", M::TechniqueCount, 10.0),
                MilestoneDefinition::new("Technique Master", M::TechniqueCount, 25.0),
                MilestoneDefinition::new("World Traveler", M::CuisineCount, 5.0),
                MilestoneDefinition::new("Challenge Seeker", M::AverageDifficulty, 0.6),
            ],
        }
    }
}

impl Default for NextLevelThresholds {
    fn default() -> Self {
        Self {
            medium_above: 0.3,
            hard_above: 0.5,
            expert_above: 0.7,
        }
    }
}
