// ABOUTME: Decision-support engine for the Savor pantry platform
// ABOUTME: Fuses classifier output, predicts spoilage, ranks recipes, tracks skill, and plans meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

#![deny(unsafe_code)]

//! # Savor Intelligence
//!
//! Stateless, synchronous components that turn already-fetched pantry,
//! recipe, and classifier data into decisions. Each component holds only
//! immutable configuration, so instances can be shared freely across threads
//! and calls with equal inputs return equal outputs.
//!
//! ## Components
//!
//! - **`prediction_fusion`**: weighted ensemble of image-classifier outputs
//! - **`expiration_predictor`**: shelf-life estimates and urgency tiers
//! - **`recommendation_scorer`**: five-factor recipe ranking
//! - **`skill_progression`**: cooking skill profile and milestones
//! - **`meal_plan_optimizer`**: greedy multi-day meal planning
//! - **`pantry_health`**: utilization, spoilage risk, and suggestions
//!
//! Tunable constants live in [`config::IntelligenceConfig`].

/// Algorithm configuration with environment overrides
pub mod config;

/// Multi-model prediction fusion
pub mod prediction_fusion;

/// Shelf-life estimation
pub mod expiration_predictor;

/// Recipe recommendation scoring
pub mod recommendation_scorer;

/// Cooking skill analysis
pub mod skill_progression;

/// Meal planning
pub mod meal_plan_optimizer;

/// Pantry health reporting
pub mod pantry_health;

pub use config::{ConfigError, IntelligenceConfig};
pub use expiration_predictor::{ExpirationPrediction, ExpirationPredictor, Urgency};
pub use meal_plan_optimizer::{MealPlanEntry, MealPlanOptimization, MealPlanOptimizer, MealSlot};
pub use pantry_health::{ExpiringItem, PantryHealthAnalyzer, PantryHealthReport, UnderutilizedItem};
pub use prediction_fusion::{
    FusedPrediction, FusionError, LabelScore, ModelContribution, PredictionFusionEngine,
};
pub use recommendation_scorer::{RecipeScore, RecommendationScorer, ScoreFactors};
pub use skill_progression::{DifficultySample, Milestone, SkillMetrics, SkillProgressionAnalyzer};
