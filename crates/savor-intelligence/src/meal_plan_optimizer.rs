// ABOUTME: Greedy multi-day meal planner built on the recommendation scorer
// ABOUTME: Fills day/meal slots with the best unused recipes and reports balance, efficiency, and variety
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! # Meal Plan Optimizer
//!
//! Slots are filled day by day, meal by meal, each with the best-ranked
//! recipe not yet in the plan. The pantry and history do not change while a
//! plan is built, so the candidates are ranked once up front; the result is
//! the same as re-ranking before every slot.

use crate::config::intelligence::{IntelligenceConfig, MealPlanConfig};
use crate::recommendation_scorer::{pantry_names, RecipeScore, RecommendationScorer};
use chrono::{Datelike, Utc};
use savor_core::models::{Ingredient, NutritionalProfile, SavedRecipe};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;
use uuid::Uuid;

/// Meal within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Any additional meal
    Snack,
}

impl MealSlot {
    /// Slot name for the `index`-th meal of a day with `meals_per_day` meals
    ///
    /// One meal a day is dinner, two are lunch and dinner, three or more start
    /// with breakfast; meals beyond the third are snacks.
    #[must_use]
    pub const fn for_position(index: usize, meals_per_day: usize) -> Self {
        let offset = match meals_per_day {
            0 | 1 => 2,
            2 => 1,
            _ => 0,
        };
        match index + offset {
            0 => Self::Breakfast,
            1 => Self::Lunch,
            2 => Self::Dinner,
            _ => Self::Snack,
        }
    }
}

/// One planned meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    /// Day number, starting at 1
    pub day: usize,
    /// Meal within the day
    pub slot: MealSlot,
    /// Planned recipe
    pub recipe_id: Uuid,
    /// Planned recipe name
    pub recipe_name: String,
    /// The recipe's nutritional balance factor
    pub nutritional_score: f64,
}

/// A generated meal plan with quality measures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanOptimization {
    /// Planned meals in day-then-meal order
    pub entries: Vec<MealPlanEntry>,
    /// Mean nutritional balance of the planned meals
    pub nutritional_balance: f64,
    /// Share of the plan's ingredient names already in the pantry
    pub ingredient_efficiency: f64,
    /// Distinct recipes per filled slot
    pub variety_score: f64,
    /// Summed per-serving nutrition of the planned meals
    pub total_nutrition: NutritionalProfile,
    /// Slots left empty because candidates ran out
    pub unfilled_slots: usize,
}

/// Greedy slot-filling meal planner
#[derive(Debug, Clone)]
pub struct MealPlanOptimizer {
    scorer: RecommendationScorer,
    config: MealPlanConfig,
}

impl Default for MealPlanOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl MealPlanOptimizer {
    /// Create a planner using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            scorer: RecommendationScorer::new(),
            config: IntelligenceConfig::global().meal_plan.clone(),
        }
    }

    /// Create a planner with an explicit scorer and configuration
    #[must_use]
    pub const fn with_config(scorer: RecommendationScorer, config: MealPlanConfig) -> Self {
        Self { scorer, config }
    }

    /// Plan `days × meals_per_day` meals for the current month
    #[must_use]
    pub fn optimize(
        &self,
        pantry: &[Ingredient],
        history: &[SavedRecipe],
        all_recipes: &[SavedRecipe],
        days: usize,
        meals_per_day: usize,
    ) -> MealPlanOptimization {
        self.optimize_for_month(
            pantry,
            history,
            all_recipes,
            days,
            meals_per_day,
            Utc::now().month(),
        )
    }

    /// Plan meals ranking candidates with the seasonal keywords of `month`
    #[must_use]
    pub fn optimize_for_month(
        &self,
        pantry: &[Ingredient],
        history: &[SavedRecipe],
        all_recipes: &[SavedRecipe],
        days: usize,
        meals_per_day: usize,
        month: u32,
    ) -> MealPlanOptimization {
        let ranked = self.scorer.score_for_month(
            pantry,
            history,
            all_recipes,
            self.config.default_skill_level,
            month,
        );
        let recipes: HashMap<Uuid, &SavedRecipe> =
            all_recipes.iter().map(|recipe| (recipe.id, recipe)).collect();

        let mut placed: HashSet<Uuid> = HashSet::new();
        let mut candidates = ranked.iter();
        let mut entries = Vec::new();
        let mut unfilled_slots = 0;

        for day in 1..=days {
            for meal in 0..meals_per_day {
                match candidates.by_ref().find(|score| placed.insert(score.recipe_id)) {
                    Some(choice) => entries.push(Self::entry(day, meal, meals_per_day, choice)),
                    None => unfilled_slots += 1,
                }
            }
        }

        let chosen: Vec<&SavedRecipe> = entries
            .iter()
            .filter_map(|entry| recipes.get(&entry.recipe_id).copied())
            .collect();

        let nutritional_balance = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.nutritional_score).sum::<f64>() / entries.len() as f64
        };

        let plan_names: HashSet<String> = chosen
            .iter()
            .flat_map(|recipe| recipe.protocol.ingredient_names())
            .collect();
        let on_hand = pantry_names(pantry);
        let ingredient_efficiency = plan_names.intersection(&on_hand).count() as f64
            / plan_names.len().max(1) as f64;

        let distinct: HashSet<Uuid> = entries.iter().map(|e| e.recipe_id).collect();
        let variety_score = distinct.len() as f64 / entries.len().max(1) as f64;

        let mut total_nutrition = NutritionalProfile::default();
        for recipe in &chosen {
            total_nutrition += recipe.protocol.nutrition;
        }

        debug!(
            days,
            meals_per_day,
            planned = entries.len(),
            unfilled_slots,
            ingredient_efficiency,
            "optimized meal plan"
        );

        MealPlanOptimization {
            entries,
            nutritional_balance,
            ingredient_efficiency,
            variety_score,
            total_nutrition,
            unfilled_slots,
        }
    }

    fn entry(day: usize, meal: usize, meals_per_day: usize, choice: &RecipeScore) -> MealPlanEntry {
        MealPlanEntry {
            day,
            slot: MealSlot::for_position(meal, meals_per_day),
            recipe_id: choice.recipe_id,
            recipe_name: choice.recipe_name.clone(),
            nutritional_score: choice.factors.nutritional_balance,
        }
    }
}
