// ABOUTME: In-memory recipe repository backed by tokio read-write locks
// ABOUTME: Supports seeding, saving, cooking, and rating recipes plus pantry edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

use super::RecipeRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use savor_core::errors::{AppError, AppResult};
use savor_core::models::{Ingredient, SavedRecipe};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Repository holding recipes and pantry items in process memory
///
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    recipes: Arc<RwLock<Vec<SavedRecipe>>>,
    pantry: Arc<RwLock<Vec<Ingredient>>>,
}

impl InMemoryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with recipes and pantry items
    #[must_use]
    pub fn seeded(recipes: Vec<SavedRecipe>, pantry: Vec<Ingredient>) -> Self {
        Self {
            recipes: Arc::new(RwLock::new(recipes)),
            pantry: Arc::new(RwLock::new(pantry)),
        }
    }

    /// Insert a recipe, replacing any stored recipe with the same id
    pub async fn save_recipe(&self, recipe: SavedRecipe) {
        let mut recipes = self.recipes.write().await;
        match recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => *existing = recipe,
            None => recipes.push(recipe),
        }
    }

    /// Add an item to the pantry
    pub async fn add_ingredient(&self, ingredient: Ingredient) {
        self.pantry.write().await.push(ingredient);
    }

    /// Remove a pantry item, returning it if present
    pub async fn remove_ingredient(&self, id: Uuid) -> Option<Ingredient> {
        let mut pantry = self.pantry.write().await;
        let index = pantry.iter().position(|item| item.id == id)?;
        Some(pantry.remove(index))
    }

    /// Record that a recipe was cooked at `at`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if no recipe has this id
    pub async fn record_cook(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<u32> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
        recipe.record_cook(at);
        debug!(recipe_id = %id, cook_count = recipe.cook_count, "recorded cook");
        Ok(recipe.cook_count)
    }

    /// Rate a recipe from 1 to 5
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` for an unknown id and
    /// `ErrorCode::ValueOutOfRange` for a rating outside 1-5
    pub async fn rate_recipe(&self, id: Uuid, rating: u8) -> AppResult<()> {
        let mut recipes = self.recipes.write().await;
        recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?
            .rate(rating)
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    async fn get_all_recipes(&self) -> AppResult<Vec<SavedRecipe>> {
        Ok(self.recipes.read().await.clone())
    }

    async fn get_cooking_history(&self) -> AppResult<Vec<SavedRecipe>> {
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .filter(|recipe| recipe.has_been_cooked())
            .cloned()
            .collect())
    }

    async fn get_pantry(&self) -> AppResult<Vec<Ingredient>> {
        Ok(self.pantry.read().await.clone())
    }
}
