// ABOUTME: Repository contract supplying pantry, recipe, and cooking-history snapshots
// ABOUTME: Storage lives outside this crate; implementations are injected into the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! # Recipe Repository
//!
//! The decision-support components never touch storage. Callers inject a
//! [`RecipeRepository`] and the service fetches owned snapshots through it
//! before running any algorithm.

/// In-memory repository for tests and demos
pub mod memory;

pub use memory::InMemoryRepository;

use async_trait::async_trait;
use savor_core::errors::AppResult;
use savor_core::models::{Ingredient, SavedRecipe};

/// Read access to the user's saved recipes and pantry
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Every saved recipe
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::StorageError` if the backing store cannot be read
    async fn get_all_recipes(&self) -> AppResult<Vec<SavedRecipe>>;

    /// Saved recipes the user has cooked at least once
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::StorageError` if the backing store cannot be read
    async fn get_cooking_history(&self) -> AppResult<Vec<SavedRecipe>>;

    /// Current pantry contents
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::StorageError` if the backing store cannot be read
    async fn get_pantry(&self) -> AppResult<Vec<Ingredient>>;
}
