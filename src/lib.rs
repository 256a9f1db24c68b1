// ABOUTME: Main library entry point for the Savor pantry decision-support service
// ABOUTME: Wires repository snapshots into fusion, expiry, scoring, skill, planning, and pantry analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

#![deny(unsafe_code)]

//! # Savor
//!
//! Offline decision-support core for a photo-to-recipe pantry application.
//! Perception, recipe generation, and storage happen elsewhere; this crate
//! takes their records and answers the everyday questions:
//!
//! - which ingredient is in this photo, and should the user double-check it
//! - what should I cook from what I have
//! - what is about to spoil
//! - how is my cooking improving
//! - what should I eat this week
//! - how healthy is my pantry
//!
//! ## Architecture
//!
//! - **`savor-core`**: domain models, errors, constants
//! - **`savor-intelligence`**: stateless algorithms and their configuration
//! - **repository**: injected async data access ([`repository::RecipeRepository`])
//! - **services**: [`services::DecisionSupportService`] facade
//! - **logging**: `tracing-subscriber` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use savor::repository::InMemoryRepository;
//! use savor::services::DecisionSupportService;
//! use savor::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let service = DecisionSupportService::new(InMemoryRepository::new());
//!     let plan = service.plan_meals(7, 3).await?;
//!     println!("planned {} meals", plan.entries.len());
//!     Ok(())
//! }
//! ```

/// Structured logging setup
pub mod logging;

/// Data access contract and in-memory implementation
pub mod repository;

/// Decision-support service layer
pub mod services;

pub use savor_core::{constants, errors, models};
pub use savor_intelligence as intelligence;
