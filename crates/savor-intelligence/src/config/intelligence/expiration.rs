// ABOUTME: Shelf-life estimation configuration per ingredient category
// ABOUTME: Configures base shelf lives, urgency windows, and recommendation templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! Expiration Predictor Configuration

use savor_core::models::IngredientCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expiration predictor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpirationConfig {
    /// Shelf life of a perfectly fresh item, by category
    pub base_shelf_life_days: BTreeMap<IngredientCategory, u32>,
    /// Shelf life for categories missing from the table
    pub default_shelf_life_days: u32,
    /// Confidence reported when the ingredient carries none
    pub default_confidence: f64,
    /// Day windows for urgency tiers
    pub urgency: UrgencyWindows,
    /// Categories that keep well when frozen
    pub freezable_categories: Vec<IngredientCategory>,
    /// Template messages
    pub messages: ExpirationMessages,
}

/// Inclusive upper bounds (in days) of each urgency tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyWindows {
    /// At or below: critical
    pub critical_max_days: u32,
    /// At or below: high
    pub high_max_days: u32,
    /// At or below: medium; anything longer is low
    pub medium_max_days: u32,
    /// At or below: recommend cooking immediately
    pub cook_now_max_days: u32,
    /// At or below: recommend planning a meal this week
    pub plan_ahead_max_days: u32,
}

/// Recommendation templates; `{name}` and `{days}` are substituted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpirationMessages {
    /// Item is about to spoil
    pub cook_immediately: String,
    /// Item should be used within the week
    pub plan_this_week: String,
    /// Item is in good shape
    pub reassurance: String,
    /// Critical item that could be frozen instead
    pub freeze_hint: String,
    /// Storage tip per category
    pub storage_tips: BTreeMap<IngredientCategory, String>,
}

impl Default for ExpirationConfig {
    fn default() -> Self {
        use IngredientCategory as C;
        Self {
            base_shelf_life_days: BTreeMap::from([
                (C::Vegetable, 10),
                (C::Fruit, 7),
                (C::Herb, 5),
                (C::Protein, 4),
                (C::Seafood, 2),
                (C::Dairy, 10),
                (C::Grain, 180),
                (C::Legume, 365),
                (C::Spice, 730),
                (C::Condiment, 180),
                (C::Baking, 365),
                (C::Beverage, 30),
            ]),
            default_shelf_life_days: 14,
            default_confidence: 0.7,
            urgency: UrgencyWindows::default(),
            freezable_categories: vec![C::Protein, C::Seafood, C::Fruit, C::Grain],
            messages: ExpirationMessages::default(),
        }
    }
}

impl Default for UrgencyWindows {
    fn default() -> Self {
        Self {
            critical_max_days: 1,
            high_max_days: 3,
            medium_max_days: 7,
            cook_now_max_days: 2,
            plan_ahead_max_days: 5,
        }
    }
}

impl Default for ExpirationMessages {
    fn default() -> Self {
        use IngredientCategory as C;
        Self {
            cook_immediately: "Cook {name} immediately - about {days} day(s) left".into(),
            plan_this_week: "Plan a meal with {name} this week".into(),
            reassurance: "{name} is fresh - roughly {days} days to go".into(),
            freeze_hint: "Freeze {name} now if you can't cook it today".into(),
            storage_tips: BTreeMap::from([
                (C::Vegetable, "Keep in the crisper drawer, unwashed".to_owned()),
                (C::Herb, "Stand stems in water or wrap in a damp towel".to_owned()),
                (C::Dairy, "Store at the back of the fridge, not the door".to_owned()),
                (C::Seafood, "Keep on ice in the coldest part of the fridge".to_owned()),
            ]),
        }
    }
}
