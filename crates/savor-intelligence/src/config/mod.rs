// ABOUTME: Configuration root for the decision-support engine
// ABOUTME: Exposes the intelligence configuration tree and its validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

/// Intelligence algorithm configuration (weights, thresholds, calendars)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
