// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for labels, difficulty scales, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identification
pub mod service_names {
    /// Service name used in structured logs
    pub const SAVOR: &str = "savor";
}

/// Labels used by ingredient identification
pub mod labels {
    /// Label reported when no classifier output could be fused
    pub const UNIDENTIFIED: &str = "unidentified";
}

/// Numeric positions of recipe difficulty tiers on a 0..1 scale
pub mod difficulty_scale {
    /// Easy recipes
    pub const EASY: f64 = 0.2;
    /// Medium recipes
    pub const MEDIUM: f64 = 0.5;
    /// Hard recipes
    pub const HARD: f64 = 0.8;
    /// Expert recipes
    pub const EXPERT: f64 = 1.0;
}

/// Value ranges enforced upstream of the decision-support engine
pub mod ranges {
    /// Upper bound of an ingredient vitality score
    pub const MAX_VITALITY_SCORE: f64 = 100.0;
    /// Lowest valid recipe rating
    pub const MIN_RATING: u8 = 1;
    /// Highest valid recipe rating
    pub const MAX_RATING: u8 = 5;
}
