// ABOUTME: Prediction fusion configuration: model reliability weights and calibration curve
// ABOUTME: Configures logistic squashing, consensus penalties, and verification thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! Prediction Fusion Configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Model id of the high-precision food detector
pub const FOOD_DETECTOR: &str = "food_detector";
/// Model id of the fine-grained ingredient classifier
pub const INGREDIENT_CLASSIFIER: &str = "ingredient_classifier";
/// Model id of the general-purpose vision model
pub const GENERAL_VISION: &str = "general_vision";

/// Prediction fusion configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Reliability weight per source model
    pub reliability: ReliabilityWeights,
    /// Confidence calibration curve
    pub calibration: CalibrationConfig,
    /// When a fused result should be confirmed by the user
    pub verification: VerificationThresholds,
}

/// Fixed reliability weight per classifier model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliabilityWeights {
    /// Weight by model id
    pub model_weights: BTreeMap<String, f64>,
    /// Weight for models missing from the table
    pub default_weight: f64,
}

impl ReliabilityWeights {
    /// Raw (unnormalized) weight of a model
    #[must_use]
    pub fn weight_for(&self, model_id: &str) -> f64 {
        self.model_weights
            .get(model_id)
            .copied()
            .unwrap_or(self.default_weight)
    }
}

impl Default for ReliabilityWeights {
    fn default() -> Self {
        Self {
            model_weights: BTreeMap::from([
                (FOOD_DETECTOR.to_owned(), 0.45),
                (INGREDIENT_CLASSIFIER.to_owned(), 0.35),
                (GENERAL_VISION.to_owned(), 0.20),
            ]),
            default_weight: 0.20,
        }
    }
}

/// Logistic calibration of the raw weighted score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Center of the logistic curve
    pub logistic_midpoint: f64,
    /// Slope of the logistic curve
    pub logistic_slope: f64,
    /// Consensus below this count triggers the penalty
    pub low_consensus_threshold: usize,
    /// Multiplier applied when consensus is low
    pub low_consensus_penalty: f64,
    /// Uncertainty above this scales confidence by `1 - uncertainty`
    pub uncertainty_penalty_threshold: f64,
    /// Lower clamp of the calibrated confidence
    pub min_confidence: f64,
    /// Upper clamp of the calibrated confidence
    pub max_confidence: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            logistic_midpoint: 0.5,
            logistic_slope: 5.0,
            low_consensus_threshold: 3,
            low_consensus_penalty: 0.85,
            uncertainty_penalty_threshold: 0.15,
            min_confidence: 0.1,
            max_confidence: 0.99,
        }
    }
}

/// Any one exceeded threshold marks the result for user verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationThresholds {
    /// Verify when uncertainty exceeds this
    pub max_uncertainty: f64,
    /// Verify when fewer models agree
    pub min_consensus: usize,
    /// Verify when calibrated confidence falls below this
    pub min_confidence: f64,
}

impl Default for VerificationThresholds {
    fn default() -> Self {
        Self {
            max_uncertainty: 0.2,
            min_consensus: 2,
            min_confidence: 0.4,
        }
    }
}
