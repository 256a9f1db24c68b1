// ABOUTME: Per-model classifier output consumed by prediction fusion
// ABOUTME: Ordered class scores plus source model identity and latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

use serde::{Deserialize, Serialize};

/// A single (label, confidence) pair emitted by a classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    /// Class label ("tomato")
    pub label: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

impl ClassScore {
    /// Create a class score
    #[must_use]
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Output of one classifier for one item, produced per classification pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    /// Identifier of the source model, used to look up its reliability weight
    pub model_id: String,
    /// Class scores, best first
    pub predictions: Vec<ClassScore>,
    /// Inference latency in milliseconds
    pub latency_ms: u64,
}

impl ModelPrediction {
    /// Create a prediction from `(label, confidence)` pairs
    #[must_use]
    pub fn new<L: Into<String>>(
        model_id: impl Into<String>,
        scores: impl IntoIterator<Item = (L, f64)>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            predictions: scores
                .into_iter()
                .map(|(label, confidence)| ClassScore::new(label, confidence))
                .collect(),
            latency_ms: 0,
        }
    }

    /// The model's own top-1 class: highest confidence, earliest entry on ties
    #[must_use]
    pub fn top(&self) -> Option<&ClassScore> {
        self.predictions.iter().fold(None, |best, candidate| match best {
            Some(current) if current.confidence >= candidate.confidence => Some(current),
            _ => Some(candidate),
        })
    }
}
