// ABOUTME: Fuses noisy per-model classifier outputs into one calibrated ingredient label
// ABOUTME: Reliability-weighted voting with consensus, variance-based uncertainty, and logistic calibration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! # Prediction Fusion
//!
//! Each classifier model carries a fixed reliability weight. Weights are
//! normalized over the models present in a call, so a missing model never
//! dilutes the others. Per label, the engine accumulates
//! `weight × confidence`; the highest accumulated score wins and ties go to
//! the label seen first (model order, then list order).
//!
//! The raw weighted score is squashed through a logistic curve and penalized
//! when few models agree or when their confidences disagree, then clamped.

use crate::config::intelligence::{FusionConfig, IntelligenceConfig};
use savor_core::constants::labels::UNIDENTIFIED;
use savor_core::errors::AppError;
use savor_core::models::{normalize_name, ModelPrediction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Prediction fusion failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FusionError {
    /// No predictions, or none carrying a usable label
    #[error("no model predictions to fuse")]
    EmptyInput,
}

impl From<FusionError> for AppError {
    fn from(error: FusionError) -> Self {
        Self::invalid_input(error.to_string())
    }
}

/// How one model contributed to a fused result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelContribution {
    /// Source model identifier
    pub model_id: String,
    /// Reliability weight after normalization
    pub weight: f64,
    /// The model's own top-1 label, if it produced any
    pub top_label: Option<String>,
    /// Confidence of that top-1 label
    pub top_confidence: Option<f64>,
    /// Whether the top-1 label equals the fused label
    pub agrees: bool,
}

/// Accumulated weighted score of a candidate label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    /// Normalized label
    pub label: String,
    /// Sum of `weight × confidence` over contributing models
    pub score: f64,
}

/// Calibrated result of fusing several classifier outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedPrediction {
    /// Winning label (trimmed, lowercase)
    pub label: String,
    /// Calibrated confidence in `[min_confidence, max_confidence]`
    pub confidence: f64,
    /// Weighted score before calibration
    pub raw_score: f64,
    /// Number of models whose top-1 label is the winner
    pub consensus: usize,
    /// Standard deviation of raw confidences behind the winner
    pub uncertainty: f64,
    /// The user should confirm the label
    pub should_verify: bool,
    /// Per-model breakdown, in input order
    pub breakdown: Vec<ModelContribution>,
    /// Losing labels, best first
    pub alternatives: Vec<LabelScore>,
}

impl FusedPrediction {
    /// Placeholder for items no model could label
    #[must_use]
    pub fn unidentified(confidence: f64) -> Self {
        Self {
            label: UNIDENTIFIED.to_owned(),
            confidence,
            raw_score: 0.0,
            consensus: 0,
            uncertainty: 0.0,
            should_verify: true,
            breakdown: Vec::new(),
            alternatives: Vec::new(),
        }
    }
}

/// Running totals for one candidate label
struct LabelTally {
    label: String,
    weighted: f64,
    raw: Vec<f64>,
}

/// Reliability-weighted fusion of classifier outputs
#[derive(Debug, Clone)]
pub struct PredictionFusionEngine {
    config: FusionConfig,
}

impl Default for PredictionFusionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionFusionEngine {
    /// Create an engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().fusion.clone(),
        }
    }

    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn with_config(config: FusionConfig) -> Self {
        Self { config }
    }

    /// Fuse classifier outputs for a single item
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::EmptyInput`] when `predictions` is empty or no
    /// model produced a non-empty label
    pub fn fuse(&self, predictions: &[ModelPrediction]) -> Result<FusedPrediction, FusionError> {
        if predictions.is_empty() {
            return Err(FusionError::EmptyInput);
        }

        let weights = self.normalized_weights(predictions);
        let tallies = Self::tally(predictions, &weights);

        // First maximum wins, which keeps ties in first-seen order
        let winner = tallies
            .iter()
            .fold(None::<&LabelTally>, |best, candidate| match best {
                Some(current) if current.weighted >= candidate.weighted => Some(current),
                _ => Some(candidate),
            })
            .ok_or(FusionError::EmptyInput)?;

        let breakdown: Vec<ModelContribution> = predictions
            .iter()
            .zip(&weights)
            .map(|(prediction, weight)| {
                let top = prediction.top();
                let top_label = top.map(|score| normalize_name(&score.label));
                ModelContribution {
                    model_id: prediction.model_id.clone(),
                    weight: *weight,
                    agrees: top_label.as_deref() == Some(winner.label.as_str()),
                    top_label,
                    top_confidence: top.map(|score| score.confidence),
                }
            })
            .collect();

        let consensus = breakdown.iter().filter(|c| c.agrees).count();
        let uncertainty = population_std_dev(&winner.raw);
        let confidence = self.calibrate(winner.weighted, consensus, uncertainty);

        let verification = &self.config.verification;
        let should_verify = uncertainty > verification.max_uncertainty
            || consensus < verification.min_consensus
            || confidence < verification.min_confidence;

        let mut alternatives: Vec<LabelScore> = tallies
            .iter()
            .filter(|tally| tally.label != winner.label)
            .map(|tally| LabelScore {
                label: tally.label.clone(),
                score: tally.weighted,
            })
            .collect();
        alternatives.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            label = %winner.label,
            confidence,
            consensus,
            uncertainty,
            should_verify,
            models = predictions.len(),
            "fused classifier predictions"
        );

        Ok(FusedPrediction {
            label: winner.label.clone(),
            confidence,
            raw_score: winner.weighted,
            consensus,
            uncertainty,
            should_verify,
            breakdown,
            alternatives,
        })
    }

    /// Fuse, degrading to an `unidentified` placeholder instead of failing
    #[must_use]
    pub fn fuse_or_unidentified(&self, predictions: &[ModelPrediction]) -> FusedPrediction {
        self.fuse(predictions).unwrap_or_else(|FusionError::EmptyInput| {
            FusedPrediction::unidentified(self.config.calibration.min_confidence)
        })
    }

    /// Reliability weights normalized to sum to 1 over the distinct models
    /// present; repeated entries of one model split that model's share
    fn normalized_weights(&self, predictions: &[ModelPrediction]) -> Vec<f64> {
        let mut entries_per_model: HashMap<&str, usize> = HashMap::new();
        for prediction in predictions {
            *entries_per_model
                .entry(prediction.model_id.as_str())
                .or_default() += 1;
        }

        let total: f64 = entries_per_model
            .keys()
            .map(|model_id| self.config.reliability.weight_for(model_id).max(0.0))
            .sum();
        let model_count = entries_per_model.len() as f64;

        predictions
            .iter()
            .map(|prediction| {
                let model_id = prediction.model_id.as_str();
                let share = if total > 0.0 {
                    self.config.reliability.weight_for(model_id).max(0.0) / total
                } else {
                    1.0 / model_count
                };
                let entries = entries_per_model.get(model_id).copied().unwrap_or(1);
                share / entries as f64
            })
            .collect()
    }

    /// Accumulate weighted scores per label, preserving first-seen order
    fn tally(predictions: &[ModelPrediction], weights: &[f64]) -> Vec<LabelTally> {
        let mut tallies: Vec<LabelTally> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (prediction, weight) in predictions.iter().zip(weights) {
            for score in &prediction.predictions {
                let label = normalize_name(&score.label);
                if label.is_empty() {
                    continue;
                }
                let slot = *index.entry(label.clone()).or_insert_with(|| {
                    tallies.push(LabelTally {
                        label,
                        weighted: 0.0,
                        raw: Vec::new(),
                    });
                    tallies.len() - 1
                });
                let tally = &mut tallies[slot];
                tally.weighted += weight * score.confidence;
                tally.raw.push(score.confidence);
            }
        }
        tallies
    }

    fn calibrate(&self, raw_score: f64, consensus: usize, uncertainty: f64) -> f64 {
        let calibration = &self.config.calibration;
        let exponent =
            -calibration.logistic_slope * (raw_score - calibration.logistic_midpoint);
        let mut confidence = 1.0 / (1.0 + exponent.exp());

        if consensus < calibration.low_consensus_threshold {
            confidence *= calibration.low_consensus_penalty;
        }
        if uncertainty > calibration.uncertainty_penalty_threshold {
            confidence *= 1.0 - uncertainty;
        }
        confidence.clamp(calibration.min_confidence, calibration.max_confidence)
    }
}

/// Population standard deviation; zero for fewer than two samples
fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
