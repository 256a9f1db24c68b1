// ABOUTME: Intelligence configuration for fusion, shelf life, scoring, skills, and planning
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! Intelligence Configuration Module
//!
//! Weight tables, thresholds, and calendars used by the decision-support
//! components. Every component accepts an explicit configuration through
//! `with_config`; `new()` falls back to [`IntelligenceConfig::global`].
//!
//! # Module Structure
//!
//! - `fusion` - Model reliability weights and confidence calibration
//! - `expiration` - Category shelf lives, urgency windows, message templates
//! - `scoring` - Recommendation weights, nutrition targets, seasonal calendar
//! - `skill` - Skill level blend and milestone ladder
//! - `planning` - Meal plan and pantry health settings

pub mod error;
pub mod expiration;
pub mod fusion;
pub mod planning;
pub mod scoring;
pub mod skill;

pub use error::ConfigError;
pub use expiration::{ExpirationConfig, ExpirationMessages, UrgencyWindows};
pub use fusion::{CalibrationConfig, FusionConfig, ReliabilityWeights, VerificationThresholds};
pub use planning::{MealPlanConfig, PantryHealthConfig};
pub use scoring::{
    HistoryPreferenceConfig, NutritionTargets, ScoringConfig, ScoringWeights, SeasonalCalendar,
    SeasonalConfig,
};
pub use skill::{MilestoneDefinition, MilestoneMetric, NextLevelThresholds, SkillConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Tolerance when checking that weight groups sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Classifier prediction fusion
    pub fusion: FusionConfig,
    /// Shelf-life estimation
    pub expiration: ExpirationConfig,
    /// Recipe recommendation scoring
    pub scoring: ScoringConfig,
    /// Skill progression analysis
    pub skill: SkillConfig,
    /// Meal planning
    pub meal_plan: MealPlanConfig,
    /// Pantry health analysis
    pub pantry_health: PantryHealthConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus `SAVOR_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_fusion()?;
        self.validate_expiration()?;
        self.validate_scoring()?;
        self.validate_skill()?;
        self.validate_planning()
    }

    fn validate_fusion(&self) -> Result<(), ConfigError> {
        let reliability = &self.fusion.reliability;
        if reliability.default_weight < 0.0
            || reliability.model_weights.values().any(|w| *w < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Model reliability weights must be non-negative",
            ));
        }

        let calibration = &self.fusion.calibration;
        if calibration.min_confidence < 0.0
            || calibration.max_confidence > 1.0
            || calibration.min_confidence >= calibration.max_confidence
        {
            return Err(ConfigError::InvalidRange(
                "Calibration clamp must satisfy 0 <= min < max <= 1",
            ));
        }
        if calibration.logistic_slope <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Logistic slope must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&calibration.low_consensus_penalty) {
            return Err(ConfigError::ValueOutOfRange(
                "Low consensus penalty must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&calibration.logistic_midpoint) {
            return Err(ConfigError::ValueOutOfRange(
                "Logistic midpoint must be within [0, 1]",
            ));
        }

        let verification = &self.fusion.verification;
        if !(0.0..=1.0).contains(&verification.min_confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "Verification confidence floor must be within [0, 1]",
            ));
        }
        if verification.max_uncertainty < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Verification uncertainty ceiling must be non-negative",
            ));
        }
        Ok(())
    }

    fn validate_expiration(&self) -> Result<(), ConfigError> {
        let expiration = &self.expiration;
        if !(0.0..=1.0).contains(&expiration.default_confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "Default detection confidence must be within [0, 1]",
            ));
        }
        let urgency = &expiration.urgency;
        if urgency.critical_max_days >= urgency.high_max_days
            || urgency.high_max_days >= urgency.medium_max_days
        {
            return Err(ConfigError::InvalidRange(
                "Urgency windows must be ascending: critical < high < medium",
            ));
        }
        if urgency.cook_now_max_days >= urgency.plan_ahead_max_days {
            return Err(ConfigError::InvalidRange(
                "cook_now_max_days must be < plan_ahead_max_days",
            ));
        }
        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        if (scoring.weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Recommendation factor weights must sum to 1.0",
            ));
        }
        let history = &scoring.history;
        if (history.cook_count_weight + history.rating_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE
        {
            return Err(ConfigError::InvalidWeights(
                "Historical preference weights must sum to 1.0",
            ));
        }
        if history.max_cook_ratio <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_cook_ratio must be positive",
            ));
        }
        let targets = &scoring.nutrition_targets;
        if targets.protein_g <= 0.0 || targets.carbs_g <= 0.0 || targets.fat_g <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Nutrition targets must be positive",
            ));
        }
        if scoring.seasonal.coverage_fraction <= 0.0 || scoring.seasonal.coverage_fraction > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Seasonal coverage fraction must be within (0, 1]",
            ));
        }
        if !scoring.seasonal.calendar.is_complete() {
            return Err(ConfigError::InvalidRange(
                "Seasonal calendar must list keywords for all 12 months",
            ));
        }
        Ok(())
    }

    fn validate_skill(&self) -> Result<(), ConfigError> {
        let skill = &self.skill;
        let weight_sum = skill.difficulty_weight + skill.technique_weight + skill.cuisine_weight;
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Skill level weights must sum to 1.0",
            ));
        }
        if skill.technique_saturation == 0 || skill.cuisine_saturation == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Technique and cuisine saturation points must be at least 1",
            ));
        }
        let next = &skill.next_level;
        if next.medium_above >= next.hard_above || next.hard_above >= next.expert_above {
            return Err(ConfigError::InvalidRange(
                "Next level thresholds must be ascending: medium < hard < expert",
            ));
        }
        if skill.milestones.iter().any(|m| m.threshold <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Milestone thresholds must be positive",
            ));
        }
        Ok(())
    }

    fn validate_planning(&self) -> Result<(), ConfigError> {
        let skill_levels = [
            self.meal_plan.default_skill_level,
            self.pantry_health.default_skill_level,
        ];
        if skill_levels.iter().any(|level| !(0.0..=1.0).contains(level)) {
            return Err(ConfigError::ValueOutOfRange(
                "Default skill level must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.pantry_health.underutilized_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "Underutilized fraction must be within [0, 1]",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Fusion overrides
        Self::apply_env_var(
            "SAVOR_FUSION_DEFAULT_WEIGHT",
            &mut self.fusion.reliability.default_weight,
        )?;
        Self::apply_env_var(
            "SAVOR_FUSION_LOGISTIC_SLOPE",
            &mut self.fusion.calibration.logistic_slope,
        )?;
        Self::apply_env_var(
            "SAVOR_FUSION_VERIFY_MIN_CONFIDENCE",
            &mut self.fusion.verification.min_confidence,
        )?;

        // Expiration overrides
        Self::apply_env_var(
            "SAVOR_EXPIRATION_DEFAULT_SHELF_LIFE_DAYS",
            &mut self.expiration.default_shelf_life_days,
        )?;
        Self::apply_env_var(
            "SAVOR_EXPIRATION_DEFAULT_CONFIDENCE",
            &mut self.expiration.default_confidence,
        )?;

        // Scoring overrides
        Self::apply_env_var(
            "SAVOR_SCORING_PROTEIN_TARGET_G",
            &mut self.scoring.nutrition_targets.protein_g,
        )?;
        Self::apply_env_var(
            "SAVOR_SCORING_CARBS_TARGET_G",
            &mut self.scoring.nutrition_targets.carbs_g,
        )?;
        Self::apply_env_var(
            "SAVOR_SCORING_FAT_TARGET_G",
            &mut self.scoring.nutrition_targets.fat_g,
        )?;

        // Planning overrides
        let mut default_skill_level = self.meal_plan.default_skill_level;
        Self::apply_env_var("SAVOR_DEFAULT_SKILL_LEVEL", &mut default_skill_level)?;
        self.meal_plan.default_skill_level = default_skill_level;
        self.pantry_health.default_skill_level = default_skill_level;

        Self::apply_env_var(
            "SAVOR_PANTRY_EXPIRING_WITHIN_DAYS",
            &mut self.pantry_health.expiring_within_days,
        )?;
        Self::apply_env_var(
            "SAVOR_PANTRY_SUGGESTION_LIMIT",
            &mut self.pantry_health.suggestion_limit,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_scoring_weights_must_sum_to_one() {
        let mut config = IntelligenceConfig::default();
        config.scoring.weights.ingredient_match = 0.9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_incomplete_calendar_rejected() {
        let mut config = IntelligenceConfig::default();
        config.scoring.seasonal.calendar.months.remove(&7);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_urgency_windows_must_ascend() {
        let mut config = IntelligenceConfig::default();
        config.expiration.urgency.high_max_days = 1;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_verification_thresholds_range_checked() {
        let mut config = IntelligenceConfig::default();
        config.fusion.verification.min_confidence = 7.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = IntelligenceConfig::default();
        config.fusion.verification.max_uncertainty = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = IntelligenceConfig::default();
        config.fusion.calibration.logistic_midpoint = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = IntelligenceConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: IntelligenceConfig = serde_json::from_str(&json).unwrap();
        assert!(restored.validate().is_ok());
        assert_eq!(
            restored.expiration.base_shelf_life_days,
            config.expiration.base_shelf_life_days
        );
    }
}
