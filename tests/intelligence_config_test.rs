// ABOUTME: Tests for intelligence configuration defaults, validation, and environment overrides
// ABOUTME: Environment tests run serially because they mutate process-wide variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use savor::errors::{AppError, ErrorCode};
use savor::intelligence::config::intelligence::MilestoneMetric;
use savor::intelligence::{ConfigError, IntelligenceConfig};
use savor::models::IngredientCategory;
use serial_test::serial;
use std::env;

const OVERRIDES: [&str; 6] = [
    "SAVOR_FUSION_LOGISTIC_SLOPE",
    "SAVOR_FUSION_VERIFY_MIN_CONFIDENCE",
    "SAVOR_EXPIRATION_DEFAULT_SHELF_LIFE_DAYS",
    "SAVOR_SCORING_PROTEIN_TARGET_G",
    "SAVOR_DEFAULT_SKILL_LEVEL",
    "SAVOR_PANTRY_SUGGESTION_LIMIT",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
fn test_default_config_validation() {
    let config = IntelligenceConfig::default();
    assert!(config.validate().is_ok());

    assert_eq!(
        config.expiration.base_shelf_life_days.get(&IngredientCategory::Seafood),
        Some(&2)
    );
    assert_eq!(config.expiration.default_shelf_life_days, 14);
    assert_eq!(config.pantry_health.suggestion_limit, 5);
    assert_eq!(config.skill.milestones.len(), 6);
    assert!(config
        .skill
        .milestones
        .iter()
        .any(|m| m.metric == MilestoneMetric::AverageDifficulty));
}

#[test]
fn test_invalid_skill_weights() {
    let mut config = IntelligenceConfig::default();
    config.skill.difficulty_weight = 0.8;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("slope").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_overrides();
    env::set_var("SAVOR_FUSION_LOGISTIC_SLOPE", "7.5");
    env::set_var("SAVOR_EXPIRATION_DEFAULT_SHELF_LIFE_DAYS", "21");
    env::set_var("SAVOR_SCORING_PROTEIN_TARGET_G", "40");
    env::set_var("SAVOR_DEFAULT_SKILL_LEVEL", "0.8");
    env::set_var("SAVOR_PANTRY_SUGGESTION_LIMIT", "3");

    let config = IntelligenceConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert!((config.fusion.calibration.logistic_slope - 7.5).abs() < 0.001);
    assert_eq!(config.expiration.default_shelf_life_days, 21);
    assert!((config.scoring.nutrition_targets.protein_g - 40.0).abs() < 0.001);
    assert!((config.meal_plan.default_skill_level - 0.8).abs() < 0.001);
    assert!((config.pantry_health.default_skill_level - 0.8).abs() < 0.001);
    assert_eq!(config.pantry_health.suggestion_limit, 3);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("SAVOR_PANTRY_SUGGESTION_LIMIT", "several");
    let result = IntelligenceConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_overrides();
    env::set_var("SAVOR_DEFAULT_SKILL_LEVEL", "1.5");
    let result = IntelligenceConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_verification_floor_override_is_range_checked() {
    clear_overrides();
    env::set_var("SAVOR_FUSION_VERIFY_MIN_CONFIDENCE", "7");
    let result = IntelligenceConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));

    env::set_var("SAVOR_FUSION_VERIFY_MIN_CONFIDENCE", "0.55");
    let config = IntelligenceConfig::load();
    clear_overrides();
    assert!((config.unwrap().fusion.verification.min_confidence - 0.55).abs() < 0.001);
}
