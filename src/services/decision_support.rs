// ABOUTME: Decision-support facade fetching snapshots from a repository and running one component per call
// ABOUTME: Covers ingredient identification, recommendations, expiry alerts, skill, meal plans, and pantry health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

use crate::repository::RecipeRepository;
use chrono::{Datelike, Utc};
use savor_core::errors::{AppError, AppResult};
use savor_core::models::ModelPrediction;
use savor_intelligence::{
    ExpirationPrediction, ExpirationPredictor, FusedPrediction, IntelligenceConfig,
    MealPlanOptimization, MealPlanOptimizer, PantryHealthAnalyzer, PantryHealthReport,
    PredictionFusionEngine, RecipeScore, RecommendationScorer, SkillMetrics,
    SkillProgressionAnalyzer, Urgency,
};
use tracing::{debug, info};

/// Repository-backed entry point for every decision-support operation
///
/// Each call fetches fresh snapshots, so results always reflect the
/// repository's current contents. Seasonal ranking uses the current UTC month
/// unless a month is pinned with [`DecisionSupportService::at_month`].
pub struct DecisionSupportService<R: RecipeRepository> {
    repository: R,
    fusion: PredictionFusionEngine,
    expiration: ExpirationPredictor,
    scorer: RecommendationScorer,
    skill: SkillProgressionAnalyzer,
    planner: MealPlanOptimizer,
    pantry_health: PantryHealthAnalyzer,
    month: Option<u32>,
}

impl<R: RecipeRepository> DecisionSupportService<R> {
    /// Create a service using the global intelligence configuration
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, IntelligenceConfig::global())
    }

    /// Create a service with an explicit configuration
    #[must_use]
    pub fn with_config(repository: R, config: &IntelligenceConfig) -> Self {
        Self {
            repository,
            fusion: PredictionFusionEngine::with_config(config.fusion.clone()),
            expiration: ExpirationPredictor::with_config(config.expiration.clone()),
            scorer: RecommendationScorer::with_config(config.scoring.clone()),
            skill: SkillProgressionAnalyzer::with_config(config.skill.clone()),
            planner: MealPlanOptimizer::with_config(
                RecommendationScorer::with_config(config.scoring.clone()),
                config.meal_plan.clone(),
            ),
            pantry_health: PantryHealthAnalyzer::with_config(
                ExpirationPredictor::with_config(config.expiration.clone()),
                RecommendationScorer::with_config(config.scoring.clone()),
                config.pantry_health.clone(),
            ),
            month: None,
        }
    }

    /// Pin the calendar month (1-12) used for seasonal ranking
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `month` is not 1-12
    pub fn at_month(mut self, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::invalid_input(format!(
                "month {month} must be between 1 and 12"
            )));
        }
        self.month = Some(month);
        Ok(self)
    }

    /// The injected repository
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    fn month(&self) -> u32 {
        self.month.unwrap_or_else(|| Utc::now().month())
    }

    /// Fuse classifier outputs for one photographed item
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` when no prediction carries a label
    pub fn identify_ingredient(&self, predictions: &[ModelPrediction]) -> AppResult<FusedPrediction> {
        let fused = self.fusion.fuse(predictions)?;
        info!(
            label = %fused.label,
            confidence = fused.confidence,
            consensus = fused.consensus,
            should_verify = fused.should_verify,
            "identified ingredient"
        );
        Ok(fused)
    }

    /// Rank saved recipes, best first, keeping at most `limit`
    ///
    /// With no `skill_level` the user's analyzed overall level is used.
    ///
    /// # Errors
    ///
    /// Returns repository errors unchanged
    pub async fn recommend_recipes(
        &self,
        skill_level: Option<f64>,
        limit: usize,
    ) -> AppResult<Vec<RecipeScore>> {
        let pantry = self.repository.get_pantry().await?;
        let history = self.repository.get_cooking_history().await?;
        let recipes = self.repository.get_all_recipes().await?;

        let skill_level =
            skill_level.unwrap_or_else(|| self.skill.analyze(&history).overall_level);
        let mut ranked =
            self.scorer
                .score_for_month(&pantry, &history, &recipes, skill_level, self.month());
        ranked.truncate(limit);

        info!(
            candidates = recipes.len(),
            returned = ranked.len(),
            skill_level,
            top_score = ranked.first().map(|s| s.score),
            "recommended recipes"
        );
        Ok(ranked)
    }

    /// Pantry items needing attention (urgency above low), soonest first
    ///
    /// # Errors
    ///
    /// Returns repository errors unchanged
    pub async fn expiration_alerts(&self) -> AppResult<Vec<ExpirationPrediction>> {
        let pantry = self.repository.get_pantry().await?;
        let alerts: Vec<ExpirationPrediction> = self
            .expiration
            .predict_all(&pantry)
            .into_iter()
            .filter(|p| p.urgency != Urgency::Low)
            .collect();

        info!(
            pantry_items = pantry.len(),
            alerts = alerts.len(),
            critical = alerts.iter().filter(|p| p.urgency == Urgency::Critical).count(),
            "computed expiration alerts"
        );
        Ok(alerts)
    }

    /// Skill profile derived from the cooking history
    ///
    /// # Errors
    ///
    /// Returns repository errors unchanged
    pub async fn skill_profile(&self) -> AppResult<SkillMetrics> {
        let history = self.repository.get_cooking_history().await?;
        let metrics = self.skill.analyze(&history);

        info!(
            recipes = history.len(),
            overall_level = metrics.overall_level,
            techniques = metrics.techniques_mastered.len(),
            next_level = metrics.recommended_next_level.as_str(),
            "analyzed skill profile"
        );
        Ok(metrics)
    }

    /// Plan `days × meals_per_day` meals from the saved recipes
    ///
    /// # Errors
    ///
    /// Returns repository errors unchanged
    pub async fn plan_meals(
        &self,
        days: usize,
        meals_per_day: usize,
    ) -> AppResult<MealPlanOptimization> {
        let pantry = self.repository.get_pantry().await?;
        let history = self.repository.get_cooking_history().await?;
        let recipes = self.repository.get_all_recipes().await?;

        let plan = self.planner.optimize_for_month(
            &pantry,
            &history,
            &recipes,
            days,
            meals_per_day,
            self.month(),
        );

        info!(
            days,
            meals_per_day,
            planned = plan.entries.len(),
            unfilled = plan.unfilled_slots,
            variety = plan.variety_score,
            "planned meals"
        );
        Ok(plan)
    }

    /// Pantry utilization and spoilage report
    ///
    /// # Errors
    ///
    /// Returns repository errors unchanged
    pub async fn pantry_health(&self) -> AppResult<PantryHealthReport> {
        let pantry = self.repository.get_pantry().await?;
        let history = self.repository.get_cooking_history().await?;
        let recipes = self.repository.get_all_recipes().await?;
        debug!(
            pantry_items = pantry.len(),
            history = history.len(),
            recipes = recipes.len(),
            "fetched pantry health inputs"
        );

        let report = self
            .pantry_health
            .analyze_for_month(&pantry, &history, &recipes, self.month());

        info!(
            utilization_rate = report.utilization_rate,
            expiring = report.expiring_items.len(),
            underutilized = report.underutilized_items.len(),
            waste_reduction_potential = report.waste_reduction_potential,
            "analyzed pantry health"
        );
        Ok(report)
    }
}
