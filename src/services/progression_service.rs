// ABOUTME: Orchestrates collaborator fetches, engine analysis, and progression recording
// ABOUTME: The only layer that performs async I/O around the pure progression engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::providers::{PreferencesStore, ProgressionEventStore, SetHistoryProvider};
use chrono::NaiveDate;
use ironlog_core::config::ProgressionConfig;
use ironlog_core::errors::{AppError, AppResult, ErrorCode};
use ironlog_core::models::{ProgressionEvent, ProgressionType, UserPreferences};
use ironlog_intelligence::{
    ExerciseAnalysis, ExerciseHistory, ProgressionAnalyzer, ReadinessScorer,
    SetAdditionSuggestion, SetProgressionAnalysis, SuggestionGenerator, WeightIncrementCalculator,
};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Most workouts fetched for one analysis
const HISTORY_FETCH_LIMIT: usize = 50;

/// Progression analysis service
///
/// Cheap to clone; collaborators are shared behind `Arc`.
#[derive(Clone)]
pub struct ProgressionService {
    history: Arc<dyn SetHistoryProvider>,
    preferences: Arc<dyn PreferencesStore>,
    events: Arc<dyn ProgressionEventStore>,
    config: Arc<ProgressionConfig>,
}

impl ProgressionService {
    /// Create a service from its collaborators
    #[must_use]
    pub fn new(
        history: Arc<dyn SetHistoryProvider>,
        preferences: Arc<dyn PreferencesStore>,
        events: Arc<dyn ProgressionEventStore>,
        config: ProgressionConfig,
    ) -> Self {
        Self {
            history,
            preferences,
            events,
            config: Arc::new(config),
        }
    }

    /// Create a service backed by one store implementing every collaborator
    #[must_use]
    pub fn with_store<S>(store: Arc<S>, config: ProgressionConfig) -> Self
    where
        S: SetHistoryProvider + PreferencesStore + ProgressionEventStore + 'static,
    {
        Self::new(store.clone(), store.clone(), store, config)
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Gather everything the engine needs for one exercise
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown exercise, or any collaborator error
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn load_history(&self, user_id: Uuid, exercise_id: i64) -> AppResult<ExerciseHistory> {
        let exercise = self
            .history
            .exercise_profile(exercise_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Exercise {exercise_id}")).with_user_id(user_id)
            })?;
        let workouts = self
            .history
            .recent_workouts(user_id, exercise_id, None, HISTORY_FETCH_LIMIT)
            .await?;
        let preferences = self.preferences(user_id).await?;
        let events = self.events.events_for(user_id, exercise_id).await?;

        let limit = self.config.readiness.set_history_limit;
        let mut set_histories = BTreeMap::new();
        let latest_sets = workouts
            .iter()
            .filter(|workout| !workout.sets.is_empty())
            .max_by_key(|workout| workout.date)
            .map(|workout| workout.sets.iter().map(|set| set.set_number).collect::<Vec<_>>())
            .unwrap_or_default();
        for set_number in latest_sets {
            let history = self
                .history
                .set_history(user_id, exercise_id, set_number, limit)
                .await?;
            set_histories.insert(set_number, history);
        }

        Ok(ExerciseHistory {
            exercise: Some(exercise),
            workouts,
            set_histories,
            events,
            preferences,
        })
    }

    /// Full progression analysis for one exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise is unknown, a collaborator fails, or the
    /// stored data violates the data model
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn analyze_exercise(
        &self,
        user_id: Uuid,
        exercise_id: i64,
        as_of: NaiveDate,
    ) -> AppResult<ExerciseAnalysis> {
        let history = self.load_history(user_id, exercise_id).await?;
        let analysis = ProgressionAnalyzer::analyze(&history, &self.config, as_of)
            .map_err(|e| AppError::from(e).with_user_id(user_id))?;

        info!(
            pattern = %analysis.pattern.pattern,
            readiness = analysis.readiness.overall_readiness,
            suggestions = analysis.suggestions.len(),
            "Exercise analyzed"
        );
        Ok(analysis)
    }

    /// Analyze several exercises, running the engine in parallel off the async runtime
    ///
    /// # Errors
    ///
    /// Returns the first error from loading or analyzing any exercise
    #[instrument(skip(self, exercise_ids), fields(user_id = %user_id, exercises = exercise_ids.len()))]
    pub async fn analyze_exercises(
        &self,
        user_id: Uuid,
        exercise_ids: &[i64],
        as_of: NaiveDate,
    ) -> AppResult<Vec<ExerciseAnalysis>> {
        let mut histories = Vec::with_capacity(exercise_ids.len());
        for &exercise_id in exercise_ids {
            histories.push(self.load_history(user_id, exercise_id).await?);
        }

        let config = Arc::clone(&self.config);
        let results = tokio::task::spawn_blocking(move || {
            ProgressionAnalyzer::analyze_batch(&histories, &config, as_of)
        })
        .await
        .map_err(|e| AppError::internal("Batch analysis task failed").with_source(e))?;

        results
            .into_iter()
            .map(|result| result.map_err(|e| AppError::from(e).with_user_id(user_id)))
            .collect()
    }

    /// Progression analysis for a single set number
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator fails or the stored sets are invalid
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn analyze_set(
        &self,
        user_id: Uuid,
        exercise_id: i64,
        set_number: u32,
    ) -> AppResult<SetProgressionAnalysis> {
        let exercise = self.history.exercise_profile(exercise_id).await?;
        let preferences = self.preferences(user_id).await?;
        let history = self
            .history
            .set_history(
                user_id,
                exercise_id,
                set_number,
                self.config.readiness.set_history_limit,
            )
            .await?;

        ReadinessScorer::analyze_set_progression(
            &history,
            &preferences,
            exercise.as_ref(),
            &self.config.readiness,
        )
        .map_err(|e| AppError::from(e).with_user_id(user_id))
    }

    /// Decide whether the lifter should add a set
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator fails or the stored data is invalid
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn suggest_set_addition(
        &self,
        user_id: Uuid,
        exercise_id: i64,
        as_of: NaiveDate,
    ) -> AppResult<SetAdditionSuggestion> {
        let exercise = self.history.exercise_profile(exercise_id).await?;
        let preferences = self.preferences(user_id).await?;
        let workouts = self
            .history
            .recent_workouts(user_id, exercise_id, None, HISTORY_FETCH_LIMIT)
            .await?;

        let current_sets = SuggestionGenerator::current_set_count(&workouts, as_of, &self.config);
        let last_set_history = match u32::try_from(current_sets) {
            Ok(set_number) if set_number > 0 => {
                self.history
                    .set_history(user_id, exercise_id, set_number, 3)
                    .await?
            }
            _ => Vec::new(),
        };

        SuggestionGenerator::suggest_set_addition(
            &workouts,
            &last_set_history,
            exercise.as_ref(),
            &preferences,
            as_of,
            &self.config,
        )
        .map_err(|e| AppError::from(e).with_user_id(user_id))
    }

    /// Validate and record an accepted progression
    ///
    /// Weight increases must be larger than the old weight and within the
    /// configured maximum jump; deloads must be lighter. Returns the stored event.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput`/`ValueOutOfRange` for an invalid progression and
    /// `ResourceAlreadyExists` when one is already recorded for that date
    #[instrument(
        skip(self, event),
        fields(user_id = %event.user_id, exercise_id = event.exercise_id, date = %event.date)
    )]
    pub async fn record_progression(&self, event: ProgressionEvent) -> AppResult<ProgressionEvent> {
        let user_id = event.user_id;
        match event.progression_type {
            ProgressionType::WeightIncrease => WeightIncrementCalculator::validate_progression(
                event.old_weight,
                event.new_weight,
                self.config.thresholds.max_weight_jump_fraction,
            )
            .map_err(|e| AppError::from(e).with_user_id(user_id))?,
            ProgressionType::Deload if event.new_weight >= event.old_weight => {
                return Err(AppError::invalid_input(format!(
                    "deload from {} to {} does not reduce the weight",
                    event.old_weight, event.new_weight
                ))
                .with_user_id(user_id));
            }
            _ => {}
        }

        if !self.events.record_if_absent(event.clone()).await? {
            warn!("Progression already recorded for this date");
            return Err(AppError::already_exists("Progression event")
                .with_user_id(user_id)
                .with_resource_id(event.exercise_id.to_string())
                .with_details(json!({ "date": event.date })));
        }

        info!(
            progression_type = ?event.progression_type,
            old_weight = event.old_weight,
            new_weight = event.new_weight,
            "Progression recorded"
        );
        Ok(event)
    }

    /// Stored preferences, or the configured defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences store fails
    pub async fn preferences(&self, user_id: Uuid) -> AppResult<UserPreferences> {
        Ok(self
            .preferences
            .get_preferences(user_id)
            .await?
            .unwrap_or_else(|| self.config.default_preferences.clone()))
    }

    /// Validate and store preferences
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for invalid preferences, or a store error
    #[instrument(skip(self, preferences), fields(user_id = %user_id))]
    pub async fn update_preferences(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> AppResult<()> {
        preferences.validate().map_err(|e| {
            AppError::new(ErrorCode::InvalidInput, e.to_string())
                .with_user_id(user_id)
                .with_source(e)
        })?;
        self.preferences.put_preferences(user_id, preferences).await
    }
}
