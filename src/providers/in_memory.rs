// ABOUTME: DashMap-backed store implementing set history, preferences, and progression events
// ABOUTME: Used by the CLI for JSON exports and by tests; atomic per-key event insertion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{PreferencesStore, ProgressionEventStore, SetHistoryProvider};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::{
    ExerciseProfile, ProgressionEvent, SetRecord, UserPreferences, WorkoutSnapshot,
};
use tracing::debug;
use uuid::Uuid;

/// Key for one day's progression on one exercise
type EventKey = (Uuid, i64, NaiveDate);

/// In-memory training store
///
/// `DashMap` shards its locks, so concurrent readers and writers on different
/// keys do not contend.
#[derive(Debug, Default)]
pub struct InMemoryTrainingStore {
    exercises: DashMap<i64, ExerciseProfile>,
    workouts: DashMap<(Uuid, i64), Vec<WorkoutSnapshot>>,
    preferences: DashMap<Uuid, UserPreferences>,
    events: DashMap<EventKey, ProgressionEvent>,
}

impl InMemoryTrainingStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace an exercise profile
    pub fn add_exercise(&self, profile: ExerciseProfile) {
        self.exercises.insert(profile.id, profile);
    }

    /// Store a completed workout, replacing any workout on the same date
    ///
    /// # Errors
    ///
    /// Returns an error if the workout violates the data model
    pub fn add_workout(
        &self,
        user_id: Uuid,
        exercise_id: i64,
        workout: WorkoutSnapshot,
    ) -> AppResult<()> {
        workout
            .validate()
            .map_err(|e| AppError::from(e).with_user_id(user_id))?;
        let mut entry = self.workouts.entry((user_id, exercise_id)).or_default();
        entry.retain(|existing| existing.date != workout.date);
        entry.push(workout);
        entry.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(())
    }

    /// Number of stored progression events across all users
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

#[async_trait]
impl SetHistoryProvider for InMemoryTrainingStore {
    async fn exercise_profile(&self, exercise_id: i64) -> AppResult<Option<ExerciseProfile>> {
        Ok(self
            .exercises
            .get(&exercise_id)
            .map(|profile| profile.value().clone()))
    }

    async fn recent_workouts(
        &self,
        user_id: Uuid,
        exercise_id: i64,
        since: Option<NaiveDate>,
        limit: usize,
    ) -> AppResult<Vec<WorkoutSnapshot>> {
        let Some(workouts) = self.workouts.get(&(user_id, exercise_id)) else {
            return Ok(Vec::new());
        };
        Ok(workouts
            .iter()
            .filter(|workout| since.is_none_or(|since| workout.date >= since))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn set_history(
        &self,
        user_id: Uuid,
        exercise_id: i64,
        set_number: u32,
        limit: usize,
    ) -> AppResult<Vec<SetRecord>> {
        let Some(workouts) = self.workouts.get(&(user_id, exercise_id)) else {
            return Ok(Vec::new());
        };
        Ok(workouts
            .iter()
            .filter_map(|workout| workout.set(set_number).copied())
            .take(limit)
            .collect())
    }
}

#[async_trait]
impl PreferencesStore for InMemoryTrainingStore {
    async fn get_preferences(&self, user_id: Uuid) -> AppResult<Option<UserPreferences>> {
        Ok(self
            .preferences
            .get(&user_id)
            .map(|prefs| prefs.value().clone()))
    }

    async fn put_preferences(&self, user_id: Uuid, preferences: UserPreferences) -> AppResult<()> {
        preferences
            .validate()
            .map_err(|e| AppError::from(e).with_user_id(user_id))?;
        self.preferences.insert(user_id, preferences);
        Ok(())
    }
}

#[async_trait]
impl ProgressionEventStore for InMemoryTrainingStore {
    async fn record_if_absent(&self, event: ProgressionEvent) -> AppResult<bool> {
        let key = (event.user_id, event.exercise_id, event.date);
        match self.events.entry(key) {
            Entry::Occupied(_) => {
                debug!(exercise_id = event.exercise_id, date = %event.date, "Progression already recorded");
                Ok(false)
            }
            Entry::Vacant(slot) => {
                slot.insert(event);
                Ok(true)
            }
        }
    }

    async fn events_for(
        &self,
        user_id: Uuid,
        exercise_id: i64,
    ) -> AppResult<Vec<ProgressionEvent>> {
        let mut events: Vec<ProgressionEvent> = self
            .events
            .iter()
            .filter(|entry| entry.key().0 == user_id && entry.key().1 == exercise_id)
            .map(|entry| entry.value().clone())
            .collect();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(events)
    }
}
