// ABOUTME: JSON training export format read by the CLI and loaded into the in-memory store
// ABOUTME: One file holds a lifter's preferences, exercises, workouts, and progression events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::providers::{InMemoryTrainingStore, PreferencesStore, ProgressionEventStore};
use ironlog_core::errors::{AppError, AppResult, ErrorCode};
use ironlog_core::models::{ExerciseProfile, ProgressionEvent, UserPreferences, WorkoutSnapshot};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// One exercise inside a training export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseExport {
    /// Exercise metadata
    pub profile: ExerciseProfile,
    /// Completed workouts
    #[serde(default)]
    pub workouts: Vec<WorkoutSnapshot>,
    /// Accepted progressions; their `user_id` is replaced by the export's
    #[serde(default)]
    pub events: Vec<ProgressionEvent>,
}

/// A lifter's training log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExport {
    /// Lifter id; a fresh id is generated when absent
    #[serde(default = "Uuid::new_v4")]
    pub user_id: Uuid,
    /// Progression preferences; defaults when absent
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
    /// Exercises with their history
    #[serde(default)]
    pub exercises: Vec<ExerciseExport>,
}

impl TrainingExport {
    /// Read an export from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid export
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCode::ResourceNotFound,
                format!("cannot read training export {}", path.display()),
            )
            .with_source(e)
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Find an exercise by id
    #[must_use]
    pub fn exercise(&self, exercise_id: i64) -> Option<&ExerciseExport> {
        self.exercises
            .iter()
            .find(|exercise| exercise.profile.id == exercise_id)
    }

    /// Load everything into a fresh in-memory store
    ///
    /// # Errors
    ///
    /// Returns an error if any workout or the preferences violate the data model
    pub async fn into_store(self) -> AppResult<InMemoryTrainingStore> {
        let store = InMemoryTrainingStore::new();
        let user_id = self.user_id;
        if let Some(preferences) = self.preferences {
            store.put_preferences(user_id, preferences).await?;
        }

        let mut workout_count = 0;
        for exercise in self.exercises {
            let exercise_id = exercise.profile.id;
            store.add_exercise(exercise.profile);
            for workout in exercise.workouts {
                store.add_workout(user_id, exercise_id, workout)?;
                workout_count += 1;
            }
            for event in exercise.events {
                store
                    .record_if_absent(ProgressionEvent {
                        user_id,
                        exercise_id,
                        ..event
                    })
                    .await?;
            }
        }

        info!(user_id = %user_id, workouts = workout_count, "Loaded training export");
        Ok(store)
    }
}
