// ABOUTME: Collaborator traits that feed the progression engine and persist its decisions
// ABOUTME: Set history, user preferences, and progression events, plus an in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Data Providers
//!
//! The engine never touches storage. These traits describe the boundary the
//! service layer talks to; any backing store (SQL, a sync service, a local
//! file) implements them. [`InMemoryTrainingStore`] implements all three and
//! backs the CLI and the integration tests.
//!
//! All lists are returned most recent first.

/// In-memory store backed by `DashMap`
pub mod in_memory;

pub use in_memory::InMemoryTrainingStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use ironlog_core::errors::AppResult;
use ironlog_core::models::{
    ExerciseProfile, ProgressionEvent, SetRecord, UserPreferences, WorkoutSnapshot,
};
use uuid::Uuid;

/// Source of completed workouts for a (user, exercise) pair
#[async_trait]
pub trait SetHistoryProvider: Send + Sync {
    /// Exercise metadata, `None` when the exercise is unknown
    async fn exercise_profile(&self, exercise_id: i64) -> AppResult<Option<ExerciseProfile>>;

    /// Completed workouts on or after `since`, newest first, at most `limit`
    async fn recent_workouts(
        &self,
        user_id: Uuid,
        exercise_id: i64,
        since: Option<NaiveDate>,
        limit: usize,
    ) -> AppResult<Vec<WorkoutSnapshot>>;

    /// Performances of one set number, newest first, at most `limit`
    async fn set_history(
        &self,
        user_id: Uuid,
        exercise_id: i64,
        set_number: u32,
        limit: usize,
    ) -> AppResult<Vec<SetRecord>>;
}

/// Per-user progression preferences
#[async_trait]
pub trait PreferencesStore: Send + Sync {
    /// Stored preferences, `None` when the user has never saved any
    async fn get_preferences(&self, user_id: Uuid) -> AppResult<Option<UserPreferences>>;

    /// Validate and store preferences
    async fn put_preferences(&self, user_id: Uuid, preferences: UserPreferences) -> AppResult<()>;
}

/// Accepted progression events
#[async_trait]
pub trait ProgressionEventStore: Send + Sync {
    /// Store the event unless one already exists for the same user, exercise,
    /// and date; returns whether it was stored
    ///
    /// The check and the insert happen atomically.
    async fn record_if_absent(&self, event: ProgressionEvent) -> AppResult<bool>;

    /// Events for a user and exercise, newest first
    async fn events_for(&self, user_id: Uuid, exercise_id: i64)
        -> AppResult<Vec<ProgressionEvent>>;
}
