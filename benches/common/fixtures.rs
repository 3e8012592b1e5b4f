// ABOUTME: Deterministic training-history fixtures for progression engine benchmarks
// ABOUTME: Generates workouts, per-set histories, and progression events without randomness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures.
//!
//! Histories step backwards from a fixed date so results are reproducible.

use chrono::{Duration, NaiveDate};
use ironlog_core::models::{ExerciseProfile, ProgressionEvent, UserPreferences, WorkoutSnapshot};
use ironlog_intelligence::ExerciseHistory;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few weeks of training
    Short,
    /// A typical training block
    Medium,
    /// Over a year of sessions
    Long,
}

impl HistorySize {
    #[must_use]
    pub const fn workouts(self) -> usize {
        match self {
            Self::Short => 6,
            Self::Medium => 40,
            Self::Long => 200,
        }
    }
}

/// Date every generated history is analyzed as of
#[must_use]
pub fn bench_as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()
}

fn exercise(index: usize) -> ExerciseProfile {
    let names = [
        ("Barbell Bench Press", "chest"),
        ("Back Squat", "quads"),
        ("Leg Press Machine", "quads"),
        ("Dumbbell Row", "back"),
    ];
    let (name, muscle) = names[index % names.len()];
    ExerciseProfile::new(index as i64 + 1, name, Some(muscle))
}

/// Generate one exercise history
///
/// Workouts are three days apart and cycle through straight, ascending, and
/// pyramid schemes with a slow weight climb.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_history(index: usize, size: HistorySize) -> ExerciseHistory {
    let as_of = bench_as_of();
    let count = size.workouts();
    let user_id = Uuid::from_u128(1000);
    let exercise = exercise(index);

    let workouts = (0..count)
        .map(|n| {
            let base = 40.0 + 2.5 * ((count - n) / 6) as f64;
            let reps = 10 + ((n * 7 + index) % 6) as u32;
            let pairs: Vec<(f64, u32)> = match (n + index) % 3 {
                0 => vec![(base, reps); 3],
                1 => vec![(base, reps), (base + 5.0, reps - 1), (base + 10.0, reps - 2)],
                _ => vec![(base, reps), (base + 10.0, reps - 3), (base, reps)],
            };
            WorkoutSnapshot::from_pairs(as_of - Duration::days((n * 3) as i64), &pairs)
        })
        .collect();

    let events = (0..count / 6)
        .map(|n| {
            let event = ProgressionEvent::weight_increase(
                user_id,
                exercise.id,
                as_of - Duration::days((n * 18 + 1) as i64),
                40.0 + 2.5 * n as f64,
                42.5 + 2.5 * n as f64,
            );
            if n % 4 == 0 {
                event.failed()
            } else {
                event
            }
        })
        .collect();

    ExerciseHistory {
        exercise: Some(exercise),
        workouts,
        set_histories: BTreeMap::new(),
        events,
        preferences: UserPreferences::default(),
    }
}

/// Generate histories for `count` exercises
#[must_use]
pub fn generate_histories(count: usize, size: HistorySize) -> Vec<ExerciseHistory> {
    (0..count).map(|index| generate_history(index, size)).collect()
}
