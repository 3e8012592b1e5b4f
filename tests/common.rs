// ABOUTME: Shared test utilities and fixtures for ironlog integration tests
// ABOUTME: Quiet logging setup, fixed dates, exercise profiles, and workout history builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ironlog`
//!
//! Every fixture is dated relative to [`as_of`] so results never depend on the
//! wall clock.

use chrono::{Days, NaiveDate};
use ironlog_core::models::{
    ExerciseProfile, ProgressionEvent, ProgressionType, SetRecord, WorkoutSnapshot,
};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats are equal within [`EPSILON`]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Fixed analysis date used by every test
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

/// Date `days` before [`as_of`]
pub fn days_ago(days: u64) -> NaiveDate {
    as_of().checked_sub_days(Days::new(days)).unwrap()
}

/// Free-weight, upper body
pub fn bench_press() -> ExerciseProfile {
    ExerciseProfile::new(1, "Barbell Bench Press", Some("chest"))
}

/// Free-weight, lower body
pub fn back_squat() -> ExerciseProfile {
    ExerciseProfile::new(2, "Back Squat", Some("quads"))
}

/// Machine, lower body
pub fn leg_press() -> ExerciseProfile {
    ExerciseProfile::new(3, "Leg Press", Some("quads"))
}

/// No equipment keyword, upper body
pub fn lateral_raise() -> ExerciseProfile {
    ExerciseProfile::new(4, "Lateral Raise", Some("shoulders"))
}

/// `count` identical workouts spaced `spacing` days apart, the last one on
/// [`as_of`], oldest first
pub fn regular_workouts(count: u64, spacing: u64, pairs: &[(f64, u32)]) -> Vec<WorkoutSnapshot> {
    (0..count)
        .map(|i| WorkoutSnapshot::from_pairs(days_ago(spacing * (count - 1 - i)), pairs))
        .collect()
}

/// Set history for set 1 from `(weight, reps)` pairs, most recent first
pub fn set_history(pairs: &[(f64, u32)]) -> Vec<SetRecord> {
    pairs
        .iter()
        .map(|&(weight, reps)| SetRecord::new(1, weight, reps))
        .collect()
}

/// Fixed user for event fixtures
pub fn test_user() -> Uuid {
    Uuid::from_u128(0x1a2b_3c4d)
}

/// Successful weight increase on exercise 1, `days` before [`as_of`]
pub fn progression_event(days: u64, old_weight: f64, new_weight: f64) -> ProgressionEvent {
    ProgressionEvent::weight_increase(test_user(), 1, days_ago(days), old_weight, new_weight)
}

/// Weight increase the lifter could not complete
pub fn failed_event(days: u64) -> ProgressionEvent {
    progression_event(days, 60.0, 62.5).failed()
}

/// Deload event
pub fn deload_event(days: u64, old_weight: f64, new_weight: f64) -> ProgressionEvent {
    progression_event(days, old_weight, new_weight).with_type(ProgressionType::Deload)
}
