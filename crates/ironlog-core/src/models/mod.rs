// ABOUTME: Core data models for strength-training history and progression
// ABOUTME: Sets, workouts, exercise profiles, user preferences, and progression events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models shared by the engine and the service layer.

mod exercise;
mod preferences;
mod progression;
mod workout;

pub use exercise::{BodyRegion, EquipmentType, ExerciseProfile};
pub use preferences::{ProgressionStrategy, UserPreferences};
pub use progression::{ProgressionEvent, ProgressionType};
pub use workout::{SetRecord, WorkoutSnapshot};
