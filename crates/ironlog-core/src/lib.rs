// ABOUTME: Core types and configuration for the Ironlog progressive-overload engine
// ABOUTME: Foundation crate with workout models, error handling, keyword tables, and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ironlog Core
//!
//! Foundation crate providing shared types for the Ironlog strength-training
//! analysis engine. It changes infrequently so the engine and service crates
//! compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the engine's `ProgressionError`
//! - **constants**: Default thresholds and exercise keyword lookup tables
//! - **models**: Sets, workouts, exercises, preferences, and progression events
//! - **config**: `ProgressionConfig` with environment and JSON file loading

/// Unified error handling with standard error codes and engine input errors
pub mod errors;

/// Default thresholds and exercise keyword lookup tables
pub mod constants;

/// Core data models (`SetRecord`, `WorkoutSnapshot`, `ExerciseProfile`, ...)
pub mod models;

/// Progression engine configuration
pub mod config;
