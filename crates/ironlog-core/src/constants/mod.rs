// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default engine thresholds and exercise keyword tables for Ironlog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Default values feed `ProgressionConfig::default()`; the keyword tables drive
//! equipment and body-region classification.

/// Exercise name keyword lookup tables
pub mod exercise_keywords;
/// Default thresholds for pattern detection, readiness, and suggestions
pub mod progression;

/// Weight increments and rounding in kilograms
pub mod increments {
    /// Practical rounding step for every equipment type
    pub const PRACTICAL_ROUNDING_STEP: f64 = 0.5;

    /// Free weights under this load move by `FREE_WEIGHT_TINY_STEP`
    pub const FREE_WEIGHT_TINY_LIMIT: f64 = 10.0;
    /// Increment for very light free weights
    pub const FREE_WEIGHT_TINY_STEP: f64 = 0.5;
    /// Free weights under this load move by `FREE_WEIGHT_LIGHT_STEP`
    pub const FREE_WEIGHT_LIGHT_LIMIT: f64 = 30.0;
    /// Increment for light free weights
    pub const FREE_WEIGHT_LIGHT_STEP: f64 = 1.0;
    /// Free weights under this load move by `FREE_WEIGHT_MEDIUM_STEP`
    pub const FREE_WEIGHT_MEDIUM_LIMIT: f64 = 60.0;
    /// Increment for medium free weights
    pub const FREE_WEIGHT_MEDIUM_STEP: f64 = 2.5;
    /// Heavy lower-body free weight increment
    pub const FREE_WEIGHT_HEAVY_LOWER_STEP: f64 = 5.0;
    /// Heavy upper-body free weight increment
    pub const FREE_WEIGHT_HEAVY_UPPER_STEP: f64 = 2.5;

    /// Machine stacks under this load move by the light step
    pub const MACHINE_LIGHT_LIMIT: f64 = 20.0;
    /// Light machine increment
    pub const MACHINE_LIGHT_STEP: f64 = 2.5;
    /// Heavy machine increment
    pub const MACHINE_HEAVY_STEP: f64 = 5.0;

    /// External load added to bodyweight movements
    pub const BODYWEIGHT_STEP: f64 = 2.5;

    /// Unknown equipment under this load halves the preferred increment
    pub const UNKNOWN_LIGHT_LIMIT: f64 = 20.0;
    /// Unknown equipment above this load doubles the preferred increment
    pub const UNKNOWN_HEAVY_LIMIT: f64 = 100.0;

    /// Per-set step for ascending/descending set targets (upper body)
    pub const SET_TARGET_UPPER_STEP: f64 = 2.5;
    /// Per-set step for ascending/descending set targets (lower body)
    pub const SET_TARGET_LOWER_STEP: f64 = 5.0;
}

/// Default user preferences applied when a user has none stored
pub mod preferences {
    /// Lower bound of the target rep range
    pub const DEFAULT_MIN_REPS: u32 = 10;
    /// Upper bound of the target rep range
    pub const DEFAULT_MAX_REPS: u32 = 15;
    /// Upper-body weight increment (kg)
    pub const DEFAULT_UPPER_INCREMENT: f64 = 2.5;
    /// Lower-body weight increment (kg)
    pub const DEFAULT_LOWER_INCREMENT: f64 = 5.0;
}

/// Environment variable names read by `ProgressionConfig::from_env`
pub mod env_vars {
    /// Optional JSON configuration file
    pub const CONFIG_FILE: &str = "IRONLOG_CONFIG_FILE";
    /// Configuration profile (`development`, `production`, `default`)
    pub const CONFIG_PROFILE: &str = "IRONLOG_PROFILE";
    /// Pattern detection sample size
    pub const SAMPLE_SIZE: &str = "IRONLOG_PATTERN_SAMPLE_SIZE";
    /// Minimum workouts before classifying
    pub const MIN_WORKOUTS: &str = "IRONLOG_PATTERN_MIN_WORKOUTS";
    /// Weight change threshold in kg
    pub const WEIGHT_CHANGE_THRESHOLD: &str = "IRONLOG_PATTERN_WEIGHT_THRESHOLD";
    /// Pattern confidence threshold
    pub const CONFIDENCE_THRESHOLD: &str = "IRONLOG_PATTERN_CONFIDENCE_THRESHOLD";
    /// Volume window in days
    pub const VOLUME_WINDOW_DAYS: &str = "IRONLOG_VOLUME_WINDOW_DAYS";
    /// Maximum weight jump fraction
    pub const MAX_WEIGHT_JUMP: &str = "IRONLOG_MAX_WEIGHT_JUMP";
    /// Events after which a lifter counts as advanced
    pub const ADVANCED_USER_EVENTS: &str = "IRONLOG_ADVANCED_USER_EVENTS";
    /// Plateau window in days
    pub const PLATEAU_DAYS: &str = "IRONLOG_PLATEAU_DAYS";
}
