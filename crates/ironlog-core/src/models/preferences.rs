// ABOUTME: Per-user progression preferences with documented defaults
// ABOUTME: Target rep range, weight increments by body region, and progression strategy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::preferences::{
    DEFAULT_LOWER_INCREMENT, DEFAULT_MAX_REPS, DEFAULT_MIN_REPS, DEFAULT_UPPER_INCREMENT,
};
use crate::errors::{EngineResult, ProgressionError};
use serde::{Deserialize, Serialize};

/// How a lifter prefers to progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionStrategy {
    /// Climb the rep range before adding weight
    #[default]
    RepsFirst,
    /// Add weight as soon as the rep floor is met
    WeightFirst,
    /// Alternate between reps and weight
    Hybrid,
}

/// User-specific progression preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Bottom of the target rep range
    pub min_reps_target: u32,
    /// Top of the target rep range
    pub max_reps_target: u32,
    /// Preferred increment for upper-body exercises (kg)
    pub weight_increment_upper: f64,
    /// Preferred increment for lower-body exercises (kg)
    pub weight_increment_lower: f64,
    /// Preferred progression strategy
    pub progression_strategy: ProgressionStrategy,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            min_reps_target: DEFAULT_MIN_REPS,
            max_reps_target: DEFAULT_MAX_REPS,
            weight_increment_upper: DEFAULT_UPPER_INCREMENT,
            weight_increment_lower: DEFAULT_LOWER_INCREMENT,
            progression_strategy: ProgressionStrategy::default(),
        }
    }
}

impl UserPreferences {
    /// Preferred increment for a body region
    #[must_use]
    pub const fn increment_for(&self, is_upper_body: bool) -> f64 {
        if is_upper_body {
            self.weight_increment_upper
        } else {
            self.weight_increment_lower
        }
    }

    /// Check the rep range and increments
    ///
    /// # Errors
    ///
    /// Returns an error when `min_reps_target >= max_reps_target` or an
    /// increment is not positive
    pub fn validate(&self) -> EngineResult<()> {
        if self.min_reps_target >= self.max_reps_target {
            return Err(ProgressionError::InvalidRepRange {
                min: self.min_reps_target,
                max: self.max_reps_target,
            });
        }
        for increment in [self.weight_increment_upper, self.weight_increment_lower] {
            if increment <= 0.0 || !increment.is_finite() {
                return Err(ProgressionError::NonPositiveIncrement { increment });
            }
        }
        Ok(())
    }
}
