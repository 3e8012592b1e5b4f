// ABOUTME: Input validation errors raised by the progression analysis engine
// ABOUTME: Covers invalid rep ranges, non-positive weights, and unsafe weight jumps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progression Error Types
//!
//! Missing or insufficient history is never an error for the engine; it is
//! reported through result states such as `PatternType::Unknown`. These
//! variants cover inputs that violate the data model.

use super::ErrorCode;
use thiserror::Error;

/// Invalid input detected by the progression engine
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProgressionError {
    /// Rep range preferences are inverted or empty
    #[error("min_reps_target ({min}) must be lower than max_reps_target ({max})")]
    InvalidRepRange {
        /// Configured minimum
        min: u32,
        /// Configured maximum
        max: u32,
    },

    /// A weight was zero or negative
    #[error("weight must be positive, got {weight}")]
    NonPositiveWeight {
        /// Offending weight
        weight: f64,
    },

    /// A configured weight increment was zero or negative
    #[error("weight increment must be positive, got {increment}")]
    NonPositiveIncrement {
        /// Offending increment
        increment: f64,
    },

    /// A progression did not raise the weight
    #[error("new weight {new} must be greater than old weight {old}")]
    WeightNotIncreased {
        /// Previous weight
        old: f64,
        /// Proposed weight
        new: f64,
    },

    /// A progression raised the weight more than the allowed fraction
    #[error("jump from {old} to {new} exceeds the maximum jump fraction of {max_fraction}")]
    WeightJumpTooLarge {
        /// Previous weight
        old: f64,
        /// Proposed weight
        new: f64,
        /// Maximum allowed fraction (0.5 = 50%)
        max_fraction: f64,
    },

    /// Two sets in one workout share a set number
    #[error("set number {set_number} appears more than once in the workout on {date}")]
    DuplicateSetNumber {
        /// Repeated set number
        set_number: u32,
        /// Workout date
        date: chrono::NaiveDate,
    },

    /// Set numbers start at 1
    #[error("set numbers start at 1")]
    InvalidSetNumber,

    /// RPE outside 1-10
    #[error("rpe must be between 1 and 10, got {rpe}")]
    RpeOutOfRange {
        /// Offending RPE
        rpe: u8,
    },

    /// Form quality outside 1-5
    #[error("form quality must be between 1 and 5, got {form_quality}")]
    FormQualityOutOfRange {
        /// Offending rating
        form_quality: u8,
    },
}

impl ProgressionError {
    /// Map to the application-wide error code
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::RpeOutOfRange { .. }
            | Self::FormQualityOutOfRange { .. }
            | Self::WeightJumpTooLarge { .. } => ErrorCode::ValueOutOfRange,
            _ => ErrorCode::InvalidInput,
        }
    }
}

/// Result type for engine entry points
pub type EngineResult<T> = Result<T, ProgressionError>;
