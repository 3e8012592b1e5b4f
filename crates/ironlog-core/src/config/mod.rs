// ABOUTME: Configuration module for the progression engine
// ABOUTME: Exposes ProgressionConfig, its sections, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression engine configuration.
//!
//! `ProgressionConfig` is a plain value passed to every engine entry point.
//! It can be built from defaults, a named profile, a JSON file with partial
//! overrides, and `IRONLOG_*` environment variables.

mod error;
mod progression;

pub use error::ConfigError;
pub use progression::{
    ConfigProfile, PatternDetectionConfig, ProgressionConfig, ProgressionThresholds,
    ReadinessConfig, ReadinessWeights, VolumeTrackingConfig,
};
