// ABOUTME: Configuration error types for progression config loading and validation
// ABOUTME: Defines error variants for invalid ranges, weights, parsing, and file access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use std::{env, io};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range or ordering violated
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable holds a value that is not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Readiness weights are negative or unusable
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Configuration file could not be read
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] io::Error),

    /// Configuration file is not valid JSON for this schema
    #[error("Invalid configuration file: {0}")]
    Json(#[from] serde_json::Error),
}
