// ABOUTME: Progressive-overload analysis engine for strength-training history
// ABOUTME: Pattern detection, volume trends, readiness scoring, and ranked suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ironlog Intelligence
//!
//! Stateless analysis of a lifter's recent sets. Every entry point borrows its
//! inputs, takes the configuration and the "as of" date explicitly, and
//! returns a new value, so analyses can run in parallel without coordination.
//!
//! Data flows `PatternDetector` and `VolumeTrendAnalyzer` into
//! `ReadinessScorer` and then `SuggestionGenerator`. `WeightIncrementCalculator`
//! is shared by the last two. `ProgressionAnalyzer` runs the whole chain.

/// Equipment classification, increments, and practical rounding
pub mod weight_calculator;

/// Set-to-set weight pattern classification
pub mod pattern_detection;

/// Training volume and intensity trends
pub mod volume_analysis;

/// Readiness scoring and per-set progression analysis
pub mod readiness;

/// Ranked progression suggestions and set additions
pub mod suggestion_engine;

/// One-call analysis of an exercise history, single or batched
pub mod analyzer;

mod statistics;

pub use analyzer::{ExerciseAnalysis, ExerciseHistory, ProgressionAnalyzer};
pub use pattern_detection::{
    PatternAnalysis, PatternDetails, PatternDetector, PatternType, SetCountConsistency,
    TrendDirection,
};
pub use readiness::{
    ReadinessFactors, ReadinessLevel, ReadinessScorer, SetProgressionAnalysis, SetSuggestion,
};
pub use suggestion_engine::{
    AlternativeType, CurrentPerformance, SetAdditionSuggestion, SetTarget, SmartSuggestion,
    SuggestionAlternative, SuggestionGenerator, SuggestionInput, SuggestionType,
};
pub use volume_analysis::{
    ExerciseTrend, PerformanceStats, VolumeDataPoint, VolumeMetrics, VolumeTrend,
    VolumeTrendAnalysis, VolumeTrendAnalyzer,
};
pub use weight_calculator::WeightIncrementCalculator;
