// ABOUTME: Default thresholds for pattern detection, volume trends, readiness, and suggestions
// ABOUTME: Values seed ProgressionConfig::default() and can be overridden per deployment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pattern detection defaults
pub mod pattern {
    /// Most recent workouts considered for classification
    pub const SAMPLE_SIZE: usize = 5;
    /// Smallest allowed sample size
    pub const MIN_SAMPLE_SIZE: usize = 2;
    /// Largest allowed sample size
    pub const MAX_SAMPLE_SIZE: usize = 10;
    /// Workouts required before a pattern is classified
    pub const MIN_WORKOUTS_FOR_ANALYSIS: usize = 3;
    /// Set-to-set weight change treated as meaningful (kg)
    pub const WEIGHT_CHANGE_THRESHOLD: f64 = 2.5;
    /// Confidence below which the pattern is reported as varying
    pub const CONFIDENCE_THRESHOLD: f64 = 0.7;
    /// Minimum runs-per-set ratio for a cluster classification
    pub const CLUSTER_MIN_SCORE: f64 = 0.25;
    /// Relative change in average weight that marks a trend direction
    pub const TREND_DIRECTION_THRESHOLD: f64 = 0.05;
    /// Set-count standard deviation below which set counts are consistent
    pub const SET_COUNT_VARIATION_LIMIT: f64 = 1.0;
}

/// Volume tracking defaults
pub mod volume {
    /// Rolling window for volume trends (days)
    pub const WINDOW_DAYS: u32 = 30;
    /// Percent change above which volume is increasing
    pub const INCREASING_THRESHOLD_PERCENT: f64 = 10.0;
    /// Percent change at or below which volume is declining
    pub const DECLINING_THRESHOLD_PERCENT: f64 = -5.0;
    /// Percent change in average weight that marks an exercise trend
    pub const EXERCISE_TREND_THRESHOLD_PERCENT: f64 = 5.0;

    /// Readiness for an increasing volume trend
    pub const READINESS_INCREASING: f64 = 1.0;
    /// Readiness for a small positive volume change
    pub const READINESS_STABLE_POSITIVE: f64 = 0.8;
    /// Readiness for flat volume
    pub const READINESS_STABLE: f64 = 0.6;
    /// Readiness for declining volume
    pub const READINESS_DECLINING: f64 = 0.3;
    /// Readiness when there are too few data points
    pub const READINESS_INSUFFICIENT: f64 = 0.5;
    /// Readiness when the baseline volume is zero
    pub const READINESS_NO_VOLUME: f64 = 0.0;
}

/// Readiness scoring defaults
pub mod readiness {
    /// Workouts used for rep achievement and form quality
    pub const REP_ACHIEVEMENT_WORKOUTS: usize = 3;
    /// Workouts used for the training-frequency consistency score
    pub const CONSISTENCY_WORKOUTS: usize = 5;
    /// Per-set history entries considered
    pub const SET_HISTORY_LIMIT: usize = 5;
    /// Entries inspected for a recent weight increase
    pub const RECENT_PROGRESSION_LOOKBACK: usize = 4;

    /// Overall readiness at which weight increases are suggested
    pub const READY_THRESHOLD: f64 = 0.8;
    /// Overall readiness at which rep increases are suggested
    pub const CLOSE_THRESHOLD: f64 = 0.6;
    /// Overall readiness below which deload advice is given
    pub const BUILDING_THRESHOLD: f64 = 0.4;

    /// Neutral consistency score when there are no gaps to measure
    pub const NEUTRAL_CONSISTENCY: f64 = 0.5;
    /// Time factor when no prior progression exists
    pub const NO_PRIOR_PROGRESSION_TIME_FACTOR: f64 = 0.6;
    /// Maximum form quality rating
    pub const MAX_FORM_QUALITY: f64 = 5.0;

    /// Confidence for a ready set after a recent weight increase
    pub const CONFIDENCE_PROGRESSED_READY: f64 = 0.95;
    /// Confidence for a ready set at a stable weight
    pub const CONFIDENCE_READY: f64 = 0.9;
    /// Confidence while building strength at a new weight
    pub const CONFIDENCE_BUILD_STRENGTH: f64 = 0.7;
    /// Confidence when one rep short of the target range top
    pub const CONFIDENCE_ALMOST_READY: f64 = 0.6;
    /// Confidence while rebuilding reps after a weight increase
    pub const CONFIDENCE_BUILD_REPS: f64 = 0.4;
    /// Confidence while still adding reps
    pub const CONFIDENCE_INCREASE_REPS: f64 = 0.3;
}

/// Suggestion generation defaults
pub mod suggestions {
    /// Largest single weight increase as a fraction of the old weight
    pub const MAX_WEIGHT_JUMP_FRACTION: f64 = 0.5;
    /// Progression events after which a lifter is treated as advanced
    pub const ADVANCED_USER_EVENTS: usize = 10;
    /// Increment for advanced lifters (kg)
    pub const MICROLOAD_INCREMENT: f64 = 1.25;
    /// Weight multiplier for a standard deload
    pub const DELOAD_FACTOR: f64 = 0.85;
    /// Weight multiplier for the light deload alternative
    pub const LIGHT_DELOAD_FACTOR: f64 = 0.9;
    /// Weight multiplier for the deep deload alternative
    pub const DEEP_DELOAD_FACTOR: f64 = 0.8;
    /// Failed events (within the window) that trigger a deload
    pub const DELOAD_FAILED_EVENTS: usize = 2;
    /// Most recent events inspected for failures
    pub const DELOAD_EVENT_WINDOW: usize = 3;
    /// Overall readiness below which a deload is suggested
    pub const DELOAD_READINESS_THRESHOLD: f64 = 0.3;
    /// Days without a progression that indicate a plateau
    pub const PLATEAU_DAYS: i64 = 28;
    /// Events required before a plateau can be detected
    pub const PLATEAU_MIN_EVENTS: usize = 4;
    /// Confidence attached to plateau-break suggestions
    pub const PLATEAU_CONFIDENCE: f64 = 0.7;
    /// Weight multiplier for the higher-rep block alternative
    pub const HIGHER_REP_BLOCK_FACTOR: f64 = 0.8;
    /// Maximum sets per exercise before set additions stop
    pub const MAX_SETS: u32 = 6;
    /// Starting reps for a newly added set
    pub const NEW_SET_REPS: u32 = 6;
    /// Days of history considered for set additions
    pub const SET_ADDITION_WINDOW_DAYS: i64 = 30;
    /// Consistent workouts required before adding a set
    pub const SET_ADDITION_MIN_WORKOUTS: usize = 3;
    /// Lightest weight suggested for a new descending set (empty bar)
    pub const MIN_NEW_SET_WEIGHT: f64 = 20.0;
}
