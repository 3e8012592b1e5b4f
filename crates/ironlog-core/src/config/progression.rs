// ABOUTME: Progression engine configuration with profiles, file overrides, and env overrides
// ABOUTME: Validates thresholds and returns soft warnings for questionable but usable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression Engine Configuration
//!
//! Configuration for pattern detection, volume tracking, readiness scoring,
//! and suggestion generation. Values can be overridden from a JSON file named
//! by `IRONLOG_CONFIG_FILE` and from `IRONLOG_*` environment variables.

use super::ConfigError;
use crate::constants::env_vars;
use crate::constants::progression::{pattern, readiness, suggestions, volume};
use crate::models::UserPreferences;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Tolerance when checking that readiness weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Volume windows shorter than this produce noisy trends
const MIN_RECOMMENDED_WINDOW_DAYS: u32 = 7;

/// Named configuration profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigProfile {
    /// Standard thresholds
    #[default]
    Default,
    /// Looser thresholds so small test histories classify
    Development,
    /// Stricter confidence for production traffic
    Production,
}

impl FromStr for ConfigProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::Parse(format!("Unknown profile '{other}'"))),
        }
    }
}

impl fmt::Display for ConfigProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Development => "development",
            Self::Production => "production",
        };
        f.write_str(name)
    }
}

/// Progression Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Pattern detection parameters
    pub pattern_detection: PatternDetectionConfig,
    /// Volume trend parameters
    pub volume_tracking: VolumeTrackingConfig,
    /// Readiness scoring parameters
    pub readiness: ReadinessConfig,
    /// Suggestion and validation thresholds
    pub thresholds: ProgressionThresholds,
    /// Preferences applied when a user has none stored
    pub default_preferences: UserPreferences,
}

/// Pattern detection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternDetectionConfig {
    /// Most recent workouts considered (clamped to 2-10)
    pub sample_size: usize,
    /// Workouts required before classifying
    pub min_workouts_for_analysis: usize,
    /// Set-to-set weight change treated as meaningful (kg)
    pub weight_change_threshold: f64,
    /// Confidence below which the pattern is reported as varying
    pub confidence_threshold: f64,
    /// Minimum runs-per-set ratio for a cluster classification
    pub cluster_min_score: f64,
    /// Relative change in average weight that marks a trend direction
    pub trend_direction_threshold: f64,
}

impl Default for PatternDetectionConfig {
    fn default() -> Self {
        Self {
            sample_size: pattern::SAMPLE_SIZE,
            min_workouts_for_analysis: pattern::MIN_WORKOUTS_FOR_ANALYSIS,
            weight_change_threshold: pattern::WEIGHT_CHANGE_THRESHOLD,
            confidence_threshold: pattern::CONFIDENCE_THRESHOLD,
            cluster_min_score: pattern::CLUSTER_MIN_SCORE,
            trend_direction_threshold: pattern::TREND_DIRECTION_THRESHOLD,
        }
    }
}

impl PatternDetectionConfig {
    /// Sample size clamped to the supported range
    #[must_use]
    pub fn effective_sample_size(&self) -> usize {
        self.sample_size
            .clamp(pattern::MIN_SAMPLE_SIZE, pattern::MAX_SAMPLE_SIZE)
    }
}

/// Volume trend parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeTrackingConfig {
    /// Rolling window in days
    pub window_days: u32,
    /// Percent change above which volume is increasing
    pub increasing_threshold_percent: f64,
    /// Percent change at or below which volume is declining
    pub declining_threshold_percent: f64,
}

impl Default for VolumeTrackingConfig {
    fn default() -> Self {
        Self {
            window_days: volume::WINDOW_DAYS,
            increasing_threshold_percent: volume::INCREASING_THRESHOLD_PERCENT,
            declining_threshold_percent: volume::DECLINING_THRESHOLD_PERCENT,
        }
    }
}

/// Weights for combining readiness sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessWeights {
    /// Rep achievement weight
    pub rep_achievement: f64,
    /// Training consistency weight
    pub consistency: f64,
    /// Time since last progression weight
    pub time_factor: f64,
    /// Volume trend weight
    pub volume_trend: f64,
    /// Form quality weight
    pub form_quality: f64,
}

impl ReadinessWeights {
    /// Weights used when sets carry form ratings
    #[must_use]
    pub const fn with_form() -> Self {
        Self {
            rep_achievement: 0.35,
            consistency: 0.25,
            time_factor: 0.15,
            volume_trend: 0.10,
            form_quality: 0.15,
        }
    }

    /// Weights used when no set carries a form rating
    #[must_use]
    pub const fn without_form() -> Self {
        Self {
            rep_achievement: 0.40,
            consistency: 0.30,
            time_factor: 0.20,
            volume_trend: 0.10,
            form_quality: 0.0,
        }
    }

    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.rep_achievement
            + self.consistency
            + self.time_factor
            + self.volume_trend
            + self.form_quality
    }

    fn any_negative(&self) -> bool {
        [
            self.rep_achievement,
            self.consistency,
            self.time_factor,
            self.volume_trend,
            self.form_quality,
        ]
        .iter()
        .any(|weight| *weight < 0.0)
    }
}

/// Readiness scoring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Workouts used for rep achievement and form quality
    pub rep_achievement_workouts: usize,
    /// Workouts used for the consistency score
    pub consistency_workouts: usize,
    /// Per-set history entries considered
    pub set_history_limit: usize,
    /// Entries inspected for a recent weight increase
    pub recent_progression_lookback: usize,
    /// Weights when form data is present
    pub weights_with_form: ReadinessWeights,
    /// Weights when form data is absent
    pub weights_without_form: ReadinessWeights,
    /// Overall readiness for "ready"
    pub ready_threshold: f64,
    /// Overall readiness for "close"
    pub close_threshold: f64,
    /// Overall readiness for "building"
    pub building_threshold: f64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            rep_achievement_workouts: readiness::REP_ACHIEVEMENT_WORKOUTS,
            consistency_workouts: readiness::CONSISTENCY_WORKOUTS,
            set_history_limit: readiness::SET_HISTORY_LIMIT,
            recent_progression_lookback: readiness::RECENT_PROGRESSION_LOOKBACK,
            weights_with_form: ReadinessWeights::with_form(),
            weights_without_form: ReadinessWeights::without_form(),
            ready_threshold: readiness::READY_THRESHOLD,
            close_threshold: readiness::CLOSE_THRESHOLD,
            building_threshold: readiness::BUILDING_THRESHOLD,
        }
    }
}

/// Suggestion and validation thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionThresholds {
    /// Largest single weight increase as a fraction of the old weight
    pub max_weight_jump_fraction: f64,
    /// Events after which a lifter is advanced
    pub advanced_user_events: usize,
    /// Increment for advanced lifters (kg)
    pub microload_increment: f64,
    /// Deload weight multiplier
    pub deload_factor: f64,
    /// Failed events within the window that trigger a deload
    pub deload_failed_events: usize,
    /// Most recent events inspected for failures
    pub deload_event_window: usize,
    /// Readiness below which a deload is suggested
    pub deload_readiness_threshold: f64,
    /// Days without progression that indicate a plateau
    pub plateau_days: i64,
    /// Events required before a plateau can be detected
    pub plateau_min_events: usize,
    /// Maximum sets before set additions stop
    pub max_sets: u32,
    /// Starting reps for a new set
    pub new_set_reps: u32,
    /// Days of history considered for set additions
    pub set_addition_window_days: i64,
    /// Consistent workouts required before adding a set
    pub set_addition_min_workouts: usize,
    /// Lightest weight suggested for a new descending set
    pub min_new_set_weight: f64,
}

impl Default for ProgressionThresholds {
    fn default() -> Self {
        Self {
            max_weight_jump_fraction: suggestions::MAX_WEIGHT_JUMP_FRACTION,
            advanced_user_events: suggestions::ADVANCED_USER_EVENTS,
            microload_increment: suggestions::MICROLOAD_INCREMENT,
            deload_factor: suggestions::DELOAD_FACTOR,
            deload_failed_events: suggestions::DELOAD_FAILED_EVENTS,
            deload_event_window: suggestions::DELOAD_EVENT_WINDOW,
            deload_readiness_threshold: suggestions::DELOAD_READINESS_THRESHOLD,
            plateau_days: suggestions::PLATEAU_DAYS,
            plateau_min_events: suggestions::PLATEAU_MIN_EVENTS,
            max_sets: suggestions::MAX_SETS,
            new_set_reps: suggestions::NEW_SET_REPS,
            set_addition_window_days: suggestions::SET_ADDITION_WINDOW_DAYS,
            set_addition_min_workouts: suggestions::SET_ADDITION_MIN_WORKOUTS,
            min_new_set_weight: suggestions::MIN_NEW_SET_WEIGHT,
        }
    }
}

impl ProgressionConfig {
    /// Configuration for a named profile
    #[must_use]
    pub fn for_profile(profile: ConfigProfile) -> Self {
        match profile {
            ConfigProfile::Default => Self::default(),
            ConfigProfile::Development => Self::development(),
            ConfigProfile::Production => Self::production(),
        }
    }

    /// Looser thresholds so short histories still classify
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();
        config.pattern_detection.min_workouts_for_analysis = 2;
        config.pattern_detection.confidence_threshold = 0.6;
        config
    }

    /// Stricter pattern confidence for production traffic
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();
        config.pattern_detection.confidence_threshold = 0.8;
        config
    }

    /// Load configuration from the environment
    ///
    /// Starts from the profile named by `IRONLOG_PROFILE`, merges the JSON file
    /// named by `IRONLOG_CONFIG_FILE` when set, then applies `IRONLOG_*`
    /// overrides. Validation warnings are logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is unknown, the file cannot be read or
    /// parsed, an override does not parse, or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let profile = match env::var(env_vars::CONFIG_PROFILE) {
            Ok(value) => value.parse()?,
            Err(env::VarError::NotPresent) => ConfigProfile::Default,
            Err(e) => return Err(e.into()),
        };
        let mut config = Self::for_profile(profile);

        if let Ok(path) = env::var(env_vars::CONFIG_FILE) {
            debug!(path = %path, profile = %profile, "Loading progression config file");
            config = config.merge_json_file(&path)?;
        }

        let config = config.apply_env_overrides()?;
        for warning in config.validate()? {
            warn!("Progression config: {warning}");
        }
        Ok(config)
    }

    /// Load a JSON file on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match the schema
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::default().merge_json_file(path)
    }

    /// Merge a JSON file containing partial overrides into this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match the schema
    pub fn merge_json_file(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let overlay: Value = serde_json::from_str(&contents)?;
        self.merge_json(overlay)
    }

    /// Merge a JSON value containing partial overrides into this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the merged document does not match the schema
    pub fn merge_json(self, overlay: Value) -> Result<Self, ConfigError> {
        let mut base = serde_json::to_value(self)?;
        merge_values(&mut base, overlay);
        Ok(serde_json::from_value(base)?)
    }

    /// Validate the configuration
    ///
    /// Returns warnings for values that are usable but questionable.
    ///
    /// # Errors
    ///
    /// Returns an error if a value makes the engine's output meaningless
    pub fn validate(&self) -> Result<Vec<String>, ConfigError> {
        let mut warnings = Vec::new();
        self.validate_pattern_detection(&mut warnings)?;
        self.validate_readiness(&mut warnings)?;
        self.validate_thresholds(&mut warnings)?;

        if self.volume_tracking.window_days == 0 {
            return Err(ConfigError::ValueOutOfRange("window_days must be > 0"));
        }
        if self.volume_tracking.window_days < MIN_RECOMMENDED_WINDOW_DAYS {
            warnings.push(format!(
                "window_days of {} is short; volume trends will be noisy",
                self.volume_tracking.window_days
            ));
        }
        if self.volume_tracking.declining_threshold_percent
            >= self.volume_tracking.increasing_threshold_percent
        {
            return Err(ConfigError::InvalidRange(
                "declining_threshold_percent must be below increasing_threshold_percent",
            ));
        }

        let prefs = &self.default_preferences;
        if prefs.min_reps_target >= prefs.max_reps_target {
            return Err(ConfigError::InvalidRange(
                "default min_reps_target must be lower than max_reps_target",
            ));
        }
        if prefs.weight_increment_upper <= 0.0 || prefs.weight_increment_lower <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default weight increments must be > 0",
            ));
        }

        Ok(warnings)
    }

    fn validate_pattern_detection(&self, warnings: &mut Vec<String>) -> Result<(), ConfigError> {
        let cfg = &self.pattern_detection;
        if cfg.min_workouts_for_analysis < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_workouts_for_analysis must be >= 2",
            ));
        }
        if !(0.0..=1.0).contains(&cfg.confidence_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "confidence_threshold must be between 0.0 and 1.0",
            ));
        }
        if cfg.weight_change_threshold < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "weight_change_threshold must be >= 0",
            ));
        }
        if cfg.sample_size < pattern::MIN_SAMPLE_SIZE || cfg.sample_size > pattern::MAX_SAMPLE_SIZE
        {
            warnings.push(format!(
                "sample_size {} is outside {}-{} and will be clamped",
                cfg.sample_size,
                pattern::MIN_SAMPLE_SIZE,
                pattern::MAX_SAMPLE_SIZE
            ));
        }
        if cfg.confidence_threshold < 0.5 {
            warnings.push(format!(
                "confidence_threshold {} accepts patterns that vary most of the time",
                cfg.confidence_threshold
            ));
        }
        if cfg.min_workouts_for_analysis > cfg.effective_sample_size() {
            warnings.push(format!(
                "min_workouts_for_analysis {} exceeds the sample size {}; no pattern will ever classify",
                cfg.min_workouts_for_analysis,
                cfg.effective_sample_size()
            ));
        }
        Ok(())
    }

    fn validate_readiness(&self, warnings: &mut Vec<String>) -> Result<(), ConfigError> {
        let cfg = &self.readiness;
        if cfg.weights_with_form.any_negative() || cfg.weights_without_form.any_negative() {
            return Err(ConfigError::InvalidWeights(
                "readiness weights must be non-negative",
            ));
        }
        for (label, weights) in [
            ("weights_with_form", cfg.weights_with_form),
            ("weights_without_form", cfg.weights_without_form),
        ] {
            if (weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                warnings.push(format!(
                    "{label} sum to {:.3}; overall readiness will be clamped",
                    weights.total()
                ));
            }
        }
        let ordered = 0.0 <= cfg.building_threshold
            && cfg.building_threshold < cfg.close_threshold
            && cfg.close_threshold < cfg.ready_threshold
            && cfg.ready_threshold <= 1.0;
        if !ordered {
            return Err(ConfigError::InvalidRange(
                "readiness thresholds must satisfy 0 <= building < close < ready <= 1",
            ));
        }
        if cfg.rep_achievement_workouts == 0 || cfg.set_history_limit < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "rep_achievement_workouts must be > 0 and set_history_limit >= 2",
            ));
        }
        Ok(())
    }

    fn validate_thresholds(&self, warnings: &mut Vec<String>) -> Result<(), ConfigError> {
        let cfg = &self.thresholds;
        if cfg.max_weight_jump_fraction <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_weight_jump_fraction must be > 0",
            ));
        }
        if cfg.max_weight_jump_fraction > 1.0 {
            warnings.push(format!(
                "max_weight_jump_fraction {} allows more than doubling the load",
                cfg.max_weight_jump_fraction
            ));
        }
        if cfg.deload_factor <= 0.0 || cfg.deload_factor >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "deload_factor must be between 0.0 and 1.0 (exclusive)",
            ));
        }
        if cfg.microload_increment <= 0.0 || cfg.min_new_set_weight <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "microload_increment and min_new_set_weight must be > 0",
            ));
        }
        if cfg.deload_failed_events > cfg.deload_event_window {
            return Err(ConfigError::InvalidRange(
                "deload_failed_events cannot exceed deload_event_window",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_vars::SAMPLE_SIZE,
            &mut self.pattern_detection.sample_size,
        )?;
        Self::apply_env_var(
            env_vars::MIN_WORKOUTS,
            &mut self.pattern_detection.min_workouts_for_analysis,
        )?;
        Self::apply_env_var(
            env_vars::WEIGHT_CHANGE_THRESHOLD,
            &mut self.pattern_detection.weight_change_threshold,
        )?;
        Self::apply_env_var(
            env_vars::CONFIDENCE_THRESHOLD,
            &mut self.pattern_detection.confidence_threshold,
        )?;
        Self::apply_env_var(
            env_vars::VOLUME_WINDOW_DAYS,
            &mut self.volume_tracking.window_days,
        )?;
        Self::apply_env_var(
            env_vars::MAX_WEIGHT_JUMP,
            &mut self.thresholds.max_weight_jump_fraction,
        )?;
        Self::apply_env_var(
            env_vars::ADVANCED_USER_EVENTS,
            &mut self.thresholds.advanced_user_events,
        )?;
        Self::apply_env_var(env_vars::PLATEAU_DAYS, &mut self.thresholds.plateau_days)?;
        Ok(self)
    }
}

/// Recursively merge `overlay` into `base`; objects merge key by key, anything
/// else replaces
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() -> Result<(), ConfigError> {
        let warnings = ProgressionConfig::default().validate()?;
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        Ok(())
    }

    #[test]
    fn test_profiles() {
        let dev = ProgressionConfig::development();
        assert_eq!(dev.pattern_detection.min_workouts_for_analysis, 2);
        assert!((dev.pattern_detection.confidence_threshold - 0.6).abs() < f64::EPSILON);

        let prod = ProgressionConfig::production();
        assert!((prod.pattern_detection.confidence_threshold - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_merge_keeps_other_defaults() -> Result<(), ConfigError> {
        let config = ProgressionConfig::development().merge_json(serde_json::json!({
            "thresholds": { "max_weight_jump_fraction": 0.25 }
        }))?;
        assert!((config.thresholds.max_weight_jump_fraction - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.pattern_detection.min_workouts_for_analysis, 2);
        assert_eq!(config.thresholds.max_sets, 6);
        Ok(())
    }

    #[test]
    fn test_inverted_rep_range_rejected() {
        let mut config = ProgressionConfig::default();
        config.default_preferences.min_reps_target = 15;
        config.default_preferences.max_reps_target = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_soft_issues_are_warnings() -> Result<(), ConfigError> {
        let mut config = ProgressionConfig::default();
        config.volume_tracking.window_days = 5;
        config.thresholds.max_weight_jump_fraction = 1.5;
        config.pattern_detection.sample_size = 20;
        let warnings = config.validate()?;
        assert_eq!(warnings.len(), 3);
        Ok(())
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!(
            "Production".parse::<ConfigProfile>().ok(),
            Some(ConfigProfile::Production)
        );
        assert!("staging".parse::<ConfigProfile>().is_err());
    }
}
