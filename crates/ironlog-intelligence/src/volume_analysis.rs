// ABOUTME: Training volume, intensity, and weight trends for one exercise
// ABOUTME: Rolling-window half-over-half comparison mapped to a readiness contribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::statistics;
use chrono::{Duration, NaiveDate};
use ironlog_core::config::VolumeTrackingConfig;
use ironlog_core::constants::progression::volume::{
    EXERCISE_TREND_THRESHOLD_PERCENT, READINESS_DECLINING, READINESS_INCREASING,
    READINESS_INSUFFICIENT, READINESS_NO_VOLUME, READINESS_STABLE, READINESS_STABLE_POSITIVE,
};
use ironlog_core::errors::EngineResult;
use ironlog_core::models::WorkoutSnapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Volume metrics for a single workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeMetrics {
    /// Sum of weight times reps
    pub total_volume: f64,
    /// Sum of reps
    pub total_reps: u32,
    /// Number of sets
    pub total_sets: usize,
    /// Mean set weight, rounded to 0.1 kg
    pub avg_intensity: f64,
    /// Heaviest set
    pub max_weight: f64,
    /// Total volume in metric tonnes
    pub tonnage: f64,
}

/// Volume trend classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeTrend {
    /// Volume grew by more than the increasing threshold
    Increasing,
    /// Volume grew, but by less than the increasing threshold
    StablePositive,
    /// Volume is roughly flat
    Stable,
    /// Volume fell by at least the declining threshold
    Declining,
    /// Fewer than two workouts in the window
    InsufficientData,
    /// Baseline volume was zero
    NoVolume,
}

impl VolumeTrend {
    /// Readiness contribution for this trend
    #[must_use]
    pub const fn readiness_score(self) -> f64 {
        match self {
            Self::Increasing => READINESS_INCREASING,
            Self::StablePositive => READINESS_STABLE_POSITIVE,
            Self::Stable => READINESS_STABLE,
            Self::Declining => READINESS_DECLINING,
            Self::InsufficientData => READINESS_INSUFFICIENT,
            Self::NoVolume => READINESS_NO_VOLUME,
        }
    }

    const fn recommendation(self) -> &'static str {
        match self {
            Self::Increasing => "Volume is climbing - you are handling more work, keep progressing",
            Self::StablePositive => "Volume is edging up - keep building",
            Self::Stable => "Volume is holding steady - progression can continue at the current pace",
            Self::Declining => "Volume is dropping - check recovery before adding load",
            Self::InsufficientData => "Not enough workouts in the window to judge volume",
            Self::NoVolume => "No recorded volume in the baseline period",
        }
    }
}

/// One workout in a volume trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeDataPoint {
    /// Workout date
    pub date: NaiveDate,
    /// Sum of weight times reps
    pub volume: f64,
    /// Mean set weight
    pub intensity: f64,
}

/// Volume trend analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeTrendAnalysis {
    /// Trend classification
    pub trend: VolumeTrend,
    /// Readiness contribution (0-1)
    pub readiness_score: f64,
    /// Second-half mean volume versus first-half, in percent
    pub volume_change_percent: f64,
    /// Second-half mean intensity versus first-half, in percent
    pub intensity_change_percent: f64,
    /// Workouts in the window, oldest first
    pub data_points: Vec<VolumeDataPoint>,
    /// Human-readable summary
    pub recommendation: String,
}

/// Direction of the average working weight from the first to the last workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseTrend {
    /// Average weight rose by more than 5%
    Improving,
    /// Average weight fell by more than 5%
    Declining,
    /// Average weight within 5%
    Stable,
    /// Fewer than two workouts with sets
    InsufficientData,
}

/// Summary statistics across workouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Workouts with at least one set
    pub workout_count: usize,
    /// Sets across all workouts
    pub total_sets: usize,
    /// Heaviest set
    pub max_weight: f64,
    /// Mean set weight
    pub avg_weight: f64,
    /// Most reps in a set
    pub max_reps: u32,
    /// Mean reps per set
    pub avg_reps: f64,
    /// First-to-last weight trend
    pub trend: ExerciseTrend,
    /// First-to-last change in average weight, in percent
    pub weight_change_percent: Option<f64>,
}

/// Volume trend analyzer
pub struct VolumeTrendAnalyzer;

impl VolumeTrendAnalyzer {
    /// Volume metrics for one workout
    #[must_use]
    pub fn workout_volume(workout: &WorkoutSnapshot) -> VolumeMetrics {
        let total_volume = workout.total_volume();
        VolumeMetrics {
            total_volume,
            total_reps: workout.total_reps(),
            total_sets: workout.set_count(),
            avg_intensity: workout.average_weight().map_or(0.0, statistics::round1),
            max_weight: workout
                .sets
                .iter()
                .map(|set| set.weight)
                .fold(0.0, f64::max),
            tonnage: total_volume / 1000.0,
        }
    }

    /// Compare mean volume in the second half of the window with the first
    ///
    /// Only workouts dated within `window_days` before `as_of` (inclusive)
    /// are considered.
    ///
    /// # Errors
    ///
    /// Returns an error if a workout violates the data model
    pub fn analyze_volume_trend(
        workouts: &[WorkoutSnapshot],
        window_days: u32,
        as_of: NaiveDate,
        config: &VolumeTrackingConfig,
    ) -> EngineResult<VolumeTrendAnalysis> {
        for workout in workouts {
            workout.validate()?;
        }

        let window_start = as_of - Duration::days(i64::from(window_days));
        let mut data_points: Vec<VolumeDataPoint> = workouts
            .iter()
            .filter(|workout| workout.date >= window_start && workout.date <= as_of)
            .map(|workout| VolumeDataPoint {
                date: workout.date,
                volume: workout.total_volume(),
                intensity: workout.average_weight().unwrap_or(0.0),
            })
            .collect();
        data_points.sort_by_key(|point| point.date);

        if data_points.len() < 2 {
            return Ok(Self::trend_result(
                VolumeTrend::InsufficientData,
                0.0,
                0.0,
                data_points,
            ));
        }

        let split = data_points.len() / 2;
        let (first, second) = data_points.split_at(split);
        let half_mean = |points: &[VolumeDataPoint], f: fn(&VolumeDataPoint) -> f64| {
            let values: Vec<f64> = points.iter().map(f).collect();
            statistics::mean(&values).unwrap_or(0.0)
        };
        let first_volume = half_mean(first, |p| p.volume);
        let second_volume = half_mean(second, |p| p.volume);
        let intensity_change =
            statistics::percent_change(half_mean(first, |p| p.intensity), half_mean(second, |p| p.intensity))
                .unwrap_or(0.0);

        let Some(volume_change) = statistics::percent_change(first_volume, second_volume) else {
            return Ok(Self::trend_result(
                VolumeTrend::NoVolume,
                0.0,
                intensity_change,
                data_points,
            ));
        };

        let trend = if volume_change > config.increasing_threshold_percent {
            VolumeTrend::Increasing
        } else if volume_change > 0.0 {
            VolumeTrend::StablePositive
        } else if volume_change > config.declining_threshold_percent {
            VolumeTrend::Stable
        } else {
            VolumeTrend::Declining
        };

        debug!(
            ?trend,
            volume_change_percent = volume_change,
            data_points = data_points.len(),
            "Analyzed volume trend"
        );

        Ok(Self::trend_result(
            trend,
            volume_change,
            intensity_change,
            data_points,
        ))
    }

    /// First-to-last trend of the average set weight
    #[must_use]
    pub fn exercise_trend(workouts: &[WorkoutSnapshot]) -> (ExerciseTrend, Option<f64>) {
        let mut dated: Vec<(NaiveDate, f64)> = workouts
            .iter()
            .filter_map(|workout| workout.average_weight().map(|avg| (workout.date, avg)))
            .collect();
        if dated.len() < 2 {
            return (ExerciseTrend::InsufficientData, None);
        }
        dated.sort_by_key(|(date, _)| *date);

        let first = dated[0].1;
        let last = dated[dated.len() - 1].1;
        let Some(change) = statistics::percent_change(first, last) else {
            return (ExerciseTrend::InsufficientData, None);
        };

        let trend = if change > EXERCISE_TREND_THRESHOLD_PERCENT {
            ExerciseTrend::Improving
        } else if change < -EXERCISE_TREND_THRESHOLD_PERCENT {
            ExerciseTrend::Declining
        } else {
            ExerciseTrend::Stable
        };
        (trend, Some(statistics::round1(change)))
    }

    /// Summary statistics over every set in the history
    #[must_use]
    pub fn performance_stats(workouts: &[WorkoutSnapshot]) -> PerformanceStats {
        let sets: Vec<_> = workouts.iter().flat_map(|workout| &workout.sets).collect();
        let weights: Vec<f64> = sets.iter().map(|set| set.weight).collect();
        let reps: Vec<f64> = sets.iter().map(|set| f64::from(set.reps)).collect();
        let (trend, weight_change_percent) = Self::exercise_trend(workouts);

        PerformanceStats {
            workout_count: workouts.iter().filter(|w| !w.sets.is_empty()).count(),
            total_sets: sets.len(),
            max_weight: weights.iter().copied().fold(0.0, f64::max),
            avg_weight: statistics::mean(&weights).map_or(0.0, statistics::round1),
            max_reps: sets.iter().map(|set| set.reps).max().unwrap_or(0),
            avg_reps: statistics::mean(&reps).map_or(0.0, statistics::round1),
            trend,
            weight_change_percent,
        }
    }

    // === Helper Functions ===

    fn trend_result(
        trend: VolumeTrend,
        volume_change: f64,
        intensity_change: f64,
        data_points: Vec<VolumeDataPoint>,
    ) -> VolumeTrendAnalysis {
        VolumeTrendAnalysis {
            trend,
            readiness_score: trend.readiness_score(),
            volume_change_percent: statistics::round1(volume_change),
            intensity_change_percent: statistics::round1(intensity_change),
            data_points,
            recommendation: trend.recommendation().to_owned(),
        }
    }
}
