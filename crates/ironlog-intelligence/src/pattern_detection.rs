// ABOUTME: Classifies the set-to-set weight scheme of recent workouts for one exercise
// ABOUTME: Detects straight, ascending, descending, pyramid, wave, and cluster patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::statistics;
use ironlog_core::config::PatternDetectionConfig;
use ironlog_core::constants::progression::pattern::SET_COUNT_VARIATION_LIMIT;
use ironlog_core::errors::EngineResult;
use ironlog_core::models::WorkoutSnapshot;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

/// Recommendation used when there is not enough history to classify
const INSUFFICIENT_DATA: &str = "insufficient data";

/// Shape of the weights across the sets of a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// Weights climb from set to set
    Ascending,
    /// Weights drop from set to set
    Descending,
    /// All sets at (about) the same weight
    Straight,
    /// Weights climb to one peak and come back down
    Pyramid,
    /// Weights drop to one trough and climb back up
    ReversePyramid,
    /// Alternating heavy and light sets
    Wave,
    /// Blocks of consecutive sets at the same weight
    Cluster,
    /// No recognizable shape
    Mixed,
    /// Not enough data to classify
    Unknown,
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Straight => "straight",
            Self::Pyramid => "pyramid",
            Self::ReversePyramid => "reverse_pyramid",
            Self::Wave => "wave",
            Self::Cluster => "cluster",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Direction of the average working weight across the sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Average weight rose by more than the threshold
    Increasing,
    /// Average weight fell by more than the threshold
    Decreasing,
    /// Average weight moved less than the threshold
    Stable,
    /// Fewer than two usable workouts
    Unknown,
}

/// Set-count regularity across the sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetCountConsistency {
    /// Most common set count
    pub typical_sets: usize,
    /// Sample standard deviation of set counts
    pub variation: f64,
    /// Whether the variation is below one set
    pub consistent: bool,
    /// Set counts in chronological order
    pub set_count_history: Vec<usize>,
}

/// Supporting detail for a pattern analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDetails {
    /// Number of classified workouts per pattern
    pub distribution: BTreeMap<PatternType, usize>,
    /// Workouts with at least two sets
    pub classified_workouts: usize,
    /// Workouts skipped for having fewer than two sets
    pub excluded_workouts: usize,
    /// Set-count regularity
    pub set_consistency: SetCountConsistency,
}

/// Pattern analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    /// Dominant pattern
    pub pattern: PatternType,
    /// Share of classified workouts showing the dominant pattern (0-1)
    pub confidence: f64,
    /// Workouts in the sample, including excluded ones
    pub sample_size: usize,
    /// Share of all sampled workouts showing the dominant pattern (0-1)
    pub consistency_score: f64,
    /// Average weight direction across the sample
    pub trend_direction: TrendDirection,
    /// Coaching recommendation for the pattern
    pub recommendation: String,
    /// Supporting detail
    pub details: PatternDetails,
}

/// Pattern detection engine
pub struct PatternDetector;

impl PatternDetector {
    /// Detect the dominant set pattern in the most recent workouts
    ///
    /// Workouts may be passed in any order; the most recent
    /// `config.sample_size` are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a workout violates the data model (for example a
    /// non-positive weight or a duplicate set number)
    pub fn detect_pattern(
        workouts: &[WorkoutSnapshot],
        config: &PatternDetectionConfig,
    ) -> EngineResult<PatternAnalysis> {
        for workout in workouts {
            workout.validate()?;
        }

        let sample = Self::recent_sample(workouts, config.effective_sample_size());
        let set_consistency = Self::analyze_set_consistency(&sample);

        if sample.len() < config.min_workouts_for_analysis {
            debug!(
                sample_size = sample.len(),
                required = config.min_workouts_for_analysis,
                "Not enough workouts to classify pattern"
            );
            return Ok(Self::unknown_pattern(sample.len(), 0, set_consistency));
        }

        let classified: Vec<PatternType> = sample
            .iter()
            .filter_map(|workout| Self::classify_workout(workout, config))
            .collect();
        let excluded = sample.len() - classified.len();

        let Some(dominant) = Self::dominant_pattern(&classified) else {
            return Ok(Self::unknown_pattern(sample.len(), excluded, set_consistency));
        };

        let mut distribution = BTreeMap::new();
        for pattern in &classified {
            *distribution.entry(*pattern).or_insert(0) += 1;
        }
        let dominant_count = distribution.get(&dominant).copied().unwrap_or(0);

        let confidence = dominant_count as f64 / classified.len() as f64;
        let consistency_score = Self::consistency_score(&sample, dominant, config);
        let trend_direction = Self::trend_direction(&sample, config.trend_direction_threshold);
        let recommendation = Self::recommendation(dominant, confidence, config);

        debug!(
            pattern = %dominant,
            confidence,
            consistency_score,
            sample_size = sample.len(),
            "Detected set pattern"
        );

        Ok(PatternAnalysis {
            pattern: dominant,
            confidence,
            sample_size: sample.len(),
            consistency_score,
            trend_direction,
            recommendation,
            details: PatternDetails {
                distribution,
                classified_workouts: classified.len(),
                excluded_workouts: excluded,
                set_consistency,
            },
        })
    }

    /// Classify one workout; `None` when it has fewer than two sets
    #[must_use]
    pub fn classify_workout(
        workout: &WorkoutSnapshot,
        config: &PatternDetectionConfig,
    ) -> Option<PatternType> {
        Self::classify_weights(
            &workout.weights(),
            config.weight_change_threshold,
            config.cluster_min_score,
        )
    }

    /// Classify a sequence of set weights
    ///
    /// Checks run in order: ascending, descending, straight, pyramid, reverse
    /// pyramid, wave, cluster; anything else is mixed.
    #[must_use]
    pub fn classify_weights(
        weights: &[f64],
        threshold: f64,
        cluster_min_score: f64,
    ) -> Option<PatternType> {
        if weights.len() < 2 {
            return None;
        }
        let diffs: Vec<f64> = weights.windows(2).map(|pair| pair[1] - pair[0]).collect();

        let pattern = if diffs.iter().all(|d| *d >= 0.0) && diffs.iter().any(|d| *d > threshold) {
            PatternType::Ascending
        } else if diffs.iter().all(|d| *d <= 0.0) && diffs.iter().any(|d| *d < -threshold) {
            PatternType::Descending
        } else if diffs.iter().all(|d| d.abs() <= threshold) {
            PatternType::Straight
        } else if Self::is_pyramid(weights) {
            PatternType::Pyramid
        } else if Self::is_reverse_pyramid(weights) {
            PatternType::ReversePyramid
        } else if Self::is_wave(weights) {
            PatternType::Wave
        } else if Self::cluster_score(weights, threshold) >= cluster_min_score {
            PatternType::Cluster
        } else {
            PatternType::Mixed
        };
        Some(pattern)
    }

    /// Analyze how regular the number of sets is across workouts
    #[must_use]
    pub fn analyze_set_consistency<W: Borrow<WorkoutSnapshot>>(
        workouts: &[W],
    ) -> SetCountConsistency {
        let set_count_history: Vec<usize> = workouts
            .iter()
            .map(|workout| workout.borrow().set_count())
            .collect();
        if set_count_history.is_empty() {
            return SetCountConsistency {
                typical_sets: 0,
                variation: 0.0,
                consistent: false,
                set_count_history,
            };
        }

        let mut counts: HashMap<usize, usize> = HashMap::new();
        for count in &set_count_history {
            *counts.entry(*count).or_insert(0) += 1;
        }
        // Ties go to the larger set count
        let typical_sets = counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(b.0)))
            .map_or(0, |(sets, _)| *sets);

        let as_f64: Vec<f64> = set_count_history.iter().map(|c| *c as f64).collect();
        let variation = statistics::sample_std_dev(&as_f64);

        SetCountConsistency {
            typical_sets,
            variation,
            consistent: variation < SET_COUNT_VARIATION_LIMIT,
            set_count_history,
        }
    }

    // === Helper Functions ===

    /// Most recent `size` workouts in chronological order
    fn recent_sample(workouts: &[WorkoutSnapshot], size: usize) -> Vec<&WorkoutSnapshot> {
        let mut sorted: Vec<&WorkoutSnapshot> = workouts.iter().collect();
        sorted.sort_by_key(|workout| workout.date);
        let skip = sorted.len().saturating_sub(size);
        sorted.into_iter().skip(skip).collect()
    }

    /// Mode of the classifications; ties go to the pattern seen most recently
    fn dominant_pattern(classified: &[PatternType]) -> Option<PatternType> {
        let mut tally: HashMap<PatternType, (usize, usize)> = HashMap::new();
        for (position, pattern) in classified.iter().enumerate() {
            let entry = tally.entry(*pattern).or_insert((0, 0));
            entry.0 += 1;
            entry.1 = position;
        }
        tally
            .into_iter()
            .max_by(|a, b| (a.1).0.cmp(&(b.1).0).then((a.1).1.cmp(&(b.1).1)))
            .map(|(pattern, _)| pattern)
    }

    fn consistency_score(
        sample: &[&WorkoutSnapshot],
        dominant: PatternType,
        config: &PatternDetectionConfig,
    ) -> f64 {
        if sample.is_empty() {
            return 0.0;
        }
        let matching = sample
            .iter()
            .filter(|workout| Self::classify_workout(workout, config) == Some(dominant))
            .count();
        matching as f64 / sample.len() as f64
    }

    fn trend_direction(sample: &[&WorkoutSnapshot], threshold: f64) -> TrendDirection {
        let averages: Vec<f64> = sample
            .iter()
            .filter_map(|workout| workout.average_weight())
            .collect();
        if averages.len() < 2 {
            return TrendDirection::Unknown;
        }
        let (first, second) = averages.split_at(averages.len() / 2);
        let (Some(first_avg), Some(second_avg)) =
            (statistics::mean(first), statistics::mean(second))
        else {
            return TrendDirection::Unknown;
        };
        if first_avg <= 0.0 {
            return TrendDirection::Unknown;
        }

        let change = (second_avg - first_avg) / first_avg;
        if change > threshold {
            TrendDirection::Increasing
        } else if change < -threshold {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }

    fn is_pyramid(weights: &[f64]) -> bool {
        weights.len() >= 3
            && Self::peak_index(weights, |a, b| a > b).is_some_and(|peak| {
                peak > 0
                    && peak < weights.len() - 1
                    && weights[..=peak].windows(2).all(|w| w[0] < w[1])
                    && weights[peak..].windows(2).all(|w| w[0] > w[1])
            })
    }

    fn is_reverse_pyramid(weights: &[f64]) -> bool {
        weights.len() >= 3
            && Self::peak_index(weights, |a, b| a < b).is_some_and(|trough| {
                trough > 0
                    && trough < weights.len() - 1
                    && weights[..=trough].windows(2).all(|w| w[0] > w[1])
                    && weights[trough..].windows(2).all(|w| w[0] < w[1])
            })
    }

    /// Index of the first element that no later element beats under `better`
    fn peak_index(weights: &[f64], better: impl Fn(f64, f64) -> bool) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, weight) in weights.iter().enumerate() {
            match best {
                Some(current) if !better(*weight, weights[current]) => {}
                _ => best = Some(index),
            }
        }
        best
    }

    fn is_wave(weights: &[f64]) -> bool {
        if weights.len() < 4 {
            return false;
        }
        let interior = weights.len() - 2;
        let extrema = weights
            .windows(3)
            .filter(|w| (w[1] > w[0] && w[1] > w[2]) || (w[1] < w[0] && w[1] < w[2]))
            .count();
        extrema * 2 > interior
    }

    /// Runs of two or more consecutive sets within the threshold, per set
    fn cluster_score(weights: &[f64], threshold: f64) -> f64 {
        let mut runs = 0_usize;
        let mut in_run = false;
        for pair in weights.windows(2) {
            if (pair[1] - pair[0]).abs() <= threshold {
                if !in_run {
                    runs += 1;
                    in_run = true;
                }
            } else {
                in_run = false;
            }
        }
        if runs == 0 {
            0.0
        } else {
            runs as f64 / weights.len() as f64
        }
    }

    fn recommendation(
        pattern: PatternType,
        confidence: f64,
        config: &PatternDetectionConfig,
    ) -> String {
        if confidence < config.confidence_threshold {
            return "Pattern varies between workouts - keep one set scheme so progress is easier to track"
                .to_owned();
        }
        match pattern {
            PatternType::Ascending => {
                "Ascending sets - progress the top set first, then bring the ramp-up sets along"
            }
            PatternType::Descending => {
                "Descending sets - add weight to the first set once every set reaches the rep target"
            }
            PatternType::Straight => {
                "Straight sets - increase every set together once all sets hit the rep target"
            }
            PatternType::Pyramid => {
                "Pyramid - progress the peak set and treat the lighter sets as build-up and back-off work"
            }
            PatternType::ReversePyramid => {
                "Reverse pyramid - progress the opening and closing heavy sets together"
            }
            PatternType::Wave => "Wave loading - progress the heavy waves before the light ones",
            PatternType::Cluster => "Cluster sets - progress each block of same-weight sets as a unit",
            PatternType::Mixed => {
                "No consistent set shape - settle on one scheme to make progression measurable"
            }
            PatternType::Unknown => INSUFFICIENT_DATA,
        }
        .to_owned()
    }

    // === Empty Pattern Functions ===

    fn unknown_pattern(
        sample_size: usize,
        excluded: usize,
        set_consistency: SetCountConsistency,
    ) -> PatternAnalysis {
        PatternAnalysis {
            pattern: PatternType::Unknown,
            confidence: 0.0,
            sample_size,
            consistency_score: 0.0,
            trend_direction: TrendDirection::Unknown,
            recommendation: INSUFFICIENT_DATA.to_owned(),
            details: PatternDetails {
                distribution: BTreeMap::new(),
                classified_workouts: 0,
                excluded_workouts: excluded,
                set_consistency,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 2.5;
    const CLUSTER: f64 = 0.25;

    fn classify(weights: &[f64]) -> Option<PatternType> {
        PatternDetector::classify_weights(weights, THRESHOLD, CLUSTER)
    }

    #[test]
    fn test_shapes() {
        assert_eq!(classify(&[40.0, 50.0, 60.0]), Some(PatternType::Ascending));
        assert_eq!(classify(&[60.0, 55.0, 50.0]), Some(PatternType::Descending));
        assert_eq!(classify(&[50.0, 51.0, 50.0]), Some(PatternType::Straight));
        assert_eq!(classify(&[40.0, 60.0, 45.0]), Some(PatternType::Pyramid));
        assert_eq!(classify(&[60.0, 40.0, 55.0]), Some(PatternType::ReversePyramid));
        assert_eq!(
            classify(&[50.0, 60.0, 50.0, 60.0, 50.0]),
            Some(PatternType::Wave)
        );
        assert_eq!(classify(&[60.0, 50.0, 50.0, 60.0]), Some(PatternType::Cluster));
        assert_eq!(classify(&[50.0]), None);
    }

    #[test]
    fn test_ascending_needs_a_meaningful_step() {
        // Flat with a tiny bump stays straight
        assert_eq!(classify(&[50.0, 50.0, 52.0]), Some(PatternType::Straight));
    }

    #[test]
    fn test_plateaued_peak_is_not_a_pyramid() {
        assert!(!PatternDetector::is_pyramid(&[40.0, 60.0, 60.0, 40.0]));
    }

    #[test]
    fn test_dominant_tie_prefers_most_recent() {
        let classified = [
            PatternType::Straight,
            PatternType::Ascending,
            PatternType::Straight,
            PatternType::Ascending,
        ];
        assert_eq!(
            PatternDetector::dominant_pattern(&classified),
            Some(PatternType::Ascending)
        );
    }
}
