// ABOUTME: Readiness scoring from rep achievement, consistency, recovery, volume, and form
// ABOUTME: Also analyzes a single set's history to pick the next weight and rep target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Readiness Scoring
//!
//! Five independent signals are scored between 0 and 1 and combined with
//! configurable weights:
//!
//! - **Rep achievement**: how close recent sets came to the top of the rep range
//! - **Consistency**: whether workouts are spaced 2-4 days apart
//! - **Time factor**: whether 1-2 weeks have passed since the last progression
//! - **Volume trend**: the `VolumeTrendAnalyzer` readiness contribution
//! - **Form quality**: self-rated form, only when sets carry ratings
//!
//! Per-set analysis looks at one set's recent performances and decides between
//! adding weight, adding reps, or rebuilding reps after a recent jump.

use crate::statistics;
use crate::volume_analysis::VolumeTrendAnalyzer;
use crate::weight_calculator::WeightIncrementCalculator;
use chrono::NaiveDate;
use ironlog_core::config::{ProgressionConfig, ReadinessConfig};
use ironlog_core::constants::progression::readiness::{
    CONFIDENCE_ALMOST_READY, CONFIDENCE_BUILD_REPS, CONFIDENCE_BUILD_STRENGTH,
    CONFIDENCE_INCREASE_REPS, CONFIDENCE_PROGRESSED_READY, CONFIDENCE_READY, MAX_FORM_QUALITY,
    NEUTRAL_CONSISTENCY, NO_PRIOR_PROGRESSION_TIME_FACTOR,
};
use ironlog_core::errors::EngineResult;
use ironlog_core::models::{BodyRegion, ExerciseProfile, SetRecord, UserPreferences, WorkoutSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tolerance when matching set weights
const WEIGHT_EPSILON: f64 = 1e-9;

/// Qualitative readiness band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    /// Ready to add weight
    Ready,
    /// One or two workouts away
    Close,
    /// Still building at the current load
    Building,
    /// Struggling; a deload or technique block may help
    NeedsDeload,
}

impl ReadinessLevel {
    /// Band for an overall readiness value
    #[must_use]
    pub fn from_score(score: f64, config: &ReadinessConfig) -> Self {
        if score >= config.ready_threshold {
            Self::Ready
        } else if score >= config.close_threshold {
            Self::Close
        } else if score >= config.building_threshold {
            Self::Building
        } else {
            Self::NeedsDeload
        }
    }

    /// Coaching advice for the band
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Ready => "Ready to progress - consider increasing weight",
            Self::Close => "Close to ready - maintain consistency for 1-2 more workouts",
            Self::Building => "Building strength - focus on form and consistent training",
            Self::NeedsDeload => "Consider a deload or technique work before progressing",
        }
    }
}

/// Readiness sub-scores and their weighted combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessFactors {
    /// Reps achieved relative to the top of the rep range (0-1)
    pub rep_achievement_score: f64,
    /// Regularity of training gaps (0-1)
    pub consistency_score: f64,
    /// Time since the last progression (0-1)
    pub time_factor_score: f64,
    /// Volume trend contribution (0-1)
    pub volume_trend_score: f64,
    /// Mean self-rated form (0-1), 0 when no ratings exist
    pub form_quality_score: f64,
    /// Whether any set carried a form rating
    pub form_data_present: bool,
    /// Weighted combination (0-1)
    pub overall_readiness: f64,
    /// Qualitative band
    pub level: ReadinessLevel,
    /// Coaching advice
    pub recommendation: String,
}

/// Outcome of a per-set progression analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetSuggestion {
    /// Move to the next practical weight
    IncreaseWeight,
    /// Stay at the new weight and add a rep
    BuildStrength,
    /// Stay at the new weight and climb back to the rep floor
    BuildReps,
    /// One rep short of the top of the range
    AlmostReady,
    /// Keep adding reps at the current weight
    IncreaseReps,
    /// No history for this set yet
    NeedMoreHistory,
}

/// Per-set progression analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetProgressionAnalysis {
    /// Whether the set is ready for more weight
    pub ready: bool,
    /// Confidence in the suggestion (0-1)
    pub confidence: f64,
    /// What to do next
    pub suggestion: SetSuggestion,
    /// Most recent weight
    pub current_weight: Option<f64>,
    /// Most recent reps
    pub current_reps: Option<u32>,
    /// Weight for the next session
    pub suggested_weight: Option<f64>,
    /// Reps for the next session
    pub suggested_reps: u32,
    /// Reps still needed before the next step
    pub reps_to_go: Option<u32>,
    /// Rep target the suggestion is working toward
    pub target_reps: Option<u32>,
}

/// Readiness scoring engine
pub struct ReadinessScorer;

impl ReadinessScorer {
    /// Score readiness to progress for one exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences or a workout violate the data model
    pub fn score_readiness(
        workouts: &[WorkoutSnapshot],
        last_progression_date: Option<NaiveDate>,
        exercise: Option<&ExerciseProfile>,
        prefs: &UserPreferences,
        as_of: NaiveDate,
        config: &ProgressionConfig,
    ) -> EngineResult<ReadinessFactors> {
        prefs.validate()?;
        for workout in workouts {
            workout.validate()?;
        }
        let readiness = &config.readiness;

        let mut chronological: Vec<&WorkoutSnapshot> = workouts.iter().collect();
        chronological.sort_by_key(|workout| workout.date);

        let recent_with_sets: Vec<&WorkoutSnapshot> = chronological
            .iter()
            .rev()
            .filter(|workout| !workout.sets.is_empty())
            .take(readiness.rep_achievement_workouts)
            .copied()
            .collect();

        let rep_achievement_score =
            Self::rep_achievement_score(&recent_with_sets, prefs.max_reps_target);
        let consistency_start = chronological
            .len()
            .saturating_sub(readiness.consistency_workouts);
        let consistency_score = Self::consistency_score(&chronological[consistency_start..]);
        let time_factor_score = Self::time_factor_score(last_progression_date, as_of);
        let volume_trend_score = VolumeTrendAnalyzer::analyze_volume_trend(
            workouts,
            config.volume_tracking.window_days,
            as_of,
            &config.volume_tracking,
        )?
        .readiness_score;
        let form_quality = Self::form_quality_score(&recent_with_sets);

        let (weights, form_quality_score) = match form_quality {
            Some(score) => (readiness.weights_with_form, score),
            None => (readiness.weights_without_form, 0.0),
        };
        let overall_readiness = statistics::unit(
            weights.rep_achievement * rep_achievement_score
                + weights.consistency * consistency_score
                + weights.time_factor * time_factor_score
                + weights.volume_trend * volume_trend_score
                + weights.form_quality * form_quality_score,
        );
        let level = ReadinessLevel::from_score(overall_readiness, readiness);

        debug!(
            exercise = exercise.map(|e| e.name.as_str()),
            overall_readiness,
            rep_achievement_score,
            consistency_score,
            time_factor_score,
            volume_trend_score,
            ?level,
            "Scored readiness"
        );

        Ok(ReadinessFactors {
            rep_achievement_score,
            consistency_score,
            time_factor_score,
            volume_trend_score,
            form_quality_score,
            form_data_present: form_quality.is_some(),
            overall_readiness,
            level,
            recommendation: level.recommendation().to_owned(),
        })
    }

    /// Analyze one set's history, most recent performance first
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences or a set violate the data model
    pub fn analyze_set_progression(
        set_history: &[SetRecord],
        prefs: &UserPreferences,
        exercise: Option<&ExerciseProfile>,
        config: &ReadinessConfig,
    ) -> EngineResult<SetProgressionAnalysis> {
        prefs.validate()?;
        for set in set_history {
            set.validate()?;
        }
        let history = &set_history[..set_history.len().min(config.set_history_limit)];

        match history {
            [] => Ok(SetProgressionAnalysis {
                ready: false,
                confidence: 0.0,
                suggestion: SetSuggestion::NeedMoreHistory,
                current_weight: None,
                current_reps: None,
                suggested_weight: None,
                suggested_reps: prefs.min_reps_target,
                reps_to_go: None,
                target_reps: None,
            }),
            [only] => Ok(SetProgressionAnalysis {
                ready: false,
                confidence: 0.0,
                suggestion: SetSuggestion::BuildStrength,
                current_weight: Some(only.weight),
                current_reps: Some(only.reps),
                suggested_weight: Some(only.weight),
                suggested_reps: only.reps.saturating_add(1),
                reps_to_go: Some(prefs.max_reps_target.saturating_sub(only.reps).max(1)),
                target_reps: Some(prefs.max_reps_target),
            }),
            _ => Ok(Self::analyze_full_history(history, prefs, exercise, config)),
        }
    }

    // === Helper Functions ===

    fn rep_achievement_score(recent: &[&WorkoutSnapshot], target_reps: u32) -> f64 {
        let ratios: Vec<f64> = recent
            .iter()
            .filter(|workout| !workout.sets.is_empty())
            .map(|workout| {
                let possible = f64::from(target_reps) * workout.set_count() as f64;
                if possible > 0.0 {
                    (f64::from(workout.total_reps()) / possible).min(1.0)
                } else {
                    0.0
                }
            })
            .collect();
        statistics::mean(&ratios).map_or(0.0, statistics::unit)
    }

    fn consistency_score(chronological: &[&WorkoutSnapshot]) -> f64 {
        if chronological.len() < 2 {
            return NEUTRAL_CONSISTENCY;
        }
        let gap_scores: Vec<f64> = chronological
            .windows(2)
            .map(|pair| match (pair[1].date - pair[0].date).num_days() {
                2..=4 => 1.0,
                1 | 5 | 6 => 0.7,
                _ => 0.3,
            })
            .collect();
        statistics::mean(&gap_scores).map_or(NEUTRAL_CONSISTENCY, statistics::unit)
    }

    fn time_factor_score(last_progression_date: Option<NaiveDate>, as_of: NaiveDate) -> f64 {
        let Some(last) = last_progression_date else {
            return NO_PRIOR_PROGRESSION_TIME_FACTOR;
        };
        match (as_of - last).num_days().max(0) {
            7..=14 => 1.0,
            3..=6 | 15..=21 => 0.8,
            0..=2 | 22..=28 => 0.6,
            _ => 0.4,
        }
    }

    /// Mean form rating scaled to 0-1, `None` when no set is rated
    fn form_quality_score(recent: &[&WorkoutSnapshot]) -> Option<f64> {
        let ratings: Vec<f64> = recent
            .iter()
            .flat_map(|workout| &workout.sets)
            .filter_map(|set| set.form_quality)
            .map(|rating| f64::from(rating) / MAX_FORM_QUALITY)
            .collect();
        statistics::mean(&ratings).map(statistics::unit)
    }

    fn analyze_full_history(
        history: &[SetRecord],
        prefs: &UserPreferences,
        exercise: Option<&ExerciseProfile>,
        config: &ReadinessConfig,
    ) -> SetProgressionAnalysis {
        let (min_reps, max_reps) = (prefs.min_reps_target, prefs.max_reps_target);
        let current = &history[0];
        let (current_weight, current_reps) = (current.weight, current.reps);
        let best_at_current = Self::best_reps_at_weight(history, current_weight);

        let is_upper_body =
            WeightIncrementCalculator::classify_body_region(exercise) == BodyRegion::Upper;
        let equipment = WeightIncrementCalculator::classify_equipment(exercise);
        let increment = WeightIncrementCalculator::smart_increment(
            exercise,
            current_weight,
            is_upper_body,
            prefs,
        );
        let next_weight =
            WeightIncrementCalculator::round_practical(current_weight + increment, equipment);
        let best_at_next = Self::best_reps_at_weight(history, next_weight);

        let base = SetProgressionAnalysis {
            ready: false,
            confidence: 0.0,
            suggestion: SetSuggestion::IncreaseReps,
            current_weight: Some(current_weight),
            current_reps: Some(current_reps),
            suggested_weight: Some(current_weight),
            suggested_reps: current_reps.saturating_add(1),
            reps_to_go: None,
            target_reps: Some(max_reps),
        };

        if Self::recently_progressed(history, config.recent_progression_lookback) {
            return if current_reps >= max_reps {
                let reps = WeightIncrementCalculator::volume_based_reps(
                    current_weight,
                    current_reps,
                    next_weight,
                    min_reps,
                );
                SetProgressionAnalysis {
                    ready: true,
                    confidence: CONFIDENCE_PROGRESSED_READY,
                    suggestion: SetSuggestion::IncreaseWeight,
                    suggested_weight: Some(next_weight),
                    suggested_reps: reps.max(best_at_next),
                    reps_to_go: Some(0),
                    ..base
                }
            } else if current_reps >= min_reps {
                SetProgressionAnalysis {
                    confidence: CONFIDENCE_BUILD_STRENGTH,
                    suggestion: SetSuggestion::BuildStrength,
                    suggested_reps: current_reps.saturating_add(1).max(best_at_current),
                    reps_to_go: Some(max_reps.saturating_sub(current_reps).max(1)),
                    ..base
                }
            } else {
                SetProgressionAnalysis {
                    confidence: CONFIDENCE_BUILD_REPS,
                    suggestion: SetSuggestion::BuildReps,
                    suggested_reps: current_reps
                        .saturating_add(1)
                        .max(best_at_current)
                        .max(min_reps),
                    reps_to_go: Some(min_reps.saturating_sub(current_reps).max(1)),
                    target_reps: Some(min_reps),
                    ..base
                }
            };
        }

        let previous_reps = history[1].reps;
        if current_reps >= max_reps && previous_reps >= max_reps {
            let best_recent = current_reps.max(previous_reps);
            let reps = WeightIncrementCalculator::volume_based_reps(
                current_weight,
                best_recent,
                next_weight,
                min_reps,
            );
            return SetProgressionAnalysis {
                ready: true,
                confidence: CONFIDENCE_READY,
                suggestion: SetSuggestion::IncreaseWeight,
                suggested_weight: Some(next_weight),
                suggested_reps: reps.max(best_at_next),
                reps_to_go: Some(0),
                ..base
            };
        }

        let average = (f64::from(current_reps) + f64::from(previous_reps)) / 2.0;
        let next_reps = (average.floor() as u32).saturating_add(1).max(best_at_current);
        let gap = (f64::from(max_reps) - average).max(0.0).trunc() as u32;

        if average >= f64::from(max_reps) - 1.0 {
            SetProgressionAnalysis {
                confidence: CONFIDENCE_ALMOST_READY,
                suggestion: SetSuggestion::AlmostReady,
                suggested_reps: next_reps,
                reps_to_go: Some(gap.max(1)),
                ..base
            }
        } else {
            SetProgressionAnalysis {
                confidence: CONFIDENCE_INCREASE_REPS,
                suggestion: SetSuggestion::IncreaseReps,
                suggested_reps: next_reps,
                reps_to_go: Some(gap),
                ..base
            }
        }
    }

    /// Whether the current weight is heavier than a recent or the oldest entry
    fn recently_progressed(history: &[SetRecord], lookback: usize) -> bool {
        let Some(current) = history.first() else {
            return false;
        };
        let end = history.len().min(lookback.max(1));
        let lighter_recently = history[1..end]
            .iter()
            .any(|set| set.weight < current.weight - WEIGHT_EPSILON);
        let lighter_oldest = history.len() >= 3
            && history
                .last()
                .is_some_and(|oldest| oldest.weight < current.weight - WEIGHT_EPSILON);
        lighter_recently || lighter_oldest
    }

    /// Most reps ever completed at exactly this weight
    fn best_reps_at_weight(history: &[SetRecord], weight: f64) -> u32 {
        history
            .iter()
            .filter(|set| (set.weight - weight).abs() < WEIGHT_EPSILON)
            .map(|set| set.reps)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recently_progressed_detects_lighter_entries() {
        let history = [
            SetRecord::new(1, 45.0, 10),
            SetRecord::new(1, 40.0, 15),
            SetRecord::new(1, 40.0, 15),
        ];
        assert!(ReadinessScorer::recently_progressed(&history, 4));

        let flat = [SetRecord::new(1, 40.0, 12), SetRecord::new(1, 40.0, 11)];
        assert!(!ReadinessScorer::recently_progressed(&flat, 4));
    }

    #[test]
    fn test_time_factor_bands() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default();
        let days_ago = |days: u64| today.checked_sub_days(chrono::Days::new(days));
        assert!((ReadinessScorer::time_factor_score(days_ago(10), today) - 1.0).abs() < 1e-9);
        assert!((ReadinessScorer::time_factor_score(days_ago(4), today) - 0.8).abs() < 1e-9);
        assert!((ReadinessScorer::time_factor_score(days_ago(25), today) - 0.6).abs() < 1e-9);
        assert!((ReadinessScorer::time_factor_score(days_ago(40), today) - 0.4).abs() < 1e-9);
        assert!((ReadinessScorer::time_factor_score(None, today) - 0.6).abs() < 1e-9);
    }
}
