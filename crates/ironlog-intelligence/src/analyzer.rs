// ABOUTME: One-call progression analysis for an exercise history, plus parallel batch analysis
// ABOUTME: Runs pattern, volume, readiness, suggestion, and per-set analysis in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::pattern_detection::{PatternAnalysis, PatternDetector};
use crate::readiness::{ReadinessFactors, ReadinessScorer, SetProgressionAnalysis};
use crate::suggestion_engine::{
    CurrentPerformance, SetAdditionSuggestion, SetTarget, SmartSuggestion, SuggestionGenerator,
    SuggestionInput,
};
use crate::volume_analysis::{PerformanceStats, VolumeTrendAnalysis, VolumeTrendAnalyzer};
use chrono::NaiveDate;
use ironlog_core::config::ProgressionConfig;
use ironlog_core::errors::EngineResult;
use ironlog_core::models::{
    ExerciseProfile, ProgressionEvent, SetRecord, UserPreferences, WorkoutSnapshot,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Everything known about one exercise for one lifter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseHistory {
    /// Exercise profile, when known
    pub exercise: Option<ExerciseProfile>,
    /// Workouts in any order
    pub workouts: Vec<WorkoutSnapshot>,
    /// Explicit per-set histories keyed by set number, most recent first
    ///
    /// Sets missing here are derived from `workouts`.
    pub set_histories: BTreeMap<u32, Vec<SetRecord>>,
    /// Progression events for the exercise
    pub events: Vec<ProgressionEvent>,
    /// Lifter preferences
    pub preferences: UserPreferences,
}

impl ExerciseHistory {
    /// History of one set number, most recent first, at most `limit` entries
    #[must_use]
    pub fn set_history(&self, set_number: u32, limit: usize) -> Vec<SetRecord> {
        if let Some(explicit) = self.set_histories.get(&set_number) {
            return explicit.iter().take(limit).copied().collect();
        }
        let mut dated: Vec<(NaiveDate, SetRecord)> = self
            .workouts
            .iter()
            .filter_map(|workout| workout.set(set_number).map(|set| (workout.date, *set)))
            .collect();
        dated.sort_by(|a, b| b.0.cmp(&a.0));
        dated.into_iter().take(limit).map(|(_, set)| set).collect()
    }

    /// Date of the most recent progression event
    #[must_use]
    pub fn last_progression_date(&self) -> Option<NaiveDate> {
        self.events.iter().map(|event| event.date).max()
    }

    /// Most recent workout with at least one set
    #[must_use]
    pub fn latest_workout(&self) -> Option<&WorkoutSnapshot> {
        self.workouts
            .iter()
            .filter(|workout| !workout.sets.is_empty())
            .max_by_key(|workout| workout.date)
    }
}

/// Full analysis of one exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseAnalysis {
    /// Exercise id, when a profile was supplied
    pub exercise_id: Option<i64>,
    /// Exercise name, when a profile was supplied
    pub exercise_name: Option<String>,
    /// Date the analysis was made for
    pub as_of: NaiveDate,
    /// Dominant set pattern
    pub pattern: PatternAnalysis,
    /// Volume trend over the configured window
    pub volume_trend: VolumeTrendAnalysis,
    /// Readiness to progress
    pub readiness: ReadinessFactors,
    /// Performance in the most recent workout
    pub current: Option<CurrentPerformance>,
    /// Ranked suggestions
    pub suggestions: Vec<SmartSuggestion>,
    /// Per-set analysis keyed by set number
    pub set_analyses: BTreeMap<u32, SetProgressionAnalysis>,
    /// Per-set targets for the next session
    pub set_targets: Vec<SetTarget>,
    /// Whether to add a set
    pub set_addition: SetAdditionSuggestion,
    /// Summary statistics
    pub performance: PerformanceStats,
}

/// Progression analysis facade
pub struct ProgressionAnalyzer;

impl ProgressionAnalyzer {
    /// Analyze one exercise history
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences or any workout violate the data model
    pub fn analyze(
        history: &ExerciseHistory,
        config: &ProgressionConfig,
        as_of: NaiveDate,
    ) -> EngineResult<ExerciseAnalysis> {
        let exercise = history.exercise.as_ref();
        let prefs = &history.preferences;
        prefs.validate()?;

        let pattern = PatternDetector::detect_pattern(&history.workouts, &config.pattern_detection)?;
        let volume_trend = VolumeTrendAnalyzer::analyze_volume_trend(
            &history.workouts,
            config.volume_tracking.window_days,
            as_of,
            &config.volume_tracking,
        )?;
        let readiness = ReadinessScorer::score_readiness(
            &history.workouts,
            history.last_progression_date(),
            exercise,
            prefs,
            as_of,
            config,
        )?;

        let current = CurrentPerformance::latest(&history.workouts);
        let suggestions = match current {
            Some(current) => SuggestionGenerator::generate_suggestions(
                &SuggestionInput {
                    current,
                    readiness: &readiness,
                    pattern: &pattern,
                    events: &history.events,
                    exercise,
                    prefs,
                    as_of,
                },
                config,
            )?,
            None => Vec::new(),
        };

        let latest_sets: &[SetRecord] = history
            .latest_workout()
            .map_or(&[], |workout| workout.sets.as_slice());
        let mut set_analyses = BTreeMap::new();
        let mut ordered_analyses = Vec::with_capacity(latest_sets.len());
        for set in latest_sets {
            let set_history =
                history.set_history(set.set_number, config.readiness.set_history_limit);
            let analysis = ReadinessScorer::analyze_set_progression(
                &set_history,
                prefs,
                exercise,
                &config.readiness,
            )?;
            ordered_analyses.push(analysis.clone());
            set_analyses.insert(set.set_number, analysis);
        }
        let set_targets = SuggestionGenerator::suggest_set_targets(
            latest_sets,
            &ordered_analyses,
            pattern.pattern,
            exercise,
        );

        let current_sets = SuggestionGenerator::current_set_count(&history.workouts, as_of, config);
        let last_set_history = u32::try_from(current_sets)
            .map(|set_number| history.set_history(set_number, config.readiness.set_history_limit))
            .unwrap_or_default();
        let set_addition = SuggestionGenerator::suggest_set_addition(
            &history.workouts,
            &last_set_history,
            exercise,
            prefs,
            as_of,
            config,
        )?;

        debug!(
            exercise = exercise.map(|e| e.name.as_str()),
            pattern = %pattern.pattern,
            readiness = readiness.overall_readiness,
            suggestions = suggestions.len(),
            "Analyzed exercise"
        );

        Ok(ExerciseAnalysis {
            exercise_id: exercise.map(|e| e.id),
            exercise_name: exercise.map(|e| e.name.clone()),
            as_of,
            pattern,
            volume_trend,
            readiness,
            current,
            suggestions,
            set_analyses,
            set_targets,
            set_addition,
            performance: VolumeTrendAnalyzer::performance_stats(&history.workouts),
        })
    }

    /// Analyze many exercise histories in parallel
    ///
    /// Results are returned in input order; one failing history does not
    /// affect the others.
    #[must_use]
    pub fn analyze_batch(
        histories: &[ExerciseHistory],
        config: &ProgressionConfig,
        as_of: NaiveDate,
    ) -> Vec<EngineResult<ExerciseAnalysis>> {
        histories
            .par_iter()
            .map(|history| Self::analyze(history, config, as_of))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap_or_default()
    }

    #[test]
    fn test_set_history_derived_from_workouts_newest_first() {
        let history = ExerciseHistory {
            workouts: vec![
                WorkoutSnapshot::from_pairs(date(1), &[(40.0, 10), (45.0, 8)]),
                WorkoutSnapshot::from_pairs(date(8), &[(42.5, 10), (47.5, 8)]),
                WorkoutSnapshot::from_pairs(date(4), &[(40.0, 12)]),
            ],
            ..ExerciseHistory::default()
        };

        let set_two = history.set_history(2, 5);
        let weights: Vec<f64> = set_two.iter().map(|set| set.weight).collect();
        assert_eq!(weights, vec![47.5, 45.0]);
        assert_eq!(history.set_history(1, 2).len(), 2);
    }

    #[test]
    fn test_explicit_set_history_takes_precedence() {
        let mut history = ExerciseHistory::default();
        history
            .set_histories
            .insert(1, vec![SetRecord::new(1, 60.0, 8), SetRecord::new(1, 57.5, 10)]);
        history
            .workouts
            .push(WorkoutSnapshot::from_pairs(date(2), &[(20.0, 15)]));

        let set_one = history.set_history(1, 5);
        assert_eq!(set_one.len(), 2);
        assert!((set_one[0].weight - 60.0).abs() < f64::EPSILON);
    }
}
