// ABOUTME: Ranked progression suggestions (weight, reps, deload, plateau break) with alternatives
// ABOUTME: Also decides when to add a set and proposes per-set targets for the next session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Suggestion Generation
//!
//! Every rule is evaluated against the same snapshot of readiness, pattern,
//! and progression history. Each rule that fires contributes one suggestion;
//! the list is ranked by confidence.

use crate::pattern_detection::{PatternAnalysis, PatternDetector, PatternType};
use crate::readiness::{ReadinessFactors, SetProgressionAnalysis};
use crate::statistics;
use crate::weight_calculator::WeightIncrementCalculator;
use chrono::{Duration, NaiveDate};
use ironlog_core::config::ProgressionConfig;
use ironlog_core::constants::increments::{SET_TARGET_LOWER_STEP, SET_TARGET_UPPER_STEP};
use ironlog_core::constants::progression::suggestions::{
    DEEP_DELOAD_FACTOR, HIGHER_REP_BLOCK_FACTOR, LIGHT_DELOAD_FACTOR, PLATEAU_CONFIDENCE,
};
use ironlog_core::errors::EngineResult;
use ironlog_core::models::{
    BodyRegion, ExerciseProfile, ProgressionEvent, SetRecord, UserPreferences, WorkoutSnapshot,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Kind of progression suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    /// Add load
    WeightIncrease,
    /// Add a rep at the current load
    RepIncrease,
    /// Reduce load to recover
    Deload,
    /// Change the set scheme to break a stall
    PlateauBreak,
}

impl SuggestionType {
    /// Position among equally confident suggestions
    const fn tie_rank(self) -> u8 {
        match self {
            Self::Deload => 0,
            Self::WeightIncrease => 1,
            Self::RepIncrease => 2,
            Self::PlateauBreak => 3,
        }
    }
}

/// Ranking among equally confident suggestions
impl PartialOrd for SuggestionType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SuggestionType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tie_rank().cmp(&other.tie_rank())
    }
}

/// Kind of alternative offered alongside a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeType {
    /// Half the suggested increment
    Conservative,
    /// One and a half times the suggested increment
    Aggressive,
    /// One more set instead of one more rep
    AddSet,
    /// 10% reduction
    LightDeload,
    /// 20% reduction
    DeepDeload,
    /// Lighter block in a higher rep range
    HigherRepBlock,
    /// Train the exercise more often
    IncreaseFrequency,
}

/// Alternative option for a suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionAlternative {
    /// Alternative kind
    #[serde(rename = "type")]
    pub alternative_type: AlternativeType,
    /// Weight, reps, or set count depending on the kind
    pub value: f64,
    /// Human-readable description
    pub description: String,
}

/// A ranked, explained progression suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartSuggestion {
    /// Suggestion kind
    pub suggestion_type: SuggestionType,
    /// Current weight, or current reps for a rep increase
    pub current_value: f64,
    /// Suggested weight, or suggested reps for a rep increase
    pub suggested_value: f64,
    /// Confidence (0-1)
    pub confidence: f64,
    /// Why the suggestion was made
    pub reasoning: String,
    /// Other options, in order of preference
    pub alternatives: Vec<SuggestionAlternative>,
}

/// Performance in the most recent workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentPerformance {
    /// Working weight
    pub weight: f64,
    /// Best reps at the working weight
    pub reps: u32,
    /// Number of sets
    pub sets: usize,
}

impl CurrentPerformance {
    /// Derive current performance from a workout
    #[must_use]
    pub fn from_workout(workout: &WorkoutSnapshot) -> Self {
        let weight = WeightIncrementCalculator::deterministic_weight(&workout.weights());
        let reps = workout
            .sets
            .iter()
            .filter(|set| (set.weight - weight).abs() < f64::EPSILON)
            .map(|set| set.reps)
            .max()
            .unwrap_or(0);
        Self {
            weight,
            reps,
            sets: workout.set_count(),
        }
    }

    /// Derive current performance from the most recent workout that has sets
    #[must_use]
    pub fn latest(workouts: &[WorkoutSnapshot]) -> Option<Self> {
        workouts
            .iter()
            .filter(|workout| !workout.sets.is_empty())
            .max_by_key(|workout| workout.date)
            .map(Self::from_workout)
    }
}

/// Everything the suggestion rules look at
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInput<'a> {
    /// Current performance
    pub current: CurrentPerformance,
    /// Readiness for the exercise
    pub readiness: &'a ReadinessFactors,
    /// Detected set pattern
    pub pattern: &'a PatternAnalysis,
    /// Progression events for the exercise, any order
    pub events: &'a [ProgressionEvent],
    /// Exercise profile, when known
    pub exercise: Option<&'a ExerciseProfile>,
    /// User preferences
    pub prefs: &'a UserPreferences,
    /// Date the analysis is made for
    pub as_of: NaiveDate,
}

/// Whether to add a set, and what it should look like
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetAdditionSuggestion {
    /// Whether a set should be added
    pub suggest: bool,
    /// Why or why not
    pub reason: String,
    /// Sets currently performed
    pub current_sets: Option<usize>,
    /// Number of the new set
    pub new_set_number: Option<u32>,
    /// Weight for the new set
    pub suggested_weight: Option<f64>,
    /// Starting reps for the new set
    pub suggested_reps: Option<u32>,
    /// Pattern the new set follows
    pub pattern: Option<PatternType>,
}

impl SetAdditionSuggestion {
    fn declined(reason: impl Into<String>, current_sets: Option<usize>) -> Self {
        Self {
            suggest: false,
            reason: reason.into(),
            current_sets,
            new_set_number: None,
            suggested_weight: None,
            suggested_reps: None,
            pattern: None,
        }
    }
}

/// Target for one set in the next session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetTarget {
    /// Set number
    pub set_number: u32,
    /// Weight used last time
    pub current_weight: f64,
    /// Reps achieved last time
    pub current_reps: u32,
    /// Weight to use next
    pub suggested_weight: f64,
    /// Reps to aim for next
    pub suggested_reps: u32,
    /// Whether the set's own history says it is ready for more weight
    pub ready: bool,
}

/// Suggestion engine
pub struct SuggestionGenerator;

impl SuggestionGenerator {
    /// Evaluate every suggestion rule and rank what fires
    ///
    /// Returns an empty list when there is no current working weight.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences violate the data model
    pub fn generate_suggestions(
        input: &SuggestionInput<'_>,
        config: &ProgressionConfig,
    ) -> EngineResult<Vec<SmartSuggestion>> {
        input.prefs.validate()?;
        if input.current.weight <= 0.0 {
            return Ok(Vec::new());
        }

        let mut events: Vec<&ProgressionEvent> = input.events.iter().collect();
        events.sort_by(|a, b| b.date.cmp(&a.date));

        let readiness = input.readiness.overall_readiness;
        let mut suggestions = Vec::new();

        if readiness >= config.readiness.ready_threshold {
            suggestions.push(Self::weight_increase(input, events.len(), config));
        } else if readiness >= config.readiness.close_threshold {
            suggestions.push(Self::rep_increase(input));
        }
        if let Some(deload) = Self::deload(input, &events, config) {
            suggestions.push(deload);
        }
        if let Some(plateau) = Self::plateau_break(input, &events, config) {
            suggestions.push(plateau);
        }

        suggestions.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| a.suggestion_type.cmp(&b.suggestion_type))
        });

        debug!(
            exercise = input.exercise.map(|e| e.name.as_str()),
            readiness,
            suggestions = suggestions.len(),
            "Generated suggestions"
        );
        Ok(suggestions)
    }

    /// Decide whether the lifter should add a set
    ///
    /// `last_set_history` holds the current last set's performances, most
    /// recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences or a workout violate the data model
    pub fn suggest_set_addition(
        recent_workouts: &[WorkoutSnapshot],
        last_set_history: &[SetRecord],
        exercise: Option<&ExerciseProfile>,
        prefs: &UserPreferences,
        as_of: NaiveDate,
        config: &ProgressionConfig,
    ) -> EngineResult<SetAdditionSuggestion> {
        prefs.validate()?;
        for workout in recent_workouts {
            workout.validate()?;
        }
        let thresholds = &config.thresholds;
        let windowed = Self::set_addition_window(recent_workouts, as_of, config);

        if windowed.is_empty() {
            return Ok(SetAdditionSuggestion::declined("No recent workout data", None));
        }
        let current_sets = windowed.iter().map(|w| w.set_count()).max().unwrap_or(0);

        if windowed.len() < thresholds.set_addition_min_workouts {
            return Ok(SetAdditionSuggestion::declined(
                "Need more recent workouts at the current set count",
                Some(current_sets),
            ));
        }
        if current_sets >= thresholds.max_sets as usize {
            return Ok(SetAdditionSuggestion::declined(
                "Already at the maximum recommended sets - focus on weight progression",
                Some(current_sets),
            ));
        }
        let recent_last_set = &last_set_history[..last_set_history.len().min(3)];
        if recent_last_set.len() < 3 {
            return Ok(SetAdditionSuggestion::declined(
                "Not enough history on the current last set",
                Some(current_sets),
            ));
        }

        let reps: Vec<f64> = recent_last_set.iter().map(|s| f64::from(s.reps)).collect();
        let average_reps = statistics::mean(&reps).unwrap_or(0.0);
        let same_set_count = windowed.iter().all(|w| w.set_count() == current_sets);

        if !same_set_count || average_reps < f64::from(prefs.min_reps_target) {
            return Ok(SetAdditionSuggestion::declined(
                format!(
                    "Focus on the current {current_sets} sets - averaging {average_reps:.1} reps on the last set"
                ),
                Some(current_sets),
            ));
        }

        let pattern = PatternDetector::detect_pattern(recent_workouts, &config.pattern_detection)?
            .pattern;
        let last_weight = recent_last_set[0].weight;
        let is_upper_body =
            WeightIncrementCalculator::classify_body_region(exercise) == BodyRegion::Upper;
        let increment =
            WeightIncrementCalculator::smart_increment(exercise, last_weight, is_upper_body, prefs);
        let suggested_weight = match pattern {
            PatternType::Ascending => last_weight + increment,
            PatternType::Descending => (last_weight - increment)
                .max(thresholds.min_new_set_weight)
                .min(last_weight),
            _ => last_weight,
        };
        let equipment = WeightIncrementCalculator::classify_equipment(exercise);

        debug!(current_sets, %pattern, suggested_weight, "Suggesting an extra set");

        Ok(SetAdditionSuggestion {
            suggest: true,
            reason: format!("Consistently performing well on set {current_sets}"),
            current_sets: Some(current_sets),
            new_set_number: Some((current_sets as u32).saturating_add(1)),
            suggested_weight: Some(WeightIncrementCalculator::round_practical(
                suggested_weight,
                equipment,
            )),
            suggested_reps: Some(thresholds.new_set_reps),
            pattern: Some(pattern),
        })
    }

    /// Set count the set-addition rule treats as current
    ///
    /// The largest set count among the most recent workouts inside the
    /// set-addition window; 0 when the window is empty.
    #[must_use]
    pub fn current_set_count(
        recent_workouts: &[WorkoutSnapshot],
        as_of: NaiveDate,
        config: &ProgressionConfig,
    ) -> usize {
        Self::set_addition_window(recent_workouts, as_of, config)
            .iter()
            .map(|w| w.set_count())
            .max()
            .unwrap_or(0)
    }

    /// Per-set targets for the next session
    ///
    /// `set_analyses[i]` is the progression analysis of `current_sets[i]`.
    #[must_use]
    pub fn suggest_set_targets(
        current_sets: &[SetRecord],
        set_analyses: &[SetProgressionAnalysis],
        pattern: PatternType,
        exercise: Option<&ExerciseProfile>,
    ) -> Vec<SetTarget> {
        let step = match WeightIncrementCalculator::classify_body_region(exercise) {
            BodyRegion::Upper => SET_TARGET_UPPER_STEP,
            BodyRegion::Lower => SET_TARGET_LOWER_STEP,
        };

        let mut targets: Vec<SetTarget> = Vec::with_capacity(current_sets.len());
        for (index, set) in current_sets.iter().enumerate() {
            let analysis = set_analyses.get(index);
            let ready = analysis.is_some_and(|a| a.ready);
            let own_weight = analysis
                .filter(|a| a.ready)
                .and_then(|a| a.suggested_weight)
                .unwrap_or(set.weight);
            let previous = targets.last().map(|t| t.suggested_weight);

            let suggested_weight = match (pattern, previous) {
                (PatternType::Ascending, Some(prev)) => prev + step,
                (PatternType::Descending, Some(prev)) => (prev - step).max(0.0),
                _ => own_weight,
            };
            targets.push(SetTarget {
                set_number: set.set_number,
                current_weight: set.weight,
                current_reps: set.reps,
                suggested_weight,
                suggested_reps: analysis.map_or(set.reps, |a| a.suggested_reps),
                ready,
            });
        }
        targets
    }

    // === Helper Functions ===

    /// Most recent non-empty workouts inside the set-addition window, newest first
    fn set_addition_window<'a>(
        workouts: &'a [WorkoutSnapshot],
        as_of: NaiveDate,
        config: &ProgressionConfig,
    ) -> Vec<&'a WorkoutSnapshot> {
        let thresholds = &config.thresholds;
        let window_start = as_of - Duration::days(thresholds.set_addition_window_days);
        let mut windowed: Vec<&WorkoutSnapshot> = workouts
            .iter()
            .filter(|w| w.date >= window_start && w.date <= as_of && !w.sets.is_empty())
            .collect();
        windowed.sort_by(|a, b| b.date.cmp(&a.date));
        windowed.truncate(thresholds.set_addition_min_workouts);
        windowed
    }

    fn weight_increase(
        input: &SuggestionInput<'_>,
        event_count: usize,
        config: &ProgressionConfig,
    ) -> SmartSuggestion {
        let current = input.current.weight;
        let advanced = event_count > config.thresholds.advanced_user_events;
        let is_upper_body =
            WeightIncrementCalculator::classify_body_region(input.exercise) == BodyRegion::Upper;

        let (increment, suggested_value) = if advanced {
            let increment = config.thresholds.microload_increment;
            (increment, current + increment)
        } else {
            let increment = WeightIncrementCalculator::smart_increment(
                input.exercise,
                current,
                is_upper_body,
                input.prefs,
            );
            let equipment = WeightIncrementCalculator::classify_equipment(input.exercise);
            (
                increment,
                WeightIncrementCalculator::round_practical(current + increment, equipment),
            )
        };

        let reasoning = if advanced {
            format!(
                "Readiness is {:.0}% and you have {event_count} progressions logged - microload by {increment} kg",
                input.readiness.overall_readiness * 100.0
            )
        } else {
            format!(
                "Readiness is {:.0}% - add {increment} kg",
                input.readiness.overall_readiness * 100.0
            )
        };

        SmartSuggestion {
            suggestion_type: SuggestionType::WeightIncrease,
            current_value: current,
            suggested_value,
            confidence: statistics::unit(input.readiness.overall_readiness),
            reasoning,
            alternatives: vec![
                SuggestionAlternative {
                    alternative_type: AlternativeType::Conservative,
                    value: current + increment / 2.0,
                    description: "Smaller jump for a safer progression".to_owned(),
                },
                SuggestionAlternative {
                    alternative_type: AlternativeType::Aggressive,
                    value: current + increment * 1.5,
                    description: "Bigger jump if the last sessions felt easy".to_owned(),
                },
            ],
        }
    }

    fn rep_increase(input: &SuggestionInput<'_>) -> SmartSuggestion {
        let reps = input.current.reps;
        let next_reps = reps.saturating_add(1);
        SmartSuggestion {
            suggestion_type: SuggestionType::RepIncrease,
            current_value: f64::from(reps),
            suggested_value: f64::from(next_reps),
            confidence: statistics::unit(input.readiness.overall_readiness),
            reasoning: format!(
                "Almost ready for more weight - aim for {} reps at {} kg first",
                next_reps,
                input.current.weight
            ),
            alternatives: vec![SuggestionAlternative {
                alternative_type: AlternativeType::AddSet,
                value: input.current.sets.saturating_add(1) as f64,
                description: "Add a set at the current weight instead".to_owned(),
            }],
        }
    }

    fn deload(
        input: &SuggestionInput<'_>,
        newest_first: &[&ProgressionEvent],
        config: &ProgressionConfig,
    ) -> Option<SmartSuggestion> {
        let thresholds = &config.thresholds;
        let window = thresholds.deload_event_window.max(1);
        let failed = newest_first
            .iter()
            .take(window)
            .filter(|event| event.failed)
            .count();
        let readiness = input.readiness.overall_readiness;

        let too_many_failures = failed >= thresholds.deload_failed_events;
        let low_readiness = readiness < thresholds.deload_readiness_threshold;
        if !too_many_failures && !low_readiness {
            return None;
        }

        let current = input.current.weight;
        let equipment = WeightIncrementCalculator::classify_equipment(input.exercise);
        let round = |factor: f64| WeightIncrementCalculator::round_practical(current * factor, equipment);
        let reasoning = if too_many_failures {
            format!("{failed} of the last {window} progression attempts failed - back off and rebuild")
        } else {
            format!(
                "Readiness is only {:.0}% - recover before pushing again",
                readiness * 100.0
            )
        };

        Some(SmartSuggestion {
            suggestion_type: SuggestionType::Deload,
            current_value: current,
            suggested_value: round(thresholds.deload_factor),
            confidence: statistics::unit((1.0 - readiness).max(failed as f64 / window as f64)),
            reasoning,
            alternatives: vec![
                SuggestionAlternative {
                    alternative_type: AlternativeType::LightDeload,
                    value: round(LIGHT_DELOAD_FACTOR),
                    description: "Light deload of 10%".to_owned(),
                },
                SuggestionAlternative {
                    alternative_type: AlternativeType::DeepDeload,
                    value: round(DEEP_DELOAD_FACTOR),
                    description: "Deep deload of 20% for a full reset".to_owned(),
                },
            ],
        })
    }

    fn plateau_break(
        input: &SuggestionInput<'_>,
        newest_first: &[&ProgressionEvent],
        config: &ProgressionConfig,
    ) -> Option<SmartSuggestion> {
        let thresholds = &config.thresholds;
        if newest_first.len() < thresholds.plateau_min_events {
            return None;
        }
        let plateau_start = input.as_of - Duration::days(thresholds.plateau_days);
        if newest_first.iter().any(|event| event.date >= plateau_start) {
            return None;
        }

        let next_pattern = match input.pattern.pattern {
            PatternType::Straight => PatternType::Pyramid,
            _ => PatternType::Straight,
        };
        let current = input.current.weight;
        let equipment = WeightIncrementCalculator::classify_equipment(input.exercise);

        Some(SmartSuggestion {
            suggestion_type: SuggestionType::PlateauBreak,
            current_value: current,
            suggested_value: current,
            confidence: PLATEAU_CONFIDENCE,
            reasoning: format!(
                "No progression in {} days - switch from {} to {next_pattern} sets at the same weight",
                thresholds.plateau_days, input.pattern.pattern
            ),
            alternatives: vec![
                SuggestionAlternative {
                    alternative_type: AlternativeType::HigherRepBlock,
                    value: WeightIncrementCalculator::round_practical(
                        current * HIGHER_REP_BLOCK_FACTOR,
                        equipment,
                    ),
                    description: "Run a higher-rep block at 80% of the current weight".to_owned(),
                },
                SuggestionAlternative {
                    alternative_type: AlternativeType::IncreaseFrequency,
                    value: current,
                    description: "Train this exercise one more time per week".to_owned(),
                },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_rank_orders_deload_first() {
        let mut types = vec![
            SuggestionType::PlateauBreak,
            SuggestionType::RepIncrease,
            SuggestionType::Deload,
            SuggestionType::WeightIncrease,
        ];
        types.sort();
        assert_eq!(
            types,
            vec![
                SuggestionType::Deload,
                SuggestionType::WeightIncrease,
                SuggestionType::RepIncrease,
                SuggestionType::PlateauBreak,
            ]
        );
    }

    #[test]
    fn test_current_performance_uses_working_weight() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default();
        let workout = WorkoutSnapshot::from_pairs(date, &[(60.0, 8), (60.0, 10), (70.0, 5)]);
        let current = CurrentPerformance::from_workout(&workout);
        assert!((current.weight - 60.0).abs() < f64::EPSILON);
        assert_eq!(current.reps, 10);
        assert_eq!(current.sets, 3);
    }
}
