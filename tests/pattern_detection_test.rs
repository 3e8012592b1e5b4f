// ABOUTME: Tests for set pattern detection across recent workouts
// ABOUTME: Covers every pattern shape, sampling, exclusions, trend direction, and set-count consistency
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, days_ago, init_test_logging, regular_workouts};
use ironlog_core::config::{PatternDetectionConfig, ProgressionConfig};
use ironlog_core::errors::ProgressionError;
use ironlog_core::models::{SetRecord, WorkoutSnapshot};
use ironlog_intelligence::{PatternDetector, PatternType, TrendDirection};

fn config() -> PatternDetectionConfig {
    PatternDetectionConfig::default()
}

#[test]
fn test_ascending_pattern_full_confidence() {
    init_test_logging();
    let workouts = regular_workouts(3, 3, &[(40.0, 12), (50.0, 10), (60.0, 8)]);

    let analysis = PatternDetector::detect_pattern(&workouts, &config()).unwrap();

    assert_eq!(analysis.pattern, PatternType::Ascending);
    assert_close(analysis.confidence, 1.0);
    assert_close(analysis.consistency_score, 1.0);
    assert_eq!(analysis.sample_size, 3);
    assert!(analysis.recommendation.starts_with("Ascending sets"));
}

#[test]
fn test_straight_sets_full_confidence() {
    let workouts = regular_workouts(3, 3, &[(50.0, 10), (50.0, 10), (50.0, 10)]);

    let analysis = PatternDetector::detect_pattern(&workouts, &config()).unwrap();

    assert_eq!(analysis.pattern, PatternType::Straight);
    assert_close(analysis.confidence, 1.0);
    assert_eq!(analysis.trend_direction, TrendDirection::Stable);
    assert_eq!(analysis.details.distribution.get(&PatternType::Straight), Some(&3));
}

#[test]
fn test_too_few_workouts_is_unknown() {
    let workouts = regular_workouts(2, 3, &[(50.0, 10), (50.0, 10)]);

    let analysis = PatternDetector::detect_pattern(&workouts, &config()).unwrap();

    assert_eq!(analysis.pattern, PatternType::Unknown);
    assert_close(analysis.confidence, 0.0);
    assert_eq!(analysis.sample_size, 2);
    assert_eq!(analysis.trend_direction, TrendDirection::Unknown);
    assert_eq!(analysis.recommendation, "insufficient data");
}

#[test]
fn test_empty_history_is_unknown() {
    let analysis = PatternDetector::detect_pattern(&[], &config()).unwrap();
    assert_eq!(analysis.pattern, PatternType::Unknown);
    assert_eq!(analysis.sample_size, 0);
    assert_eq!(analysis.details.set_consistency.typical_sets, 0);
}

#[test]
fn test_development_profile_classifies_two_workouts() {
    let workouts = regular_workouts(2, 3, &[(50.0, 10), (50.0, 10)]);
    let config = ProgressionConfig::development().pattern_detection;

    let analysis = PatternDetector::detect_pattern(&workouts, &config).unwrap();

    assert_eq!(analysis.pattern, PatternType::Straight);
}

#[test]
fn test_single_set_workouts_are_excluded() {
    let mut workouts = regular_workouts(3, 2, &[(60.0, 5)]);
    workouts.push(WorkoutSnapshot::from_pairs(
        days_ago(7),
        &[(50.0, 10), (50.0, 10)],
    ));
    workouts.push(WorkoutSnapshot::from_pairs(
        days_ago(9),
        &[(50.0, 10), (50.0, 10)],
    ));

    let analysis = PatternDetector::detect_pattern(&workouts, &config()).unwrap();

    assert_eq!(analysis.pattern, PatternType::Straight);
    assert_close(analysis.confidence, 1.0);
    assert_close(analysis.consistency_score, 0.4);
    assert_eq!(analysis.details.classified_workouts, 2);
    assert_eq!(analysis.details.excluded_workouts, 3);
}

#[test]
fn test_all_single_set_workouts_is_unknown() {
    let workouts = regular_workouts(4, 3, &[(100.0, 3)]);

    let analysis = PatternDetector::detect_pattern(&workouts, &config()).unwrap();

    assert_eq!(analysis.pattern, PatternType::Unknown);
    assert_eq!(analysis.details.excluded_workouts, 4);
}

#[test]
fn test_only_most_recent_sample_is_used() {
    let mut workouts = vec![
        WorkoutSnapshot::from_pairs(days_ago(40), &[(40.0, 10), (50.0, 10), (60.0, 10)]),
        WorkoutSnapshot::from_pairs(days_ago(35), &[(40.0, 10), (50.0, 10), (60.0, 10)]),
    ];
    // Newest first to show input order does not matter
    let mut straight = regular_workouts(5, 3, &[(55.0, 10), (55.0, 10), (55.0, 10)]);
    straight.reverse();
    workouts.extend(straight);

    let analysis = PatternDetector::detect_pattern(&workouts, &config()).unwrap();

    assert_eq!(analysis.pattern, PatternType::Straight);
    assert_eq!(analysis.sample_size, 5);
    assert_close(analysis.confidence, 1.0);
}

#[test]
fn test_varying_patterns_lower_confidence() {
    let straight = [(50.0, 10), (50.0, 10), (50.0, 10)];
    let pyramid = [(40.0, 10), (60.0, 6), (45.0, 10)];
    let workouts = vec![
        WorkoutSnapshot::from_pairs(days_ago(12), &straight),
        WorkoutSnapshot::from_pairs(days_ago(9), &pyramid),
        WorkoutSnapshot::from_pairs(days_ago(6), &straight),
        WorkoutSnapshot::from_pairs(days_ago(3), &pyramid),
        WorkoutSnapshot::from_pairs(days_ago(0), &straight),
    ];

    let analysis = PatternDetector::detect_pattern(&workouts, &config()).unwrap();

    assert_eq!(analysis.pattern, PatternType::Straight);
    assert_close(analysis.confidence, 0.6);
    assert!(analysis.recommendation.contains("varies"));
    assert_eq!(analysis.details.distribution.get(&PatternType::Pyramid), Some(&2));
}

#[test]
fn test_workouts_loaded_from_json_follow_set_order() {
    // Sets listed out of order on disk; by set number this is 40 -> 50 -> 60
    let json = r#"[
        { "date": "2025-06-24", "sets": [
            { "set_number": 3, "weight": 60.0, "reps": 8 },
            { "set_number": 1, "weight": 40.0, "reps": 12 },
            { "set_number": 2, "weight": 50.0, "reps": 10 }
        ] },
        { "date": "2025-06-27", "sets": [
            { "set_number": 3, "weight": 60.0, "reps": 8 },
            { "set_number": 1, "weight": 40.0, "reps": 12 },
            { "set_number": 2, "weight": 50.0, "reps": 10 }
        ] },
        { "date": "2025-06-30", "sets": [
            { "set_number": 3, "weight": 60.0, "reps": 8 },
            { "set_number": 1, "weight": 40.0, "reps": 12 },
            { "set_number": 2, "weight": 50.0, "reps": 10 }
        ] }
    ]"#;
    let workouts: Vec<WorkoutSnapshot> = serde_json::from_str(json).unwrap();

    for workout in &workouts {
        workout.validate().unwrap();
        assert_eq!(workout.weights(), vec![40.0, 50.0, 60.0]);
    }

    let analysis = PatternDetector::detect_pattern(&workouts, &config()).unwrap();

    assert_eq!(analysis.pattern, PatternType::Ascending);
    assert_close(analysis.confidence, 1.0);
}

#[test]
fn test_increasing_trend_direction() {
    let workouts: Vec<WorkoutSnapshot> = (0..5_u32)
        .map(|i| {
            let base = 40.0 + 2.5 * f64::from(i);
            WorkoutSnapshot::from_pairs(
                days_ago(u64::from(12 - 3 * i)),
                &[(base, 12), (base + 10.0, 10), (base + 20.0, 8)],
            )
        })
        .collect();

    let analysis = PatternDetector::detect_pattern(&workouts, &config()).unwrap();

    assert_eq!(analysis.pattern, PatternType::Ascending);
    assert_eq!(analysis.trend_direction, TrendDirection::Increasing);
}

#[test]
fn test_decreasing_trend_direction() {
    let workouts: Vec<WorkoutSnapshot> = [70.0, 68.0, 62.0, 60.0]
        .iter()
        .zip([9_u64, 6, 3, 0])
        .map(|(&weight, days)| WorkoutSnapshot::from_pairs(days_ago(days), &[(weight, 8), (weight, 8)]))
        .collect();

    let analysis = PatternDetector::detect_pattern(&workouts, &config()).unwrap();

    assert_eq!(analysis.trend_direction, TrendDirection::Decreasing);
}

#[test]
fn test_classify_weights_shapes() {
    let classify = |weights: &[f64]| PatternDetector::classify_weights(weights, 2.5, 0.25);

    assert_eq!(classify(&[50.0, 70.0, 55.0, 52.0]), Some(PatternType::Pyramid));
    assert_eq!(
        classify(&[60.0, 40.0, 55.0]),
        Some(PatternType::ReversePyramid)
    );
    assert_eq!(
        classify(&[50.0, 60.0, 50.0, 60.0]),
        Some(PatternType::Wave)
    );
    assert_eq!(
        classify(&[50.0, 60.0, 50.0, 50.0, 70.0]),
        Some(PatternType::Mixed)
    );
}

#[test]
fn test_set_consistency() {
    let consistent: Vec<WorkoutSnapshot> = [3_usize, 3, 4, 3, 3]
        .iter()
        .zip(0_u64..)
        .map(|(&sets, i)| WorkoutSnapshot::from_pairs(days_ago(i * 3), &vec![(50.0, 10); sets]))
        .collect();
    let result = PatternDetector::analyze_set_consistency(&consistent);
    assert_eq!(result.typical_sets, 3);
    assert!(result.consistent);
    assert_eq!(result.set_count_history, vec![3, 3, 4, 3, 3]);

    let erratic: Vec<WorkoutSnapshot> = [2_usize, 5, 2, 5]
        .iter()
        .zip(0_u64..)
        .map(|(&sets, i)| WorkoutSnapshot::from_pairs(days_ago(i * 3), &vec![(50.0, 10); sets]))
        .collect();
    let result = PatternDetector::analyze_set_consistency(&erratic);
    assert!(!result.consistent);
    // Ties go to the larger set count
    assert_eq!(result.typical_sets, 5);
    assert!(result.variation > 1.0);
}

#[test]
fn test_invalid_workout_is_rejected() {
    let workouts = vec![WorkoutSnapshot::new(
        days_ago(0),
        vec![SetRecord::new(1, 0.0, 10), SetRecord::new(2, 50.0, 10)],
    )];

    let result = PatternDetector::detect_pattern(&workouts, &config());

    assert!(matches!(
        result,
        Err(ProgressionError::NonPositiveWeight { .. })
    ));
}
