// ABOUTME: Tests for equipment classification, smart increments, rounding, and progression validation
// ABOUTME: Covers free-weight, machine, bodyweight, and unknown equipment step tables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, back_squat, bench_press, lateral_raise, leg_press};
use ironlog_core::errors::ProgressionError;
use ironlog_core::models::{BodyRegion, EquipmentType, ExerciseProfile, UserPreferences};
use ironlog_intelligence::WeightIncrementCalculator;

#[test]
fn test_equipment_classification() {
    assert_eq!(
        WeightIncrementCalculator::classify_equipment(Some(&bench_press())),
        EquipmentType::FreeWeight
    );
    assert_eq!(
        WeightIncrementCalculator::classify_equipment(Some(&leg_press())),
        EquipmentType::Machine
    );
    let dip = ExerciseProfile::new(9, "Weighted Dip", Some("triceps"));
    assert_eq!(
        WeightIncrementCalculator::classify_equipment(Some(&dip)),
        EquipmentType::Bodyweight
    );
    assert_eq!(
        WeightIncrementCalculator::classify_equipment(Some(&lateral_raise())),
        EquipmentType::Unknown
    );
    assert_eq!(
        WeightIncrementCalculator::classify_equipment(None),
        EquipmentType::Unknown
    );
}

#[test]
fn test_body_region_classification() {
    assert_eq!(
        WeightIncrementCalculator::classify_body_region(Some(&back_squat())),
        BodyRegion::Lower
    );
    assert_eq!(
        WeightIncrementCalculator::classify_body_region(Some(&bench_press())),
        BodyRegion::Upper
    );
    assert_eq!(
        WeightIncrementCalculator::classify_body_region(None),
        BodyRegion::Upper
    );
}

#[test]
fn test_free_weight_increments_scale_with_load() {
    let prefs = UserPreferences::default();
    let bench = bench_press();
    let squat = back_squat();
    let increment = |exercise: &ExerciseProfile, weight: f64, upper: bool| {
        WeightIncrementCalculator::smart_increment(Some(exercise), weight, upper, &prefs)
    };

    assert_close(increment(&bench, 8.0, true), 0.5);
    assert_close(increment(&bench, 20.0, true), 1.0);
    assert_close(increment(&bench, 45.0, true), 2.5);
    assert_close(increment(&bench, 100.0, true), 2.5);
    assert_close(increment(&squat, 100.0, false), 5.0);
}

#[test]
fn test_machine_and_bodyweight_increments() {
    let prefs = UserPreferences::default();
    let machine = leg_press();
    assert_close(
        WeightIncrementCalculator::smart_increment(Some(&machine), 15.0, false, &prefs),
        2.5,
    );
    assert_close(
        WeightIncrementCalculator::smart_increment(Some(&machine), 50.0, false, &prefs),
        5.0,
    );

    let pull_up = ExerciseProfile::new(10, "Weighted Pull-Up", Some("back"));
    assert_close(
        WeightIncrementCalculator::smart_increment(Some(&pull_up), 20.0, true, &prefs),
        2.5,
    );
}

#[test]
fn test_unknown_equipment_uses_preferences() {
    let prefs = UserPreferences::default();
    let raise = lateral_raise();

    // Light loads halve the preferred increment, heavy loads double it
    assert_close(
        WeightIncrementCalculator::smart_increment(Some(&raise), 15.0, true, &prefs),
        1.25,
    );
    assert_close(
        WeightIncrementCalculator::smart_increment(Some(&raise), 50.0, true, &prefs),
        2.5,
    );
    assert_close(
        WeightIncrementCalculator::smart_increment(None, 120.0, false, &prefs),
        10.0,
    );
}

#[test]
fn test_round_practical() {
    let equipment = EquipmentType::FreeWeight;
    assert_close(WeightIncrementCalculator::round_practical(61.3, equipment), 61.5);
    assert_close(WeightIncrementCalculator::round_practical(61.2, equipment), 61.0);
    assert_close(WeightIncrementCalculator::round_practical(61.25, equipment), 61.5);
}

#[test]
fn test_round_practical_is_idempotent() {
    for weight in [0.3, 12.7, 41.25, 61.3, 99.99, 142.6] {
        for equipment in [
            EquipmentType::Machine,
            EquipmentType::FreeWeight,
            EquipmentType::Bodyweight,
            EquipmentType::Unknown,
        ] {
            let once = WeightIncrementCalculator::round_practical(weight, equipment);
            let twice = WeightIncrementCalculator::round_practical(once, equipment);
            assert_close(twice, once);
        }
    }
}

#[test]
fn test_volume_based_reps() {
    assert_eq!(
        WeightIncrementCalculator::volume_based_reps(40.0, 12, 50.0, 6),
        10
    );
    assert_eq!(
        WeightIncrementCalculator::volume_based_reps(60.0, 10, 65.0, 6),
        9
    );
    // Never below the rep floor
    assert_eq!(
        WeightIncrementCalculator::volume_based_reps(100.0, 5, 200.0, 6),
        6
    );
    assert_eq!(
        WeightIncrementCalculator::volume_based_reps(40.0, 12, 0.0, 8),
        8
    );
}

#[test]
fn test_deterministic_weight() {
    assert_close(
        WeightIncrementCalculator::deterministic_weight(&[60.0, 60.0, 70.0]),
        60.0,
    );
    assert_close(
        WeightIncrementCalculator::deterministic_weight(&[50.0, 55.0, 60.0]),
        60.0,
    );
    // Equally common weights resolve to the heavier one
    assert_close(
        WeightIncrementCalculator::deterministic_weight(&[50.0, 50.0, 60.0, 60.0]),
        60.0,
    );
    assert_close(WeightIncrementCalculator::deterministic_weight(&[]), 0.0);
}

#[test]
fn test_validate_progression_accepts_reasonable_jumps() {
    assert!(WeightIncrementCalculator::validate_progression(40.0, 42.5, 0.5).is_ok());
    assert!(WeightIncrementCalculator::validate_progression(60.0, 90.0, 0.5).is_ok());
}

#[test]
fn test_validate_progression_rejects_decrease() {
    assert!(matches!(
        WeightIncrementCalculator::validate_progression(50.0, 45.0, 0.5),
        Err(ProgressionError::WeightNotIncreased { .. })
    ));
    assert!(matches!(
        WeightIncrementCalculator::validate_progression(60.0, 60.0, 0.5),
        Err(ProgressionError::WeightNotIncreased { .. })
    ));
}

#[test]
fn test_validate_progression_rejects_large_jump() {
    let result = WeightIncrementCalculator::validate_progression(40.0, 80.0, 0.5);
    assert!(matches!(
        result,
        Err(ProgressionError::WeightJumpTooLarge { max_fraction, .. }) if (max_fraction - 0.5).abs() < f64::EPSILON
    ));
}

#[test]
fn test_validate_progression_rejects_non_positive() {
    assert!(matches!(
        WeightIncrementCalculator::validate_progression(0.0, 10.0, 0.5),
        Err(ProgressionError::NonPositiveWeight { .. })
    ));
    assert!(matches!(
        WeightIncrementCalculator::validate_progression(-5.0, 10.0, 0.5),
        Err(ProgressionError::NonPositiveWeight { .. })
    ));
}
