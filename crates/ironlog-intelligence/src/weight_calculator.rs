// ABOUTME: Equipment-aware weight increments, practical rounding, and progression validation
// ABOUTME: Pure functions shared by readiness scoring and suggestion generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight increment calculation
//!
//! Plates, dumbbells, and machine stacks move in different steps, so the next
//! practical load depends on the equipment, the current load, and the body
//! region being trained.

use ironlog_core::constants::increments::{
    BODYWEIGHT_STEP, FREE_WEIGHT_HEAVY_LOWER_STEP, FREE_WEIGHT_HEAVY_UPPER_STEP,
    FREE_WEIGHT_LIGHT_LIMIT, FREE_WEIGHT_LIGHT_STEP, FREE_WEIGHT_MEDIUM_LIMIT,
    FREE_WEIGHT_MEDIUM_STEP, FREE_WEIGHT_TINY_LIMIT, FREE_WEIGHT_TINY_STEP, MACHINE_HEAVY_STEP,
    MACHINE_LIGHT_LIMIT, MACHINE_LIGHT_STEP, PRACTICAL_ROUNDING_STEP, UNKNOWN_HEAVY_LIMIT,
    UNKNOWN_LIGHT_LIMIT,
};
use ironlog_core::errors::{EngineResult, ProgressionError};
use ironlog_core::models::{BodyRegion, EquipmentType, ExerciseProfile, UserPreferences};
use std::collections::HashMap;

/// Weight increment calculator
pub struct WeightIncrementCalculator;

impl WeightIncrementCalculator {
    /// Classify the equipment an exercise uses; unknown without a profile
    #[must_use]
    pub fn classify_equipment(exercise: Option<&ExerciseProfile>) -> EquipmentType {
        exercise.map_or(EquipmentType::Unknown, ExerciseProfile::equipment_type)
    }

    /// Classify the body region; upper body without a profile
    #[must_use]
    pub fn classify_body_region(exercise: Option<&ExerciseProfile>) -> BodyRegion {
        exercise.map_or(BodyRegion::Upper, ExerciseProfile::body_region)
    }

    /// Next practical increment for the exercise at the current load
    #[must_use]
    pub fn smart_increment(
        exercise: Option<&ExerciseProfile>,
        current_weight: f64,
        is_upper_body: bool,
        prefs: &UserPreferences,
    ) -> f64 {
        match Self::classify_equipment(exercise) {
            EquipmentType::FreeWeight => Self::free_weight_increment(current_weight, is_upper_body),
            EquipmentType::Machine => {
                if current_weight < MACHINE_LIGHT_LIMIT {
                    MACHINE_LIGHT_STEP
                } else {
                    MACHINE_HEAVY_STEP
                }
            }
            EquipmentType::Bodyweight => BODYWEIGHT_STEP,
            EquipmentType::Unknown => {
                let preferred = prefs.increment_for(is_upper_body);
                if current_weight < UNKNOWN_LIGHT_LIMIT {
                    preferred / 2.0
                } else if current_weight > UNKNOWN_HEAVY_LIMIT {
                    preferred * 2.0
                } else {
                    preferred
                }
            }
        }
    }

    /// Round to the nearest load the equipment can actually be set to
    #[must_use]
    pub fn round_practical(weight: f64, equipment: EquipmentType) -> f64 {
        let step = Self::rounding_step(equipment);
        (weight / step).round() * step
    }

    /// Reps at a new weight that keep set volume roughly constant
    ///
    /// Never returns fewer than `min_reps`.
    #[must_use]
    pub fn volume_based_reps(old_weight: f64, old_reps: u32, new_weight: f64, min_reps: u32) -> u32 {
        if new_weight <= 0.0 {
            return min_reps;
        }
        let reps = (old_weight * f64::from(old_reps) / new_weight).round();
        if reps <= 0.0 {
            return min_reps;
        }
        (reps as u32).max(min_reps)
    }

    /// Working weight of a workout
    ///
    /// The most common weight when any weight repeats, otherwise the heaviest.
    /// Ties between equally common weights go to the heavier one.
    #[must_use]
    pub fn deterministic_weight(weights: &[f64]) -> f64 {
        let mut counts: HashMap<u64, (f64, usize)> = HashMap::new();
        for &weight in weights {
            counts.entry(weight.to_bits()).or_insert((weight, 0)).1 += 1;
        }
        let most_common = counts
            .values()
            .filter(|(_, count)| *count > 1)
            .max_by(|a, b| a.1.cmp(&b.1).then(a.0.total_cmp(&b.0)));

        match most_common {
            Some(&(weight, _)) => weight,
            None => weights.iter().copied().fold(0.0, f64::max),
        }
    }

    /// Check that a proposed weight increase is positive and not reckless
    ///
    /// # Errors
    ///
    /// Returns an error when either weight is not positive, the new weight does
    /// not exceed the old one, or the increase is larger than
    /// `max_jump_fraction` of the old weight
    pub fn validate_progression(
        old_weight: f64,
        new_weight: f64,
        max_jump_fraction: f64,
    ) -> EngineResult<()> {
        for weight in [old_weight, new_weight] {
            if weight <= 0.0 || !weight.is_finite() {
                return Err(ProgressionError::NonPositiveWeight { weight });
            }
        }
        if new_weight <= old_weight {
            return Err(ProgressionError::WeightNotIncreased {
                old: old_weight,
                new: new_weight,
            });
        }
        if new_weight > old_weight * (1.0 + max_jump_fraction) {
            return Err(ProgressionError::WeightJumpTooLarge {
                old: old_weight,
                new: new_weight,
                max_fraction: max_jump_fraction,
            });
        }
        Ok(())
    }

    // === Helper Functions ===

    fn free_weight_increment(current_weight: f64, is_upper_body: bool) -> f64 {
        if current_weight < FREE_WEIGHT_TINY_LIMIT {
            FREE_WEIGHT_TINY_STEP
        } else if current_weight < FREE_WEIGHT_LIGHT_LIMIT {
            FREE_WEIGHT_LIGHT_STEP
        } else if current_weight < FREE_WEIGHT_MEDIUM_LIMIT {
            FREE_WEIGHT_MEDIUM_STEP
        } else if is_upper_body {
            FREE_WEIGHT_HEAVY_UPPER_STEP
        } else {
            FREE_WEIGHT_HEAVY_LOWER_STEP
        }
    }

    // Every equipment type currently shares the same step.
    const fn rounding_step(equipment: EquipmentType) -> f64 {
        match equipment {
            EquipmentType::Machine
            | EquipmentType::FreeWeight
            | EquipmentType::Bodyweight
            | EquipmentType::Unknown => PRACTICAL_ROUNDING_STEP,
        }
    }
}
