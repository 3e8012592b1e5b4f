// ABOUTME: Set and workout snapshot models for a single exercise
// ABOUTME: Validates set numbering, weights, RPE, and form quality ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{EngineResult, ProgressionError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One performed set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Position within the workout, starting at 1
    pub set_number: u32,
    /// Load in kilograms
    pub weight: f64,
    /// Completed repetitions
    pub reps: u32,
    /// Rate of perceived exertion (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    /// Self-assessed form rating (1-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_quality: Option<u8>,
}

impl SetRecord {
    /// Create a set without RPE or form data
    #[must_use]
    pub const fn new(set_number: u32, weight: f64, reps: u32) -> Self {
        Self {
            set_number,
            weight,
            reps,
            rpe: None,
            form_quality: None,
        }
    }

    /// Attach a form quality rating
    #[must_use]
    pub const fn with_form_quality(mut self, form_quality: u8) -> Self {
        self.form_quality = Some(form_quality);
        self
    }

    /// Attach an RPE rating
    #[must_use]
    pub const fn with_rpe(mut self, rpe: u8) -> Self {
        self.rpe = Some(rpe);
        self
    }

    /// Weight times reps
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }

    /// Check the data-model invariants for a single set
    ///
    /// # Errors
    ///
    /// Returns an error for a zero set number, a non-positive weight, or an
    /// out-of-range RPE or form rating
    pub fn validate(&self) -> EngineResult<()> {
        if self.set_number == 0 {
            return Err(ProgressionError::InvalidSetNumber);
        }
        if self.weight <= 0.0 || !self.weight.is_finite() {
            return Err(ProgressionError::NonPositiveWeight {
                weight: self.weight,
            });
        }
        if let Some(rpe) = self.rpe {
            if !(1..=10).contains(&rpe) {
                return Err(ProgressionError::RpeOutOfRange { rpe });
            }
        }
        if let Some(form_quality) = self.form_quality {
            if !(1..=5).contains(&form_quality) {
                return Err(ProgressionError::FormQualityOutOfRange { form_quality });
            }
        }
        Ok(())
    }
}

/// All sets of one exercise performed on one date
///
/// Deserialization goes through [`WorkoutSnapshot::new`], so sets read from a
/// file are ordered by set number regardless of their order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WorkoutSnapshotRecord")]
pub struct WorkoutSnapshot {
    /// Workout date
    pub date: NaiveDate,
    /// Sets ordered by `set_number`
    pub sets: Vec<SetRecord>,
}

/// Wire form of a workout before its sets are ordered
#[derive(Deserialize)]
struct WorkoutSnapshotRecord {
    date: NaiveDate,
    sets: Vec<SetRecord>,
}

impl From<WorkoutSnapshotRecord> for WorkoutSnapshot {
    fn from(record: WorkoutSnapshotRecord) -> Self {
        Self::new(record.date, record.sets)
    }
}

impl WorkoutSnapshot {
    /// Create a snapshot, ordering sets by set number
    #[must_use]
    pub fn new(date: NaiveDate, mut sets: Vec<SetRecord>) -> Self {
        sets.sort_by_key(|set| set.set_number);
        Self { date, sets }
    }

    /// Build a snapshot from `(weight, reps)` pairs numbered from 1
    #[must_use]
    pub fn from_pairs(date: NaiveDate, pairs: &[(f64, u32)]) -> Self {
        let sets = pairs
            .iter()
            .zip(1..)
            .map(|(&(weight, reps), set_number)| SetRecord::new(set_number, weight, reps))
            .collect();
        Self { date, sets }
    }

    /// Set weights in set order
    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.sets.iter().map(|set| set.weight).collect()
    }

    /// Number of sets performed
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Sum of reps across sets
    #[must_use]
    pub fn total_reps(&self) -> u32 {
        self.sets.iter().map(|set| set.reps).sum()
    }

    /// Sum of weight times reps across sets
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(SetRecord::volume).sum()
    }

    /// Mean set weight, `None` for an empty workout
    #[must_use]
    pub fn average_weight(&self) -> Option<f64> {
        if self.sets.is_empty() {
            return None;
        }
        let total: f64 = self.sets.iter().map(|set| set.weight).sum();
        Some(total / self.sets.len() as f64)
    }

    /// Find a set by its number
    #[must_use]
    pub fn set(&self, set_number: u32) -> Option<&SetRecord> {
        self.sets.iter().find(|set| set.set_number == set_number)
    }

    /// Check every set and the uniqueness of set numbers
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found
    pub fn validate(&self) -> EngineResult<()> {
        let mut seen = HashSet::with_capacity(self.sets.len());
        for set in &self.sets {
            set.validate()?;
            if !seen.insert(set.set_number) {
                return Err(ProgressionError::DuplicateSetNumber {
                    set_number: set.set_number,
                    date: self.date,
                });
            }
        }
        Ok(())
    }
}
