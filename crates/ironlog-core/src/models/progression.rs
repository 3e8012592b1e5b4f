// ABOUTME: Progression event model recording accepted load or rep changes
// ABOUTME: Events feed the readiness time factor, deload, and plateau rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of change an event records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionType {
    /// Load went up
    #[default]
    WeightIncrease,
    /// Reps went up at the same load
    RepIncrease,
    /// A set was added
    SetIncrease,
    /// Load was reduced on purpose
    Deload,
    /// Pattern or rep scheme changed to break a plateau
    PlateauBreak,
}

/// A recorded progression for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionEvent {
    /// Event identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Lifter; nil when omitted from an export
    #[serde(default)]
    pub user_id: Uuid,
    /// Exercise; 0 when omitted from an export
    #[serde(default)]
    pub exercise_id: i64,
    /// Set the event applies to, `None` for the whole exercise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_number: Option<u32>,
    /// Date the progression took effect
    pub date: NaiveDate,
    /// Load before
    pub old_weight: f64,
    /// Load after
    pub new_weight: f64,
    /// Reps before
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_reps: Option<u32>,
    /// Reps after
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_reps: Option<u32>,
    /// Kind of change
    #[serde(default)]
    pub progression_type: ProgressionType,
    /// The lifter could not complete the progressed target
    #[serde(default)]
    pub failed: bool,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl ProgressionEvent {
    /// Create a weight-increase event
    #[must_use]
    pub fn weight_increase(
        user_id: Uuid,
        exercise_id: i64,
        date: NaiveDate,
        old_weight: f64,
        new_weight: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            exercise_id,
            set_number: None,
            date,
            old_weight,
            new_weight,
            old_reps: None,
            new_reps: None,
            progression_type: ProgressionType::WeightIncrease,
            failed: false,
            notes: String::new(),
        }
    }

    /// Mark the event as failed
    #[must_use]
    pub fn failed(mut self) -> Self {
        self.failed = true;
        self
    }

    /// Set the event type
    #[must_use]
    pub fn with_type(mut self, progression_type: ProgressionType) -> Self {
        self.progression_type = progression_type;
        self
    }
}
