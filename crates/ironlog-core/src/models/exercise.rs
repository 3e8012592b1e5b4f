// ABOUTME: Exercise profile with equipment and body-region classification
// ABOUTME: Derived attributes are recomputed from keyword tables, never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::exercise_keywords::{self, BODYWEIGHT, FREE_WEIGHT, LOWER_BODY, MACHINE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment family an exercise is performed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    /// Selectorized machines and cable stations
    Machine,
    /// Barbells, dumbbells, and kettlebells
    FreeWeight,
    /// Bodyweight movements loaded with external weight
    Bodyweight,
    /// No keyword matched
    Unknown,
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Machine => "machine",
            Self::FreeWeight => "free_weight",
            Self::Bodyweight => "bodyweight",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Upper or lower body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    /// Chest, back, shoulders, arms
    Upper,
    /// Legs and hips
    Lower,
}

/// An exercise as known to the training log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseProfile {
    /// Exercise identifier
    pub id: i64,
    /// Display name, e.g. "Barbell Bench Press"
    pub name: String,
    /// Primary muscle group, e.g. "chest"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
}

impl ExerciseProfile {
    /// Create a profile
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, muscle_group: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            muscle_group: muscle_group.map(str::to_owned),
        }
    }

    /// Classify equipment from the exercise name
    ///
    /// Machine keywords win over free-weight keywords, which win over
    /// bodyweight keywords.
    #[must_use]
    pub fn equipment_type(&self) -> EquipmentType {
        let name = exercise_keywords::normalize(&self.name);
        if exercise_keywords::matches_any(&name, MACHINE) {
            EquipmentType::Machine
        } else if exercise_keywords::matches_any(&name, FREE_WEIGHT) {
            EquipmentType::FreeWeight
        } else if exercise_keywords::matches_any(&name, BODYWEIGHT) {
            EquipmentType::Bodyweight
        } else {
            EquipmentType::Unknown
        }
    }

    /// Classify body region from the name and muscle group
    #[must_use]
    pub fn body_region(&self) -> BodyRegion {
        let name = exercise_keywords::normalize(&self.name);
        let muscle = self
            .muscle_group
            .as_deref()
            .map(exercise_keywords::normalize)
            .unwrap_or_default();
        if exercise_keywords::matches_any(&name, LOWER_BODY)
            || exercise_keywords::matches_any(&muscle, LOWER_BODY)
        {
            BodyRegion::Lower
        } else {
            BodyRegion::Upper
        }
    }

    /// Whether the exercise trains the upper body
    #[must_use]
    pub fn is_upper_body(&self) -> bool {
        self.body_region() == BodyRegion::Upper
    }
}
