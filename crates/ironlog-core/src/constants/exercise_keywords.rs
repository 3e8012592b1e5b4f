// ABOUTME: Keyword tables for classifying exercises by equipment and body region
// ABOUTME: Matched against lower-cased exercise names with hyphens normalized to spaces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Machine and cable stations. Checked first so "seated row" or "leg curl"
/// resolve to machines.
pub const MACHINE: &[&str] = &[
    "machine",
    "cable",
    "seated",
    "smith",
    "lat pulldown",
    "leg press",
    "leg extension",
    "leg curl",
    "chest press",
    "shoulder press",
];

/// Barbells, dumbbells, kettlebells, and the classic free-weight lifts
pub const FREE_WEIGHT: &[&str] = &[
    "barbell",
    "dumbbell",
    "kettlebell",
    "bench",
    "squat",
    "deadlift",
    "overhead press",
    "row",
    "curl",
];

/// Bodyweight movements that progress by adding external load
pub const BODYWEIGHT: &[&str] = &["push up", "pull up", "chin up", "dip", "bodyweight"];

/// Lower-body keywords, matched against name and muscle group
pub const LOWER_BODY: &[&str] = &[
    "leg",
    "glute",
    "quad",
    "hamstring",
    "calf",
    "squat",
    "deadlift",
    "lunge",
];

/// Normalize an exercise name or muscle group for keyword matching
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['-', '_'], " ")
}

/// Whether any keyword occurs in the already-normalized text
#[must_use]
pub fn matches_any(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| normalized.contains(keyword))
}
