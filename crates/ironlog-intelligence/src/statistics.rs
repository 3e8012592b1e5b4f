// ABOUTME: Small numeric helpers shared by the analyzers
// ABOUTME: Mean, sample standard deviation, and clamping to the unit interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample standard deviation, 0.0 for fewer than two values
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values).unwrap_or(0.0);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Clamp to `[0, 1]`, mapping NaN to 0
#[must_use]
pub fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Percent change from `before` to `after`, `None` when `before` is zero
#[must_use]
pub fn percent_change(before: f64, after: f64) -> Option<f64> {
    if before.abs() < f64::EPSILON {
        None
    } else {
        Some((after - before) / before * 100.0)
    }
}

/// Round to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
