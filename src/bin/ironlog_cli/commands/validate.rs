// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Progression validation command for ironlog-cli
// ABOUTME: Checks a proposed weight increase against the maximum jump

use crate::helpers::display::print_json;
use crate::OutputFormat;
use anyhow::Result;
use ironlog_intelligence::WeightIncrementCalculator;
use serde_json::json;

/// Validate `old_weight -> new_weight`; exits with an error when rejected
pub fn run(old_weight: f64, new_weight: f64, max_jump: f64, output: OutputFormat) -> Result<()> {
    let result = WeightIncrementCalculator::validate_progression(old_weight, new_weight, max_jump);

    if output == OutputFormat::Json {
        print_json(&json!({
            "old_weight": old_weight,
            "new_weight": new_weight,
            "max_jump_fraction": max_jump,
            "valid": result.is_ok(),
            "error": result.as_ref().err().map(ToString::to_string),
        }))?;
    } else if result.is_ok() {
        println!("Accepted: {old_weight} kg -> {new_weight} kg");
    }

    Ok(result?)
}
