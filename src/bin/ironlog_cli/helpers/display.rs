// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for ironlog-cli
// ABOUTME: Readable summaries of exercise and set analyses, or pretty JSON

use crate::OutputFormat;
use anyhow::Result;
use ironlog_intelligence::{ExerciseAnalysis, SetProgressionAnalysis};
use serde::Serialize;

/// Print any result as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Wire name of a serde enum, for readable output
fn label<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default()
}

/// Print an exercise analysis in the chosen format
pub fn print_analysis(analysis: &ExerciseAnalysis, output: OutputFormat) -> Result<()> {
    if output == OutputFormat::Json {
        return print_json(analysis);
    }

    let name = analysis.exercise_name.as_deref().unwrap_or("Exercise");
    println!("\n{name} (as of {})", analysis.as_of);
    println!("{}", "=".repeat(60));

    if let Some(current) = analysis.current {
        println!(
            "Current: {} kg x {} reps, {} sets",
            current.weight, current.reps, current.sets
        );
    } else {
        println!("Current: no workouts recorded");
    }

    let pattern = &analysis.pattern;
    println!(
        "Pattern: {} ({:.0}% confidence, trend {})",
        pattern.pattern,
        pattern.confidence * 100.0,
        label(&pattern.trend_direction)
    );
    println!("   {}", pattern.recommendation);

    let readiness = &analysis.readiness;
    println!(
        "Readiness: {:.0}% ({})",
        readiness.overall_readiness * 100.0,
        label(&readiness.level)
    );
    println!(
        "   reps {:.2} | consistency {:.2} | timing {:.2} | volume {:.2} | form {}",
        readiness.rep_achievement_score,
        readiness.consistency_score,
        readiness.time_factor_score,
        readiness.volume_trend_score,
        if readiness.form_data_present {
            format!("{:.2}", readiness.form_quality_score)
        } else {
            "n/a".to_owned()
        }
    );
    println!("   {}", readiness.recommendation);
    println!(
        "Volume: {} ({:+.1}%)",
        label(&analysis.volume_trend.trend),
        analysis.volume_trend.volume_change_percent
    );

    if analysis.suggestions.is_empty() {
        println!("\nNo suggestions - keep training at the current load.");
    }
    for (rank, suggestion) in analysis.suggestions.iter().enumerate() {
        println!(
            "\n{}. {}: {} -> {} ({:.0}% confidence)",
            rank + 1,
            label(&suggestion.suggestion_type),
            suggestion.current_value,
            suggestion.suggested_value,
            suggestion.confidence * 100.0
        );
        println!("   {}", suggestion.reasoning);
        for alternative in &suggestion.alternatives {
            println!(
                "   - {} ({}): {}",
                label(&alternative.alternative_type),
                alternative.value,
                alternative.description
            );
        }
    }

    if !analysis.set_targets.is_empty() {
        println!("\nNext session:");
        for target in &analysis.set_targets {
            println!(
                "   Set {}: {} kg x {} (last {} kg x {}){}",
                target.set_number,
                target.suggested_weight,
                target.suggested_reps,
                target.current_weight,
                target.current_reps,
                if target.ready { "  ready" } else { "" }
            );
        }
    }

    let addition = &analysis.set_addition;
    if addition.suggest {
        println!(
            "\nAdd set {}: {} kg x {}",
            addition.new_set_number.unwrap_or_default(),
            addition.suggested_weight.unwrap_or_default(),
            addition.suggested_reps.unwrap_or_default()
        );
    }
    println!("   {}", addition.reason);
    Ok(())
}

/// Print a per-set analysis in the chosen format
pub fn print_set_analysis(
    set_number: u32,
    analysis: &SetProgressionAnalysis,
    output: OutputFormat,
) -> Result<()> {
    if output == OutputFormat::Json {
        return print_json(analysis);
    }

    println!(
        "Set {set_number}: {} ({:.0}% confidence)",
        label(&analysis.suggestion),
        analysis.confidence * 100.0
    );
    if let (Some(weight), Some(reps)) = (analysis.current_weight, analysis.current_reps) {
        println!("   Last: {weight} kg x {reps}");
    }
    println!(
        "   Next: {} kg x {}",
        analysis
            .suggested_weight
            .map_or_else(|| "-".to_owned(), |w| w.to_string()),
        analysis.suggested_reps
    );
    if let (Some(to_go), Some(target)) = (analysis.reps_to_go, analysis.target_reps) {
        println!("   {to_go} reps to go toward {target}");
    }
    Ok(())
}
