// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Exercise analysis command for ironlog-cli
// ABOUTME: Loads the export into the in-memory store and runs the progression service

use crate::helpers::display::{print_analysis, print_json};
use crate::OutputFormat;
use anyhow::Result;
use chrono::NaiveDate;
use ironlog::export::TrainingExport;
use ironlog::services::ProgressionService;
use ironlog_core::config::ProgressionConfig;
use std::sync::Arc;
use tracing::info;

/// Analyze one exercise, or all of them when `exercise_id` is `None`
pub async fn run(
    export: TrainingExport,
    config: ProgressionConfig,
    exercise_id: Option<i64>,
    as_of: NaiveDate,
    output: OutputFormat,
) -> Result<()> {
    let user_id = export.user_id;
    let exercise_ids: Vec<i64> = match exercise_id {
        Some(id) => vec![id],
        None => export.exercises.iter().map(|e| e.profile.id).collect(),
    };
    let store = Arc::new(export.into_store().await?);
    let service = ProgressionService::with_store(store, config);

    let analyses = service
        .analyze_exercises(user_id, &exercise_ids, as_of)
        .await?;
    info!(exercises = analyses.len(), "Analysis complete");

    if output == OutputFormat::Json {
        return print_json(&analyses);
    }
    for analysis in &analyses {
        print_analysis(analysis, output)?;
    }
    Ok(())
}
