// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Per-set analysis command for ironlog-cli
// ABOUTME: Reports whether one set is ready for more weight and what to aim for next

use crate::helpers::display::print_set_analysis;
use crate::OutputFormat;
use anyhow::Result;
use ironlog::export::TrainingExport;
use ironlog::services::ProgressionService;
use ironlog_core::config::ProgressionConfig;
use std::sync::Arc;

/// Analyze a single set number of an exercise
pub async fn run(
    export: TrainingExport,
    config: ProgressionConfig,
    exercise_id: i64,
    set_number: u32,
    output: OutputFormat,
) -> Result<()> {
    let user_id = export.user_id;
    let store = Arc::new(export.into_store().await?);
    let service = ProgressionService::with_store(store, config);

    let analysis = service
        .analyze_set(user_id, exercise_id, set_number)
        .await?;
    print_set_analysis(set_number, &analysis, output)
}
