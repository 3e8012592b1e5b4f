// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Shared helpers for ironlog-cli commands
// ABOUTME: Export loading and output formatting

pub mod display;

use anyhow::{bail, Result};
use ironlog::export::TrainingExport;
use std::path::PathBuf;

/// Load the training export, failing when `--export` was not given
pub fn require_export(path: Option<&PathBuf>) -> Result<TrainingExport> {
    let Some(path) = path else {
        bail!("this command needs a training export: pass --export <FILE>");
    };
    Ok(TrainingExport::from_json_file(path)?)
}
