// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Configuration inspection commands for ironlog-cli
// ABOUTME: Prints the effective ProgressionConfig and its validation warnings

use crate::helpers::display::print_json;
use anyhow::Result;
use ironlog_core::config::ProgressionConfig;

/// Print the effective configuration
pub fn show(config: &ProgressionConfig) -> Result<()> {
    print_json(config)
}

/// Validate the configuration and list soft warnings
pub fn check(config: &ProgressionConfig) -> Result<()> {
    let warnings = config.validate()?;
    if warnings.is_empty() {
        println!("Configuration is valid");
        return Ok(());
    }
    println!("Configuration is valid with {} warning(s):", warnings.len());
    for warning in &warnings {
        println!("   - {warning}");
    }
    Ok(())
}
