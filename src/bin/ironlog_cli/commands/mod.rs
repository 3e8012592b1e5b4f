// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for ironlog-cli
// ABOUTME: Exercise and set analysis, progression validation, and configuration inspection

pub mod analyze;
pub mod config;
pub mod set;
pub mod validate;
