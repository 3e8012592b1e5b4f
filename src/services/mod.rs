// ABOUTME: Service layer between collaborator traits and the progression engine
// ABOUTME: Exposes ProgressionService for binaries and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Progression analysis and recording
pub mod progression_service;

pub use progression_service::ProgressionService;
