// ABOUTME: Main library entry point for the Ironlog progressive-overload service
// ABOUTME: Collaborator traits, in-memory store, service layer, logging, and export loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ironlog
//!
//! Strength-training progression analysis. Given a lifter's completed sets,
//! Ironlog decides exercise by exercise whether to add weight, add reps,
//! deload, or change the set scheme to break a plateau.
//!
//! ## Architecture
//!
//! - **`ironlog-core`**: workout models, errors, constants, and `ProgressionConfig`
//! - **`ironlog-intelligence`**: the pure analysis engine
//! - **Providers**: async traits the service reads history from and records
//!   progressions through
//! - **Services**: `ProgressionService`, which wires providers to the engine
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use ironlog::providers::InMemoryTrainingStore;
//! use ironlog::services::ProgressionService;
//! use ironlog_core::config::ProgressionConfig;
//! use ironlog_core::errors::AppResult;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(InMemoryTrainingStore::new());
//!     let service = ProgressionService::with_store(store, ProgressionConfig::from_env()?);
//!     let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
//!     let analysis = service.analyze_exercise(Uuid::new_v4(), 1, as_of).await?;
//!     println!("{}", analysis.readiness.recommendation);
//!     Ok(())
//! }
//! ```

/// JSON training export format
pub mod export;

/// Structured logging setup
pub mod logging;

/// Collaborator traits and the in-memory store
pub mod providers;

/// Service layer
pub mod services;
