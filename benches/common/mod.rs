// ABOUTME: Shared benchmark utilities for the progression engine benches
// ABOUTME: Re-exports deterministic training-history fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
