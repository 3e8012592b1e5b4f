// ABOUTME: Criterion benchmarks for the progression engine
// ABOUTME: Measures pattern detection, readiness scoring, full analysis, and parallel batch analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the progression engine.
//!
//! Histories are generated deterministically so runs are comparable.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::{bench_as_of, generate_histories, generate_history, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ironlog_core::config::ProgressionConfig;
use ironlog_intelligence::{PatternDetector, ProgressionAnalyzer, ReadinessScorer};

const SIZES: [HistorySize; 3] = [HistorySize::Short, HistorySize::Medium, HistorySize::Long];

/// Benchmark pattern detection over growing histories
fn bench_pattern_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_detection");
    let config = ProgressionConfig::default();

    for size in SIZES {
        let history = generate_history(0, size);
        group.throughput(Throughput::Elements(size.workouts() as u64));
        group.bench_with_input(
            BenchmarkId::new("detect_pattern", size.workouts()),
            &history.workouts,
            |b, workouts| {
                b.iter(|| {
                    PatternDetector::detect_pattern(
                        black_box(workouts),
                        black_box(&config.pattern_detection),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark readiness scoring
fn bench_readiness(c: &mut Criterion) {
    let mut group = c.benchmark_group("readiness");
    let config = ProgressionConfig::default();

    for size in SIZES {
        let history = generate_history(1, size);
        group.bench_with_input(
            BenchmarkId::new("score_readiness", size.workouts()),
            &history,
            |b, history| {
                b.iter(|| {
                    ReadinessScorer::score_readiness(
                        black_box(&history.workouts),
                        history.last_progression_date(),
                        history.exercise.as_ref(),
                        &history.preferences,
                        bench_as_of(),
                        &config,
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the full single-exercise analysis
fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");
    let config = ProgressionConfig::default();

    for size in SIZES {
        let history = generate_history(2, size);
        group.bench_with_input(
            BenchmarkId::new("analyze", size.workouts()),
            &history,
            |b, history| {
                b.iter(|| ProgressionAnalyzer::analyze(black_box(history), &config, bench_as_of()));
            },
        );
    }

    group.finish();
}

/// Compare sequential and parallel analysis of many exercises
fn bench_batch_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_analysis");
    let config = ProgressionConfig::default();

    for count in [4_usize, 16, 64] {
        let histories = generate_histories(count, HistorySize::Medium);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &histories,
            |b, histories| {
                b.iter(|| {
                    histories
                        .iter()
                        .map(|history| ProgressionAnalyzer::analyze(history, &config, bench_as_of()))
                        .collect::<Vec<_>>()
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", count),
            &histories,
            |b, histories| {
                b.iter(|| {
                    ProgressionAnalyzer::analyze_batch(black_box(histories), &config, bench_as_of())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pattern_detection,
    bench_readiness,
    bench_full_analysis,
    bench_batch_analysis
);
criterion_main!(benches);
