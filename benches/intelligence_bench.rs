// ABOUTME: Criterion benchmarks for exercise matching, notation parsing, and progression engines
// ABOUTME: Measures ranking over growing catalogs, parse/unparse of templates, and weight suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the intelligence engines.
//!
//! Measures candidate ranking against catalogs of increasing size, the
//! notation round-trip on a large template, and lookback-window weight
//! suggestions over long histories.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::cast_possible_truncation,
    missing_docs
)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ironlog::intelligence::{ExerciseNameMatcher, ProgressionConfig, WeightProgressionEngine};
use ironlog::models::{LoggedSet, MatchCandidate};
use ironlog::notation::{parse, unparse};
use uuid::Uuid;

const MOVEMENTS: &[&str] = &[
    "Bench Press",
    "Incline Dumbbell Press",
    "Back Squat",
    "Front Squat",
    "Romanian Deadlift",
    "Overhead Press",
    "Pull-up",
    "Barbell Row",
    "Kettlebell Swing",
    "Bulgarian Split Squat",
];

const MODIFIERS: &[&str] = &["", "Paused ", "Tempo ", "Banded ", "Single-arm "];

fn generate_candidates(count: usize, owner_id: Uuid) -> Vec<MatchCandidate> {
    (0..count)
        .map(|index| {
            let title = format!(
                "{}{}",
                MODIFIERS[index % MODIFIERS.len()],
                MOVEMENTS[(index / MODIFIERS.len()) % MOVEMENTS.len()]
            );
            let id = Uuid::from_u128(index as u128);
            if index % 3 == 0 {
                MatchCandidate::owned_by(id, title, owner_id)
            } else {
                MatchCandidate::global(id, title)
            }
        })
        .collect()
}

fn generate_template(blocks: usize) -> String {
    let mut text = String::new();
    for block in 0..blocks {
        text.push_str(&format!("# Block {block}\n"));
        for (index, movement) in MOVEMENTS.iter().enumerate() {
            if index % 2 == 0 {
                text.push_str(&format!("[[{movement}]]: 3x{}\n", 5 + index));
            } else {
                text.push_str(&format!("[{movement}]: 5-3-1\n"));
            }
        }
        text.push_str("Rest as needed between sets.\n");
        text.push_str("> AMRAP 12min\n10 [[Box Jumps]]\n15 [Push-ups]\n");
    }
    text
}

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 18, 0, 0).unwrap()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_history(count: usize) -> Vec<LoggedSet> {
    let now = reference_now();
    (0..count)
        .map(|index| {
            let weight = 60.0 + (index % 40) as f64 * 2.5;
            let reps = 3 + (index % 10) as u32;
            LoggedSet::new(weight, reps, now - Duration::hours(index as i64 * 12))
        })
        .collect()
}

fn bench_matcher_ranking(c: &mut Criterion) {
    let matcher = ExerciseNameMatcher::default();
    let user_id = Uuid::from_u128(42);
    let mut group = c.benchmark_group("matcher_ranking");

    for size in [100, 1_000, 10_000] {
        let candidates = generate_candidates(size, user_id);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("db_bench", size), &candidates, |b, candidates| {
            b.iter(|| matcher.rank_candidates(black_box("db bench"), user_id, candidates));
        });
        group.bench_with_input(BenchmarkId::new("squat", size), &candidates, |b, candidates| {
            b.iter(|| matcher.best_match(black_box("squats"), user_id, candidates));
        });
    }

    group.finish();
}

fn bench_notation(c: &mut Criterion) {
    let mut group = c.benchmark_group("notation");

    for blocks in [5, 50] {
        let text = generate_template(blocks);
        let document = parse(&text);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", blocks), &text, |b, text| {
            b.iter(|| parse(black_box(text)));
        });
        group.bench_with_input(BenchmarkId::new("unparse", blocks), &document, |b, document| {
            b.iter(|| unparse(black_box(document)));
        });
    }

    group.finish();
}

fn bench_weight_suggestion(c: &mut Criterion) {
    let engine = WeightProgressionEngine::new(&ProgressionConfig::default());
    let now = reference_now();
    let mut group = c.benchmark_group("weight_suggestion");

    for size in [10, 100, 1_000] {
        let history = generate_history(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| engine.suggest_next_weight(black_box(history), 8, false, now).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_matcher_ranking,
    bench_notation,
    bench_weight_suggestion
);
criterion_main!(benches);
