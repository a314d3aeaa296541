// ABOUTME: Criterion benchmarks for plan generation and personal-record detection
// ABOUTME: Measures day, week, microcycle and cycle generation plus PR scans over long sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Criterion benchmarks for the periodization engine.
//!
//! Generation runs against the built-in catalog with a full-gym profile and a
//! readiness history covering every generated day.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use chrono::{Days, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use periodize::constants::equipment;
use periodize::engine::config::RecordsConfig;
use periodize::engine::{
    detect_personal_records, generate_day, generate_microcycle, generate_training_cycle,
    generate_week, EngineConfig, ExerciseCatalog, NoopDiagnostics, PlanContext,
};
use periodize::models::{
    CompletedSet, ExperienceLevel, LiftKey, PrRecord, ReadinessEntry, SessionLog,
    TimeAvailability, TrainingGoal, UserPreferences,
};
use uuid::Uuid;

const EXERCISES: [&str; 4] = ["back_squat", "deadlift", "bench_press", "overhead_press"];

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

fn profile(goal: TrainingGoal) -> UserPreferences {
    UserPreferences::new(Uuid::from_u128(1), goal, ExperienceLevel::Intermediate)
        .with_equipment([
            equipment::BARBELL,
            equipment::RACK,
            equipment::BENCH,
            equipment::DUMBBELLS,
            equipment::KETTLEBELL,
            equipment::PULL_UP_BAR,
            equipment::ROWER,
            equipment::SKI_ERG,
            equipment::SLED,
            equipment::WALL_BALL,
            equipment::SANDBAG,
        ])
        .with_one_rep_max(LiftKey::Squat, 140.0)
        .with_one_rep_max(LiftKey::Deadlift, 180.0)
        .with_one_rep_max(LiftKey::Bench, 100.0)
}

fn readiness_history(days: u64) -> Vec<ReadinessEntry> {
    (0..days)
        .map(|offset| {
            let rating = (offset % 5) as u8 + 1;
            ReadinessEntry::from_ratings(
                start_date().checked_add_days(Days::new(offset)),
                rating,
                rating,
                6 - rating,
                3,
                TimeAvailability::Standard,
            )
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn session(set_count: usize) -> SessionLog {
    SessionLog {
        id: Uuid::from_u128(2),
        user_id: Uuid::from_u128(1),
        date: start_date(),
        sets: (0..set_count)
            .map(|index| CompletedSet {
                exercise_id: EXERCISES[index % EXERCISES.len()].to_owned(),
                weight: 60.0 + (index / EXERCISES.len()) as f64 * 2.5,
                reps: 5,
                rpe: Some(8.0),
                completed: true,
            })
            .collect(),
    }
}

fn bench_generation(c: &mut Criterion) {
    let catalog = ExerciseCatalog::builtin();
    let config = EngineConfig::default();
    let created_at = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap();
    let history = readiness_history(84);

    let mut group = c.benchmark_group("plan_generation");
    for goal in [TrainingGoal::Strength, TrainingGoal::Hybrid, TrainingGoal::Hyrox] {
        let prefs = profile(goal);
        let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

        group.bench_with_input(BenchmarkId::new("day", goal), &ctx, |b, ctx| {
            b.iter(|| {
                black_box(generate_day(
                    ctx,
                    black_box(2),
                    start_date(),
                    history.first(),
                    created_at,
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("week", goal), &ctx, |b, ctx| {
            b.iter(|| black_box(generate_week(ctx, start_date(), &history, created_at)));
        });

        group.bench_with_input(BenchmarkId::new("microcycle", goal), &ctx, |b, ctx| {
            b.iter(|| black_box(generate_microcycle(ctx, start_date(), &history, created_at)));
        });
    }
    group.finish();
}

fn bench_training_cycle(c: &mut Criterion) {
    let catalog = ExerciseCatalog::builtin();
    let config = EngineConfig::default();
    let created_at = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap();
    let prefs = profile(TrainingGoal::Hybrid);
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    let mut group = c.benchmark_group("training_cycle");
    group.sample_size(50);
    for weeks in [4_u32, 12, 52] {
        let history = readiness_history(u64::from(weeks) * 7);
        group.throughput(Throughput::Elements(u64::from(weeks) * 7));
        group.bench_with_input(BenchmarkId::from_parameter(weeks), &weeks, |b, &weeks| {
            b.iter(|| {
                black_box(generate_training_cycle(
                    &ctx,
                    start_date(),
                    Some(weeks),
                    &history,
                    created_at,
                ))
            });
        });
    }
    group.finish();
}

fn bench_personal_records(c: &mut Criterion) {
    let config = RecordsConfig::default();
    let prior: Vec<PrRecord> = EXERCISES
        .iter()
        .map(|id| PrRecord::historical(Uuid::from_u128(1), *id, start_date(), 80.0))
        .collect();

    let mut group = c.benchmark_group("personal_records");
    for set_count in [10_usize, 100, 1_000] {
        let log = session(set_count);
        group.throughput(Throughput::Elements(set_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(set_count), &log, |b, log| {
            b.iter(|| black_box(detect_personal_records(log, &prior, &config)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_generation,
    bench_training_cycle,
    bench_personal_records
);
criterion_main!(benches);
