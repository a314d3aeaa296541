// ABOUTME: Integration tests for the readiness factor and its effect on generated days
// ABOUTME: Bounds, neutral defaults, adaptation modes and conditioning volume scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use periodize::engine::config::ReadinessConfig;
use periodize::engine::{
    generate_day, readiness_factor, DayReadiness, EngineConfig, ExerciseCatalog, NoopDiagnostics,
    PlanContext,
};
use periodize::models::{
    AdaptationMode, ConditioningWork, ReadinessEntry, TimeAvailability, TrainingGoal,
};

#[test]
fn test_absent_readiness_is_neutral() {
    let factor = readiness_factor(None, &ReadinessConfig::default());
    assert!((factor - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_factor_is_bounded_for_every_input() {
    let config = ReadinessConfig::default();
    for sleep in 1..=5 {
        for energy in 1..=5 {
            for soreness in 1..=5 {
                for stress in 1..=5 {
                    for score in [0_u8, 25, 50, 75, 100] {
                        let entry = ReadinessEntry {
                            date: None,
                            sleep_quality: sleep,
                            energy,
                            soreness,
                            stress,
                            time_availability: TimeAvailability::Standard,
                            readiness_score: score,
                        };
                        let factor = readiness_factor(Some(&entry), &config);
                        assert!((0.6..=1.2).contains(&factor), "factor {factor} out of bounds");
                    }
                }
            }
        }
    }
}

#[test]
fn test_extremes_hit_the_clamps() {
    let config = ReadinessConfig::default();
    let poor = readiness_factor(Some(&common::poor_readiness(None)), &config);
    assert!((poor - 0.6).abs() < f64::EPSILON);
    let great = readiness_factor(Some(&common::great_readiness(None)), &config);
    assert!((great - 1.2).abs() < f64::EPSILON);
}

#[test]
fn test_factor_formula_midrange() {
    // sleep 4 (+0.05), soreness 2 (+0.05), energy 3 (0), score 60 (+0.02)
    let entry = ReadinessEntry {
        date: None,
        sleep_quality: 4,
        energy: 3,
        soreness: 2,
        stress: 3,
        time_availability: TimeAvailability::Standard,
        readiness_score: 60,
    };
    let factor = readiness_factor(Some(&entry), &ReadinessConfig::default());
    assert!((factor - 1.12).abs() < 1e-9);
}

#[test]
fn test_fixed_mode_ignores_readiness() {
    let prefs = common::gym_profile(TrainingGoal::Hybrid).with_adaptation_mode(AdaptationMode::Fixed);
    let config = ReadinessConfig::default();
    let snapshot = DayReadiness::resolve(&prefs, Some(&common::poor_readiness(None)), &config);
    assert!(!snapshot.adjusted);
    assert!((snapshot.factor - 1.0).abs() < f64::EPSILON);
    assert_eq!(snapshot.time_availability, prefs.time_availability);
}

#[test]
fn test_entry_time_availability_overrides_profile() {
    let prefs = common::gym_profile(TrainingGoal::Hybrid);
    let entry = ReadinessEntry::from_ratings(None, 3, 3, 3, 3, TimeAvailability::Short);
    let snapshot = DayReadiness::resolve(&prefs, Some(&entry), &ReadinessConfig::default());
    assert_eq!(snapshot.time_availability, TimeAvailability::Short);
    assert!(!snapshot.adjusted);
}

#[test]
fn test_poor_readiness_shrinks_conditioning() {
    common::init_test_logging();
    let catalog = ExerciseCatalog::builtin();
    let prefs = common::gym_profile(TrainingGoal::Hybrid);
    let config = EngineConfig::default();
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    // Day 1 of the hybrid week is a conditioning slot
    let date = common::monday();
    let neutral = generate_day(&ctx, 1, date, None, common::created_at());
    let tired = generate_day(
        &ctx,
        1,
        date,
        Some(&common::poor_readiness(Some(date))),
        common::created_at(),
    );

    assert!(!neutral.readiness_adjusted);
    assert!(tired.readiness_adjusted);

    let neutral_block = neutral.conditioning().unwrap();
    let tired_block = tired.conditioning().unwrap();
    assert!(tired_block.estimated_minutes < neutral_block.estimated_minutes);
    assert!(tired_block
        .notes
        .iter()
        .any(|note| note.contains("readiness factor 0.60")));

    match (&neutral_block.work, &tired_block.work) {
        (ConditioningWork::Zone(a), ConditioningWork::Zone(b)) => {
            assert!(b.duration_minutes < a.duration_minutes);
        }
        other => panic!("expected zone work, got {other:?}"),
    }
}

#[test]
fn test_readiness_does_not_touch_strength() {
    let catalog = ExerciseCatalog::builtin();
    let prefs = common::gym_profile(TrainingGoal::Strength);
    let config = EngineConfig::default();
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    let date = common::monday();
    let neutral = generate_day(&ctx, 0, date, None, common::created_at());
    let tired = generate_day(
        &ctx,
        0,
        date,
        Some(&common::poor_readiness(None)),
        common::created_at(),
    );
    assert_eq!(neutral.strength(), tired.strength());
}
