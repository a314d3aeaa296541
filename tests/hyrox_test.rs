// ABOUTME: Integration tests for HYROX templates, station fallbacks and race simulation
// ABOUTME: Equipment gating, readiness scaling of quantities and loads, day-level dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeSet;

use periodize::engine::conditioning::hyrox::{available_templates, hyrox_workout};
use periodize::engine::conditioning::race::{estimated_race_minutes, simulate_race, RACE_ORDER};
use periodize::engine::{generate_day, EngineConfig, ExerciseCatalog, NoopDiagnostics, PlanContext, Wave};
use periodize::models::{
    ConditioningWork, HyroxStationKind, HyroxTemplateKind, StationQuantity, TimeAvailability,
    TrainingGoal,
};

fn gym() -> BTreeSet<String> {
    common::full_gym()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

#[test]
fn test_full_gym_unlocks_every_template() {
    assert_eq!(
        available_templates(&gym()),
        vec![
            HyroxTemplateKind::SledPushPull,
            HyroxTemplateKind::WallBallChipper,
            HyroxTemplateKind::MachineIntervals,
            HyroxTemplateKind::BurpeeBroadJump,
        ]
    );
}

#[test]
fn test_race_alternates_runs_and_stations() {
    let race = simulate_race(&gym(), 1.0);
    assert_eq!(race.segments.len(), 16);

    for (pair, kind) in race.segments.chunks(2).zip(RACE_ORDER) {
        assert_eq!(pair[0].station, HyroxStationKind::Run);
        assert_eq!(pair[0].quantity, StationQuantity::Meters(1000));
        assert_eq!(pair[1].station, kind);
        assert!(!pair[1].substituted);
    }

    let sled_push = &race.segments[3];
    assert_eq!(sled_push.exercise_id, "sled_push");
    assert_eq!(sled_push.load_kg, Some(152.0));
}

#[test]
fn test_race_scales_with_readiness_and_substitutes() {
    let race = simulate_race(&BTreeSet::new(), 0.6);
    assert!((race.readiness_factor - 0.6).abs() < f64::EPSILON);

    let runs: Vec<_> = race
        .segments
        .iter()
        .filter(|segment| segment.station == HyroxStationKind::Run)
        .collect();
    assert_eq!(runs.len(), 8);
    assert!(runs
        .iter()
        .all(|run| run.quantity == StationQuantity::Meters(600)));

    let ski = &race.segments[1];
    assert!(ski.substituted);
    assert_eq!(ski.exercise_id, "burpee");
    assert_eq!(ski.quantity, StationQuantity::Reps(18));

    let wall_ball = &race.segments[15];
    assert_eq!(wall_ball.exercise_id, "air_squat");
    assert_eq!(wall_ball.quantity, StationQuantity::Reps(60));
    assert!(wall_ball.load_kg.is_none());

    let broad_jumps = &race.segments[7];
    assert!(!broad_jumps.substituted);
    assert_eq!(broad_jumps.quantity, StationQuantity::Meters(48));
}

#[test]
fn test_race_loads_scale_with_readiness() {
    let race = simulate_race(&gym(), 0.6);
    // 152 x 0.6 = 91.2
    assert_eq!(race.segments[3].load_kg, Some(91.0));
}

#[test]
fn test_estimated_race_minutes() {
    assert_eq!(estimated_race_minutes(1.0), 76);
    assert_eq!(estimated_race_minutes(0.6), 46);
}

#[test]
fn test_template_loads_stay_fixed() {
    // Day 1 rotates onto the wall-ball chipper with a full gym
    let workout = hyrox_workout(1, &gym(), TimeAvailability::Standard, Wave::Load, 0.6);
    assert_eq!(workout.template, HyroxTemplateKind::WallBallChipper);

    let wall_ball = &workout.stations[0];
    assert_eq!(wall_ball.station, HyroxStationKind::WallBall);
    assert_eq!(wall_ball.quantity, StationQuantity::Reps(15));
    assert_eq!(wall_ball.load_kg, Some(6.0));
}

#[test]
fn test_peak_day_dispatches_race_simulation() {
    common::init_test_logging();
    let catalog = ExerciseCatalog::builtin();
    let config = EngineConfig::default();

    // Day 2 is a peak day on an even weekday
    let prefs = common::gym_profile(TrainingGoal::Hyrox);
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);
    let day = generate_day(&ctx, 2, common::monday(), None, common::created_at());
    let conditioning = day.conditioning().unwrap();
    assert_eq!(conditioning.title, "HYROX Race Simulation");
    match &conditioning.work {
        ConditioningWork::RaceSimulation(race) => assert_eq!(race.segments.len(), 16),
        other => panic!("expected race simulation, got {other:?}"),
    }

    let short = common::gym_profile(TrainingGoal::Hyrox)
        .with_time_availability(TimeAvailability::Short);
    let ctx = PlanContext::new(&catalog, &short, &config, &NoopDiagnostics);
    let day = generate_day(&ctx, 2, common::monday(), None, common::created_at());
    assert!(matches!(
        day.conditioning().unwrap().work,
        ConditioningWork::Hyrox(_)
    ));
}
