// ABOUTME: Integration tests for multi-week training cycles and their summaries
// ABOUTME: Week multipliers, percent rounding, target weights and conditioning zone shifts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Days;
use periodize::engine::blocks::strength::target_weight;
use periodize::engine::programming_constants::cycle::MAX_CYCLE_WEEKS;
use periodize::engine::{
    generate_day, generate_training_cycle, summarize_cycle, EngineConfig, ExerciseCatalog,
    NoopDiagnostics, PlanContext,
};
use periodize::models::TrainingGoal;

#[test]
fn test_default_cycle_shape() {
    common::init_test_logging();
    let catalog = ExerciseCatalog::builtin();
    let prefs = common::gym_profile(TrainingGoal::Hybrid);
    let config = EngineConfig::default();
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    let cycle = generate_training_cycle(&ctx, common::monday(), None, &[], common::created_at());
    assert_eq!(cycle.weeks.len(), 4);
    assert_eq!(cycle.start_date, common::monday());
    assert_eq!(cycle.end_date, common::monday() + Days::new(27));
    assert_eq!(cycle.user_id, common::test_user_id());

    let multipliers: Vec<f64> = cycle.weeks.iter().map(|week| week.multiplier).collect();
    assert_eq!(multipliers, vec![1.0, 1.05, 1.08, 0.8]);

    let indices: Vec<u32> = cycle.days().map(|day| day.day_index).collect();
    assert_eq!(indices, (0..28).collect::<Vec<u32>>());
    assert!(cycle.weeks.iter().all(|week| week.days.len() == 7));
}

#[test]
fn test_explicit_week_count_and_minimum() {
    let catalog = ExerciseCatalog::builtin();
    let prefs = common::gym_profile(TrainingGoal::Strength);
    let config = EngineConfig::default();
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    let six = generate_training_cycle(&ctx, common::monday(), Some(6), &[], common::created_at());
    assert_eq!(six.weeks.len(), 6);
    assert!((six.weeks[5].multiplier - 0.8).abs() < f64::EPSILON);

    let zero = generate_training_cycle(&ctx, common::monday(), Some(0), &[], common::created_at());
    assert_eq!(zero.weeks.len(), 1);
    assert_eq!(zero.end_date, common::monday() + Days::new(6));
}

#[test]
fn test_oversized_week_count_is_clamped() {
    let catalog = ExerciseCatalog::builtin();
    let prefs = common::bodyweight_profile(TrainingGoal::General);
    let config = EngineConfig::default();
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    // u32::MAX / 7 + 1 weeks would overflow the day count
    let cycle = generate_training_cycle(
        &ctx,
        common::monday(),
        Some(u32::MAX / 7 + 1),
        &[],
        common::created_at(),
    );
    assert_eq!(cycle.weeks.len(), MAX_CYCLE_WEEKS as usize);
    assert_eq!(
        cycle.end_date,
        common::monday() + Days::new(u64::from(MAX_CYCLE_WEEKS) * 7 - 1)
    );
    assert_eq!(
        cycle.days().last().map(|day| day.day_index),
        Some(MAX_CYCLE_WEEKS * 7 - 1)
    );
}

#[test]
fn test_first_week_matches_daily_generation() {
    let catalog = ExerciseCatalog::builtin();
    let prefs = common::gym_profile(TrainingGoal::Hybrid);
    let config = EngineConfig::default();
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    let cycle = generate_training_cycle(&ctx, common::monday(), None, &[], common::created_at());
    for day in &cycle.weeks[0].days {
        let plain = generate_day(&ctx, day.day_index, day.date, None, common::created_at());
        assert_eq!(*day, plain, "day {}", day.day_index);
    }
}

#[test]
fn test_percent_rounds_to_two_and_a_half() {
    let catalog = ExerciseCatalog::builtin();
    let prefs = common::gym_profile(TrainingGoal::Hybrid);
    let config = EngineConfig::default();
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    let cycle = generate_training_cycle(&ctx, common::monday(), None, &[], common::created_at());

    // Day 7 is a squat deload day: 60% x 1.05 = 63 -> 62.5
    let day = &cycle.weeks[1].days[0];
    let strength = day.strength().unwrap();
    let set = strength.sets[0];
    assert!((set.target_percent_one_rep_max.unwrap() - 62.5).abs() < f64::EPSILON);
    assert!((set.target_weight.unwrap() - 87.5).abs() < f64::EPSILON);

    // Day 21 is a squat load day: 75% x 0.8 = 60, 140 x 60% = 84 -> 85
    let day = &cycle.weeks[3].days[0];
    let set = day.strength().unwrap().sets[0];
    assert!((set.target_percent_one_rep_max.unwrap() - 60.0).abs() < f64::EPSILON);
    assert!((set.target_weight.unwrap() - 85.0).abs() < f64::EPSILON);
}

#[test]
fn test_multiplier_rescales_every_strength_set() {
    let catalog = ExerciseCatalog::builtin();
    let prefs = common::gym_profile(TrainingGoal::Strength);
    let config = EngineConfig::default();
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    let cycle = generate_training_cycle(&ctx, common::monday(), None, &[], common::created_at());
    for week in &cycle.weeks {
        for day in &week.days {
            let plain = generate_day(&ctx, day.day_index, day.date, None, common::created_at());
            let (Some(scaled), Some(original)) = (day.strength(), plain.strength()) else {
                continue;
            };
            for (set, base) in scaled.sets.iter().zip(&original.sets) {
                let expected =
                    (base.target_percent_one_rep_max.unwrap() * week.multiplier / 2.5).round() * 2.5;
                let percent = set.target_percent_one_rep_max.unwrap();
                assert!((percent - expected).abs() < 1e-9);
                assert_eq!(
                    set.target_weight,
                    scaled.reference_one_rep_max.map(|orm| target_weight(orm, percent))
                );
                assert_eq!(set.target_reps, base.target_reps);
                assert_eq!(set.target_rpe, base.target_rpe);
            }
        }
    }
}

#[test]
fn test_conditioning_zone_follows_multiplier() {
    let catalog = ExerciseCatalog::builtin();
    let prefs = common::gym_profile(TrainingGoal::Hybrid);
    let config = EngineConfig::default();
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    let cycle = generate_training_cycle(&ctx, common::monday(), None, &[], common::created_at());
    let mut checked = 0;
    for week in &cycle.weeks {
        for day in &week.days {
            let plain = generate_day(&ctx, day.day_index, day.date, None, common::created_at());
            let (Some(shifted), Some(original)) = (day.conditioning(), plain.conditioning()) else {
                continue;
            };
            let expected = match week.week_index {
                2 => original.zone + 1,
                3 => original.zone - 1,
                _ => original.zone,
            };
            assert_eq!(shifted.zone, expected, "day {}", day.day_index);
            checked += 1;
        }
    }
    assert!(checked > 0);
}

#[test]
fn test_cycle_summary_totals() {
    let catalog = ExerciseCatalog::builtin();
    let prefs = common::gym_profile(TrainingGoal::Hybrid);
    let config = EngineConfig::default();
    let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);

    let cycle = generate_training_cycle(&ctx, common::monday(), None, &[], common::created_at());
    let summary = summarize_cycle(&cycle);

    assert_eq!(summary.cycle_id, cycle.id);
    assert_eq!(summary.weeks.len(), 4);
    assert_eq!(summary.totals.training_days, 24);
    assert_eq!(summary.totals.rest_days, 4);
    assert_eq!(
        summary.totals.total_minutes,
        cycle.days().map(|day| day.total_minutes).sum::<u32>()
    );
    assert_eq!(
        summary.totals.training_days,
        summary
            .weeks
            .iter()
            .map(|week| week.summary.training_days)
            .sum::<u32>()
    );
    assert!(summary.totals.conditioning_minutes > 0);
    assert!(!summary.totals.strength_sets.is_empty());
}
