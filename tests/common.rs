// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, athlete profiles, dates and readiness entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `periodize`

use std::env;
use std::sync::Once;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use periodize::constants::equipment;
use periodize::models::{
    ExperienceLevel, LiftKey, ReadinessEntry, TimeAvailability, TrainingGoal, UserPreferences,
};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed user id for deterministic fixtures
pub fn test_user_id() -> Uuid {
    Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001)
}

/// A Monday
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

/// Fixed generation timestamp
pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap()
}

/// Full commercial gym
pub fn full_gym() -> Vec<&'static str> {
    vec![
        equipment::BARBELL,
        equipment::RACK,
        equipment::BENCH,
        equipment::DUMBBELLS,
        equipment::KETTLEBELL,
        equipment::PULL_UP_BAR,
        equipment::CABLE_MACHINE,
        equipment::BANDS,
        equipment::ROWER,
        equipment::SKI_ERG,
        equipment::AIR_BIKE,
        equipment::TREADMILL,
        equipment::SLED,
        equipment::WALL_BALL,
        equipment::SANDBAG,
        equipment::PLYO_BOX,
        equipment::TRAP_BAR,
    ]
}

/// Profile with a full gym and recorded maxes
pub fn gym_profile(goal: TrainingGoal) -> UserPreferences {
    UserPreferences::new(test_user_id(), goal, ExperienceLevel::Intermediate)
        .with_equipment(full_gym())
        .with_one_rep_max(LiftKey::Squat, 140.0)
        .with_one_rep_max(LiftKey::Deadlift, 180.0)
        .with_one_rep_max(LiftKey::Bench, 100.0)
        .with_one_rep_max(LiftKey::OverheadPress, 60.0)
}

/// Profile with no equipment at all
pub fn bodyweight_profile(goal: TrainingGoal) -> UserPreferences {
    UserPreferences::new(test_user_id(), goal, ExperienceLevel::Beginner)
}

/// Readiness entry for a rough day
pub fn poor_readiness(date: Option<NaiveDate>) -> ReadinessEntry {
    ReadinessEntry::from_ratings(date, 1, 1, 5, 5, TimeAvailability::Standard)
}

/// Readiness entry for a great day
pub fn great_readiness(date: Option<NaiveDate>) -> ReadinessEntry {
    ReadinessEntry::from_ratings(date, 5, 5, 1, 1, TimeAvailability::Long)
}
