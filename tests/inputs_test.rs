// ABOUTME: Tests for JSON input loading of profiles, readiness histories and session logs
// ABOUTME: Uses temporary files for realistic file-based input handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::PathBuf;

use periodize::errors::ErrorCode;
use periodize::inputs::{load_prior_records, load_profile, load_readiness, load_session};
use periodize::models::{LiftKey, TimeAvailability, TrainingGoal};
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

fn write_json(dir: &TempDir, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn test_profile_without_user_id_gets_default() {
    let dir = TempDir::new().unwrap();
    let path = write_json(
        &dir,
        "profile.json",
        &json!({
            "user_id": Uuid::nil(),
            "goal": "hyrox",
            "experience": "intermediate",
            "days_per_week": 5,
            "equipment": ["barbell", "sled"],
            "one_rep_maxes": { "squat": 140.0 }
        }),
    );

    let prefs = load_profile(&path, common::test_user_id()).unwrap();
    assert_eq!(prefs.user_id, common::test_user_id());
    assert_eq!(prefs.goal, TrainingGoal::Hyrox);
    assert_eq!(prefs.days_per_week, 5);
    assert!(prefs.equipment.contains("sled"));
    assert_eq!(prefs.one_rep_maxes.get(&LiftKey::Squat), Some(&140.0));
    assert_eq!(prefs.time_availability, TimeAvailability::Standard);
}

#[test]
fn test_invalid_profile_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_json(
        &dir,
        "profile.json",
        &json!({
            "user_id": common::test_user_id(),
            "goal": "strength",
            "experience": "beginner",
            "days_per_week": 9
        }),
    );

    let err = load_profile(&path, Uuid::nil()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = load_profile(&dir.path().join("absent.json"), Uuid::nil()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_readiness_accepts_array_or_single_entry() {
    let dir = TempDir::new().unwrap();
    let entry = json!({
        "date": "2025-01-06",
        "sleep_quality": 4,
        "energy": 4,
        "soreness": 2,
        "stress": 2,
        "time_availability": "long",
        "readiness_score": 75
    });

    let array = write_json(&dir, "history.json", &json!([entry.clone(), entry.clone()]));
    let history = load_readiness(Some(&array)).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date, Some(common::monday()));
    assert_eq!(history[0].time_availability, TimeAvailability::Long);

    let single = write_json(&dir, "today.json", &entry);
    assert_eq!(load_readiness(Some(&single)).unwrap().len(), 1);

    assert!(load_readiness(None).unwrap().is_empty());
}

#[test]
fn test_out_of_range_readiness_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_json(
        &dir,
        "bad.json",
        &json!({
            "sleep_quality": 7,
            "energy": 3,
            "soreness": 3,
            "stress": 3,
            "readiness_score": 50
        }),
    );
    assert!(load_readiness(Some(&path)).is_err());
}

#[test]
fn test_session_and_prior_records() {
    let dir = TempDir::new().unwrap();
    let session_path = write_json(
        &dir,
        "session.json",
        &json!({
            "id": Uuid::from_u128(9),
            "user_id": common::test_user_id(),
            "date": "2025-01-06",
            "sets": [
                { "exercise_id": "back_squat", "weight": 140.0, "reps": 5 },
                { "exercise_id": "back_squat", "weight": 150.0, "reps": 3, "rpe": 9.0, "completed": false }
            ]
        }),
    );
    let session = load_session(&session_path).unwrap();
    assert_eq!(session.sets.len(), 2);
    assert!(session.sets[0].completed);
    assert!(!session.sets[1].completed);

    let prior_path = write_json(
        &dir,
        "prior.json",
        &json!([{
            "id": Uuid::nil(),
            "user_id": common::test_user_id(),
            "exercise_id": "back_squat",
            "date": "2024-12-01",
            "estimated_1rm": 150.0,
            "change_from_previous": null
        }]),
    );
    let prior = load_prior_records(Some(&prior_path)).unwrap();
    assert_eq!(prior.len(), 1);
    assert!((prior[0].estimated_one_rep_max - 150.0).abs() < f64::EPSILON);
    assert!(load_prior_records(None).unwrap().is_empty());
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(load_session(&path).is_err());
}
