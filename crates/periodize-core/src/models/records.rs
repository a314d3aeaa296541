// ABOUTME: Finished session log and personal-record models
// ABOUTME: PR records are created by the detector and never mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedSet {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Load in kilograms
    pub weight: f64,
    /// Repetitions performed
    pub reps: i32,
    /// Reported RPE, if any
    #[serde(default)]
    pub rpe: Option<f64>,
    /// Whether the set was completed
    #[serde(default = "default_completed")]
    pub completed: bool,
}

const fn default_completed() -> bool {
    true
}

/// Finished session log handed over by the store layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    /// Session identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day the session was performed
    pub date: NaiveDate,
    /// Sets in the order they were performed
    pub sets: Vec<CompletedSet>,
}

/// Personal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrRecord {
    /// Deterministic identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Catalog exercise id
    pub exercise_id: String,
    /// Day the record was set
    pub date: NaiveDate,
    /// Estimated one-rep-max in kilograms
    #[serde(rename = "estimated_1rm")]
    pub estimated_one_rep_max: f64,
    /// Improvement over the previous best, when one existed
    pub change_from_previous: Option<f64>,
    /// Load of the qualifying set
    #[serde(default)]
    pub weight: Option<f64>,
    /// Repetitions of the qualifying set
    #[serde(default)]
    pub reps: Option<i32>,
}

impl PrRecord {
    /// Record carrying only the fields the store persists for historical bests
    #[must_use]
    pub fn historical(
        user_id: Uuid,
        exercise_id: impl Into<String>,
        date: NaiveDate,
        estimated_one_rep_max: f64,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            user_id,
            exercise_id: exercise_id.into(),
            date,
            estimated_one_rep_max,
            change_from_previous: None,
            weight: None,
            reps: None,
        }
    }
}
