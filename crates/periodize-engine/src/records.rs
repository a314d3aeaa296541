// ABOUTME: Personal-record detector walking a finished session against prior bests
// ABOUTME: Qualification rule and estimation formula come from RecordsConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use std::collections::HashMap;

use periodize_core::models::{PrRecord, SessionLog};

use crate::algorithms::OneRepMaxAlgorithm;
use crate::config::RecordsConfig;
use crate::ids::pr_record_id;

/// Blended one-rep-max estimate; `0.0` for non-positive weight or reps
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: i32, rpe: Option<f64>) -> f64 {
    OneRepMaxAlgorithm::Blended.estimate(weight, reps, rpe)
}

/// Best estimated one-rep-max per exercise id
#[must_use]
pub fn best_records(prior: &[PrRecord]) -> HashMap<String, f64> {
    let mut best: HashMap<String, f64> = HashMap::new();
    for record in prior {
        best.entry(record.exercise_id.clone())
            .and_modify(|current| *current = current.max(record.estimated_one_rep_max))
            .or_insert(record.estimated_one_rep_max);
    }
    best
}

/// New personal records set during `session`
///
/// Sets are walked in order and only completed sets count. Each qualifying set
/// raises the running best for its exercise, so a later set in the same session
/// must beat the earlier one to produce a second record.
#[must_use]
pub fn detect_personal_records(
    session: &SessionLog,
    prior: &[PrRecord],
    config: &RecordsConfig,
) -> Vec<PrRecord> {
    let mut best = best_records(prior);
    let mut records = Vec::new();

    for (position, set) in session.sets.iter().enumerate() {
        if !set.completed {
            continue;
        }
        let estimate = config.algorithm.estimate(set.weight, set.reps, set.rpe);
        let previous = best.get(&set.exercise_id).copied();
        if !config.qualification.qualifies(estimate, previous) {
            continue;
        }

        records.push(PrRecord {
            id: pr_record_id(session.user_id, session.id, &set.exercise_id, position),
            user_id: session.user_id,
            exercise_id: set.exercise_id.clone(),
            date: session.date,
            estimated_one_rep_max: estimate,
            change_from_previous: previous.map(|previous_best| estimate - previous_best),
            weight: Some(set.weight),
            reps: Some(set.reps),
        });
        best.insert(set.exercise_id.clone(), estimate);
    }

    records
}
