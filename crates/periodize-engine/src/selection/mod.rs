// ABOUTME: Exercise selector resolving pattern + equipment + difficulty into one exercise
// ABOUTME: Tries candidate providers in order and rotates deterministically by day index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Exercise selection
//!
//! Resolution tries, in order:
//! 1. strength exercises of the requested pattern
//! 2. strength exercises of each fallback pattern (`fallback_patterns`)
//! 3. any strength exercise the equipment permits
//!
//! The first non-empty candidate set wins and the pick is
//! `candidates[day_index % candidates.len()]`. Selection is never random.

pub mod providers;

pub use providers::{fallback_patterns, CandidateProvider, SelectionTier};

use periodize_core::models::{Difficulty, ExerciseDefinition, MovementPattern};
use std::collections::BTreeSet;

use crate::catalog::{ExerciseCatalog, ExerciseIdx};

/// Arguments to a selection
#[derive(Debug, Clone, Copy)]
pub struct SelectionRequest<'a> {
    /// Requested movement pattern
    pub pattern: MovementPattern,
    /// Equipment the athlete owns
    pub equipment: &'a BTreeSet<String>,
    /// Preferred difficulty tier
    pub difficulty: Difficulty,
    /// Rotation key
    pub day_index: u32,
}

/// A resolved exercise and the tier it came from
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// Arena position of the pick
    pub idx: ExerciseIdx,
    /// The picked definition
    pub exercise: &'a ExerciseDefinition,
    /// Cascade tier that produced it
    pub tier: SelectionTier,
}

/// Pick `candidates[day_index % len]`
#[must_use]
pub fn rotate(candidates: &[ExerciseIdx], day_index: u32) -> Option<ExerciseIdx> {
    if candidates.is_empty() {
        return None;
    }
    candidates.get(day_index as usize % candidates.len()).copied()
}

/// Resolve a request through the fallback cascade
///
/// Returns `None` only when no strength exercise at all is permitted by the
/// athlete's equipment.
#[must_use]
pub fn select_exercise<'a>(
    catalog: &'a ExerciseCatalog,
    request: &SelectionRequest<'_>,
) -> Option<Selection<'a>> {
    CandidateProvider::cascade(request.pattern)
        .into_iter()
        .find_map(|provider| {
            let candidates = provider.candidates(
                catalog,
                request.pattern,
                request.equipment,
                request.difficulty,
            );
            let idx = rotate(&candidates, request.day_index)?;
            let exercise = catalog.get(idx)?;
            Some(Selection {
                idx,
                exercise,
                tier: provider.tier(),
            })
        })
}
