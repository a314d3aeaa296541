// ABOUTME: Exercise catalog arena with an id-to-index map built once at construction
// ABOUTME: Selection filters work over ExerciseIdx references and never mutate the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Exercise catalog
//!
//! Definitions live in a flat `Vec` (the arena). An `ExerciseIdx` is a stable
//! position in that arena; filters return index lists so candidate sets stay
//! cheap to build and the order of the arena defines rotation order.

mod builtin;

use periodize_core::errors::{AppError, AppResult};
use periodize_core::models::ExerciseDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position of an exercise within the catalog arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExerciseIdx(usize);

impl ExerciseIdx {
    /// Raw arena position
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Immutable exercise library
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    exercises: Vec<ExerciseDefinition>,
    by_id: HashMap<String, ExerciseIdx>,
}

impl ExerciseCatalog {
    /// Build a catalog from definitions, preserving their order
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `InvalidInput` when two definitions share an id
    pub fn from_definitions(exercises: Vec<ExerciseDefinition>) -> AppResult<Self> {
        let mut by_id = HashMap::with_capacity(exercises.len());
        for (position, exercise) in exercises.iter().enumerate() {
            if by_id
                .insert(exercise.id.clone(), ExerciseIdx(position))
                .is_some()
            {
                return Err(AppError::invalid_input(format!(
                    "Duplicate exercise id in catalog: '{}'",
                    exercise.id
                ))
                .with_field("id"));
            }
        }
        Ok(Self { exercises, by_id })
    }

    /// The built-in exercise library
    #[must_use]
    pub fn builtin() -> Self {
        let exercises = builtin::definitions();
        let by_id = exercises
            .iter()
            .enumerate()
            .map(|(position, exercise)| (exercise.id.clone(), ExerciseIdx(position)))
            .collect();
        Self { exercises, by_id }
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Definition at an arena position
    ///
    /// Indices only come from this catalog, so a miss means the index belongs
    /// to a different catalog instance.
    #[must_use]
    pub fn get(&self, idx: ExerciseIdx) -> Option<&ExerciseDefinition> {
        self.exercises.get(idx.0)
    }

    /// Arena position of an exercise id
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<ExerciseIdx> {
        self.by_id.get(id).copied()
    }

    /// Definition for an exercise id
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&ExerciseDefinition> {
        self.index_of(id).and_then(|idx| self.get(idx))
    }

    /// All definitions in arena order
    pub fn iter(&self) -> impl Iterator<Item = &ExerciseDefinition> {
        self.exercises.iter()
    }

    /// Arena positions of every definition matching `predicate`, in arena order
    pub fn indices_where<F>(&self, predicate: F) -> Vec<ExerciseIdx>
    where
        F: Fn(&ExerciseDefinition) -> bool,
    {
        self.exercises
            .iter()
            .enumerate()
            .filter(|(_, exercise)| predicate(exercise))
            .map(|(position, _)| ExerciseIdx(position))
            .collect()
    }
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodize_core::models::{ExerciseTag, MovementPattern};
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn test_builtin_ids_are_unique_and_indexed() {
        let catalog = ExerciseCatalog::builtin();
        let ids: HashSet<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        for exercise in catalog.iter() {
            assert_eq!(
                catalog.by_id(&exercise.id).map(|e| e.id.as_str()),
                Some(exercise.id.as_str())
            );
        }
    }

    #[test]
    fn test_every_strength_pattern_has_a_bodyweight_option() {
        let catalog = ExerciseCatalog::builtin();
        let none = BTreeSet::new();
        for pattern in [
            MovementPattern::Squat,
            MovementPattern::Hinge,
            MovementPattern::HorizontalPush,
            MovementPattern::Lunge,
        ] {
            let found = catalog.indices_where(|e| {
                e.pattern == pattern && e.has_tag(ExerciseTag::Strength) && e.is_permitted_by(&none)
            });
            assert!(!found.is_empty(), "{pattern} has no bodyweight strength option");
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = ExerciseCatalog::builtin();
        let mut definitions: Vec<_> = catalog.iter().take(2).cloned().collect();
        let (head, tail) = definitions.split_at_mut(1);
        tail[0].id.clone_from(&head[0].id);
        assert!(ExerciseCatalog::from_definitions(definitions).is_err());
    }
}
