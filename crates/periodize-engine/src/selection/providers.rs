// ABOUTME: Candidate providers for the exercise selection cascade
// ABOUTME: Each provider maps (pattern, equipment, difficulty) to a candidate index set

use periodize_core::models::{Difficulty, ExerciseDefinition, ExerciseTag, MovementPattern};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{ExerciseCatalog, ExerciseIdx};

/// Cascade tier that produced a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTier {
    /// Requested pattern matched directly
    Exact,
    /// A related pattern from the fallback list matched
    Fallback,
    /// Any permitted strength exercise
    AnyStrength,
}

impl SelectionTier {
    /// Stable name used in diagnostics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fallback => "fallback",
            Self::AnyStrength => "any_strength",
        }
    }
}

/// Ordered related patterns tried when the requested pattern has no candidates
#[must_use]
pub const fn fallback_patterns(pattern: MovementPattern) -> &'static [MovementPattern] {
    match pattern {
        MovementPattern::Squat => &[MovementPattern::Hinge, MovementPattern::Lunge],
        MovementPattern::Hinge => &[MovementPattern::Squat, MovementPattern::Lunge],
        MovementPattern::Lunge => &[MovementPattern::Squat, MovementPattern::Hinge],
        MovementPattern::HorizontalPush => &[MovementPattern::VerticalPush],
        MovementPattern::VerticalPush => &[MovementPattern::HorizontalPush],
        MovementPattern::HorizontalPull => &[MovementPattern::VerticalPull],
        MovementPattern::VerticalPull => &[MovementPattern::HorizontalPull],
        MovementPattern::Carry => &[MovementPattern::Hinge],
        MovementPattern::Core | MovementPattern::Conditioning => &[],
    }
}

/// One step of the selection cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateProvider {
    /// Strength exercises of the requested pattern
    ExactPattern,
    /// Strength exercises of a related pattern
    FallbackPattern(MovementPattern),
    /// Every strength exercise the equipment permits
    AnyStrength,
}

impl CandidateProvider {
    /// Providers for a pattern, in the order they are tried
    #[must_use]
    pub fn cascade(pattern: MovementPattern) -> Vec<Self> {
        let fallbacks = fallback_patterns(pattern);
        let mut providers = Vec::with_capacity(fallbacks.len() + 2);
        providers.push(Self::ExactPattern);
        providers.extend(fallbacks.iter().copied().map(Self::FallbackPattern));
        providers.push(Self::AnyStrength);
        providers
    }

    /// Tier reported when this provider yields the selection
    #[must_use]
    pub const fn tier(&self) -> SelectionTier {
        match self {
            Self::ExactPattern => SelectionTier::Exact,
            Self::FallbackPattern(_) => SelectionTier::Fallback,
            Self::AnyStrength => SelectionTier::AnyStrength,
        }
    }

    /// Candidate set for a request, narrowed to the exact difficulty when any
    /// candidate matches it
    #[must_use]
    pub fn candidates(
        &self,
        catalog: &ExerciseCatalog,
        pattern: MovementPattern,
        equipment: &BTreeSet<String>,
        difficulty: Difficulty,
    ) -> Vec<ExerciseIdx> {
        let pattern_matches = |exercise: &ExerciseDefinition| match self {
            Self::ExactPattern => exercise.pattern == pattern,
            Self::FallbackPattern(fallback) => exercise.pattern == *fallback,
            Self::AnyStrength => true,
        };
        let pool = catalog.indices_where(|exercise| {
            exercise.has_tag(ExerciseTag::Strength)
                && exercise.is_permitted_by(equipment)
                && pattern_matches(exercise)
        });
        narrow_to_difficulty(catalog, pool, difficulty)
    }
}

fn narrow_to_difficulty(
    catalog: &ExerciseCatalog,
    pool: Vec<ExerciseIdx>,
    difficulty: Difficulty,
) -> Vec<ExerciseIdx> {
    let exact: Vec<ExerciseIdx> = pool
        .iter()
        .copied()
        .filter(|idx| {
            catalog
                .get(*idx)
                .is_some_and(|exercise| exercise.difficulty == difficulty)
        })
        .collect();
    if exact.is_empty() {
        pool
    } else {
        exact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_order() {
        assert_eq!(
            CandidateProvider::cascade(MovementPattern::Squat),
            vec![
                CandidateProvider::ExactPattern,
                CandidateProvider::FallbackPattern(MovementPattern::Hinge),
                CandidateProvider::FallbackPattern(MovementPattern::Lunge),
                CandidateProvider::AnyStrength,
            ]
        );
        assert_eq!(
            CandidateProvider::cascade(MovementPattern::Core),
            vec![CandidateProvider::ExactPattern, CandidateProvider::AnyStrength]
        );
    }

    #[test]
    fn test_difficulty_narrowing_keeps_pool_when_nothing_matches() {
        let catalog = ExerciseCatalog::builtin();
        let none = BTreeSet::new();
        let advanced = CandidateProvider::ExactPattern.candidates(
            &catalog,
            MovementPattern::Squat,
            &none,
            Difficulty::Advanced,
        );
        let beginner = CandidateProvider::ExactPattern.candidates(
            &catalog,
            MovementPattern::Squat,
            &none,
            Difficulty::Beginner,
        );
        assert!(!advanced.is_empty());
        assert_eq!(advanced, beginner);
    }
}
