// ABOUTME: Exercise definition model with movement pattern, modality, difficulty and tags
// ABOUTME: Immutable catalog entries consumed by selection and block generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Fundamental movement pattern an exercise trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    /// Knee-dominant bilateral lower body
    Squat,
    /// Hip-dominant lower body
    Hinge,
    /// Pressing away from the torso
    HorizontalPush,
    /// Rowing toward the torso
    HorizontalPull,
    /// Pressing overhead
    VerticalPush,
    /// Pulling from overhead
    VerticalPull,
    /// Split-stance / single-leg lower body
    Lunge,
    /// Loaded carries
    Carry,
    /// Trunk stability and flexion
    Core,
    /// Energy-system work
    Conditioning,
}

impl MovementPattern {
    /// All patterns in declaration order
    pub const ALL: [Self; 10] = [
        Self::Squat,
        Self::Hinge,
        Self::HorizontalPush,
        Self::HorizontalPull,
        Self::VerticalPush,
        Self::VerticalPull,
        Self::Lunge,
        Self::Carry,
        Self::Core,
        Self::Conditioning,
    ];

    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Hinge => "hinge",
            Self::HorizontalPush => "horizontal_push",
            Self::HorizontalPull => "horizontal_pull",
            Self::VerticalPush => "vertical_push",
            Self::VerticalPull => "vertical_pull",
            Self::Lunge => "lunge",
            Self::Carry => "carry",
            Self::Core => "core",
            Self::Conditioning => "conditioning",
        }
    }

    /// Human label used in block titles
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::Hinge => "Hinge",
            Self::HorizontalPush => "Horizontal Push",
            Self::HorizontalPull => "Horizontal Pull",
            Self::VerticalPush => "Vertical Push",
            Self::VerticalPull => "Vertical Pull",
            Self::Lunge => "Lunge",
            Self::Carry => "Carry",
            Self::Core => "Core",
            Self::Conditioning => "Conditioning",
        }
    }
}

impl fmt::Display for MovementPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementPattern {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown movement pattern: '{s}'")))
    }
}

/// Equipment modality of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Barbell lift
    Barbell,
    /// Dumbbell lift
    Dumbbell,
    /// Kettlebell lift
    Kettlebell,
    /// No external load
    Bodyweight,
    /// Cable stack
    Cable,
    /// Resistance band
    Band,
    /// Rower, ski erg, bike, treadmill
    CardioMachine,
    /// Sled push or pull
    Sled,
    /// Sandbag, wall ball and other implements
    Implement,
}

/// Difficulty tier of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Suitable for novices
    Beginner,
    /// Requires some technical base
    Intermediate,
    /// Technically demanding
    Advanced,
}

/// Capability tags used for pooling and accessory templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseTag {
    /// Eligible as a main strength lift
    Strength,
    /// Hypertrophy-oriented accessory
    Hypertrophy,
    /// Single-limb work
    Unilateral,
    /// Single-leg lower-body work
    UnilateralLower,
    /// Glutes and hamstrings
    PosteriorChain,
    /// General trunk work
    Core,
    /// Anti-extension trunk work
    CoreAntiExtension,
    /// Upper-body pushing accessory
    UpperPush,
    /// Upper-body pulling accessory
    UpperPull,
    /// Shoulder accessory
    Shoulders,
    /// Biceps/triceps accessory
    Arms,
    /// Grip and carries
    Grip,
    /// General warmup movement
    Warmup,
    /// Nervous-system primer
    Primer,
    /// Energy-system work
    Conditioning,
    /// HYROX race station
    Hyrox,
    /// Explosive movement
    Power,
}

/// Immutable exercise definition owned by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    /// Stable identifier (e.g. `back_squat`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary movement pattern
    pub pattern: MovementPattern,
    /// Equipment modality
    pub modality: Modality,
    /// Equipment ids, any one of which enables the exercise; empty means none needed
    pub required_equipment: BTreeSet<String>,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Capability tags
    pub tags: BTreeSet<ExerciseTag>,
    /// Primary muscles trained
    pub primary_muscles: Vec<String>,
    /// Secondary muscles trained
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
}

impl ExerciseDefinition {
    /// Whether the exercise carries the given tag
    #[must_use]
    pub fn has_tag(&self, tag: ExerciseTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Whether the user's equipment permits this exercise
    ///
    /// An exercise with no required equipment is always permitted; otherwise at
    /// least one of its equipment ids must be present.
    #[must_use]
    pub fn is_permitted_by(&self, equipment: &BTreeSet<String>) -> bool {
        self.required_equipment.is_empty()
            || self
                .required_equipment
                .iter()
                .any(|item| equipment.contains(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(required: &[&str]) -> ExerciseDefinition {
        ExerciseDefinition {
            id: "goblet_squat".to_owned(),
            name: "Goblet Squat".to_owned(),
            pattern: MovementPattern::Squat,
            modality: Modality::Dumbbell,
            required_equipment: required.iter().map(|s| (*s).to_owned()).collect(),
            difficulty: Difficulty::Beginner,
            tags: BTreeSet::from([ExerciseTag::Strength]),
            primary_muscles: vec!["quads".to_owned()],
            secondary_muscles: Vec::new(),
        }
    }

    #[test]
    fn test_equipment_any_of_semantics() {
        let def = definition(&["dumbbells", "kettlebell"]);
        let owned = BTreeSet::from(["kettlebell".to_owned()]);
        assert!(def.is_permitted_by(&owned));
        assert!(!def.is_permitted_by(&BTreeSet::new()));
        assert!(definition(&[]).is_permitted_by(&BTreeSet::new()));
    }

    #[test]
    fn test_pattern_round_trips_through_str() {
        for pattern in MovementPattern::ALL {
            assert_eq!(pattern.as_str().parse::<MovementPattern>().ok(), Some(pattern));
        }
        assert!("sideways".parse::<MovementPattern>().is_err());
    }
}
