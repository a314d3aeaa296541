// ABOUTME: Core data models for exercises, athlete profiles, readiness, plans and records
// ABOUTME: Plain immutable data handed between the engine and the display/store layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

/// Exercise definitions and their enums
pub mod exercise;
/// Generated plan structures
pub mod plan;
/// Athlete profile
pub mod preferences;
/// Readiness check-ins
pub mod readiness;
/// Session logs and personal records
pub mod records;

pub use exercise::{Difficulty, ExerciseDefinition, ExerciseTag, Modality, MovementPattern};
pub use plan::{
    AccessoryBlock, AccessoryExercise, BlockKind, ConditioningBlock, ConditioningStyle,
    ConditioningWork, CooldownBlock, CooldownItem, HyroxStation, HyroxStationKind,
    HyroxTemplateKind, HyroxWorkout, RaceSimulation, SetPrescription, StationQuantity,
    StrengthBlock, TrainingCycle, TrainingWeek, WarmupBlock, WarmupExercise, WorkoutBlock,
    WorkoutPlanDay, ZoneWork,
};
pub use preferences::{
    AdaptationMode, ExperienceLevel, LiftKey, TimeAvailability, TrainingGoal, UserPreferences,
};
pub use readiness::ReadinessEntry;
pub use records::{CompletedSet, PrRecord, SessionLog};
