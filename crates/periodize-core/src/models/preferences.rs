// ABOUTME: Athlete profile consumed by the generator: goal, experience, equipment, time budget
// ABOUTME: Includes optional per-lift one-rep-max records and profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::exercise::{Difficulty, MovementPattern};
use crate::constants::calendar::{MAX_TRAINING_DAYS, MIN_TRAINING_DAYS};
use crate::errors::{AppError, AppResult};

/// Primary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    /// Maximal strength focus
    Strength,
    /// Strength and conditioning in equal measure
    Hybrid,
    /// Energy-system focus
    Conditioning,
    /// General fitness
    General,
    /// HYROX race preparation
    Hyrox,
}

impl TrainingGoal {
    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hybrid => "hybrid",
            Self::Conditioning => "conditioning",
            Self::General => "general",
            Self::Hyrox => "hyrox",
        }
    }
}

impl fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "hybrid" => Ok(Self::Hybrid),
            "conditioning" => Ok(Self::Conditioning),
            "general" => Ok(Self::General),
            "hyrox" => Ok(Self::Hyrox),
            other => Err(AppError::invalid_input(format!(
                "Unknown training goal: '{other}'. Valid options: strength, hybrid, conditioning, general, hyrox"
            ))),
        }
    }
}

/// Training experience tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than a year of structured training
    Beginner,
    /// One to three years
    Intermediate,
    /// Three or more years
    Advanced,
}

impl ExperienceLevel {
    /// Exercise difficulty tier matching this experience level
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        match self {
            Self::Beginner => Difficulty::Beginner,
            Self::Intermediate => Difficulty::Intermediate,
            Self::Advanced => Difficulty::Advanced,
        }
    }
}

/// Daily time-availability category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeAvailability {
    /// Tight on time
    Short,
    /// Typical session length
    #[default]
    Standard,
    /// Plenty of time
    Long,
}

/// Whether readiness signals adapt the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationMode {
    /// Scale conditioning volume by the readiness factor
    #[default]
    Adaptive,
    /// Ignore readiness entirely
    Fixed,
}

/// Lift family used to look up a recorded one-rep-max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftKey {
    /// Squat family
    Squat,
    /// Bench press family
    Bench,
    /// Deadlift family
    Deadlift,
    /// Overhead press family
    OverheadPress,
}

impl LiftKey {
    /// Lift family that a movement pattern loads against
    #[must_use]
    pub const fn for_pattern(pattern: MovementPattern) -> Option<Self> {
        match pattern {
            MovementPattern::Squat | MovementPattern::Lunge => Some(Self::Squat),
            MovementPattern::Hinge => Some(Self::Deadlift),
            MovementPattern::HorizontalPush => Some(Self::Bench),
            MovementPattern::VerticalPush => Some(Self::OverheadPress),
            MovementPattern::HorizontalPull
            | MovementPattern::VerticalPull
            | MovementPattern::Carry
            | MovementPattern::Core
            | MovementPattern::Conditioning => None,
        }
    }
}

/// User preferences object supplied by the profile layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Owning user
    pub user_id: Uuid,
    /// Training goal
    pub goal: TrainingGoal,
    /// Experience tier
    pub experience: ExperienceLevel,
    /// Number of training days per week (1-7)
    pub days_per_week: u8,
    /// Equipment ids available to the athlete
    #[serde(default)]
    pub equipment: BTreeSet<String>,
    /// Default daily time availability
    #[serde(default)]
    pub time_availability: TimeAvailability,
    /// Readiness adaptation mode
    #[serde(default)]
    pub adaptation_mode: AdaptationMode,
    /// Recorded one-rep-max values in kilograms
    #[serde(default)]
    pub one_rep_maxes: BTreeMap<LiftKey, f64>,
}

impl UserPreferences {
    /// Create preferences with no equipment and no recorded maxes
    #[must_use]
    pub fn new(user_id: Uuid, goal: TrainingGoal, experience: ExperienceLevel) -> Self {
        Self {
            user_id,
            goal,
            experience,
            days_per_week: MAX_TRAINING_DAYS,
            equipment: BTreeSet::new(),
            time_availability: TimeAvailability::default(),
            adaptation_mode: AdaptationMode::default(),
            one_rep_maxes: BTreeMap::new(),
        }
    }

    /// Builder-style equipment setter
    #[must_use]
    pub fn with_equipment<I, S>(mut self, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipment = equipment.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style days-per-week setter
    #[must_use]
    pub const fn with_days_per_week(mut self, days: u8) -> Self {
        self.days_per_week = days;
        self
    }

    /// Builder-style time availability setter
    #[must_use]
    pub const fn with_time_availability(mut self, time: TimeAvailability) -> Self {
        self.time_availability = time;
        self
    }

    /// Builder-style adaptation mode setter
    #[must_use]
    pub const fn with_adaptation_mode(mut self, mode: AdaptationMode) -> Self {
        self.adaptation_mode = mode;
        self
    }

    /// Builder-style one-rep-max setter
    #[must_use]
    pub fn with_one_rep_max(mut self, lift: LiftKey, kilograms: f64) -> Self {
        self.one_rep_maxes.insert(lift, kilograms);
        self
    }

    /// Training days per week clamped to the supported range
    #[must_use]
    pub fn effective_days_per_week(&self) -> u8 {
        self.days_per_week.clamp(MIN_TRAINING_DAYS, MAX_TRAINING_DAYS)
    }

    /// Recorded one-rep-max for the lift family a pattern loads against
    #[must_use]
    pub fn one_rep_max_for(&self, pattern: MovementPattern) -> Option<f64> {
        LiftKey::for_pattern(pattern)
            .and_then(|lift| self.one_rep_maxes.get(&lift).copied())
            .filter(|value| *value > 0.0)
    }

    /// Validate profile values
    ///
    /// Generation clamps out-of-range values on its own; this lets callers
    /// reject bad input at the boundary instead.
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` if days per week is outside 1-7
    /// or a recorded one-rep-max is not a positive finite number.
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_TRAINING_DAYS..=MAX_TRAINING_DAYS).contains(&self.days_per_week) {
            return Err(AppError::out_of_range(
                "days_per_week",
                format!(
                    "Training days per week must be between {MIN_TRAINING_DAYS} and {MAX_TRAINING_DAYS}, got {}",
                    self.days_per_week
                ),
            ));
        }
        if let Some((lift, value)) = self
            .one_rep_maxes
            .iter()
            .find(|(_, value)| !value.is_finite() || **value <= 0.0)
        {
            return Err(AppError::out_of_range(
                "one_rep_maxes",
                format!("One-rep-max for {lift:?} must be a positive number, got {value}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_days() {
        let prefs = UserPreferences::new(
            Uuid::nil(),
            TrainingGoal::Strength,
            ExperienceLevel::Beginner,
        )
        .with_days_per_week(0);
        assert!(prefs.validate().is_err());
        assert_eq!(prefs.effective_days_per_week(), 1);
    }

    #[test]
    fn test_one_rep_max_lookup_by_pattern() {
        let prefs = UserPreferences::new(Uuid::nil(), TrainingGoal::Hybrid, ExperienceLevel::Advanced)
            .with_one_rep_max(LiftKey::Squat, 180.0);
        assert_eq!(prefs.one_rep_max_for(MovementPattern::Lunge), Some(180.0));
        assert_eq!(prefs.one_rep_max_for(MovementPattern::Hinge), None);
        assert_eq!(prefs.one_rep_max_for(MovementPattern::VerticalPull), None);
    }
}
