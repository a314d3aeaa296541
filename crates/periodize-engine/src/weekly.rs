// ABOUTME: Goal-specific seven-slot weekly templates and focus-token resolution
// ABOUTME: Composite tokens rotate through four concrete patterns by day index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use chrono::{DateTime, NaiveDate, Utc};
use periodize_core::constants::calendar::DAYS_PER_WEEK;
use periodize_core::models::{
    MovementPattern, ReadinessEntry, TrainingGoal, UserPreferences, WorkoutPlanDay,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::daily::{generate_days, PlanContext};

/// Focus assigned to one weekday slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusToken {
    /// Squat-pattern day
    Squat,
    /// Hinge-pattern day
    Hinge,
    /// Rotates horizontal push, horizontal pull, vertical push, vertical pull
    UpperPushPull,
    /// Rotates squat, horizontal push, hinge, vertical pull
    MixedFullBody,
    /// Conditioning-only day
    Conditioning,
    /// No training
    Rest,
}

const UPPER_PUSH_PULL: [MovementPattern; 4] = [
    MovementPattern::HorizontalPush,
    MovementPattern::HorizontalPull,
    MovementPattern::VerticalPush,
    MovementPattern::VerticalPull,
];

const MIXED_FULL_BODY: [MovementPattern; 4] = [
    MovementPattern::Squat,
    MovementPattern::HorizontalPush,
    MovementPattern::Hinge,
    MovementPattern::VerticalPull,
];

/// Concrete focus of a day after token resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pattern", rename_all = "snake_case")]
pub enum DayFocus {
    /// Strength day built around a pattern
    Pattern(MovementPattern),
    /// Conditioning-only day
    Conditioning,
    /// Rest day
    Rest,
}

impl FocusToken {
    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Hinge => "hinge",
            Self::UpperPushPull => "upper_push_pull",
            Self::MixedFullBody => "mixed_full_body",
            Self::Conditioning => "conditioning",
            Self::Rest => "rest",
        }
    }

    /// Whether the token marks a rest slot
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::Rest)
    }

    /// Concrete focus for a day index
    #[must_use]
    pub const fn resolve(&self, day_index: u32) -> DayFocus {
        let rotation = (day_index % 4) as usize;
        match self {
            Self::Squat => DayFocus::Pattern(MovementPattern::Squat),
            Self::Hinge => DayFocus::Pattern(MovementPattern::Hinge),
            Self::UpperPushPull => DayFocus::Pattern(UPPER_PUSH_PULL[rotation]),
            Self::MixedFullBody => DayFocus::Pattern(MIXED_FULL_BODY[rotation]),
            Self::Conditioning => DayFocus::Conditioning,
            Self::Rest => DayFocus::Rest,
        }
    }
}

impl fmt::Display for FocusToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seven focus slots, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTemplate {
    slots: [FocusToken; 7],
}

impl WeeklyTemplate {
    /// Template from explicit slots
    #[must_use]
    pub const fn new(slots: [FocusToken; 7]) -> Self {
        Self { slots }
    }

    /// Default template for a goal; HYROX shares the hybrid week
    #[must_use]
    pub const fn for_goal(goal: TrainingGoal) -> Self {
        use FocusToken::{Conditioning, Hinge, MixedFullBody, Rest, Squat, UpperPushPull};
        let slots = match goal {
            TrainingGoal::Strength => [
                Squat,
                UpperPushPull,
                Rest,
                Hinge,
                UpperPushPull,
                MixedFullBody,
                Rest,
            ],
            TrainingGoal::Hybrid | TrainingGoal::Hyrox => [
                Squat,
                Conditioning,
                UpperPushPull,
                Hinge,
                Conditioning,
                MixedFullBody,
                Rest,
            ],
            TrainingGoal::Conditioning => [
                MixedFullBody,
                Conditioning,
                UpperPushPull,
                Conditioning,
                Squat,
                Conditioning,
                Rest,
            ],
            TrainingGoal::General => [
                Squat,
                UpperPushPull,
                Rest,
                Hinge,
                Conditioning,
                MixedFullBody,
                Rest,
            ],
        };
        Self { slots }
    }

    /// Template for a profile: the goal's week limited to its training days
    #[must_use]
    pub fn for_preferences(prefs: &UserPreferences) -> Self {
        Self::for_goal(prefs.goal).limited_to(prefs.effective_days_per_week())
    }

    /// Keep the first `days` training slots and turn later ones into rest
    #[must_use]
    pub fn limited_to(mut self, days: u8) -> Self {
        let mut kept = 0_u8;
        for slot in &mut self.slots {
            if slot.is_rest() {
                continue;
            }
            if kept < days {
                kept += 1;
            } else {
                *slot = FocusToken::Rest;
            }
        }
        self
    }

    /// Slots in weekday order
    #[must_use]
    pub const fn slots(&self) -> &[FocusToken; 7] {
        &self.slots
    }

    /// Token for a day index
    #[must_use]
    pub const fn slot(&self, day_index: u32) -> FocusToken {
        self.slots[(day_index % DAYS_PER_WEEK) as usize]
    }

    /// Number of training slots
    #[must_use]
    pub fn training_days(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_rest()).count()
    }
}

/// One week of plan days starting at `start_date` with day indices 0-6
#[must_use]
pub fn generate_week(
    ctx: &PlanContext<'_>,
    start_date: NaiveDate,
    readiness_history: &[ReadinessEntry],
    created_at: DateTime<Utc>,
) -> Vec<WorkoutPlanDay> {
    let template = WeeklyTemplate::for_preferences(ctx.prefs);
    generate_days(
        ctx,
        &template,
        start_date,
        DAYS_PER_WEEK,
        readiness_history,
        created_at,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_rotation() {
        assert_eq!(
            FocusToken::UpperPushPull.resolve(5),
            DayFocus::Pattern(MovementPattern::HorizontalPull)
        );
        assert_eq!(
            FocusToken::MixedFullBody.resolve(2),
            DayFocus::Pattern(MovementPattern::Hinge)
        );
    }

    #[test]
    fn test_limited_to_keeps_first_training_slots() {
        let template = WeeklyTemplate::for_goal(TrainingGoal::Hybrid).limited_to(3);
        assert_eq!(template.training_days(), 3);
        assert_eq!(template.slot(2), FocusToken::UpperPushPull);
        assert_eq!(template.slot(3), FocusToken::Rest);
    }
}
