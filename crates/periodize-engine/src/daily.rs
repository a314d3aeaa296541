// ABOUTME: Daily workout constructor assembling blocks in canonical order for one day
// ABOUTME: Goal-gated conditioning inclusion and parallel multi-day generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Daily workout construction
//!
//! A training day is assembled as warmup, strength, accessory, conditioning
//! and cooldown. Conditioning-only days drop the strength and accessory
//! blocks. Rest days carry no blocks at all.

use chrono::{DateTime, Days, NaiveDate, Utc};
use periodize_core::constants::calendar::DAYS_PER_WEEK;
use periodize_core::models::{
    ReadinessEntry, TrainingGoal, UserPreferences, WorkoutBlock, WorkoutPlanDay,
};
use rayon::prelude::*;

use crate::blocks::{
    accessory_block, conditioning_block, cooldown_block, strength_block, warmup_block,
    BlockContext,
};
use crate::catalog::ExerciseCatalog;
use crate::config::EngineConfig;
use crate::diagnostics::PlanDiagnostics;
use crate::ids::plan_day_id;
use crate::readiness::DayReadiness;
use crate::weekly::{DayFocus, FocusToken, WeeklyTemplate};

/// Everything a generator needs besides the day itself
#[derive(Clone, Copy)]
pub struct PlanContext<'a> {
    /// Exercise library
    pub catalog: &'a ExerciseCatalog,
    /// Athlete profile
    pub prefs: &'a UserPreferences,
    /// Engine configuration
    pub config: &'a EngineConfig,
    /// Diagnostics sink
    pub diagnostics: &'a dyn PlanDiagnostics,
}

impl<'a> PlanContext<'a> {
    /// Bundle generation inputs
    #[must_use]
    pub fn new(
        catalog: &'a ExerciseCatalog,
        prefs: &'a UserPreferences,
        config: &'a EngineConfig,
        diagnostics: &'a dyn PlanDiagnostics,
    ) -> Self {
        Self {
            catalog,
            prefs,
            config,
            diagnostics,
        }
    }
}

/// Whether a strength day for `goal` also carries a conditioning block
#[must_use]
pub const fn includes_conditioning(goal: TrainingGoal, day_index: u32) -> bool {
    let weekday = day_index % DAYS_PER_WEEK;
    match goal {
        TrainingGoal::Conditioning => true,
        TrainingGoal::Hybrid | TrainingGoal::Hyrox => weekday % 2 == 0,
        TrainingGoal::General => weekday == 2 || weekday == 5,
        TrainingGoal::Strength => weekday == 3,
    }
}

/// Calendar date `offset` days after `start`
pub(crate) fn offset_date(start: NaiveDate, offset: u32) -> NaiveDate {
    start
        .checked_add_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MAX)
}

/// One plan day for `day_index`, resolved through the profile's weekly template
#[must_use]
pub fn generate_day(
    ctx: &PlanContext<'_>,
    day_index: u32,
    date: NaiveDate,
    readiness: Option<&ReadinessEntry>,
    created_at: DateTime<Utc>,
) -> WorkoutPlanDay {
    let template = WeeklyTemplate::for_preferences(ctx.prefs);
    let readiness = DayReadiness::resolve(ctx.prefs, readiness, &ctx.config.readiness);
    build_day(
        ctx,
        template.slot(day_index),
        day_index,
        date,
        readiness,
        created_at,
    )
}

/// `count` consecutive plan days from `start_date`, generated in parallel
///
/// Each day reads the readiness entry for its own date from `readiness_history`.
/// Output is in day-index order.
#[must_use]
pub fn generate_days(
    ctx: &PlanContext<'_>,
    template: &WeeklyTemplate,
    start_date: NaiveDate,
    count: u32,
    readiness_history: &[ReadinessEntry],
    created_at: DateTime<Utc>,
) -> Vec<WorkoutPlanDay> {
    (0..count)
        .into_par_iter()
        .map(|day_index| {
            let date = offset_date(start_date, day_index);
            let readiness = DayReadiness::for_date(
                ctx.prefs,
                readiness_history,
                date,
                &ctx.config.readiness,
            );
            build_day(
                ctx,
                template.slot(day_index),
                day_index,
                date,
                readiness,
                created_at,
            )
        })
        .collect()
}

fn build_day(
    ctx: &PlanContext<'_>,
    token: FocusToken,
    day_index: u32,
    date: NaiveDate,
    readiness: DayReadiness,
    created_at: DateTime<Utc>,
) -> WorkoutPlanDay {
    let block_ctx = BlockContext::new(ctx.catalog, ctx.prefs, day_index, readiness, ctx.diagnostics);
    let mut focus = vec![token.as_str().to_owned()];
    let mut blocks = Vec::new();

    match token.resolve(day_index) {
        DayFocus::Rest => {}
        DayFocus::Conditioning => {
            blocks.extend(warmup_block(&block_ctx));
            blocks.extend(conditioning_block(&block_ctx));
            blocks.push(cooldown_block());
        }
        DayFocus::Pattern(pattern) => {
            if pattern.as_str() != token.as_str() {
                focus.push(pattern.as_str().to_owned());
            }
            blocks.extend(warmup_block(&block_ctx));
            let strength = strength_block(&block_ctx, pattern);
            let main_exercise_id = strength_main_exercise(&strength);
            let accessory = accessory_block(&block_ctx, pattern, main_exercise_id.as_deref());
            blocks.push(strength);
            blocks.extend(accessory);
            if includes_conditioning(ctx.prefs.goal, day_index) {
                if let Some(conditioning) = conditioning_block(&block_ctx) {
                    focus.push(FocusToken::Conditioning.as_str().to_owned());
                    blocks.push(conditioning);
                }
            }
            blocks.push(cooldown_block());
        }
    }

    let readiness_adjusted = !blocks.is_empty() && readiness.adjusted;
    if readiness_adjusted {
        ctx.diagnostics.readiness_applied(readiness.factor, day_index);
    }

    WorkoutPlanDay {
        id: plan_day_id(ctx.prefs.user_id, date, day_index),
        user_id: ctx.prefs.user_id,
        date,
        day_index,
        focus,
        total_minutes: blocks.iter().map(|block| block.duration_minutes()).sum(),
        blocks,
        readiness_adjusted,
        created_at,
    }
}

fn strength_main_exercise(block: &WorkoutBlock) -> Option<String> {
    match block {
        WorkoutBlock::Strength(strength) => strength.exercise_id.clone(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditioning_gating_by_goal() {
        assert!(includes_conditioning(TrainingGoal::Conditioning, 1));
        assert!(includes_conditioning(TrainingGoal::Hybrid, 4));
        assert!(!includes_conditioning(TrainingGoal::Hybrid, 3));
        assert!(includes_conditioning(TrainingGoal::General, 9));
        assert!(!includes_conditioning(TrainingGoal::General, 3));
        assert!(includes_conditioning(TrainingGoal::Strength, 10));
        assert!(!includes_conditioning(TrainingGoal::Strength, 0));
    }

    #[test]
    fn test_offset_date() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        assert_eq!(
            offset_date(start, 3),
            NaiveDate::from_ymd_opt(2025, 2, 2).unwrap()
        );
    }
}
