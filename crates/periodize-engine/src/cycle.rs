// ABOUTME: Training cycle generator wrapping consecutive weeks with load multipliers
// ABOUTME: Rescales strength percent-of-max and target weight and shifts conditioning zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Training cycles
//!
//! Week `w` of a cycle carries the multiplier `CycleConfig::week_multiplier(w)`:
//! 1.00, 1.05, 1.08 and then 0.80 for every later week. Strength
//! percent-of-max is multiplied and rounded to the nearest 2.5 points.
//! Conditioning zones step down below 1.0 and up above 1.05.
//!
//! The week count is clamped to `1..=MAX_CYCLE_WEEKS`.

use chrono::{DateTime, NaiveDate, Utc};
use periodize_core::constants::calendar::DAYS_PER_WEEK;
use periodize_core::models::{
    ReadinessEntry, TrainingCycle, TrainingWeek, WorkoutBlock, WorkoutPlanDay,
};

use crate::blocks::strength::{round_to_increment, target_weight};
use crate::daily::{generate_days, offset_date, PlanContext};
use crate::ids::training_cycle_id;
use crate::programming_constants::conditioning::{MAX_ZONE, MIN_ZONE};
use crate::programming_constants::cycle::{MAX_CYCLE_WEEKS, ZONE_STEP_UP_THRESHOLD};
use crate::weekly::WeeklyTemplate;

/// Percentage-point increment strength targets round to
const PERCENT_INCREMENT: f64 = 2.5;

/// Training cycle of `weeks` weeks, or the configured default when `None`
///
/// Week counts outside `1..=MAX_CYCLE_WEEKS` are clamped into that range.
#[must_use]
pub fn generate_training_cycle(
    ctx: &PlanContext<'_>,
    start_date: NaiveDate,
    weeks: Option<u32>,
    readiness_history: &[ReadinessEntry],
    created_at: DateTime<Utc>,
) -> TrainingCycle {
    let cycle_config = &ctx.config.cycle;
    let weeks = weeks
        .unwrap_or(cycle_config.default_cycle_weeks)
        .clamp(1, MAX_CYCLE_WEEKS);
    let day_count = weeks * DAYS_PER_WEEK;
    let template = WeeklyTemplate::for_preferences(ctx.prefs);

    let days = generate_days(
        ctx,
        &template,
        start_date,
        day_count,
        readiness_history,
        created_at,
    );

    let mut remaining = days.into_iter();
    let weeks_out = (0..weeks)
        .map(|week_index| {
            let multiplier = cycle_config.week_multiplier(week_index);
            let mut week_days: Vec<WorkoutPlanDay> =
                remaining.by_ref().take(DAYS_PER_WEEK as usize).collect();
            for day in &mut week_days {
                apply_week_multiplier(day, multiplier);
            }
            TrainingWeek {
                week_index,
                multiplier,
                days: week_days,
            }
        })
        .collect();

    TrainingCycle {
        id: training_cycle_id(ctx.prefs.user_id, start_date, weeks),
        user_id: ctx.prefs.user_id,
        start_date,
        end_date: offset_date(start_date, day_count - 1),
        weeks: weeks_out,
    }
}

/// Zone after a week multiplier is applied
#[must_use]
pub fn shifted_zone(zone: u8, multiplier: f64) -> u8 {
    let shifted = if multiplier < 1.0 {
        zone.saturating_sub(1)
    } else if multiplier > ZONE_STEP_UP_THRESHOLD {
        zone.saturating_add(1)
    } else {
        zone
    };
    shifted.clamp(MIN_ZONE, MAX_ZONE)
}

/// Scale one day's strength targets and conditioning zone by `multiplier`
pub fn apply_week_multiplier(day: &mut WorkoutPlanDay, multiplier: f64) {
    for block in &mut day.blocks {
        match block {
            WorkoutBlock::Strength(strength) => {
                let reference = strength.reference_one_rep_max;
                for set in &mut strength.sets {
                    let Some(percent) = set.target_percent_one_rep_max else {
                        continue;
                    };
                    let scaled = round_to_increment(percent * multiplier, PERCENT_INCREMENT);
                    set.target_percent_one_rep_max = Some(scaled);
                    set.target_weight = reference.map(|orm| target_weight(orm, scaled));
                }
            }
            WorkoutBlock::Conditioning(conditioning) => {
                conditioning.zone = shifted_zone(conditioning.zone, multiplier);
            }
            WorkoutBlock::Warmup(_) | WorkoutBlock::Accessory(_) | WorkoutBlock::Cooldown(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_shift_thresholds() {
        assert_eq!(shifted_zone(3, 0.8), 2);
        assert_eq!(shifted_zone(3, 1.0), 3);
        assert_eq!(shifted_zone(3, 1.05), 3);
        assert_eq!(shifted_zone(3, 1.08), 4);
        assert_eq!(shifted_zone(1, 0.8), 1);
        assert_eq!(shifted_zone(5, 1.08), 5);
    }
}
