// ABOUTME: Microcycle generator expanding a weekly template over six calendar weeks
// ABOUTME: Applies the technique-week modifier to strength RPE and conditioning zones

use chrono::{DateTime, NaiveDate, Utc};
use periodize_core::constants::calendar::DAYS_PER_WEEK;
use periodize_core::models::{ReadinessEntry, WorkoutBlock, WorkoutPlanDay};

use crate::config::CycleConfig;
use crate::daily::{generate_days, PlanContext};
use crate::programming_constants::cycle::MAX_WEEKS_PER_MICROCYCLE;
use crate::weekly::WeeklyTemplate;

const TECHNIQUE_TITLE_SUFFIX: &str = " (Technique)";
const TECHNIQUE_ZONE_NOTE: &str = "Technique week: conditioning zone reduced";

/// Microcycle for the profile's own weekly template
///
/// Returns `weeks_per_microcycle x 7` days (42 by default) in day-index order.
/// The week count is capped at `MAX_WEEKS_PER_MICROCYCLE`.
#[must_use]
pub fn generate_microcycle(
    ctx: &PlanContext<'_>,
    start_date: NaiveDate,
    readiness_history: &[ReadinessEntry],
    created_at: DateTime<Utc>,
) -> Vec<WorkoutPlanDay> {
    let template = WeeklyTemplate::for_preferences(ctx.prefs);
    generate_microcycle_from_template(ctx, &template, start_date, readiness_history, created_at)
}

/// Microcycle for an explicit weekly template
#[must_use]
pub fn generate_microcycle_from_template(
    ctx: &PlanContext<'_>,
    template: &WeeklyTemplate,
    start_date: NaiveDate,
    readiness_history: &[ReadinessEntry],
    created_at: DateTime<Utc>,
) -> Vec<WorkoutPlanDay> {
    let cycle = &ctx.config.cycle;
    let count = cycle.weeks_per_microcycle.min(MAX_WEEKS_PER_MICROCYCLE) * DAYS_PER_WEEK;
    let mut days = generate_days(
        ctx,
        template,
        start_date,
        count,
        readiness_history,
        created_at,
    );
    for day in &mut days {
        if day.day_index / DAYS_PER_WEEK == cycle.technique_week_index {
            apply_technique_week(day, cycle);
        }
    }
    days
}

/// Lower strength RPE and conditioning zone for a technique-week day
pub fn apply_technique_week(day: &mut WorkoutPlanDay, config: &CycleConfig) {
    for block in &mut day.blocks {
        match block {
            WorkoutBlock::Strength(strength) => {
                for set in &mut strength.sets {
                    set.target_rpe = set.target_rpe.map(|rpe| {
                        rpe.saturating_sub(config.technique_rpe_reduction)
                            .max(config.technique_rpe_floor)
                    });
                }
                strength.title.push_str(TECHNIQUE_TITLE_SUFFIX);
            }
            WorkoutBlock::Conditioning(conditioning) => {
                conditioning.zone = conditioning
                    .zone
                    .saturating_sub(1)
                    .max(config.technique_zone_floor);
                conditioning.notes.push(TECHNIQUE_ZONE_NOTE.to_owned());
            }
            WorkoutBlock::Warmup(_) | WorkoutBlock::Accessory(_) | WorkoutBlock::Cooldown(_) => {}
        }
    }
}
