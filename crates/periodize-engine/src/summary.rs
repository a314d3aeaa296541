// ABOUTME: Aggregate statistics over generated plan days and training cycles
// ABOUTME: Counts training and rest days, minutes, strength sets per pattern, adjusted days

use std::collections::BTreeMap;

use chrono::NaiveDate;
use periodize_core::models::{BlockKind, MovementPattern, TrainingCycle, WorkoutPlanDay};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Totals over a run of plan days
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Days with at least one block
    pub training_days: u32,
    /// Days with no blocks
    pub rest_days: u32,
    /// Sum of day totals
    pub total_minutes: u32,
    /// Minutes spent in conditioning blocks
    pub conditioning_minutes: u32,
    /// Prescribed working sets per main-lift pattern
    pub strength_sets: BTreeMap<MovementPattern, u32>,
    /// Days shaped by a non-neutral readiness factor
    pub readiness_adjusted_days: u32,
}

impl PlanSummary {
    fn add_day(&mut self, day: &WorkoutPlanDay) {
        if day.is_rest_day() {
            self.rest_days += 1;
            return;
        }
        self.training_days += 1;
        self.total_minutes += day.total_minutes;
        self.conditioning_minutes += day
            .block(BlockKind::Conditioning)
            .map_or(0, |block| block.duration_minutes());
        if let Some(strength) = day.strength() {
            if !strength.is_placeholder() {
                let sets = u32::try_from(strength.sets.len()).unwrap_or(u32::MAX);
                *self.strength_sets.entry(strength.pattern).or_insert(0) += sets;
            }
        }
        if day.readiness_adjusted {
            self.readiness_adjusted_days += 1;
        }
    }

    fn merge(&mut self, other: &Self) {
        self.training_days += other.training_days;
        self.rest_days += other.rest_days;
        self.total_minutes += other.total_minutes;
        self.conditioning_minutes += other.conditioning_minutes;
        for (pattern, sets) in &other.strength_sets {
            *self.strength_sets.entry(*pattern).or_insert(0) += sets;
        }
        self.readiness_adjusted_days += other.readiness_adjusted_days;
    }
}

/// Summary of one cycle week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Zero-based week index
    pub week_index: u32,
    /// Load multiplier of the week
    pub multiplier: f64,
    /// Totals for the week
    pub summary: PlanSummary,
}

/// Summary of a training cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleSummary {
    /// Cycle identifier
    pub cycle_id: Uuid,
    /// First day
    pub start_date: NaiveDate,
    /// Last day
    pub end_date: NaiveDate,
    /// Per-week totals
    pub weeks: Vec<WeekSummary>,
    /// Totals over the whole cycle
    pub totals: PlanSummary,
}

/// Summarize any sequence of plan days
#[must_use]
pub fn summarize_days<'a, I>(days: I) -> PlanSummary
where
    I: IntoIterator<Item = &'a WorkoutPlanDay>,
{
    let mut summary = PlanSummary::default();
    for day in days {
        summary.add_day(day);
    }
    summary
}

/// Summarize a training cycle week by week
#[must_use]
pub fn summarize_cycle(cycle: &TrainingCycle) -> CycleSummary {
    let weeks: Vec<WeekSummary> = cycle
        .weeks
        .iter()
        .map(|week| WeekSummary {
            week_index: week.week_index,
            multiplier: week.multiplier,
            summary: summarize_days(&week.days),
        })
        .collect();

    let mut totals = PlanSummary::default();
    for week in &weeks {
        totals.merge(&week.summary);
    }

    CycleSummary {
        cycle_id: cycle.id,
        start_date: cycle.start_date,
        end_date: cycle.end_date,
        weeks,
        totals,
    }
}
