// ABOUTME: Plan generation commands for periodize-cli
// ABOUTME: Handles day, week, microcycle and cycle generation from a JSON profile

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use periodize::engine::readiness::entry_for_date;
use periodize::engine::{
    generate_day, generate_microcycle, generate_training_cycle, generate_week, summarize_cycle,
    ExerciseCatalog, PlanContext, TracingDiagnostics,
};
use periodize::inputs::{load_profile, load_readiness};
use periodize::PlannerSettings;
use tracing::info;

use crate::helpers::output::{emit, OutputOptions};

/// Generate and print one plan day
pub fn day(
    settings: &PlannerSettings,
    output: &OutputOptions,
    profile: &Path,
    date: NaiveDate,
    day_index: u32,
    readiness: Option<&Path>,
) -> Result<()> {
    let prefs = load_profile(profile, settings.default_user_id)
        .with_context(|| format!("Loading profile {}", profile.display()))?;
    let history = load_readiness(readiness)?;
    let catalog = ExerciseCatalog::builtin();
    let ctx = PlanContext::new(&catalog, &prefs, &settings.engine, &TracingDiagnostics);

    let plan = generate_day(
        &ctx,
        day_index,
        date,
        entry_for_date(&history, date),
        Utc::now(),
    );
    info!(date = %date, day_index, minutes = plan.total_minutes, "Generated plan day");
    emit(output, &plan)
}

/// Generate and print one week
pub fn week(
    settings: &PlannerSettings,
    output: &OutputOptions,
    profile: &Path,
    start: NaiveDate,
    readiness: Option<&Path>,
) -> Result<()> {
    let prefs = load_profile(profile, settings.default_user_id)
        .with_context(|| format!("Loading profile {}", profile.display()))?;
    let history = load_readiness(readiness)?;
    let catalog = ExerciseCatalog::builtin();
    let ctx = PlanContext::new(&catalog, &prefs, &settings.engine, &TracingDiagnostics);

    let days = generate_week(&ctx, start, &history, Utc::now());
    info!(start = %start, days = days.len(), "Generated week");
    emit(output, &days)
}

/// Generate and print a microcycle
pub fn microcycle(
    settings: &PlannerSettings,
    output: &OutputOptions,
    profile: &Path,
    start: NaiveDate,
    readiness: Option<&Path>,
) -> Result<()> {
    let prefs = load_profile(profile, settings.default_user_id)
        .with_context(|| format!("Loading profile {}", profile.display()))?;
    let history = load_readiness(readiness)?;
    let catalog = ExerciseCatalog::builtin();
    let ctx = PlanContext::new(&catalog, &prefs, &settings.engine, &TracingDiagnostics);

    let days = generate_microcycle(&ctx, start, &history, Utc::now());
    info!(start = %start, days = days.len(), "Generated microcycle");
    emit(output, &days)
}

/// Generate and print a training cycle or its summary
pub fn cycle(
    settings: &PlannerSettings,
    output: &OutputOptions,
    profile: &Path,
    start: NaiveDate,
    weeks: Option<u32>,
    readiness: Option<&Path>,
    summary_only: bool,
) -> Result<()> {
    let prefs = load_profile(profile, settings.default_user_id)
        .with_context(|| format!("Loading profile {}", profile.display()))?;
    let history = load_readiness(readiness)?;
    let catalog = ExerciseCatalog::builtin();
    let ctx = PlanContext::new(&catalog, &prefs, &settings.engine, &TracingDiagnostics);

    let cycle = generate_training_cycle(&ctx, start, weeks, &history, Utc::now());
    info!(
        cycle_id = %cycle.id,
        weeks = cycle.weeks.len(),
        end = %cycle.end_date,
        "Generated training cycle"
    );

    if summary_only {
        emit(output, &summarize_cycle(&cycle))
    } else {
        emit(output, &cycle)
    }
}
