// ABOUTME: Personal-record commands for periodize-cli
// ABOUTME: Handles PR detection from a session log and standalone one-rep-max estimates

use std::path::Path;

use anyhow::{Context, Result};
use periodize::engine::{detect_personal_records, OneRepMaxAlgorithm};
use periodize::inputs::{load_prior_records, load_session};
use periodize::PlannerSettings;
use serde_json::json;
use tracing::info;

use crate::helpers::output::{emit, OutputOptions};

/// Detect and print personal records for a session
pub fn prs(
    settings: &PlannerSettings,
    output: &OutputOptions,
    session: &Path,
    prior: Option<&Path>,
    min_margin: Option<f64>,
) -> Result<()> {
    let session_log = load_session(session)
        .with_context(|| format!("Loading session {}", session.display()))?;
    let prior_records = load_prior_records(prior)?;

    let records_config = match min_margin {
        Some(percent) => settings.records_with_min_margin(percent)?,
        None => settings.engine.records.clone(),
    };

    let records = detect_personal_records(&session_log, &prior_records, &records_config);
    info!(
        session_id = %session_log.id,
        sets = session_log.sets.len(),
        records = records.len(),
        "Detected personal records"
    );
    emit(output, &records)
}

/// Print a one-rep-max estimate
pub fn estimate(
    output: &OutputOptions,
    weight: f64,
    reps: i32,
    rpe: Option<f64>,
    algorithm: Option<&str>,
) -> Result<()> {
    let algorithm = algorithm
        .map(str::parse::<OneRepMaxAlgorithm>)
        .transpose()?
        .unwrap_or_default();
    let estimate = algorithm.estimate(weight, reps, rpe);
    emit(
        output,
        &json!({
            "algorithm": algorithm.name(),
            "formula": algorithm.formula(),
            "weight": weight,
            "reps": reps,
            "rpe": rpe,
            "estimated_1rm": estimate,
        }),
    )
}
