// ABOUTME: Catalog browsing command for periodize-cli
// ABOUTME: Lists built-in exercises filtered by movement pattern and equipment

use std::collections::BTreeSet;

use anyhow::Result;
use periodize::engine::ExerciseCatalog;
use periodize::models::{ExerciseDefinition, MovementPattern};

use crate::helpers::output::{emit, OutputOptions};

/// Print catalog exercises matching the filters
pub fn list(
    output: &OutputOptions,
    pattern: Option<&str>,
    equipment: Option<Vec<String>>,
) -> Result<()> {
    let pattern = pattern.map(str::parse::<MovementPattern>).transpose()?;
    let equipment: Option<BTreeSet<String>> = equipment.map(|items| {
        items
            .into_iter()
            .map(|item| item.trim().to_owned())
            .filter(|item| !item.is_empty())
            .collect()
    });

    let catalog = ExerciseCatalog::builtin();
    let exercises: Vec<&ExerciseDefinition> = catalog
        .iter()
        .filter(|exercise| pattern.is_none_or(|p| exercise.pattern == p))
        .filter(|exercise| {
            equipment
                .as_ref()
                .is_none_or(|available| exercise.is_permitted_by(available))
        })
        .collect();

    emit(output, &exercises)
}
