// ABOUTME: Accessory block generator filling one exercise per template tag by rotation
// ABOUTME: Excludes the day's main lift and any exercise already picked for another tag

use periodize_core::models::{
    AccessoryBlock, AccessoryExercise, BlockKind, MovementPattern, WorkoutBlock,
};

use super::{minutes_for_seconds, BlockContext};
use crate::accessory_progression::{accessory_rpe, accessory_tags, accessory_volume};
use crate::programming_constants::accessory::SECONDS_PER_SET;
use crate::selection::rotate;

/// Accessory block for a day whose primary pattern is `pattern`
///
/// Returns `None` when no tag in the template finds an exercise.
#[must_use]
pub fn accessory_block(
    ctx: &BlockContext<'_>,
    pattern: MovementPattern,
    main_exercise_id: Option<&str>,
) -> Option<WorkoutBlock> {
    let equipment = &ctx.prefs.equipment;
    let volume = accessory_volume(ctx.intensity.wave);
    let target_rpe = accessory_rpe(ctx.intensity);

    let mut exercises: Vec<AccessoryExercise> = Vec::new();
    for tag in accessory_tags(pattern) {
        let candidates = ctx.catalog.indices_where(|exercise| {
            exercise.has_tag(*tag)
                && exercise.is_permitted_by(equipment)
                && main_exercise_id != Some(exercise.id.as_str())
                && !exercises.iter().any(|picked| picked.exercise_id == exercise.id)
        });
        let Some(exercise) = rotate(&candidates, ctx.day_index).and_then(|idx| ctx.catalog.get(idx))
        else {
            continue;
        };
        exercises.push(AccessoryExercise {
            exercise_id: exercise.id.clone(),
            tag: *tag,
            sets: volume.sets,
            reps: volume.reps,
            target_rpe,
        });
    }

    if exercises.is_empty() {
        ctx.diagnostics
            .block_skipped(BlockKind::Accessory, ctx.day_index);
        return None;
    }

    let total_sets: u32 = exercises.iter().map(|exercise| exercise.sets).sum();
    Some(WorkoutBlock::Accessory(AccessoryBlock {
        title: "Accessories".to_owned(),
        exercises,
        estimated_minutes: minutes_for_seconds(total_sets * SECONDS_PER_SET),
    }))
}
