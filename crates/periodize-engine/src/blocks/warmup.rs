// ABOUTME: Warmup block generator rotating a window of drills through the equipment-filtered pool
// ABOUTME: Pool is every warmup, primer or anti-extension exercise, deduplicated in catalog order

use periodize_core::models::{
    BlockKind, ExerciseDefinition, ExerciseTag, MovementPattern, WarmupBlock, WarmupExercise,
    WorkoutBlock,
};

use super::BlockContext;
use crate::programming_constants::warmup::{
    DRILL_HOLD_SECONDS, DRILL_REPS, MINUTES_PER_DRILL, PULSE_RAISER_MINUTES, WINDOW,
};

const POOL_TAGS: [ExerciseTag; 3] = [
    ExerciseTag::Warmup,
    ExerciseTag::Primer,
    ExerciseTag::CoreAntiExtension,
];

fn is_timed(exercise: &ExerciseDefinition) -> bool {
    exercise.has_tag(ExerciseTag::CoreAntiExtension) || exercise.pattern == MovementPattern::Core
}

/// Warmup of up to three drills starting at `day_index % pool.len()`
#[must_use]
pub fn warmup_block(ctx: &BlockContext<'_>) -> Option<WorkoutBlock> {
    let equipment = &ctx.prefs.equipment;
    let pool = ctx.catalog.indices_where(|exercise| {
        POOL_TAGS.iter().any(|tag| exercise.has_tag(*tag)) && exercise.is_permitted_by(equipment)
    });
    if pool.is_empty() {
        ctx.diagnostics.block_skipped(BlockKind::Warmup, ctx.day_index);
        return None;
    }

    let start = ctx.day_index as usize % pool.len();
    let exercises: Vec<WarmupExercise> = (0..WINDOW.min(pool.len()))
        .filter_map(|offset| pool.get((start + offset) % pool.len()))
        .filter_map(|idx| ctx.catalog.get(*idx))
        .map(|exercise| {
            let timed = is_timed(exercise);
            WarmupExercise {
                exercise_id: exercise.id.clone(),
                reps: (!timed).then_some(DRILL_REPS),
                duration_seconds: timed.then_some(DRILL_HOLD_SECONDS),
            }
        })
        .collect();

    let drills = u32::try_from(exercises.len()).unwrap_or(0);
    Some(WorkoutBlock::Warmup(WarmupBlock {
        title: "Warmup".to_owned(),
        exercises,
        estimated_minutes: PULSE_RAISER_MINUTES + drills * MINUTES_PER_DRILL,
    }))
}
