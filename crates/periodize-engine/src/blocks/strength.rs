// ABOUTME: Strength block generator: main lift via the selection cascade, sets via the wave
// ABOUTME: Attaches percent-of-max and a rounded target weight when a one-rep-max is on record

use periodize_core::constants::loading::LOAD_INCREMENT;
use periodize_core::models::{
    BlockKind, Modality, MovementPattern, SetPrescription, StrengthBlock, WorkoutBlock,
};

use super::{minutes_for_seconds, BlockContext};
use crate::programming_constants::strength::{
    BASE_REST_SECONDS, DELOAD_REST_SECONDS, LOAD_REST_SECONDS, PEAK_REST_SECONDS,
    RAMP_UP_MINUTES, WORK_SECONDS_PER_SET,
};
use crate::selection::{select_exercise, SelectionRequest, SelectionTier};
use crate::waves::{rep_scheme, Wave};

/// Round to the nearest multiple of `increment`
#[must_use]
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    (value / increment).round() * increment
}

/// Working weight for a percent of a one-rep-max, rounded to the plate increment
#[must_use]
pub fn target_weight(one_rep_max: f64, percent: f64) -> f64 {
    round_to_increment(one_rep_max * percent / 100.0, LOAD_INCREMENT)
}

const fn rest_seconds(wave: Wave) -> u32 {
    match wave {
        Wave::Base => BASE_REST_SECONDS,
        Wave::Load => LOAD_REST_SECONDS,
        Wave::Peak => PEAK_REST_SECONDS,
        Wave::Deload => DELOAD_REST_SECONDS,
    }
}

fn placeholder(pattern: MovementPattern, rest_seconds: u32) -> StrengthBlock {
    StrengthBlock {
        title: format!("Strength: {}", pattern.display_name()),
        pattern,
        exercise_id: None,
        sets: Vec::new(),
        rest_seconds,
        reference_one_rep_max: None,
        estimated_minutes: 0,
        notes: vec!["No exercise available for the current equipment".to_owned()],
    }
}

/// Main-lift block for `pattern`
///
/// Always returns a block; when the cascade resolves nothing the block is a
/// zero-duration placeholder with no exercise.
#[must_use]
pub fn strength_block(ctx: &BlockContext<'_>, pattern: MovementPattern) -> WorkoutBlock {
    let intensity = ctx.intensity;
    let rest = rest_seconds(intensity.wave);
    let request = SelectionRequest {
        pattern,
        equipment: &ctx.prefs.equipment,
        difficulty: ctx.prefs.experience.difficulty(),
        day_index: ctx.day_index,
    };

    let Some(selection) = select_exercise(ctx.catalog, &request) else {
        ctx.diagnostics
            .exercise_unresolved(BlockKind::Strength, pattern, ctx.day_index);
        return WorkoutBlock::Strength(placeholder(pattern, rest));
    };

    let exercise = selection.exercise;
    let mut notes = Vec::new();
    if selection.tier != SelectionTier::Exact {
        ctx.diagnostics
            .fallback_used(pattern, selection.tier, ctx.day_index);
        notes.push(format!(
            "{} substituted for {}",
            exercise.name,
            pattern.display_name()
        ));
    }

    // Percent-based loading only transfers to the barbell lift families
    let reference_one_rep_max = if exercise.modality == Modality::Barbell {
        ctx.prefs.one_rep_max_for(exercise.pattern)
    } else {
        None
    };
    let percent = f64::from(intensity.percent);
    let scheme = rep_scheme(ctx.prefs.experience, intensity.wave);
    let set = SetPrescription {
        target_reps: Some(scheme.reps),
        target_rpe: Some(intensity.rpe),
        target_percent_one_rep_max: Some(percent),
        target_weight: reference_one_rep_max.map(|orm| target_weight(orm, percent)),
    };

    let working_seconds = scheme.sets * (WORK_SECONDS_PER_SET + rest);
    WorkoutBlock::Strength(StrengthBlock {
        title: format!("Strength: {}", exercise.name),
        pattern,
        exercise_id: Some(exercise.id.clone()),
        sets: vec![set; scheme.sets as usize],
        rest_seconds: rest,
        reference_one_rep_max,
        estimated_minutes: RAMP_UP_MINUTES + minutes_for_seconds(working_seconds),
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_weight_rounds_to_plate_increment() {
        // 140 x 0.75 = 105
        assert!((target_weight(140.0, 75.0) - 105.0).abs() < f64::EPSILON);
        // 137 x 0.7 = 95.9 -> 95.0
        assert!((target_weight(137.0, 70.0) - 95.0).abs() < f64::EPSILON);
        // 72.5 stays on the increment
        assert!((round_to_increment(73.5, 2.5) - 72.5).abs() < f64::EPSILON);
    }
}
