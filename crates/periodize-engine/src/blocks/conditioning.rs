// ABOUTME: Conditioning block generator branching between HYROX work and generic zone work
// ABOUTME: Readiness factor scales duration, rounds and race quantities; never reads global state

use periodize_core::models::{
    BlockKind, ConditioningBlock, ConditioningStyle, ConditioningWork, ExerciseTag,
    HyroxTemplateKind, Modality, MovementPattern, TimeAvailability, TrainingGoal, WorkoutBlock,
    ZoneWork,
};

use super::BlockContext;
use crate::catalog::ExerciseIdx;
use crate::conditioning::hyrox::hyrox_workout;
use crate::conditioning::race::{estimated_race_minutes, simulate_race};
use crate::conditioning::{conditioning_prescription, scale_minutes, ConditioningPrescription};
use crate::programming_constants::conditioning::{INTERVAL_REST_SECONDS, INTERVAL_WORK_SECONDS};
use crate::selection::rotate;
use crate::waves::Wave;

/// Modalities tried for generic conditioning, most preferred first
const MODALITY_PREFERENCE: [Modality; 3] = [
    Modality::CardioMachine,
    Modality::Kettlebell,
    Modality::Bodyweight,
];

const fn style_label(style: ConditioningStyle) -> &'static str {
    match style {
        ConditioningStyle::Z2 => "Zone 2",
        ConditioningStyle::Tempo => "Tempo",
        ConditioningStyle::Intervals => "Intervals",
    }
}

const fn template_label(template: HyroxTemplateKind) -> &'static str {
    match template {
        HyroxTemplateKind::SledPushPull => "Sled Push/Pull",
        HyroxTemplateKind::WallBallChipper => "Wall Ball Chipper",
        HyroxTemplateKind::MachineIntervals => "Machine Intervals",
        HyroxTemplateKind::BurpeeBroadJump => "Burpee Broad Jumps",
    }
}

fn readiness_notes(ctx: &BlockContext<'_>) -> Vec<String> {
    if ctx.readiness.adjusted {
        vec![format!(
            "Volume scaled by readiness factor {:.2}",
            ctx.readiness.factor
        )]
    } else {
        Vec::new()
    }
}

/// Conditioning block for the day
///
/// HYROX athletes get a race simulation on peak days with standard or long
/// time availability, and an equipment-conditional template otherwise. Every
/// other goal gets single-modality zone work on a cardio machine, kettlebell or
/// bodyweight movement, in that order of preference.
#[must_use]
pub fn conditioning_block(ctx: &BlockContext<'_>) -> Option<WorkoutBlock> {
    let prescription = conditioning_prescription(
        ctx.day_index,
        ctx.prefs.goal,
        ctx.readiness.time_availability,
    );
    if ctx.prefs.goal == TrainingGoal::Hyrox {
        Some(hyrox_block(ctx, &prescription))
    } else {
        zone_block(ctx, &prescription)
    }
}

fn hyrox_block(ctx: &BlockContext<'_>, prescription: &ConditioningPrescription) -> WorkoutBlock {
    let equipment = &ctx.prefs.equipment;
    let factor = ctx.readiness.factor;
    let time = ctx.readiness.time_availability;

    let (title, estimated_minutes, work) =
        if prescription.wave == Wave::Peak && time != TimeAvailability::Short {
            (
                "HYROX Race Simulation".to_owned(),
                estimated_race_minutes(factor),
                ConditioningWork::RaceSimulation(simulate_race(equipment, factor)),
            )
        } else {
            let workout = hyrox_workout(ctx.day_index, equipment, time, prescription.wave, factor);
            (
                format!("HYROX: {}", template_label(workout.template)),
                workout.time_cap_minutes,
                ConditioningWork::Hyrox(workout),
            )
        };

    WorkoutBlock::Conditioning(ConditioningBlock {
        title,
        zone: prescription.zone,
        estimated_minutes,
        work,
        notes: readiness_notes(ctx),
    })
}

fn conditioning_exercise(ctx: &BlockContext<'_>) -> Option<ExerciseIdx> {
    let equipment = &ctx.prefs.equipment;
    MODALITY_PREFERENCE.iter().find_map(|modality| {
        let candidates = ctx.catalog.indices_where(|exercise| {
            exercise.modality == *modality
                && exercise.has_tag(ExerciseTag::Conditioning)
                && exercise.is_permitted_by(equipment)
        });
        rotate(&candidates, ctx.day_index)
    })
}

fn zone_block(
    ctx: &BlockContext<'_>,
    prescription: &ConditioningPrescription,
) -> Option<WorkoutBlock> {
    let Some(exercise) = conditioning_exercise(ctx).and_then(|idx| ctx.catalog.get(idx)) else {
        ctx.diagnostics.exercise_unresolved(
            BlockKind::Conditioning,
            MovementPattern::Conditioning,
            ctx.day_index,
        );
        return None;
    };

    let duration_minutes = scale_minutes(prescription.duration_minutes, ctx.readiness.factor);
    let work = if prescription.style == ConditioningStyle::Intervals {
        let round_seconds = INTERVAL_WORK_SECONDS + INTERVAL_REST_SECONDS;
        ZoneWork {
            exercise_id: exercise.id.clone(),
            style: prescription.style,
            duration_minutes,
            rounds: Some((duration_minutes * 60 / round_seconds).max(1)),
            work_seconds: Some(INTERVAL_WORK_SECONDS),
            rest_seconds: Some(INTERVAL_REST_SECONDS),
        }
    } else {
        ZoneWork {
            exercise_id: exercise.id.clone(),
            style: prescription.style,
            duration_minutes,
            rounds: None,
            work_seconds: None,
            rest_seconds: None,
        }
    };

    Some(WorkoutBlock::Conditioning(ConditioningBlock {
        title: format!(
            "Conditioning: {} {}",
            style_label(prescription.style),
            exercise.name
        ),
        zone: prescription.zone,
        estimated_minutes: duration_minutes,
        work: ConditioningWork::Zone(work),
        notes: readiness_notes(ctx),
    }))
}
