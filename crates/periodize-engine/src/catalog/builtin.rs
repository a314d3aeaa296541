// ABOUTME: Built-in exercise library as a static seed table
// ABOUTME: Covers every movement pattern with barbell, dumbbell, machine and bodyweight options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use periodize_core::constants::equipment::{
    AIR_BIKE, BANDS, BARBELL, BENCH, CABLE_MACHINE, DUMBBELLS, KETTLEBELL, PLYO_BOX, PULL_UP_BAR,
    ROWER, SANDBAG, SKI_ERG, SLED, TRAP_BAR, TREADMILL, WALL_BALL,
};
use periodize_core::models::{
    Difficulty, ExerciseDefinition, ExerciseTag, Modality, MovementPattern,
};

/// Static exercise data
struct ExerciseSeed {
    id: &'static str,
    name: &'static str,
    pattern: MovementPattern,
    modality: Modality,
    equipment: &'static [&'static str],
    difficulty: Difficulty,
    tags: &'static [ExerciseTag],
    primary_muscles: &'static [&'static str],
    secondary_muscles: &'static [&'static str],
}

impl ExerciseSeed {
    fn to_definition(&self) -> ExerciseDefinition {
        ExerciseDefinition {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            pattern: self.pattern,
            modality: self.modality,
            required_equipment: self.equipment.iter().map(|s| (*s).to_owned()).collect(),
            difficulty: self.difficulty,
            tags: self.tags.iter().copied().collect(),
            primary_muscles: self
                .primary_muscles
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            secondary_muscles: self
                .secondary_muscles
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

/// Built-in definitions in arena order
pub(super) fn definitions() -> Vec<ExerciseDefinition> {
    EXERCISES.iter().map(ExerciseSeed::to_definition).collect()
}

const EXERCISES: &[ExerciseSeed] = &[
    // ========================================================================
    // Squat
    // ========================================================================
    ExerciseSeed {
        id: "back_squat",
        name: "Back Squat",
        pattern: MovementPattern::Squat,
        modality: Modality::Barbell,
        equipment: &[BARBELL],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Strength],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &["adductors", "spinal_erectors"],
    },
    ExerciseSeed {
        id: "front_squat",
        name: "Front Squat",
        pattern: MovementPattern::Squat,
        modality: Modality::Barbell,
        equipment: &[BARBELL],
        difficulty: Difficulty::Advanced,
        tags: &[ExerciseTag::Strength],
        primary_muscles: &["quadriceps"],
        secondary_muscles: &["glutes", "upper_back", "core"],
    },
    ExerciseSeed {
        id: "goblet_squat",
        name: "Goblet Squat",
        pattern: MovementPattern::Squat,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS, KETTLEBELL],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Strength, ExerciseTag::Hypertrophy],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &["core"],
    },
    ExerciseSeed {
        id: "air_squat",
        name: "Air Squat",
        pattern: MovementPattern::Squat,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Strength, ExerciseTag::Warmup],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &[],
    },
    ExerciseSeed {
        id: "jump_squat",
        name: "Jump Squat",
        pattern: MovementPattern::Squat,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Power, ExerciseTag::Primer],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &["calves"],
    },
    ExerciseSeed {
        id: "box_jump",
        name: "Box Jump",
        pattern: MovementPattern::Squat,
        modality: Modality::Bodyweight,
        equipment: &[PLYO_BOX],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Power, ExerciseTag::Primer],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &["calves"],
    },
    ExerciseSeed {
        id: "broad_jump",
        name: "Broad Jump",
        pattern: MovementPattern::Squat,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Power, ExerciseTag::Primer],
        primary_muscles: &["glutes", "quadriceps"],
        secondary_muscles: &["hamstrings", "calves"],
    },
    // ========================================================================
    // Hinge
    // ========================================================================
    ExerciseSeed {
        id: "deadlift",
        name: "Deadlift",
        pattern: MovementPattern::Hinge,
        modality: Modality::Barbell,
        equipment: &[BARBELL],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Strength],
        primary_muscles: &["glutes", "hamstrings", "spinal_erectors"],
        secondary_muscles: &["upper_back", "forearms"],
    },
    ExerciseSeed {
        id: "trap_bar_deadlift",
        name: "Trap Bar Deadlift",
        pattern: MovementPattern::Hinge,
        modality: Modality::Barbell,
        equipment: &[TRAP_BAR],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Strength],
        primary_muscles: &["glutes", "quadriceps", "hamstrings"],
        secondary_muscles: &["upper_back", "forearms"],
    },
    ExerciseSeed {
        id: "romanian_deadlift",
        name: "Romanian Deadlift",
        pattern: MovementPattern::Hinge,
        modality: Modality::Barbell,
        equipment: &[BARBELL, DUMBBELLS],
        difficulty: Difficulty::Intermediate,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::PosteriorChain,
            ExerciseTag::Hypertrophy,
        ],
        primary_muscles: &["hamstrings", "glutes"],
        secondary_muscles: &["spinal_erectors"],
    },
    ExerciseSeed {
        id: "kettlebell_deadlift",
        name: "Kettlebell Deadlift",
        pattern: MovementPattern::Hinge,
        modality: Modality::Kettlebell,
        equipment: &[KETTLEBELL, DUMBBELLS],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Strength],
        primary_muscles: &["glutes", "hamstrings"],
        secondary_muscles: &["forearms"],
    },
    ExerciseSeed {
        id: "glute_bridge",
        name: "Glute Bridge",
        pattern: MovementPattern::Hinge,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::PosteriorChain,
            ExerciseTag::Warmup,
        ],
        primary_muscles: &["glutes"],
        secondary_muscles: &["hamstrings"],
    },
    ExerciseSeed {
        id: "single_leg_rdl",
        name: "Single-Leg Romanian Deadlift",
        pattern: MovementPattern::Hinge,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS, KETTLEBELL],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::PosteriorChain, ExerciseTag::Unilateral],
        primary_muscles: &["hamstrings", "glutes"],
        secondary_muscles: &["core"],
    },
    ExerciseSeed {
        id: "nordic_curl",
        name: "Nordic Hamstring Curl",
        pattern: MovementPattern::Hinge,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Advanced,
        tags: &[ExerciseTag::PosteriorChain, ExerciseTag::Hypertrophy],
        primary_muscles: &["hamstrings"],
        secondary_muscles: &[],
    },
    ExerciseSeed {
        id: "kettlebell_swing",
        name: "Kettlebell Swing",
        pattern: MovementPattern::Hinge,
        modality: Modality::Kettlebell,
        equipment: &[KETTLEBELL],
        difficulty: Difficulty::Intermediate,
        tags: &[
            ExerciseTag::Conditioning,
            ExerciseTag::Power,
            ExerciseTag::PosteriorChain,
        ],
        primary_muscles: &["glutes", "hamstrings"],
        secondary_muscles: &["core", "forearms"],
    },
    ExerciseSeed {
        id: "leg_swing",
        name: "Leg Swings",
        pattern: MovementPattern::Hinge,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Warmup],
        primary_muscles: &["hip_flexors", "hamstrings"],
        secondary_muscles: &[],
    },
    // ========================================================================
    // Lunge
    // ========================================================================
    ExerciseSeed {
        id: "reverse_lunge",
        name: "Dumbbell Reverse Lunge",
        pattern: MovementPattern::Lunge,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS, KETTLEBELL],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::UnilateralLower,
            ExerciseTag::Unilateral,
        ],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &["adductors"],
    },
    ExerciseSeed {
        id: "bulgarian_split_squat",
        name: "Bulgarian Split Squat",
        pattern: MovementPattern::Lunge,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS, BENCH],
        difficulty: Difficulty::Intermediate,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::UnilateralLower,
            ExerciseTag::Unilateral,
            ExerciseTag::Hypertrophy,
        ],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &["adductors"],
    },
    ExerciseSeed {
        id: "walking_lunge",
        name: "Walking Lunge",
        pattern: MovementPattern::Lunge,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::UnilateralLower,
            ExerciseTag::Unilateral,
        ],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &["calves"],
    },
    ExerciseSeed {
        id: "step_up",
        name: "Step-Up",
        pattern: MovementPattern::Lunge,
        modality: Modality::Bodyweight,
        equipment: &[PLYO_BOX, BENCH],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::UnilateralLower, ExerciseTag::Unilateral],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &[],
    },
    ExerciseSeed {
        id: "sandbag_lunge",
        name: "Sandbag Lunge",
        pattern: MovementPattern::Lunge,
        modality: Modality::Implement,
        equipment: &[SANDBAG],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Hyrox, ExerciseTag::UnilateralLower],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &["core", "upper_back"],
    },
    ExerciseSeed {
        id: "worlds_greatest_stretch",
        name: "World's Greatest Stretch",
        pattern: MovementPattern::Lunge,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Warmup],
        primary_muscles: &["hip_flexors", "thoracic_spine"],
        secondary_muscles: &["hamstrings"],
    },
    // ========================================================================
    // Horizontal push
    // ========================================================================
    ExerciseSeed {
        id: "bench_press",
        name: "Bench Press",
        pattern: MovementPattern::HorizontalPush,
        modality: Modality::Barbell,
        equipment: &[BARBELL],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Strength],
        primary_muscles: &["chest", "triceps"],
        secondary_muscles: &["front_delts"],
    },
    ExerciseSeed {
        id: "dumbbell_bench_press",
        name: "Dumbbell Bench Press",
        pattern: MovementPattern::HorizontalPush,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::Hypertrophy,
            ExerciseTag::UpperPush,
        ],
        primary_muscles: &["chest", "triceps"],
        secondary_muscles: &["front_delts"],
    },
    ExerciseSeed {
        id: "incline_dumbbell_press",
        name: "Incline Dumbbell Press",
        pattern: MovementPattern::HorizontalPush,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Hypertrophy, ExerciseTag::UpperPush],
        primary_muscles: &["upper_chest"],
        secondary_muscles: &["front_delts", "triceps"],
    },
    ExerciseSeed {
        id: "push_up",
        name: "Push-Up",
        pattern: MovementPattern::HorizontalPush,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::UpperPush,
            ExerciseTag::Warmup,
        ],
        primary_muscles: &["chest", "triceps"],
        secondary_muscles: &["core"],
    },
    ExerciseSeed {
        id: "diamond_push_up",
        name: "Diamond Push-Up",
        pattern: MovementPattern::HorizontalPush,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Arms, ExerciseTag::UpperPush],
        primary_muscles: &["triceps"],
        secondary_muscles: &["chest"],
    },
    // ========================================================================
    // Vertical push
    // ========================================================================
    ExerciseSeed {
        id: "overhead_press",
        name: "Overhead Press",
        pattern: MovementPattern::VerticalPush,
        modality: Modality::Barbell,
        equipment: &[BARBELL],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Strength],
        primary_muscles: &["front_delts", "triceps"],
        secondary_muscles: &["upper_chest", "core"],
    },
    ExerciseSeed {
        id: "dumbbell_shoulder_press",
        name: "Dumbbell Shoulder Press",
        pattern: MovementPattern::VerticalPush,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS, KETTLEBELL],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::Shoulders,
            ExerciseTag::UpperPush,
        ],
        primary_muscles: &["front_delts", "side_delts"],
        secondary_muscles: &["triceps"],
    },
    ExerciseSeed {
        id: "pike_push_up",
        name: "Pike Push-Up",
        pattern: MovementPattern::VerticalPush,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Intermediate,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::UpperPush,
            ExerciseTag::Shoulders,
        ],
        primary_muscles: &["front_delts"],
        secondary_muscles: &["triceps"],
    },
    ExerciseSeed {
        id: "lateral_raise",
        name: "Lateral Raise",
        pattern: MovementPattern::VerticalPush,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS, CABLE_MACHINE, BANDS],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Shoulders, ExerciseTag::Hypertrophy],
        primary_muscles: &["side_delts"],
        secondary_muscles: &[],
    },
    ExerciseSeed {
        id: "triceps_extension",
        name: "Overhead Triceps Extension",
        pattern: MovementPattern::VerticalPush,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS, CABLE_MACHINE, BANDS],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Arms, ExerciseTag::Hypertrophy],
        primary_muscles: &["triceps"],
        secondary_muscles: &[],
    },
    // ========================================================================
    // Horizontal pull
    // ========================================================================
    ExerciseSeed {
        id: "barbell_row",
        name: "Barbell Row",
        pattern: MovementPattern::HorizontalPull,
        modality: Modality::Barbell,
        equipment: &[BARBELL],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Strength, ExerciseTag::UpperPull],
        primary_muscles: &["lats", "upper_back"],
        secondary_muscles: &["biceps", "spinal_erectors"],
    },
    ExerciseSeed {
        id: "dumbbell_row",
        name: "One-Arm Dumbbell Row",
        pattern: MovementPattern::HorizontalPull,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS, KETTLEBELL],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::UpperPull,
            ExerciseTag::Unilateral,
        ],
        primary_muscles: &["lats", "upper_back"],
        secondary_muscles: &["biceps"],
    },
    ExerciseSeed {
        id: "inverted_row",
        name: "Inverted Row",
        pattern: MovementPattern::HorizontalPull,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Strength, ExerciseTag::UpperPull],
        primary_muscles: &["upper_back", "lats"],
        secondary_muscles: &["biceps", "core"],
    },
    ExerciseSeed {
        id: "cable_row",
        name: "Seated Cable Row",
        pattern: MovementPattern::HorizontalPull,
        modality: Modality::Cable,
        equipment: &[CABLE_MACHINE],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::UpperPull,
            ExerciseTag::Hypertrophy,
        ],
        primary_muscles: &["upper_back", "lats"],
        secondary_muscles: &["biceps"],
    },
    ExerciseSeed {
        id: "face_pull",
        name: "Face Pull",
        pattern: MovementPattern::HorizontalPull,
        modality: Modality::Cable,
        equipment: &[CABLE_MACHINE, BANDS],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Shoulders, ExerciseTag::UpperPull],
        primary_muscles: &["rear_delts", "rotator_cuff"],
        secondary_muscles: &["upper_back"],
    },
    ExerciseSeed {
        id: "band_pull_apart",
        name: "Band Pull-Apart",
        pattern: MovementPattern::HorizontalPull,
        modality: Modality::Band,
        equipment: &[BANDS],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Warmup,
            ExerciseTag::Primer,
            ExerciseTag::Shoulders,
        ],
        primary_muscles: &["rear_delts"],
        secondary_muscles: &["upper_back"],
    },
    ExerciseSeed {
        id: "biceps_curl",
        name: "Biceps Curl",
        pattern: MovementPattern::HorizontalPull,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS, CABLE_MACHINE, BANDS],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Arms, ExerciseTag::Hypertrophy],
        primary_muscles: &["biceps"],
        secondary_muscles: &["forearms"],
    },
    // ========================================================================
    // Vertical pull
    // ========================================================================
    ExerciseSeed {
        id: "pull_up",
        name: "Pull-Up",
        pattern: MovementPattern::VerticalPull,
        modality: Modality::Bodyweight,
        equipment: &[PULL_UP_BAR],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Strength, ExerciseTag::UpperPull],
        primary_muscles: &["lats"],
        secondary_muscles: &["biceps", "upper_back"],
    },
    ExerciseSeed {
        id: "chin_up",
        name: "Chin-Up",
        pattern: MovementPattern::VerticalPull,
        modality: Modality::Bodyweight,
        equipment: &[PULL_UP_BAR],
        difficulty: Difficulty::Intermediate,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::UpperPull,
            ExerciseTag::Arms,
        ],
        primary_muscles: &["lats", "biceps"],
        secondary_muscles: &["upper_back"],
    },
    ExerciseSeed {
        id: "lat_pulldown",
        name: "Lat Pulldown",
        pattern: MovementPattern::VerticalPull,
        modality: Modality::Cable,
        equipment: &[CABLE_MACHINE],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::UpperPull,
            ExerciseTag::Hypertrophy,
        ],
        primary_muscles: &["lats"],
        secondary_muscles: &["biceps"],
    },
    ExerciseSeed {
        id: "band_pulldown",
        name: "Band Lat Pulldown",
        pattern: MovementPattern::VerticalPull,
        modality: Modality::Band,
        equipment: &[BANDS],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Strength, ExerciseTag::UpperPull],
        primary_muscles: &["lats"],
        secondary_muscles: &["biceps"],
    },
    ExerciseSeed {
        id: "dead_hang",
        name: "Dead Hang",
        pattern: MovementPattern::VerticalPull,
        modality: Modality::Bodyweight,
        equipment: &[PULL_UP_BAR],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Grip],
        primary_muscles: &["forearms"],
        secondary_muscles: &["lats"],
    },
    // ========================================================================
    // Carry
    // ========================================================================
    ExerciseSeed {
        id: "farmers_carry",
        name: "Farmer's Carry",
        pattern: MovementPattern::Carry,
        modality: Modality::Dumbbell,
        equipment: &[DUMBBELLS, KETTLEBELL],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Strength,
            ExerciseTag::Grip,
            ExerciseTag::Hyrox,
        ],
        primary_muscles: &["forearms", "traps"],
        secondary_muscles: &["core", "glutes"],
    },
    ExerciseSeed {
        id: "suitcase_carry",
        name: "Suitcase Carry",
        pattern: MovementPattern::Carry,
        modality: Modality::Kettlebell,
        equipment: &[KETTLEBELL, DUMBBELLS],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Grip,
            ExerciseTag::Core,
            ExerciseTag::Unilateral,
        ],
        primary_muscles: &["obliques", "forearms"],
        secondary_muscles: &["traps"],
    },
    // ========================================================================
    // Core
    // ========================================================================
    ExerciseSeed {
        id: "plank",
        name: "Plank",
        pattern: MovementPattern::Core,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Core, ExerciseTag::CoreAntiExtension],
        primary_muscles: &["rectus_abdominis", "transverse_abdominis"],
        secondary_muscles: &["shoulders"],
    },
    ExerciseSeed {
        id: "dead_bug",
        name: "Dead Bug",
        pattern: MovementPattern::Core,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Core,
            ExerciseTag::CoreAntiExtension,
            ExerciseTag::Warmup,
        ],
        primary_muscles: &["transverse_abdominis"],
        secondary_muscles: &["hip_flexors"],
    },
    ExerciseSeed {
        id: "hollow_hold",
        name: "Hollow Hold",
        pattern: MovementPattern::Core,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Core],
        primary_muscles: &["rectus_abdominis"],
        secondary_muscles: &["hip_flexors"],
    },
    ExerciseSeed {
        id: "pallof_press",
        name: "Pallof Press",
        pattern: MovementPattern::Core,
        modality: Modality::Cable,
        equipment: &[CABLE_MACHINE, BANDS],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Core],
        primary_muscles: &["obliques"],
        secondary_muscles: &["transverse_abdominis"],
    },
    ExerciseSeed {
        id: "hanging_knee_raise",
        name: "Hanging Knee Raise",
        pattern: MovementPattern::Core,
        modality: Modality::Bodyweight,
        equipment: &[PULL_UP_BAR],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Core, ExerciseTag::Grip],
        primary_muscles: &["rectus_abdominis", "hip_flexors"],
        secondary_muscles: &["forearms"],
    },
    ExerciseSeed {
        id: "bear_crawl",
        name: "Bear Crawl",
        pattern: MovementPattern::Core,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[
            ExerciseTag::Core,
            ExerciseTag::Warmup,
            ExerciseTag::Conditioning,
        ],
        primary_muscles: &["shoulders", "core"],
        secondary_muscles: &["quadriceps"],
    },
    ExerciseSeed {
        id: "cat_cow",
        name: "Cat-Cow",
        pattern: MovementPattern::Core,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Warmup],
        primary_muscles: &["spinal_erectors"],
        secondary_muscles: &[],
    },
    // ========================================================================
    // Conditioning
    // ========================================================================
    ExerciseSeed {
        id: "row_erg",
        name: "Rowing Ergometer",
        pattern: MovementPattern::Conditioning,
        modality: Modality::CardioMachine,
        equipment: &[ROWER],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Conditioning, ExerciseTag::Hyrox],
        primary_muscles: &["legs", "lats"],
        secondary_muscles: &["core"],
    },
    ExerciseSeed {
        id: "ski_erg",
        name: "SkiErg",
        pattern: MovementPattern::Conditioning,
        modality: Modality::CardioMachine,
        equipment: &[SKI_ERG],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Conditioning, ExerciseTag::Hyrox],
        primary_muscles: &["lats", "triceps"],
        secondary_muscles: &["core"],
    },
    ExerciseSeed {
        id: "air_bike",
        name: "Air Bike",
        pattern: MovementPattern::Conditioning,
        modality: Modality::CardioMachine,
        equipment: &[AIR_BIKE],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Conditioning],
        primary_muscles: &["quadriceps"],
        secondary_muscles: &["shoulders"],
    },
    ExerciseSeed {
        id: "treadmill_run",
        name: "Treadmill Run",
        pattern: MovementPattern::Conditioning,
        modality: Modality::CardioMachine,
        equipment: &[TREADMILL],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Conditioning],
        primary_muscles: &["legs"],
        secondary_muscles: &[],
    },
    ExerciseSeed {
        id: "run",
        name: "Run",
        pattern: MovementPattern::Conditioning,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Conditioning, ExerciseTag::Hyrox],
        primary_muscles: &["legs"],
        secondary_muscles: &[],
    },
    ExerciseSeed {
        id: "burpee",
        name: "Burpee",
        pattern: MovementPattern::Conditioning,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Conditioning],
        primary_muscles: &["full_body"],
        secondary_muscles: &[],
    },
    ExerciseSeed {
        id: "burpee_broad_jump",
        name: "Burpee Broad Jump",
        pattern: MovementPattern::Conditioning,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Intermediate,
        tags: &[
            ExerciseTag::Conditioning,
            ExerciseTag::Hyrox,
            ExerciseTag::Power,
        ],
        primary_muscles: &["full_body"],
        secondary_muscles: &[],
    },
    ExerciseSeed {
        id: "mountain_climber",
        name: "Mountain Climber",
        pattern: MovementPattern::Conditioning,
        modality: Modality::Bodyweight,
        equipment: &[],
        difficulty: Difficulty::Beginner,
        tags: &[ExerciseTag::Conditioning, ExerciseTag::Core],
        primary_muscles: &["core", "hip_flexors"],
        secondary_muscles: &["shoulders"],
    },
    ExerciseSeed {
        id: "sled_push",
        name: "Sled Push",
        pattern: MovementPattern::Conditioning,
        modality: Modality::Sled,
        equipment: &[SLED],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Conditioning, ExerciseTag::Hyrox],
        primary_muscles: &["quadriceps", "glutes"],
        secondary_muscles: &["calves", "shoulders"],
    },
    ExerciseSeed {
        id: "sled_pull",
        name: "Sled Pull",
        pattern: MovementPattern::Conditioning,
        modality: Modality::Sled,
        equipment: &[SLED],
        difficulty: Difficulty::Intermediate,
        tags: &[ExerciseTag::Conditioning, ExerciseTag::Hyrox],
        primary_muscles: &["upper_back", "lats"],
        secondary_muscles: &["forearms", "hamstrings"],
    },
    ExerciseSeed {
        id: "wall_ball",
        name: "Wall Ball Shot",
        pattern: MovementPattern::Squat,
        modality: Modality::Implement,
        equipment: &[WALL_BALL],
        difficulty: Difficulty::Intermediate,
        tags: &[
            ExerciseTag::Conditioning,
            ExerciseTag::Hyrox,
            ExerciseTag::Power,
        ],
        primary_muscles: &["quadriceps", "shoulders"],
        secondary_muscles: &["glutes", "triceps"],
    },
];
