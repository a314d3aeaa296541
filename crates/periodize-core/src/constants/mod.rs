// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Equipment identifiers, id namespaces, and plan defaults for periodize
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Equipment identifiers as they appear in user profiles and exercise definitions
pub mod equipment {
    /// Olympic barbell
    pub const BARBELL: &str = "barbell";
    /// Squat rack or power cage
    pub const RACK: &str = "rack";
    /// Flat/adjustable bench
    pub const BENCH: &str = "bench";
    /// Pair of dumbbells
    pub const DUMBBELLS: &str = "dumbbells";
    /// Kettlebell
    pub const KETTLEBELL: &str = "kettlebell";
    /// Pull-up bar
    pub const PULL_UP_BAR: &str = "pull_up_bar";
    /// Cable stack
    pub const CABLE_MACHINE: &str = "cable_machine";
    /// Resistance bands
    pub const BANDS: &str = "bands";
    /// Rowing ergometer
    pub const ROWER: &str = "rower";
    /// Ski ergometer
    pub const SKI_ERG: &str = "ski_erg";
    /// Air bike / assault bike
    pub const AIR_BIKE: &str = "air_bike";
    /// Treadmill
    pub const TREADMILL: &str = "treadmill";
    /// Push/pull sled
    pub const SLED: &str = "sled";
    /// Wall ball (medicine ball and target)
    pub const WALL_BALL: &str = "wall_ball";
    /// Sandbag
    pub const SANDBAG: &str = "sandbag";
    /// Plyo box
    pub const PLYO_BOX: &str = "plyo_box";
    /// Trap / hex bar
    pub const TRAP_BAR: &str = "trap_bar";
}

/// Namespaces for deterministic UUID v5 identifiers
pub mod id_namespaces {
    use uuid::Uuid;

    /// Namespace for `WorkoutPlanDay` identifiers
    pub const PLAN_DAY: Uuid = Uuid::from_u128(0x6a1f_3c52_9d4e_4b7a_8e21_05c3_f7d9_a101);
    /// Namespace for `TrainingCycle` identifiers
    pub const TRAINING_CYCLE: Uuid = Uuid::from_u128(0x6a1f_3c52_9d4e_4b7a_8e21_05c3_f7d9_a102);
    /// Namespace for `PRRecord` identifiers
    pub const PR_RECORD: Uuid = Uuid::from_u128(0x6a1f_3c52_9d4e_4b7a_8e21_05c3_f7d9_a103);
}

/// Weekly structure constants
pub mod calendar {
    /// Days in a training week
    pub const DAYS_PER_WEEK: u32 = 7;
    /// Minimum training days per week accepted from a profile
    pub const MIN_TRAINING_DAYS: u8 = 1;
    /// Maximum training days per week accepted from a profile
    pub const MAX_TRAINING_DAYS: u8 = 7;
}

/// Readiness input scales
pub mod readiness_scale {
    /// Lowest self-reported rating
    pub const MIN_RATING: u8 = 1;
    /// Highest self-reported rating
    pub const MAX_RATING: u8 = 5;
    /// Midpoint of a 1-5 rating
    pub const NEUTRAL_RATING: u8 = 3;
    /// Highest readiness score
    pub const MAX_SCORE: u8 = 100;
    /// Midpoint readiness score
    pub const NEUTRAL_SCORE: u8 = 50;
}

/// Load rounding
pub mod loading {
    /// Plates and percentages snap to this increment
    pub const LOAD_INCREMENT: f64 = 2.5;
}
