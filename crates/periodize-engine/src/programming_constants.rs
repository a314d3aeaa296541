// ABOUTME: Numeric programming policy: wave intensities, durations, readiness and HYROX standards
// ABOUTME: Grouped by domain so generators share one source for every tunable number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Programming constants
//!
//! Values used across generators. Anything a deployment may want to tune lives in
//! `EngineConfig`; these are the defaults and the fixed tables.

/// Intensity wave phases
///
/// Reference: Zourdos, M.C. et al. (2016). Novel resistance training-specific RPE scale
/// measuring repetitions in reserve. *J Strength Cond Res*, 30(1), 267-275.
pub mod waves {
    /// Days per wave cycle
    pub const WAVE_PERIOD: u32 = 4;
    /// Base phase RPE / percent of max
    pub const BASE: (u8, u8) = (7, 70);
    /// Load phase RPE / percent of max
    pub const LOAD: (u8, u8) = (8, 75);
    /// Peak phase RPE / percent of max
    pub const PEAK: (u8, u8) = (9, 80);
    /// Deload phase RPE / percent of max
    pub const DELOAD: (u8, u8) = (6, 60);
}

/// Strength block timing
pub mod strength {
    /// Time under load per working set
    pub const WORK_SECONDS_PER_SET: u32 = 45;
    /// Rest between sets in the base phase
    pub const BASE_REST_SECONDS: u32 = 120;
    /// Rest between sets in the load phase
    pub const LOAD_REST_SECONDS: u32 = 150;
    /// Rest between sets in the peak phase
    pub const PEAK_REST_SECONDS: u32 = 180;
    /// Rest between sets in the deload phase
    pub const DELOAD_REST_SECONDS: u32 = 90;
    /// Ramp-up sets before working sets, in minutes
    pub const RAMP_UP_MINUTES: u32 = 4;
}

/// Accessory block volume and timing
pub mod accessory {
    /// Seconds per accessory set including rest
    pub const SECONDS_PER_SET: u32 = 90;
    /// Accessory RPE sits this far below the day's main-lift RPE
    pub const RPE_OFFSET: u8 = 1;
    /// Lowest accessory RPE
    pub const MIN_RPE: u8 = 5;
}

/// Warmup composition
pub mod warmup {
    /// Maximum drills per warmup
    pub const WINDOW: usize = 3;
    /// Minutes per warmup drill
    pub const MINUTES_PER_DRILL: u32 = 2;
    /// General pulse-raiser minutes before drills
    pub const PULSE_RAISER_MINUTES: u32 = 3;
    /// Default reps for rep-based drills
    pub const DRILL_REPS: u32 = 10;
    /// Default hold for timed drills
    pub const DRILL_HOLD_SECONDS: u32 = 30;
}

/// Conditioning prescription table
pub mod conditioning {
    /// Base minutes for a short day
    pub const SHORT_MINUTES: u32 = 8;
    /// Base minutes for a standard day
    pub const STANDARD_MINUTES: u32 = 12;
    /// Base minutes for a long day
    pub const LONG_MINUTES: u32 = 20;
    /// Minutes added in the load phase
    pub const LOAD_BONUS_MINUTES: u32 = 3;
    /// Minutes added in the peak phase
    pub const PEAK_BONUS_MINUTES: u32 = 6;
    /// Duration multiplier in the deload phase
    pub const DELOAD_DURATION_FACTOR: f64 = 0.6;
    /// Interval work length
    pub const INTERVAL_WORK_SECONDS: u32 = 60;
    /// Interval rest length
    pub const INTERVAL_REST_SECONDS: u32 = 60;
    /// Minimum conditioning minutes after scaling
    pub const MIN_MINUTES: u32 = 4;
    /// Lowest zone
    pub const MIN_ZONE: u8 = 1;
    /// Highest zone
    pub const MAX_ZONE: u8 = 5;
}

/// HYROX template and race standards (Open division)
///
/// Reference: HYROX Rulebook 2024/25, Division standards.
pub mod hyrox {
    /// Template base minutes for a short day
    pub const SHORT_BASE_MINUTES: u32 = 15;
    /// Template base minutes for a standard day
    pub const STANDARD_BASE_MINUTES: u32 = 20;
    /// Template base minutes for a long day
    pub const LONG_BASE_MINUTES: u32 = 30;
    /// Wave intensity multipliers (base, load, peak, deload)
    pub const WAVE_MULTIPLIERS: [f64; 4] = [1.0, 1.1, 1.2, 0.7];
    /// Race run segment
    pub const RUN_METERS: u32 = 1000;
    /// Ski erg distance
    pub const SKI_ERG_METERS: u32 = 1000;
    /// Sled push distance
    pub const SLED_PUSH_METERS: u32 = 50;
    /// Sled push load
    pub const SLED_PUSH_KG: f64 = 152.0;
    /// Sled pull distance
    pub const SLED_PULL_METERS: u32 = 50;
    /// Sled pull load
    pub const SLED_PULL_KG: f64 = 103.0;
    /// Burpee broad jump distance
    pub const BURPEE_BROAD_JUMP_METERS: u32 = 80;
    /// Row distance
    pub const ROW_METERS: u32 = 1000;
    /// Farmer carry distance
    pub const FARMER_CARRY_METERS: u32 = 200;
    /// Farmer carry load per hand
    pub const FARMER_CARRY_KG: f64 = 24.0;
    /// Sandbag lunge distance
    pub const SANDBAG_LUNGE_METERS: u32 = 100;
    /// Sandbag load
    pub const SANDBAG_KG: f64 = 20.0;
    /// Wall ball repetitions
    pub const WALL_BALL_REPS: u32 = 100;
    /// Wall ball load
    pub const WALL_BALL_KG: f64 = 6.0;
    /// Estimated minutes per run segment
    pub const RUN_SEGMENT_MINUTES: f64 = 5.0;
    /// Estimated minutes per station
    pub const STATION_MINUTES: f64 = 4.5;
}

/// Readiness factor
pub mod readiness {
    /// Factor without readiness data
    pub const NEUTRAL_FACTOR: f64 = 1.0;
    /// Factor change per rating point away from neutral
    pub const RATING_STEP: f64 = 0.05;
    /// Weight of the normalized score term
    pub const SCORE_WEIGHT: f64 = 0.1;
    /// Lower clamp
    pub const FACTOR_MIN: f64 = 0.6;
    /// Upper clamp
    pub const FACTOR_MAX: f64 = 1.2;
}

/// Cycle structure
pub mod cycle {
    /// Weeks produced by one microcycle expansion
    pub const WEEKS_PER_MICROCYCLE: u32 = 6;
    /// Zero-based technique week
    pub const TECHNIQUE_WEEK_INDEX: u32 = 3;
    /// RPE points removed in the technique week
    pub const TECHNIQUE_RPE_REDUCTION: u8 = 2;
    /// Lowest technique-week RPE
    pub const TECHNIQUE_RPE_FLOOR: u8 = 5;
    /// Lowest technique-week zone
    pub const TECHNIQUE_ZONE_FLOOR: u8 = 1;
    /// Longest microcycle the configuration accepts
    pub const MAX_WEEKS_PER_MICROCYCLE: u32 = 52;
    /// Weeks in a training cycle by default
    pub const DEFAULT_CYCLE_WEEKS: u32 = 4;
    /// Longest training cycle; requests above this are clamped
    pub const MAX_CYCLE_WEEKS: u32 = 104;
    /// Week 0, 1, 2 multipliers
    pub const PROGRESSION_MULTIPLIERS: [f64; 3] = [1.0, 1.05, 1.08];
    /// Week 3 and beyond
    pub const DELOAD_MULTIPLIER: f64 = 0.8;
    /// Multiplier above which conditioning zones step up
    pub const ZONE_STEP_UP_THRESHOLD: f64 = 1.05;
}

/// Personal-record estimation
///
/// References:
/// - Epley, B. (1985). Poundage Chart. Boyd Epley Workout.
/// - Brzycki, M. (1993). Strength testing: predicting a one-rep max from reps-to-fatigue.
///   *JOPERD*, 64(1), 88-90.
pub mod one_rep_max {
    /// Lowest repetition count used in estimation
    pub const MIN_REPS: i32 = 1;
    /// Highest repetition count used in estimation
    pub const MAX_REPS: i32 = 20;
    /// Epley divisor
    pub const EPLEY_DIVISOR: f64 = 30.0;
    /// Brzycki numerator
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;
    /// Brzycki denominator base
    pub const BRZYCKI_BASE: f64 = 37.0;
    /// RPE modifier per point of reps-in-reserve
    pub const RPE_STEP: f64 = 0.02;
    /// Lowest RPE modifier
    pub const RPE_MODIFIER_MIN: f64 = 0.85;
    /// Highest RPE modifier
    pub const RPE_MODIFIER_MAX: f64 = 1.1;
}
