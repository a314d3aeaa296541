// ABOUTME: Workout plan models: set prescriptions, typed workout blocks, plan days and cycles
// ABOUTME: WorkoutBlock is a tagged sum type with exactly one payload per block kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::exercise::{ExerciseTag, MovementPattern};

/// One prescribed set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SetPrescription {
    /// Target repetitions
    pub target_reps: Option<u32>,
    /// Target RPE (1-10)
    pub target_rpe: Option<u8>,
    /// Target load as a percentage of one-rep-max
    #[serde(rename = "target_percent_1rm")]
    pub target_percent_one_rep_max: Option<f64>,
    /// Target load in kilograms, when a one-rep-max is on record
    pub target_weight: Option<f64>,
}

/// Block type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Movement preparation
    Warmup,
    /// Main lift
    Strength,
    /// Supplemental lifts
    Accessory,
    /// Energy-system work
    Conditioning,
    /// Down-regulation
    Cooldown,
}

impl BlockKind {
    /// Canonical order of blocks within a day
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::Warmup,
        Self::Strength,
        Self::Accessory,
        Self::Conditioning,
        Self::Cooldown,
    ];

    /// Minutes assumed for a block that carries content but no estimate
    #[must_use]
    pub const fn default_minutes(&self) -> u32 {
        match self {
            Self::Warmup => 8,
            Self::Strength => 20,
            Self::Accessory => 12,
            Self::Conditioning => 15,
            Self::Cooldown => 5,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warmup => "warmup",
            Self::Strength => "strength",
            Self::Accessory => "accessory",
            Self::Conditioning => "conditioning",
            Self::Cooldown => "cooldown",
        })
    }
}

/// One warmup movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarmupExercise {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Repetitions, for rep-based drills
    pub reps: Option<u32>,
    /// Hold or work duration, for timed drills
    pub duration_seconds: Option<u32>,
}

/// Warmup payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupBlock {
    /// Display title
    pub title: String,
    /// Drills in order
    pub exercises: Vec<WarmupExercise>,
    /// Estimated minutes
    pub estimated_minutes: u32,
}

/// Main-lift payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthBlock {
    /// Display title
    pub title: String,
    /// Pattern requested for the day
    pub pattern: MovementPattern,
    /// Resolved main exercise; `None` marks a placeholder block
    pub exercise_id: Option<String>,
    /// Ordered set prescriptions
    pub sets: Vec<SetPrescription>,
    /// Rest between sets
    pub rest_seconds: u32,
    /// One-rep-max the target weights were derived from
    pub reference_one_rep_max: Option<f64>,
    /// Estimated minutes
    pub estimated_minutes: u32,
    /// Coaching notes
    #[serde(default)]
    pub notes: Vec<String>,
}

impl StrengthBlock {
    /// Whether no exercise could be resolved for this block
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.exercise_id.is_none()
    }
}

/// One accessory movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryExercise {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Template tag this exercise fills
    pub tag: ExerciseTag,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Target RPE
    pub target_rpe: u8,
}

/// Accessory payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryBlock {
    /// Display title
    pub title: String,
    /// Exercises in template order
    pub exercises: Vec<AccessoryExercise>,
    /// Estimated minutes
    pub estimated_minutes: u32,
}

/// Conditioning style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditioningStyle {
    /// Continuous aerobic work
    Z2,
    /// Sustained threshold-adjacent work
    Tempo,
    /// Work/rest intervals
    Intervals,
}

/// Zone-based conditioning on a single modality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneWork {
    /// Catalog exercise id (machine, kettlebell or bodyweight)
    pub exercise_id: String,
    /// Style of work
    pub style: ConditioningStyle,
    /// Total working minutes
    pub duration_minutes: u32,
    /// Interval rounds, for interval work
    pub rounds: Option<u32>,
    /// Work interval length
    pub work_seconds: Option<u32>,
    /// Rest interval length
    pub rest_seconds: Option<u32>,
}

/// HYROX template families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HyroxTemplateKind {
    /// Sled push/pull with runs
    SledPushPull,
    /// Wall-ball chipper with lunges
    WallBallChipper,
    /// Ski/row/bike intervals
    MachineIntervals,
    /// Burpee broad jumps with runs
    BurpeeBroadJump,
}

/// HYROX station identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HyroxStationKind {
    /// Running segment
    Run,
    /// Ski ergometer
    SkiErg,
    /// Sled push
    SledPush,
    /// Sled pull
    SledPull,
    /// Burpee broad jumps
    BurpeeBroadJump,
    /// Rowing ergometer
    Row,
    /// Farmer carry
    FarmerCarry,
    /// Sandbag lunges
    SandbagLunge,
    /// Wall balls
    WallBall,
}

/// Work quantity for a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum StationQuantity {
    /// Distance in meters
    Meters(u32),
    /// Repetitions
    Reps(u32),
    /// Duration in seconds
    Seconds(u32),
}

impl StationQuantity {
    /// Numeric value regardless of unit
    #[must_use]
    pub const fn value(&self) -> u32 {
        match self {
            Self::Meters(v) | Self::Reps(v) | Self::Seconds(v) => *v,
        }
    }

    /// Same unit with a new value
    #[must_use]
    pub const fn with_value(&self, value: u32) -> Self {
        match self {
            Self::Meters(_) => Self::Meters(value),
            Self::Reps(_) => Self::Reps(value),
            Self::Seconds(_) => Self::Seconds(value),
        }
    }
}

/// One station or run segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyroxStation {
    /// Which station this segment represents
    pub station: HyroxStationKind,
    /// Catalog exercise performed
    pub exercise_id: String,
    /// Work quantity
    pub quantity: StationQuantity,
    /// Implement load in kilograms
    pub load_kg: Option<f64>,
    /// True when a bodyweight fallback replaced missing equipment
    pub substituted: bool,
}

/// Equipment-conditional HYROX session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyroxWorkout {
    /// Template family
    pub template: HyroxTemplateKind,
    /// Rounds through the station list
    pub rounds: u32,
    /// Stations per round
    pub stations: Vec<HyroxStation>,
    /// Session time cap
    pub time_cap_minutes: u32,
}

/// Full race simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceSimulation {
    /// Runs alternating with stations
    pub segments: Vec<HyroxStation>,
    /// Readiness factor applied to every quantity and load
    pub readiness_factor: f64,
}

/// Conditioning payload variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ConditioningWork {
    /// Single-modality zone work
    Zone(ZoneWork),
    /// HYROX template session
    Hyrox(HyroxWorkout),
    /// HYROX race simulation
    RaceSimulation(RaceSimulation),
}

/// Conditioning payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditioningBlock {
    /// Display title
    pub title: String,
    /// Intensity zone (1-5)
    pub zone: u8,
    /// Estimated minutes
    pub estimated_minutes: u32,
    /// Prescribed work
    pub work: ConditioningWork,
    /// Coaching notes
    #[serde(default)]
    pub notes: Vec<String>,
}

/// One cooldown item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownItem {
    /// Display name
    pub name: String,
    /// Duration
    pub duration_seconds: u32,
}

/// Cooldown payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooldownBlock {
    /// Display title
    pub title: String,
    /// Items in order
    pub items: Vec<CooldownItem>,
    /// Estimated minutes
    pub estimated_minutes: u32,
}

/// A typed workout block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutBlock {
    /// Warmup block
    Warmup(WarmupBlock),
    /// Strength block
    Strength(StrengthBlock),
    /// Accessory block
    Accessory(AccessoryBlock),
    /// Conditioning block
    Conditioning(ConditioningBlock),
    /// Cooldown block
    Cooldown(CooldownBlock),
}

impl WorkoutBlock {
    /// Type tag of this block
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        match self {
            Self::Warmup(_) => BlockKind::Warmup,
            Self::Strength(_) => BlockKind::Strength,
            Self::Accessory(_) => BlockKind::Accessory,
            Self::Conditioning(_) => BlockKind::Conditioning,
            Self::Cooldown(_) => BlockKind::Cooldown,
        }
    }

    /// Display title
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Warmup(b) => &b.title,
            Self::Strength(b) => &b.title,
            Self::Accessory(b) => &b.title,
            Self::Conditioning(b) => &b.title,
            Self::Cooldown(b) => &b.title,
        }
    }

    /// Minutes reported by the generator
    #[must_use]
    pub const fn estimated_minutes(&self) -> u32 {
        match self {
            Self::Warmup(b) => b.estimated_minutes,
            Self::Strength(b) => b.estimated_minutes,
            Self::Accessory(b) => b.estimated_minutes,
            Self::Conditioning(b) => b.estimated_minutes,
            Self::Cooldown(b) => b.estimated_minutes,
        }
    }

    /// Minutes this block contributes to the day total
    ///
    /// Placeholder strength blocks contribute zero. Any other block that
    /// reports no estimate falls back to [`BlockKind::default_minutes`].
    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        match self {
            Self::Strength(b) if b.is_placeholder() => 0,
            block => match block.estimated_minutes() {
                0 => block.kind().default_minutes(),
                minutes => minutes,
            },
        }
    }
}

/// One calendar day of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlanDay {
    /// Deterministic identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar date
    pub date: NaiveDate,
    /// Zero-based index within the generated cycle
    pub day_index: u32,
    /// Focus tags (pattern names, `conditioning` or `rest`)
    pub focus: Vec<String>,
    /// Blocks in canonical order; empty exactly on rest days
    pub blocks: Vec<WorkoutBlock>,
    /// Sum of block durations
    pub total_minutes: u32,
    /// Whether a non-neutral readiness factor shaped this day
    pub readiness_adjusted: bool,
    /// Generation timestamp
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlanDay {
    /// Whether this is a rest day
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.blocks.is_empty()
    }

    /// First block of the given kind
    #[must_use]
    pub fn block(&self, kind: BlockKind) -> Option<&WorkoutBlock> {
        self.blocks.iter().find(|block| block.kind() == kind)
    }

    /// Strength payload, if present
    #[must_use]
    pub fn strength(&self) -> Option<&StrengthBlock> {
        self.blocks.iter().find_map(|block| match block {
            WorkoutBlock::Strength(b) => Some(b),
            _ => None,
        })
    }

    /// Conditioning payload, if present
    #[must_use]
    pub fn conditioning(&self) -> Option<&ConditioningBlock> {
        self.blocks.iter().find_map(|block| match block {
            WorkoutBlock::Conditioning(b) => Some(b),
            _ => None,
        })
    }
}

/// One week of a training cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingWeek {
    /// Zero-based week index within the cycle
    pub week_index: u32,
    /// Load multiplier applied to this week
    pub multiplier: f64,
    /// Seven days in calendar order
    pub days: Vec<WorkoutPlanDay>,
}

/// Multi-week training cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCycle {
    /// Deterministic identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// First calendar day
    pub start_date: NaiveDate,
    /// Last calendar day
    pub end_date: NaiveDate,
    /// Weeks in order
    pub weeks: Vec<TrainingWeek>,
}

impl TrainingCycle {
    /// All days in calendar order
    pub fn days(&self) -> impl Iterator<Item = &WorkoutPlanDay> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }
}
