// ABOUTME: Microcycle and training-cycle configuration
// ABOUTME: Technique-week placement, RPE reduction, and week-over-week load multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use serde::{Deserialize, Serialize};

use crate::programming_constants::cycle::{
    DEFAULT_CYCLE_WEEKS, DELOAD_MULTIPLIER, PROGRESSION_MULTIPLIERS, TECHNIQUE_RPE_FLOOR,
    TECHNIQUE_RPE_REDUCTION, TECHNIQUE_WEEK_INDEX, TECHNIQUE_ZONE_FLOOR, WEEKS_PER_MICROCYCLE,
};

/// Cycle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Calendar weeks produced by one microcycle expansion
    pub weeks_per_microcycle: u32,
    /// Zero-based week receiving the technique modifier
    pub technique_week_index: u32,
    /// RPE points removed in the technique week
    pub technique_rpe_reduction: u8,
    /// Lowest RPE the technique week may prescribe
    pub technique_rpe_floor: u8,
    /// Lowest zone the technique week may prescribe
    pub technique_zone_floor: u8,
    /// Weeks in a training cycle when the caller does not specify
    pub default_cycle_weeks: u32,
    /// Multipliers for weeks 0, 1, 2, ...
    pub progression_multipliers: Vec<f64>,
    /// Multiplier for every week past the progression table
    pub deload_multiplier: f64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            weeks_per_microcycle: WEEKS_PER_MICROCYCLE,
            technique_week_index: TECHNIQUE_WEEK_INDEX,
            technique_rpe_reduction: TECHNIQUE_RPE_REDUCTION,
            technique_rpe_floor: TECHNIQUE_RPE_FLOOR,
            technique_zone_floor: TECHNIQUE_ZONE_FLOOR,
            default_cycle_weeks: DEFAULT_CYCLE_WEEKS,
            progression_multipliers: PROGRESSION_MULTIPLIERS.to_vec(),
            deload_multiplier: DELOAD_MULTIPLIER,
        }
    }
}

impl CycleConfig {
    /// Load multiplier for a zero-based week index
    #[must_use]
    pub fn week_multiplier(&self, week_index: u32) -> f64 {
        self.progression_multipliers
            .get(week_index as usize)
            .copied()
            .unwrap_or(self.deload_multiplier)
    }
}
