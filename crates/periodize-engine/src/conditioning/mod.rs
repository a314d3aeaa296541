// ABOUTME: Conditioning prescription table keyed by day type, goal, time availability and wave
// ABOUTME: Hosts the HYROX template library and the nine-station race simulator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Conditioning prescription
//!
//! The day type cycles with `day_index % 7` through
//! strength, mixed, engine, strength, mixed, engine, rest. Zone and style come
//! from day type x goal; base minutes come from time availability (8/12/20) and
//! are adjusted by the wave (+3 load, +6 peak, x0.6 deload).

pub mod hyrox;
pub mod race;

use periodize_core::models::{ConditioningStyle, TimeAvailability, TrainingGoal};
use serde::{Deserialize, Serialize};

use crate::programming_constants::conditioning::{
    DELOAD_DURATION_FACTOR, LOAD_BONUS_MINUTES, LONG_MINUTES, MIN_MINUTES, PEAK_BONUS_MINUTES,
    SHORT_MINUTES, STANDARD_MINUTES,
};
use crate::waves::{intensity_wave, Wave};

/// Day type used by the conditioning table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Strength-led day; conditioning stays aerobic
    Strength,
    /// Mixed day
    Mixed,
    /// Energy-system day
    Engine,
    /// Recovery day
    Rest,
}

const DAY_TYPE_CYCLE: [DayType; 7] = [
    DayType::Strength,
    DayType::Mixed,
    DayType::Engine,
    DayType::Strength,
    DayType::Mixed,
    DayType::Engine,
    DayType::Rest,
];

/// Day type for a day index
#[must_use]
pub const fn day_type(day_index: u32) -> DayType {
    DAY_TYPE_CYCLE[(day_index % 7) as usize]
}

/// Zone, style and duration for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditioningPrescription {
    /// Day type the prescription was derived from
    pub day_type: DayType,
    /// Wave phase of the day
    pub wave: Wave,
    /// Intensity zone (2-4)
    pub zone: u8,
    /// Style of work
    pub style: ConditioningStyle,
    /// Wave-adjusted minutes before readiness scaling
    pub duration_minutes: u32,
}

/// Base minutes for a time-availability category
#[must_use]
pub const fn base_minutes(time: TimeAvailability) -> u32 {
    match time {
        TimeAvailability::Short => SHORT_MINUTES,
        TimeAvailability::Standard => STANDARD_MINUTES,
        TimeAvailability::Long => LONG_MINUTES,
    }
}

const fn zone_and_style(day_type: DayType, goal: TrainingGoal) -> (u8, ConditioningStyle) {
    match (day_type, goal) {
        (DayType::Strength, TrainingGoal::Conditioning)
        | (
            DayType::Mixed,
            TrainingGoal::Hybrid | TrainingGoal::Conditioning | TrainingGoal::Hyrox,
        )
        | (DayType::Engine, TrainingGoal::General) => (3, ConditioningStyle::Tempo),
        (DayType::Engine, TrainingGoal::Conditioning | TrainingGoal::Hybrid | TrainingGoal::Hyrox) => {
            (4, ConditioningStyle::Intervals)
        }
        _ => (2, ConditioningStyle::Z2),
    }
}

fn wave_adjusted_minutes(base: u32, wave: Wave) -> u32 {
    match wave {
        Wave::Base => base,
        Wave::Load => base + LOAD_BONUS_MINUTES,
        Wave::Peak => base + PEAK_BONUS_MINUTES,
        Wave::Deload => scale_minutes(base, DELOAD_DURATION_FACTOR),
    }
}

/// Multiply minutes by a factor, rounding and never dropping below the minimum
#[must_use]
pub fn scale_minutes(minutes: u32, factor: f64) -> u32 {
    scale_count(minutes, factor).max(MIN_MINUTES)
}

/// Multiply a count by a factor and round, never dropping below one
#[must_use]
pub fn scale_count(value: u32, factor: f64) -> u32 {
    let scaled = (f64::from(value) * factor).round();
    if scaled.is_finite() && scaled >= 1.0 {
        to_count(scaled)
    } else {
        1
    }
}

/// Convert a rounded, non-negative float into a count
#[allow(clippy::cast_possible_truncation)] // Safe: callers pass small rounded values
#[allow(clippy::cast_sign_loss)] // Safe: callers pass non-negative values
pub(crate) fn to_count(value: f64) -> u32 {
    value as u32
}

/// Conditioning prescription for a day
#[must_use]
pub fn conditioning_prescription(
    day_index: u32,
    goal: TrainingGoal,
    time: TimeAvailability,
) -> ConditioningPrescription {
    let day_type = day_type(day_index);
    let wave = intensity_wave(day_index).wave;
    let (zone, style) = zone_and_style(day_type, goal);
    ConditioningPrescription {
        day_type,
        wave,
        zone,
        style,
        duration_minutes: wave_adjusted_minutes(base_minutes(time), wave),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_cycle() {
        assert_eq!(day_type(0), DayType::Strength);
        assert_eq!(day_type(2), DayType::Engine);
        assert_eq!(day_type(6), DayType::Rest);
        assert_eq!(day_type(7), DayType::Strength);
    }

    #[test]
    fn test_deload_shortens_duration() {
        // day 3 is a deload strength day: 12 x 0.6 = 7.2 -> 7
        let p = conditioning_prescription(3, TrainingGoal::Hybrid, TimeAvailability::Standard);
        assert_eq!(p.wave, Wave::Deload);
        assert_eq!(p.duration_minutes, 7);
        assert_eq!(p.style, ConditioningStyle::Z2);
    }

    #[test]
    fn test_scale_count_floors_at_one() {
        assert_eq!(scale_count(1, 0.2), 1);
        assert_eq!(scale_count(20, 0.85), 17);
    }
}
