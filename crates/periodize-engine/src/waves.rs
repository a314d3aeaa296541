// ABOUTME: Intensity wave scheduler cycling base, load, peak and deload phases by day index
// ABOUTME: Fixed rep-scheme lookup keyed by experience tier and wave phase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use periodize_core::models::ExperienceLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::programming_constants::waves::{BASE, DELOAD, LOAD, PEAK, WAVE_PERIOD};

/// Periodization phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wave {
    /// Moderate volume and intensity
    Base,
    /// Higher intensity
    Load,
    /// Highest intensity, lowest reps
    Peak,
    /// Reduced load for recovery
    Deload,
}

impl Wave {
    /// Phases in cycle order
    pub const ALL: [Self; 4] = [Self::Base, Self::Load, Self::Peak, Self::Deload];

    /// Position within the cycle
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Base => 0,
            Self::Load => 1,
            Self::Peak => 2,
            Self::Deload => 3,
        }
    }

    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Load => "load",
            Self::Peak => "peak",
            Self::Deload => "deload",
        }
    }
}

impl fmt::Display for Wave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase plus its prescribed effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityWave {
    /// Current phase
    pub wave: Wave,
    /// Target RPE
    pub rpe: u8,
    /// Target percent of one-rep-max
    pub percent: u8,
}

/// Working sets and reps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepScheme {
    /// Number of working sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
}

impl RepScheme {
    const fn new(sets: u32, reps: u32) -> Self {
        Self { sets, reps }
    }
}

/// Wave for a day index, cycling base -> load -> peak -> deload
#[must_use]
pub const fn intensity_wave(day_index: u32) -> IntensityWave {
    let (wave, (rpe, percent)) = match day_index % WAVE_PERIOD {
        0 => (Wave::Base, BASE),
        1 => (Wave::Load, LOAD),
        2 => (Wave::Peak, PEAK),
        _ => (Wave::Deload, DELOAD),
    };
    IntensityWave { wave, rpe, percent }
}

/// Sets and reps for an experience tier in a wave phase
///
/// Advanced athletes get heavier, lower-rep peaks; every deload drops sets and
/// raises reps relative to the peak.
#[must_use]
pub const fn rep_scheme(level: ExperienceLevel, wave: Wave) -> RepScheme {
    match (level, wave) {
        (ExperienceLevel::Beginner, Wave::Base) => RepScheme::new(3, 10),
        (ExperienceLevel::Beginner, Wave::Load) => RepScheme::new(3, 8),
        (ExperienceLevel::Beginner, Wave::Peak) => RepScheme::new(4, 6),
        (ExperienceLevel::Beginner, Wave::Deload) => RepScheme::new(2, 12),
        (ExperienceLevel::Intermediate, Wave::Base) => RepScheme::new(4, 8),
        (ExperienceLevel::Intermediate, Wave::Load) => RepScheme::new(4, 6),
        (ExperienceLevel::Intermediate, Wave::Peak) => RepScheme::new(5, 5),
        (ExperienceLevel::Intermediate, Wave::Deload) => RepScheme::new(3, 10),
        (ExperienceLevel::Advanced, Wave::Base) => RepScheme::new(4, 6),
        (ExperienceLevel::Advanced, Wave::Load) => RepScheme::new(5, 5),
        (ExperienceLevel::Advanced, Wave::Peak) => RepScheme::new(5, 3),
        (ExperienceLevel::Advanced, Wave::Deload) => RepScheme::new(3, 8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deload_reduces_sets_and_raises_reps() {
        for level in [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ] {
            let peak = rep_scheme(level, Wave::Peak);
            let deload = rep_scheme(level, Wave::Deload);
            assert!(deload.sets < peak.sets);
            assert!(deload.reps > peak.reps);
        }
    }
}
