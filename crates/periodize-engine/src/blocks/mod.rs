// ABOUTME: Workout block generators for warmup, strength, accessory, conditioning and cooldown
// ABOUTME: Each generator is a pure function of a shared BlockContext snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Block generators
//!
//! The five generators are independent. None of them fails: a generator that
//! cannot find an exercise returns `None` (or, for strength, a zero-duration
//! placeholder) and reports the miss through the diagnostics sink.

pub mod accessory;
pub mod conditioning;
pub mod cooldown;
pub mod strength;
pub mod warmup;

pub use accessory::accessory_block;
pub use conditioning::conditioning_block;
pub use cooldown::cooldown_block;
pub use strength::strength_block;
pub use warmup::warmup_block;

use periodize_core::models::UserPreferences;

use crate::catalog::ExerciseCatalog;
use crate::diagnostics::PlanDiagnostics;
use crate::readiness::DayReadiness;
use crate::waves::{intensity_wave, IntensityWave};

/// Inputs shared by every block generator for one day
#[derive(Clone, Copy)]
pub struct BlockContext<'a> {
    /// Exercise library
    pub catalog: &'a ExerciseCatalog,
    /// Athlete profile
    pub prefs: &'a UserPreferences,
    /// Zero-based day index
    pub day_index: u32,
    /// Wave phase for the day
    pub intensity: IntensityWave,
    /// Readiness snapshot for the day
    pub readiness: DayReadiness,
    /// Diagnostics sink
    pub diagnostics: &'a dyn PlanDiagnostics,
}

impl<'a> BlockContext<'a> {
    /// Context for a day, deriving its wave from the day index
    #[must_use]
    pub fn new(
        catalog: &'a ExerciseCatalog,
        prefs: &'a UserPreferences,
        day_index: u32,
        readiness: DayReadiness,
        diagnostics: &'a dyn PlanDiagnostics,
    ) -> Self {
        Self {
            catalog,
            prefs,
            day_index,
            intensity: intensity_wave(day_index),
            readiness,
            diagnostics,
        }
    }
}

/// Whole minutes needed for `seconds`, rounded up
#[must_use]
pub(crate) const fn minutes_for_seconds(seconds: u32) -> u32 {
    seconds.div_ceil(60)
}
