// ABOUTME: Readiness scaler configuration: neutral factor, per-point step and clamp bounds
// ABOUTME: Defaults reproduce the 0.6-1.2 factor window with 0.05 steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use serde::{Deserialize, Serialize};

use crate::programming_constants::readiness::{
    FACTOR_MAX, FACTOR_MIN, NEUTRAL_FACTOR, RATING_STEP, SCORE_WEIGHT,
};

/// Readiness factor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Factor used when no readiness record is available
    pub neutral_factor: f64,
    /// Factor change per rating point away from neutral
    pub rating_step: f64,
    /// Weight of the normalized readiness score
    pub score_weight: f64,
    /// Lower clamp
    pub min_factor: f64,
    /// Upper clamp
    pub max_factor: f64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            neutral_factor: NEUTRAL_FACTOR,
            rating_step: RATING_STEP,
            score_weight: SCORE_WEIGHT,
            min_factor: FACTOR_MIN,
            max_factor: FACTOR_MAX,
        }
    }
}
