// ABOUTME: One-rep-max estimation algorithms using Epley and Brzycki rep-max formulas
// ABOUTME: Blended default averages both and applies an optional RPE fatigue modifier

use periodize_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::programming_constants::one_rep_max::{
    BRZYCKI_BASE, BRZYCKI_NUMERATOR, EPLEY_DIVISOR, MAX_REPS, MIN_REPS, RPE_MODIFIER_MAX,
    RPE_MODIFIER_MIN, RPE_STEP,
};

/// One-rep-max estimation algorithm
///
/// - `Epley`: weight x (1 + reps/30), tends to run high above 10 reps
/// - `Brzycki`: weight x 36/(37 - reps), tends to run low above 10 reps
/// - `Blended`: mean of the two, which cancels most of their opposite biases
///
/// Reps are clamped to 1-20 before either formula is applied; Brzycki diverges
/// as reps approach 37.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxAlgorithm {
    /// Epley formula
    Epley,
    /// Brzycki formula
    Brzycki,
    /// Average of Epley and Brzycki
    #[default]
    Blended,
}

impl OneRepMaxAlgorithm {
    /// Estimate a one-rep-max from a sub-maximal set
    ///
    /// Non-positive (or non-finite) weight or reps produce `0.0`, meaning
    /// "no estimate". When an RPE is supplied the raw estimate is scaled by
    /// `clamp(1 + (10 - rpe) x 0.02, 0.85, 1.1)`. The result is rounded to the
    /// nearest whole unit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use periodize_engine::algorithms::OneRepMaxAlgorithm;
    ///
    /// // Epley 116.67, Brzycki 112.5, mean 114.58
    /// assert!((OneRepMaxAlgorithm::Blended.estimate(100.0, 5, None) - 115.0).abs() < f64::EPSILON);
    /// assert!(OneRepMaxAlgorithm::Blended.estimate(0.0, 5, None).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn estimate(&self, weight: f64, reps: i32, rpe: Option<f64>) -> f64 {
        if reps <= 0 || !weight.is_finite() || weight <= 0.0 {
            return 0.0;
        }
        let reps = f64::from(reps.clamp(MIN_REPS, MAX_REPS));

        let raw = match self {
            Self::Epley => epley(weight, reps),
            Self::Brzycki => brzycki(weight, reps),
            Self::Blended => (epley(weight, reps) + brzycki(weight, reps)) / 2.0,
        };

        match rpe.filter(|value| value.is_finite()) {
            Some(rpe) => (raw * rpe_modifier(rpe)).round(),
            None => raw.round(),
        }
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Blended => "blended",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Epley => "weight x (1 + reps / 30)",
            Self::Brzycki => "weight x 36 / (37 - reps)",
            Self::Blended => "(epley + brzycki) / 2",
        }
    }
}

fn epley(weight: f64, reps: f64) -> f64 {
    weight * (1.0 + reps / EPLEY_DIVISOR)
}

fn brzycki(weight: f64, reps: f64) -> f64 {
    weight * (BRZYCKI_NUMERATOR / (BRZYCKI_BASE - reps))
}

fn rpe_modifier(rpe: f64) -> f64 {
    RPE_STEP
        .mul_add(10.0 - rpe, 1.0)
        .clamp(RPE_MODIFIER_MIN, RPE_MODIFIER_MAX)
}

impl FromStr for OneRepMaxAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            "blended" | "average" => Ok(Self::Blended),
            other => Err(AppError::invalid_input(format!(
                "Unknown one-rep-max algorithm: '{other}'. Valid options: epley, brzycki, blended"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpe_modifier_is_clamped() {
        assert!((rpe_modifier(10.0) - 1.0).abs() < f64::EPSILON);
        assert!((rpe_modifier(0.0) - 1.1).abs() < f64::EPSILON);
        assert!((rpe_modifier(20.0) - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reps_above_twenty_are_clamped() {
        let at_twenty = OneRepMaxAlgorithm::Brzycki.estimate(50.0, 20, None);
        let at_forty = OneRepMaxAlgorithm::Brzycki.estimate(50.0, 40, None);
        assert!((at_twenty - at_forty).abs() < f64::EPSILON);
    }
}
