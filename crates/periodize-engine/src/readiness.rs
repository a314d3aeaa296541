// ABOUTME: Readiness scaler converting a check-in into a bounded multiplicative factor
// ABOUTME: Resolves the per-day readiness snapshot from a dated history and adaptation mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Readiness factor
//!
//! ```text
//! factor = 1.0
//!        + (sleep - 3) x step
//!        - (soreness - 3) x step
//!        - ((6 - energy) - 3) x step
//!        + ((score - 50) / 50) x weight
//! ```
//!
//! clamped to `[min_factor, max_factor]` and rounded to two decimals. Stress
//! reaches the factor only through the readiness score.

use chrono::NaiveDate;
use periodize_core::constants::readiness_scale::{NEUTRAL_RATING, NEUTRAL_SCORE};
use periodize_core::models::{AdaptationMode, ReadinessEntry, TimeAvailability, UserPreferences};
use serde::{Deserialize, Serialize};

use crate::config::ReadinessConfig;

/// Bounded factor for a readiness entry; neutral when absent
#[must_use]
pub fn readiness_factor(entry: Option<&ReadinessEntry>, config: &ReadinessConfig) -> f64 {
    let Some(entry) = entry else {
        return config.neutral_factor;
    };

    let neutral = f64::from(NEUTRAL_RATING);
    let fatigue = 6.0 - f64::from(entry.energy);
    let score_term = (f64::from(entry.readiness_score) - f64::from(NEUTRAL_SCORE))
        / f64::from(NEUTRAL_SCORE);

    let rating_points = (f64::from(entry.sleep_quality) - neutral)
        - (f64::from(entry.soreness) - neutral)
        - (fatigue - neutral);
    let raw = score_term.mul_add(
        config.score_weight,
        rating_points.mul_add(config.rating_step, config.neutral_factor),
    );

    round_to_hundredths(raw.clamp(config.min_factor, config.max_factor))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Entry applying to `date`: a same-day entry wins over an undated one, and the
/// latest of each kind wins within its kind
#[must_use]
pub fn entry_for_date(history: &[ReadinessEntry], date: NaiveDate) -> Option<&ReadinessEntry> {
    history
        .iter()
        .rev()
        .find(|entry| entry.date == Some(date))
        .or_else(|| history.iter().rev().find(|entry| entry.date.is_none()))
}

/// Readiness snapshot a single day is generated against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayReadiness {
    /// Multiplier applied to conditioning volume
    pub factor: f64,
    /// Time availability in effect for the day
    pub time_availability: TimeAvailability,
    /// Whether a non-neutral factor is in effect
    pub adjusted: bool,
}

impl DayReadiness {
    /// Snapshot with no readiness influence
    #[must_use]
    pub fn neutral(time_availability: TimeAvailability, config: &ReadinessConfig) -> Self {
        Self {
            factor: config.neutral_factor,
            time_availability,
            adjusted: false,
        }
    }

    /// Snapshot for a day given the profile and the entry applying to it
    ///
    /// In `Fixed` mode readiness is ignored entirely, including the entry's
    /// time availability.
    #[must_use]
    pub fn resolve(
        prefs: &UserPreferences,
        entry: Option<&ReadinessEntry>,
        config: &ReadinessConfig,
    ) -> Self {
        if prefs.adaptation_mode == AdaptationMode::Fixed {
            return Self::neutral(prefs.time_availability, config);
        }
        let factor = readiness_factor(entry, config);
        Self {
            factor,
            time_availability: entry.map_or(prefs.time_availability, |e| e.time_availability),
            adjusted: (factor - config.neutral_factor).abs() > f64::EPSILON,
        }
    }

    /// Snapshot for `date` drawn from a readiness history
    #[must_use]
    pub fn for_date(
        prefs: &UserPreferences,
        history: &[ReadinessEntry],
        date: NaiveDate,
        config: &ReadinessConfig,
    ) -> Self {
        Self::resolve(prefs, entry_for_date(history, date), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_ratings_give_neutral_factor() {
        let entry = ReadinessEntry::from_ratings(None, 3, 3, 3, 3, TimeAvailability::Standard);
        let factor = readiness_factor(Some(&entry), &ReadinessConfig::default());
        assert!((factor - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_day_entry_preferred_over_undated() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let undated = ReadinessEntry::from_ratings(None, 1, 1, 5, 5, TimeAvailability::Short);
        let dated = ReadinessEntry::from_ratings(Some(day), 5, 5, 1, 1, TimeAvailability::Long);
        let history = vec![dated.clone(), undated.clone()];
        assert_eq!(entry_for_date(&history, day), Some(&dated));
        let other = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        assert_eq!(entry_for_date(&history, other), Some(&undated));
    }
}
