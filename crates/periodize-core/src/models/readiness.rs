// ABOUTME: Daily readiness check-in model with self-reported recovery ratings
// ABOUTME: Derives a 0-100 readiness score from sleep, energy, soreness and stress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::preferences::TimeAvailability;
use crate::constants::readiness_scale::{MAX_RATING, MAX_SCORE, MIN_RATING};
use crate::errors::{AppError, AppResult};

/// One readiness check-in
///
/// Ratings use a 1-5 scale. Sleep quality and energy are "higher is better";
/// soreness and stress are "higher is worse".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessEntry {
    /// Calendar day the check-in applies to; `None` applies to any day
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Sleep quality (1-5)
    pub sleep_quality: u8,
    /// Energy (1-5)
    pub energy: u8,
    /// Muscle soreness (1-5)
    pub soreness: u8,
    /// Life stress (1-5)
    pub stress: u8,
    /// Time available today
    #[serde(default)]
    pub time_availability: TimeAvailability,
    /// Derived readiness score (0-100)
    pub readiness_score: u8,
}

impl ReadinessEntry {
    /// Build an entry and derive its readiness score from the four ratings
    #[must_use]
    pub fn from_ratings(
        date: Option<NaiveDate>,
        sleep_quality: u8,
        energy: u8,
        soreness: u8,
        stress: u8,
        time_availability: TimeAvailability,
    ) -> Self {
        Self {
            date,
            sleep_quality,
            energy,
            soreness,
            stress,
            time_availability,
            readiness_score: Self::derive_score(sleep_quality, energy, soreness, stress),
        }
    }

    /// Map four 1-5 ratings onto a 0-100 score
    ///
    /// Soreness and stress are inverted so every component points the same way.
    /// Ratings outside 1-5 are clamped first.
    #[must_use]
    pub fn derive_score(sleep_quality: u8, energy: u8, soreness: u8, stress: u8) -> u8 {
        let clamp = |rating: u8| u32::from(rating.clamp(MIN_RATING, MAX_RATING));
        let inverted = |rating: u8| u32::from(MAX_RATING + MIN_RATING) - clamp(rating);

        let total = clamp(sleep_quality) + clamp(energy) + inverted(soreness) + inverted(stress);
        let floor = 4 * u32::from(MIN_RATING);
        let span = 4 * u32::from(MAX_RATING - MIN_RATING);
        let scaled = ((total - floor) * u32::from(MAX_SCORE) + span / 2) / span;
        scaled.min(u32::from(MAX_SCORE)) as u8
    }

    /// Whether this entry applies to the given calendar day
    #[must_use]
    pub fn applies_to(&self, day: NaiveDate) -> bool {
        self.date.is_none_or(|date| date == day)
    }

    /// Validate the ratings and score ranges
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` naming the first rating outside 1-5
    /// or a score above 100.
    pub fn validate(&self) -> AppResult<()> {
        let ratings = [
            ("sleep_quality", self.sleep_quality),
            ("energy", self.energy),
            ("soreness", self.soreness),
            ("stress", self.stress),
        ];
        for (field, value) in ratings {
            if !(MIN_RATING..=MAX_RATING).contains(&value) {
                return Err(AppError::out_of_range(
                    field,
                    format!("{field} must be between {MIN_RATING} and {MAX_RATING}, got {value}"),
                ));
            }
        }
        if self.readiness_score > MAX_SCORE {
            return Err(AppError::out_of_range(
                "readiness_score",
                format!(
                    "readiness_score must be at most {MAX_SCORE}, got {}",
                    self.readiness_score
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_score_extremes() {
        assert_eq!(ReadinessEntry::derive_score(5, 5, 1, 1), 100);
        assert_eq!(ReadinessEntry::derive_score(1, 1, 5, 5), 0);
        assert_eq!(ReadinessEntry::derive_score(3, 3, 3, 3), 50);
    }

    #[test]
    fn test_undated_entry_applies_everywhere() {
        let entry = ReadinessEntry::from_ratings(None, 3, 3, 3, 3, TimeAvailability::Standard);
        let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default();
        assert!(entry.applies_to(day));
        assert!(entry.validate().is_ok());
    }
}
