// ABOUTME: Engine configuration for readiness scaling, PR detection and cycle structure
// ABOUTME: Orchestrates domain-specific configs and provides env loading and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `readiness` - Readiness factor step sizes and clamp bounds
//! - `records` - PR qualification rule and 1RM algorithm
//! - `cycle` - Technique week and week-over-week multipliers
//!
//! Generators receive an `&EngineConfig` explicitly; there is no global instance.

pub mod cycle;
pub mod error;
pub mod readiness;
pub mod records;

pub use cycle::CycleConfig;
pub use error::ConfigError;
pub use readiness::ReadinessConfig;
pub use records::{PrQualification, RecordsConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::iter;
use std::str::FromStr;

use crate::algorithms::OneRepMaxAlgorithm;
use crate::programming_constants::conditioning::MAX_ZONE;
use crate::programming_constants::cycle::{MAX_CYCLE_WEEKS, MAX_WEEKS_PER_MICROCYCLE};

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Readiness factor configuration
    pub readiness: ReadinessConfig,
    /// Personal-record configuration
    pub records: RecordsConfig,
    /// Microcycle and training-cycle configuration
    pub cycle: CycleConfig,
}

impl EngineConfig {
    /// Load configuration from defaults plus `PERIODIZE_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value or
    /// the resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let readiness = &self.readiness;
        if readiness.min_factor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Readiness minimum factor must be positive",
            ));
        }
        if readiness.min_factor > readiness.max_factor {
            return Err(ConfigError::InvalidRange(
                "Readiness minimum factor must not exceed the maximum factor",
            ));
        }
        if !(readiness.min_factor..=readiness.max_factor).contains(&readiness.neutral_factor) {
            return Err(ConfigError::InvalidRange(
                "Readiness neutral factor must lie within the clamp bounds",
            ));
        }
        if readiness.rating_step < 0.0 || readiness.score_weight < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Readiness step and score weight must be non-negative",
            ));
        }

        if let PrQualification::MinimumMargin { percent } = self.records.qualification {
            if !percent.is_finite() || percent < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "PR minimum margin must be a non-negative percentage",
                ));
            }
        }

        let cycle = &self.cycle;
        if cycle.weeks_per_microcycle == 0 || cycle.default_cycle_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Microcycle and cycle lengths must be at least one week",
            ));
        }
        if cycle.weeks_per_microcycle > MAX_WEEKS_PER_MICROCYCLE
            || cycle.default_cycle_weeks > MAX_CYCLE_WEEKS
        {
            return Err(ConfigError::ValueOutOfRange(
                "Microcycle or cycle length exceeds the supported maximum",
            ));
        }
        if cycle.technique_week_index >= cycle.weeks_per_microcycle {
            return Err(ConfigError::InvalidRange(
                "Technique week must fall inside the microcycle",
            ));
        }
        if cycle.technique_rpe_floor == 0 || cycle.technique_rpe_floor > 10 {
            return Err(ConfigError::ValueOutOfRange(
                "Technique RPE floor must be between 1 and 10",
            ));
        }
        if cycle.technique_zone_floor == 0 || cycle.technique_zone_floor > MAX_ZONE {
            return Err(ConfigError::ValueOutOfRange(
                "Technique zone floor must be between 1 and 5",
            ));
        }
        if cycle
            .progression_multipliers
            .iter()
            .chain(iter::once(&cycle.deload_multiplier))
            .any(|m| !m.is_finite() || *m <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Cycle multipliers must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Readiness overrides
        Self::apply_env_var(
            "PERIODIZE_READINESS_MIN_FACTOR",
            &mut self.readiness.min_factor,
        )?;
        Self::apply_env_var(
            "PERIODIZE_READINESS_MAX_FACTOR",
            &mut self.readiness.max_factor,
        )?;
        Self::apply_env_var(
            "PERIODIZE_READINESS_RATING_STEP",
            &mut self.readiness.rating_step,
        )?;
        Self::apply_env_var(
            "PERIODIZE_READINESS_SCORE_WEIGHT",
            &mut self.readiness.score_weight,
        )?;

        // Records overrides
        if let Ok(val) = env::var("PERIODIZE_PR_MIN_MARGIN_PERCENT") {
            let percent: f64 = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid PERIODIZE_PR_MIN_MARGIN_PERCENT".to_owned())
            })?;
            self.records.qualification = if percent > 0.0 {
                PrQualification::MinimumMargin { percent }
            } else {
                PrQualification::StrictlyGreater
            };
        }
        if let Ok(val) = env::var("PERIODIZE_ONE_REP_MAX_ALGORITHM") {
            self.records.algorithm = val
                .parse::<OneRepMaxAlgorithm>()
                .map_err(|e| ConfigError::Parse(e.message))?;
        }

        // Cycle overrides
        Self::apply_env_var(
            "PERIODIZE_WEEKS_PER_MICROCYCLE",
            &mut self.cycle.weeks_per_microcycle,
        )?;
        Self::apply_env_var(
            "PERIODIZE_TECHNIQUE_WEEK_INDEX",
            &mut self.cycle.technique_week_index,
        )?;
        Self::apply_env_var(
            "PERIODIZE_DEFAULT_CYCLE_WEEKS",
            &mut self.cycle.default_cycle_weeks,
        )?;
        Self::apply_env_var(
            "PERIODIZE_DELOAD_MULTIPLIER",
            &mut self.cycle.deload_multiplier,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_readiness_bounds_rejected() {
        let mut config = EngineConfig::default();
        config.readiness.min_factor = 1.3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_technique_week_outside_microcycle_rejected() {
        let mut config = EngineConfig::default();
        config.cycle.technique_week_index = config.cycle.weeks_per_microcycle;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_technique_zone_floor_bounded_by_highest_zone() {
        let mut config = EngineConfig::default();
        config.cycle.technique_zone_floor = MAX_ZONE;
        assert!(config.validate().is_ok());
        config.cycle.technique_zone_floor = MAX_ZONE + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_oversized_microcycle_rejected() {
        let mut config = EngineConfig::default();
        config.cycle.weeks_per_microcycle = MAX_WEEKS_PER_MICROCYCLE + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
