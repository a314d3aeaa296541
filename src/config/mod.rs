// ABOUTME: Process-level settings bundling engine configuration, logging and CLI defaults
// ABOUTME: Loaded once from the environment at binary startup and passed down explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Planner settings
//!
//! - **Engine**: `EngineConfig` with `PERIODIZE_*` overrides
//! - **Logging**: `LoggingConfig` from `RUST_LOG`, `LOG_FORMAT` and friends
//! - **User**: default user id for plans generated without a profile id

use std::env;

use periodize_core::errors::{AppError, AppResult};
use periodize_engine::config::{PrQualification, RecordsConfig};
use periodize_engine::EngineConfig;
use tracing::debug;
use uuid::Uuid;

use crate::logging::LoggingConfig;

/// Environment variable holding the default user id
pub const USER_ID_ENV: &str = "PERIODIZE_USER_ID";

/// Settings for a planner process
#[derive(Debug, Clone, Default)]
pub struct PlannerSettings {
    /// Engine configuration
    pub engine: EngineConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// User id stamped on plans when the profile does not carry one
    pub default_user_id: Uuid,
}

impl PlannerSettings {
    /// Load settings from the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an engine override is invalid or
    /// `PERIODIZE_USER_ID` is not a UUID
    pub fn from_env() -> AppResult<Self> {
        let engine = EngineConfig::from_env()
            .map_err(|e| AppError::config(format!("Engine configuration: {e}")))?;

        let default_user_id = match env::var(USER_ID_ENV) {
            Ok(value) => Uuid::parse_str(value.trim()).map_err(|e| {
                AppError::config(format!("Invalid {USER_ID_ENV}: {e}")).with_field(USER_ID_ENV)
            })?,
            Err(_) => Uuid::nil(),
        };

        debug!(
            user_id = %default_user_id,
            qualification = ?engine.records.qualification,
            algorithm = engine.records.algorithm.name(),
            "Planner settings loaded"
        );

        Ok(Self {
            engine,
            logging: LoggingConfig::from_env(),
            default_user_id,
        })
    }

    /// Records configuration with the PR rule switched to a minimum margin
    ///
    /// # Errors
    ///
    /// Returns a value-out-of-range error when `percent` is negative or not finite
    pub fn records_with_min_margin(&self, percent: f64) -> AppResult<RecordsConfig> {
        let mut engine = self.engine.clone();
        engine.records.qualification = PrQualification::MinimumMargin { percent };
        engine
            .validate()
            .map_err(|e| AppError::out_of_range("min_margin", e.to_string()))?;
        Ok(engine.records)
    }
}
