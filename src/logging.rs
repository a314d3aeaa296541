// ABOUTME: Logging configuration and structured logging setup for the periodize CLI
// ABOUTME: Builds a tracing-subscriber registry with EnvFilter in json, pretty or compact form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Structured logging setup
//!
//! The engine never installs a subscriber; it reports through the
//! `PlanDiagnostics` sink it is handed. This module is for binaries.

use std::env;
use std::io;
use std::str::FromStr;

use periodize_core::errors::{AppError, AppResult};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default service name reported in startup events
pub const SERVICE_NAME: &str = "periodize";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for machine consumption
    Json,
    /// Multi-line human format
    Pretty,
    /// Single-line human format
    Compact,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(AppError::invalid_input(format!(
                "Unknown log format '{other}', expected json, pretty or compact"
            ))),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`, `ENVIRONMENT` and
    /// `SERVICE_NAME`. An unrecognized `LOG_FORMAT` falls back to pretty.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(if is_production {
                    LogFormat::Json
                } else {
                    LogFormat::Pretty
                }),
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Same configuration with a different level
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Environment filter for this configuration
    ///
    /// `RUST_LOG` directives win when present; the configured level applies
    /// otherwise.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(&self.level),
            |directive| EnvFilter::new(&directive),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// Logs go to stderr so that JSON plan output on stdout stays parseable.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location
            }
        });
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            config = %summary,
            "Logging initialized"
        );
    }
}
