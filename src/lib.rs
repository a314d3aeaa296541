// ABOUTME: Main library entry point for the periodize training-plan generator
// ABOUTME: Re-exports the core and engine crates and hosts logging and settings setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

#![deny(unsafe_code)]

//! # Periodize
//!
//! Deterministic generation of periodized strength and conditioning plans.
//!
//! ## Features
//!
//! - **Exercise selection**: equipment-aware cascade with exact, fallback and
//!   any-strength tiers
//! - **Periodization**: four-day intensity wave, six-week microcycles with a
//!   technique week, multi-week cycles with load multipliers
//! - **Conditioning**: zone work, HYROX templates and a full race simulation
//! - **Readiness**: daily check-ins scale conditioning volume
//! - **Personal records**: blended Epley/Brzycki one-rep-max estimates
//!
//! ## Architecture
//!
//! - **`periodize_core`**: models, errors and constants
//! - **`periodize_engine`**: every generator, all pure and synchronous
//! - **logging** / **config**: process-level setup used by the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use periodize::models::{ExperienceLevel, TrainingGoal, UserPreferences};
//! use periodize::engine::{
//!     generate_week, EngineConfig, ExerciseCatalog, NoopDiagnostics, PlanContext,
//! };
//! use uuid::Uuid;
//!
//! let catalog = ExerciseCatalog::builtin();
//! let prefs = UserPreferences::new(Uuid::nil(), TrainingGoal::Hybrid, ExperienceLevel::Intermediate)
//!     .with_equipment(["barbell", "rack", "bench", "rower"]);
//! let config = EngineConfig::default();
//! let ctx = PlanContext::new(&catalog, &prefs, &config, &NoopDiagnostics);
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let created_at = Utc.timestamp_opt(0, 0).unwrap();
//! let week = generate_week(&ctx, start, &[], created_at);
//! assert_eq!(week.len(), 7);
//! ```

/// Foundation types: models, errors, constants
pub use periodize_core::{constants, errors, models};

/// Plan generation engine
pub use periodize_engine as engine;

/// Environment-driven settings for the CLI
pub mod config;

/// JSON input loading for the CLI
pub mod inputs;

/// Structured logging setup
pub mod logging;

pub use config::PlannerSettings;
pub use logging::{LogFormat, LoggingConfig};
