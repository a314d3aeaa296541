// ABOUTME: Periodized training-plan generation engine for the periodize platform
// ABOUTME: Catalog lookup, selection cascade, waves, block generators, cycles and PR detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

#![deny(unsafe_code)]

//! # Periodize Engine
//!
//! Deterministic, synchronous plan generation. Every public generator is a pure
//! function of its arguments: the athlete profile, the exercise catalog, the
//! engine configuration, an optional readiness snapshot and an injected
//! diagnostics sink. Nothing here performs I/O or reads global state.
//!
//! ## Pipeline
//!
//! - **catalog**: arena of exercise definitions with an id index
//! - **selection**: three-tier candidate-provider cascade
//! - **waves**: base/load/peak/deload intensity wave and rep schemes
//! - **accessory_progression**: pattern-keyed accessory tag templates and volume
//! - **blocks**: warmup, strength, accessory, conditioning and cooldown generators
//! - **conditioning**: zone/duration table, HYROX templates and race simulator
//! - **readiness**: readiness factor and per-day readiness resolution
//! - **daily** / **weekly** / **microcycle** / **cycle**: orchestration
//! - **records**: personal-record detection
//! - **summary**: aggregate statistics over generated days

/// Pluggable estimation algorithms
pub mod algorithms;

/// Engine configuration with environment overrides
pub mod config;

/// Numeric programming policy
pub mod programming_constants;

/// Injected diagnostics sink
pub mod diagnostics;

/// Exercise catalog arena and built-in library
pub mod catalog;

/// Exercise selection cascade
pub mod selection;

/// Intensity wave scheduler and rep schemes
pub mod waves;

/// Accessory tag templates and wave-scaled volume
pub mod accessory_progression;

/// Readiness factor
pub mod readiness;

/// Conditioning prescription, HYROX templates and race simulator
pub mod conditioning;

/// Workout block generators
pub mod blocks;

/// Daily workout construction
pub mod daily;

/// Goal-specific weekly templates
pub mod weekly;

/// Six-week microcycle expansion
pub mod microcycle;

/// Multi-week training cycles
pub mod cycle;

/// Personal-record detection
pub mod records;

/// Plan summaries
pub mod summary;

/// Deterministic identifiers
pub mod ids;

pub use algorithms::OneRepMaxAlgorithm;
pub use catalog::{ExerciseCatalog, ExerciseIdx};
pub use config::EngineConfig;
pub use cycle::generate_training_cycle;
pub use daily::{generate_day, PlanContext};
pub use diagnostics::{NoopDiagnostics, PlanDiagnostics, TracingDiagnostics};
pub use microcycle::generate_microcycle;
pub use readiness::{readiness_factor, DayReadiness};
pub use records::{detect_personal_records, estimate_one_rep_max};
pub use selection::{select_exercise, Selection, SelectionRequest, SelectionTier};
pub use summary::{summarize_cycle, summarize_days, CycleSummary, PlanSummary};
pub use waves::{intensity_wave, rep_scheme, IntensityWave, RepScheme, Wave};
pub use weekly::{generate_week, FocusToken, WeeklyTemplate};
