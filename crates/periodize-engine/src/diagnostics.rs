// ABOUTME: Injected diagnostics sink for generator decisions (fallbacks, misses, readiness)
// ABOUTME: Tracing-backed and no-op implementations; never influences control flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Generator diagnostics
//!
//! Generators report notable decisions through a `PlanDiagnostics` handle passed
//! in by the caller instead of writing to a global logger. Production callers
//! use [`TracingDiagnostics`]; tests and benchmarks use [`NoopDiagnostics`].

use periodize_core::models::{BlockKind, MovementPattern};
use tracing::{debug, warn};

use crate::selection::SelectionTier;

/// Sink for generator diagnostics
pub trait PlanDiagnostics: Send + Sync {
    /// An exercise was resolved below the exact-pattern tier
    fn fallback_used(&self, requested: MovementPattern, tier: SelectionTier, day_index: u32);

    /// No exercise could be resolved for a block
    fn exercise_unresolved(&self, block: BlockKind, requested: MovementPattern, day_index: u32);

    /// A non-neutral readiness factor was applied to a day
    fn readiness_applied(&self, factor: f64, day_index: u32);

    /// A generator produced no block for a day where one was requested
    fn block_skipped(&self, block: BlockKind, day_index: u32);
}

/// Emits `tracing` events at debug/warn level with structured fields
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl PlanDiagnostics for TracingDiagnostics {
    fn fallback_used(&self, requested: MovementPattern, tier: SelectionTier, day_index: u32) {
        debug!(
            pattern = %requested,
            tier = tier.name(),
            day_index,
            "Exercise resolved through fallback tier"
        );
    }

    fn exercise_unresolved(&self, block: BlockKind, requested: MovementPattern, day_index: u32) {
        warn!(
            block = %block,
            pattern = %requested,
            day_index,
            "No exercise available after full fallback cascade"
        );
    }

    fn readiness_applied(&self, factor: f64, day_index: u32) {
        debug!(factor, day_index, "Readiness factor applied");
    }

    fn block_skipped(&self, block: BlockKind, day_index: u32) {
        debug!(block = %block, day_index, "Block generator returned nothing");
    }
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl PlanDiagnostics for NoopDiagnostics {
    fn fallback_used(&self, _requested: MovementPattern, _tier: SelectionTier, _day_index: u32) {}

    fn exercise_unresolved(&self, _block: BlockKind, _requested: MovementPattern, _day_index: u32) {
    }

    fn readiness_applied(&self, _factor: f64, _day_index: u32) {}

    fn block_skipped(&self, _block: BlockKind, _day_index: u32) {}
}
