// ABOUTME: Personal-record configuration: qualification policy and 1RM algorithm
// ABOUTME: Surfaces the strict vs minimum-margin PR threshold as an explicit choice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

//! Personal-record configuration
//!
//! Two qualification rules exist in the product: a new estimate must strictly
//! exceed the previous best, or it must beat it by a minimum percentage. The
//! session-summary flow uses the strict rule and the PR screen the 0.5% margin.
//! Which one the product wants is still open, so the rule is a parameter
//! rather than a constant. Strict is the default.

use serde::{Deserialize, Serialize};

use crate::algorithms::OneRepMaxAlgorithm;

/// Rule deciding whether an estimate beats the previous best
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PrQualification {
    /// New estimate must be strictly greater than the previous best
    #[default]
    StrictlyGreater,
    /// New estimate must exceed the previous best by at least `percent` percent
    MinimumMargin {
        /// Required improvement in percent (0.5 means 0.5%)
        percent: f64,
    },
}

impl PrQualification {
    /// Whether `candidate` qualifies as a record over `previous_best`
    ///
    /// A candidate with no previous best qualifies whenever it is positive.
    #[must_use]
    pub fn qualifies(&self, candidate: f64, previous_best: Option<f64>) -> bool {
        if candidate <= 0.0 {
            return false;
        }
        let Some(best) = previous_best else {
            return true;
        };
        match self {
            Self::StrictlyGreater => candidate > best,
            Self::MinimumMargin { percent } => {
                candidate > best && candidate >= best * (1.0 + percent / 100.0)
            }
        }
    }
}

/// Records configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// PR qualification rule
    pub qualification: PrQualification,
    /// Estimation formula
    pub algorithm: OneRepMaxAlgorithm,
}
