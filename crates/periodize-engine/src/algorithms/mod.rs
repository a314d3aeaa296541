// ABOUTME: Algorithm abstraction layer for pluggable strength-estimation methods
// ABOUTME: Provides enum-based dispatch for one-rep-max estimation formulas

//! Algorithm Selection Module
//!
//! Type-safe, enum-based selection between estimation formulas. Each algorithm
//! is an enum variant with built-in dispatch, matching patterns like
//! `std::io::ErrorKind`.
//!
//! # Example
//!
//! ```rust
//! use periodize_engine::algorithms::OneRepMaxAlgorithm;
//!
//! let estimate = OneRepMaxAlgorithm::Blended.estimate(100.0, 5, None);
//! assert!((estimate - 115.0).abs() < f64::EPSILON);
//! ```

pub mod one_rep_max;

pub use one_rep_max::OneRepMaxAlgorithm;
