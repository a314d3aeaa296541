// ABOUTME: Core types and constants for the periodize training-plan engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

#![deny(unsafe_code)]

//! # Periodize Core
//!
//! Foundation crate providing shared types and constants for the periodize
//! training-plan engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Equipment ids, id namespaces and scale constants
//! - **models**: Exercise, profile, readiness, plan and record data

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
