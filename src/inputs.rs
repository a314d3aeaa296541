// ABOUTME: JSON input loading for profiles, readiness histories, sessions and prior records
// ABOUTME: Used by the CLI; accepts a file path or "-" for standard input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use periodize_core::errors::{AppError, AppResult};
use periodize_core::models::{PrRecord, ReadinessEntry, SessionLog, UserPreferences};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

/// Path meaning standard input
pub const STDIN_PATH: &str = "-";

/// Deserialize JSON from a file, or from stdin when the path is `-`
///
/// # Errors
///
/// Returns an error if the source cannot be read or is not valid JSON for `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|e| {
            AppError::not_found(format!("input file {}", path.display())).with_source(e)
        })?
    };
    debug!(path = %path.display(), bytes = raw.len(), "Read JSON input");
    serde_json::from_str(&raw).map_err(|e| {
        AppError::serialization(format!("Invalid JSON in {}: {e}", path.display()))
    })
}

/// Load and validate a profile, stamping `default_user_id` when it has none
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation
pub fn load_profile(path: &Path, default_user_id: Uuid) -> AppResult<UserPreferences> {
    let mut prefs: UserPreferences = read_json(path)?;
    if prefs.user_id.is_nil() {
        prefs.user_id = default_user_id;
    }
    prefs.validate()?;
    Ok(prefs)
}

/// Load a readiness history; `None` yields an empty history
///
/// Accepts either a JSON array of entries or a single entry object.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or an entry fails validation
pub fn load_readiness(path: Option<&Path>) -> AppResult<Vec<ReadinessEntry>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let value: serde_json::Value = read_json(path)?;
    let entries: Vec<ReadinessEntry> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    for entry in &entries {
        entry.validate()?;
    }
    Ok(entries)
}

/// Load a finished session log
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_session(path: &Path) -> AppResult<SessionLog> {
    read_json(path)
}

/// Load prior personal records; `None` yields no prior records
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_prior_records(path: Option<&Path>) -> AppResult<Vec<PrRecord>> {
    path.map_or_else(|| Ok(Vec::new()), read_json)
}
