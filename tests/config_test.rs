// ABOUTME: Tests for engine configuration defaults, validation and environment overrides
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Periodize Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use periodize::config::USER_ID_ENV;
use periodize::errors::ErrorCode;
use periodize::engine::config::{ConfigError, PrQualification};
use periodize::engine::{EngineConfig, OneRepMaxAlgorithm};
use periodize::{LogFormat, LoggingConfig, PlannerSettings};
use serial_test::serial;
use uuid::Uuid;

#[test]
fn test_default_config_validation() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.records.qualification, PrQualification::StrictlyGreater);
    assert_eq!(config.records.algorithm, OneRepMaxAlgorithm::Blended);
    assert_eq!(config.cycle.weeks_per_microcycle, 6);
    assert_eq!(config.cycle.technique_week_index, 3);
    assert_eq!(config.cycle.default_cycle_weeks, 4);
}

#[test]
fn test_inverted_readiness_bounds_rejected() {
    let mut config = EngineConfig::default();
    config.readiness.min_factor = 1.5;
    config.readiness.max_factor = 1.2;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_non_positive_multiplier_rejected() {
    let mut config = EngineConfig::default();
    config.cycle.deload_multiplier = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_negative_margin_rejected() {
    let mut config = EngineConfig::default();
    config.records.qualification = PrQualification::MinimumMargin { percent: -1.0 };
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_environment_variable_override() {
    env::set_var("PERIODIZE_PR_MIN_MARGIN_PERCENT", "0.5");
    env::set_var("PERIODIZE_ONE_REP_MAX_ALGORITHM", "epley");
    env::set_var("PERIODIZE_DEFAULT_CYCLE_WEEKS", "8");

    let config = EngineConfig::from_env().unwrap();

    assert_eq!(
        config.records.qualification,
        PrQualification::MinimumMargin { percent: 0.5 }
    );
    assert_eq!(config.records.algorithm, OneRepMaxAlgorithm::Epley);
    assert_eq!(config.cycle.default_cycle_weeks, 8);

    // Clean up
    env::remove_var("PERIODIZE_PR_MIN_MARGIN_PERCENT");
    env::remove_var("PERIODIZE_ONE_REP_MAX_ALGORITHM");
    env::remove_var("PERIODIZE_DEFAULT_CYCLE_WEEKS");
}

#[test]
#[serial]
fn test_unparseable_override_is_an_error() {
    env::set_var("PERIODIZE_READINESS_MIN_FACTOR", "low");
    let result = EngineConfig::from_env();
    env::remove_var("PERIODIZE_READINESS_MIN_FACTOR");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_override_failing_validation_is_an_error() {
    env::set_var("PERIODIZE_TECHNIQUE_WEEK_INDEX", "9");
    let result = EngineConfig::from_env();
    env::remove_var("PERIODIZE_TECHNIQUE_WEEK_INDEX");

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_oversized_microcycle_override_is_rejected() {
    env::set_var("PERIODIZE_WEEKS_PER_MICROCYCLE", "1000");
    let result = EngineConfig::from_env();
    env::remove_var("PERIODIZE_WEEKS_PER_MICROCYCLE");

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_planner_settings_user_id() {
    let user_id = Uuid::from_u128(7);
    env::set_var(USER_ID_ENV, user_id.to_string());
    let settings = PlannerSettings::from_env().unwrap();
    assert_eq!(settings.default_user_id, user_id);

    env::set_var(USER_ID_ENV, "not-a-uuid");
    assert!(PlannerSettings::from_env().is_err());

    env::remove_var(USER_ID_ENV);
    let settings = PlannerSettings::from_env().unwrap();
    assert!(settings.default_user_id.is_nil());
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("ENVIRONMENT", "production");
    env::remove_var("LOG_FORMAT");
    let production = LoggingConfig::from_env();
    assert_eq!(production.format, LogFormat::Json);
    assert!(production.include_location);

    env::set_var("LOG_FORMAT", "compact");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);

    env::remove_var("ENVIRONMENT");
    env::remove_var("LOG_FORMAT");
}

#[test]
fn test_min_margin_override_is_validated() {
    let settings = PlannerSettings::default();

    let records = settings.records_with_min_margin(0.5).unwrap();
    assert_eq!(
        records.qualification,
        PrQualification::MinimumMargin { percent: 0.5 }
    );
    assert_eq!(records.algorithm, settings.engine.records.algorithm);

    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let err = settings.records_with_min_margin(bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.field.as_deref(), Some("min_margin"));
        assert_eq!(err.code.exit_code(), 2);
    }
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert!("xml".parse::<LogFormat>().is_err());
}
