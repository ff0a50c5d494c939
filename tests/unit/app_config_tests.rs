/*!
 * Tests for application configuration
 */

use anyhow::Result;
use subconv::app_config::{Config, LogLevel};
use crate::common;

/// Test the default configuration values
#[test]
fn test_default_shouldUseScenaristDefaults() {
    let config = Config::default();

    assert!((config.scc.frame_rate - 29.97).abs() < f64::EPSILON);
    assert_eq!(config.scc.line_length, 32);
    assert!((config.scc.default_duration_secs - 1.0).abs() < f64::EPSILON);
    assert_eq!(config.output.suffix, "converted");
    assert!(!config.output.force_overwrite);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test that missing JSON fields fall back to defaults
#[test]
fn test_fromFile_withPartialConfig_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "scc": { "frame_rate": 25.0 }, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert!((config.scc.frame_rate - 25.0).abs() < f64::EPSILON);
    assert_eq!(config.scc.line_length, 32);
    assert_eq!(config.output.suffix, "converted");
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test that malformed JSON is reported
#[test]
fn test_fromFile_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::from_file(&path).is_err());
    Ok(())
}

/// Test that a missing file yields the defaults
#[test]
fn test_loadOrDefault_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load_or_default(temp_dir.path().join("missing.json"))?;

    assert_eq!(config.scc, Config::default().scc);
    Ok(())
}

/// Test that a saved configuration loads back unchanged
#[test]
fn test_save_withCustomValues_shouldLoadBack() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.scc.line_length = 28;
    config.output.suffix = "fixed".to_string();
    config.log_level = LogLevel::Warn;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.scc, config.scc);
    assert_eq!(loaded.output, config.output);
    assert_eq!(loaded.log_level, LogLevel::Warn);
    assert!(std::fs::read_to_string(&path)?.contains("\"warn\""));
    Ok(())
}

/// Test the validation rules
#[test]
fn test_validate_withInvalidValues_shouldFail() {
    let mut config = Config::default();
    config.scc.frame_rate = 0.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.scc.line_length = 33;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.scc.line_length = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.scc.default_duration_secs = -1.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.output.suffix = "a/b".to_string();
    assert!(config.validate().is_err());
}

/// Test the log filter mapping
#[test]
fn test_toLevelFilter_shouldMatchLevels() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
