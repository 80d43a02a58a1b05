//! Tests for configuration loading.

use hotseat::HotseatConfig;
use std::io::Write;
use std::path::PathBuf;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = HotseatConfig::new();
    assert_eq!(config.log_file(), &PathBuf::from("hotseat.log"));
    assert_eq!(config.log_filter(), "info");
    assert!(*config.confirm_exit());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = HotseatConfig::load(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, HotseatConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config("confirm_exit = false\n");
    let config = HotseatConfig::load(file.path()).expect("valid config");
    assert!(!*config.confirm_exit());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let file = write_config(
        "log_file = \"/tmp/hotseat-test.log\"\nlog_filter = \"debug\"\nconfirm_exit = true\n",
    );
    let config = HotseatConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/hotseat-test.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("confirm_exit = \"sometimes\"\n");
    let err = HotseatConfig::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_overrides_replace_file_values() {
    let file = write_config("log_filter = \"warn\"\n");
    let config = HotseatConfig::load(file.path())
        .expect("valid config")
        .with_overrides(Some(PathBuf::from("other.log")), Some("trace".to_string()));
    assert_eq!(config.log_file(), &PathBuf::from("other.log"));
    assert_eq!(config.log_filter(), "trace");
}

#[test]
fn test_absent_overrides_keep_file_values() {
    let file = write_config("log_filter = \"warn\"\n");
    let config = HotseatConfig::load(file.path())
        .expect("valid config")
        .with_overrides(None, None);
    assert_eq!(config.log_filter(), "warn");
}
