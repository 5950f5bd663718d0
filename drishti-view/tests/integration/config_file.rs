//! Configuration loading from disk.

use std::fs;

use drishti_view::{Clock, ConfigLoadError, DrishtiConfig};
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    env_logger::try_init().ok();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("drishti.yaml");
    fs::write(&path, "time:\n  show_milliseconds: true\n  clock: utc\n").unwrap();

    let config = DrishtiConfig::load(&path).unwrap();
    assert!(config.time.show_milliseconds);
    assert_eq!(config.time.clock, Clock::Utc);
    assert_eq!(
        config.time.format_timestamp(1_609_506_245_007).unwrap(),
        "13:04:05:007"
    );
}

#[test]
fn test_shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/drishti.yaml");
    let config = DrishtiConfig::load(path.as_ref()).unwrap();
    assert!(!config.time.show_milliseconds);
    assert_eq!(config.time.clock, Clock::Local);
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "time:\n  clock: sundial\n").unwrap();

    let err = DrishtiConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse(_)));

    let wrapped: drishti_view::Error = err.into();
    assert!(wrapped.to_string().starts_with("Config error:"));
}
