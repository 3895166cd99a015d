//! Unit tests for loading harness configuration from disk

use conformance::{ConfigError, HarnessConfig};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "suites:\n  - construction\nfilter: singleton\nfail_fast: true").unwrap();

    let config = HarnessConfig::load(file.path()).unwrap();
    assert_eq!(config.suites, vec!["construction".to_string()]);
    assert_eq!(config.filter.as_deref(), Some("singleton"));
    assert!(config.fail_fast);
    assert!(!config.include_pending);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = HarnessConfig::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "suites: [construction").unwrap();
    let err = HarnessConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("failed to parse config file"));
}
