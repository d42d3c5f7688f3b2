//! Tests for config file loading.

use std::io::Write;

use noughts::config::DEFAULT_CONFIG_FILE;
use noughts::Config;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_filter = \"debug\"\nmove_hints = false\n\n[players]\nx = \"Alice\"\no = \"Bob\""
    )
    .unwrap();

    let config = Config::load(Some(file.path()), std::path::Path::new(".")).unwrap();

    assert_eq!(config.log_filter(), "debug");
    assert!(!*config.move_hints());
    assert_eq!(config.players().x(), "Alice");
    assert_eq!(config.players().o(), "Bob");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Config::load(Some(missing.as_path()), dir.path()).unwrap_err();

    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_default_file_in_directory_is_used() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "log_file = \"game.log\"\n").unwrap();

    let config = Config::load(None, dir.path()).unwrap();

    assert_eq!(config.log_file(), &std::path::PathBuf::from("game.log"));
    assert!(*config.move_hints());
}

#[test]
fn test_no_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(Config::load(None, dir.path()).unwrap(), Config::default());
}

#[test]
fn test_malformed_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[players\n").unwrap();

    let err = Config::load(None, dir.path()).unwrap_err();

    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
