//! Integration tests for config loading.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use explorer_cli::config::{ConfigError, ExplorerConfig};
use explorer_cli::logging::default_directives;
use tracing::level_filters::LevelFilter;

#[test]
fn test_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("explorer.toml");
    fs::write(
        &path,
        r#"
[data]
path = "passengers.csv"
load_delay_secs = 0.5

[wait_times]
people = 80
staff = 2
seed = 42
bins = 12
"#,
    )
    .unwrap();

    let config = ExplorerConfig::load(Some(&path)).unwrap();

    assert_eq!(config.data.path, PathBuf::from("passengers.csv"));
    assert_eq!(config.data.load_delay(), Duration::from_millis(500));
    assert_eq!(config.wait_times.people, 80);
    assert_eq!(config.wait_times.staff, 2);
    assert_eq!(config.wait_times.seed, Some(42));
    assert_eq!(config.wait_times.bins, 12);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = ExplorerConfig::from_toml("[wait_times]\nstaff = 5\n").unwrap();
    let defaults = ExplorerConfig::default();

    assert_eq!(config.wait_times.staff, 5);
    assert_eq!(config.wait_times.people, defaults.wait_times.people);
    assert_eq!(config.wait_times.seed, None);
    assert_eq!(config.data, defaults.data);
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(
        ExplorerConfig::from_toml("").unwrap(),
        ExplorerConfig::default()
    );
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let error = ExplorerConfig::load(Some(&path)).unwrap_err();

    assert!(matches!(error, ConfigError::Read { .. }));
    assert!(error.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("explorer.toml");
    fs::write(&path, "[wait_times]\npeople = \"many\"\n").unwrap();

    let error = ExplorerConfig::load(Some(&path)).unwrap_err();

    assert!(matches!(error, ConfigError::Parse { .. }));
}

#[test]
fn test_directives_cover_workspace_crates() {
    insta::assert_snapshot!(
        default_directives(LevelFilter::INFO),
        @"warn,explorer_cli=info,explorer_ingest=info,explorer_model=info,explorer_report=info,explorer_transform=info,explorer_waittime=info"
    );
}
