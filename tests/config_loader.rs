use statepad::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = Config::default();
    assert_eq!(config.seed, vec![1, 2, 3]);
    assert_eq!(config.tick_rate_ms, 250);
}

#[test]
fn loads_a_full_file() {
    let (_dir, path) = write_config("seed = [4, 5]\ntick_rate_ms = 100\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.seed, vec![4, 5]);
    assert_eq!(config.tick_rate_ms, 100);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let (_dir, path) = write_config("seed = []\n");
    let config = Config::load_from(&path).unwrap();
    assert!(config.seed.is_empty());
    assert_eq!(config.tick_rate_ms, 250);
}

#[test]
fn unparsable_toml_is_an_error() {
    let (_dir, path) = write_config("seed = [1, oops\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config("tick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Validation { .. })
    ));
}

#[test]
fn explicit_missing_path_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("nope.toml");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Read { .. })
    ));
}
