//! Configuration file handling

use nose_keyboard::{app::InputSession, config::Config, keyboard::Key, Error};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = Config::default();
    config.calibration.file = PathBuf::from("/tmp/other_calibration.json");
    config.selection.cooldown_secs = 0.75;
    config.keyboard.grid_rows = 0;
    config.smoothing.filter = "moving_average:3".to_string();
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.calibration.file, config.calibration.file);
    assert_eq!(loaded.selection.cooldown_secs, 0.75);
    assert_eq!(loaded.keyboard.rows, config.keyboard.rows);
    assert_eq!(loaded.create_layout().unwrap().grid(), (10, 3));
    assert_eq!(loaded.smoothing.filter, "moving_average:3");
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_malformed_yaml_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "selection: [unclosed").unwrap();

    assert!(matches!(Config::from_file(&path), Err(Error::ConfigError(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_custom_keyboard_from_yaml() {
    let yaml = r#"
keyboard:
  rows: ["ABC", "D< "]
  grid_columns: 3
  grid_rows: 2
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    let layout = config.create_layout().unwrap();
    assert_eq!(layout.grid(), (3, 2));
    assert_eq!(layout.rows().len(), 2);
}

#[test]
fn test_cooldown_too_large_for_duration_is_rejected() {
    let mut config = Config::default();
    config.selection.cooldown_secs = 1.0e20;

    assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    assert!(matches!(config.create_selection(), Err(Error::ConfigError(_))));
    assert!(matches!(InputSession::new(config), Err(Error::ConfigError(_))));
}

#[test]
fn test_fit_grid_accepts_tall_layouts() {
    let mut config = Config::default();
    config.keyboard.rows = ["ABC", "DEF", "GHI", "JKL", "MNO", "PQR", "STU<"]
        .iter()
        .map(ToString::to_string)
        .collect();
    config.keyboard.grid_rows = 0;

    assert!(config.validate().is_ok());
    let layout = config.create_layout().unwrap();
    assert_eq!(layout.grid(), (10, 7));
    assert_eq!(layout.hit_test(10, 1079, config.geometry()).unwrap().key, Key::Char('S'));

    // An explicit grid still has to hold every row
    config.keyboard.grid_rows = 5;
    assert!(config.validate().is_err());
}
