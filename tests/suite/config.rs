//! Config files feeding UI options and the initial query.

use std::fs;

use tempfile::TempDir;

use worldclock_config::{ConfigError, WorldClockConfig};
use worldclock_types::ui::UiOptions;

use crate::common::new_year_noon;

#[test]
fn config_file_drives_options_and_query() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\ninitial_query = \"asia\"\nascii_only = true\nhigh_contrast = true\n",
    )
    .unwrap();

    let config = WorldClockConfig::load_from(&path).unwrap().unwrap();
    let options = config.ui_options();
    assert_eq!(
        options,
        UiOptions {
            ascii_only: true,
            high_contrast: true,
        }
    );

    let app = worldclock_engine::App::with_query(
        worldclock_core::locations(),
        new_year_noon(),
        options,
        config.initial_query().unwrap_or_default(),
    );
    assert_eq!(app.query(), "asia");
    assert_eq!(app.match_count(), 7);
    assert_eq!(app.ui_options(), options);
}

#[test]
fn missing_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let config = WorldClockConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(config.is_none());
}

#[test]
fn malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app\nascii_only = yes\n").unwrap();

    let err = WorldClockConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
}
