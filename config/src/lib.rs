//! Configuration for World Clock.
//!
//! Read from `~/.worldclock/config.toml` (or the path in `WORLDCLOCK_CONFIG`):
//!
//! ```toml
//! [app]
//! initial_query = "asia"
//! ascii_only = false
//! high_contrast = false
//! ```
//!
//! A missing file is not an error; every field has a default.

use serde::Deserialize;
use std::{
    env, fs,
    io::Error as IoError,
    path::{Path, PathBuf},
};
use thiserror::Error;

use worldclock_types::ui::UiOptions;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "WORLDCLOCK_CONFIG";

const CONFIG_DIR: &str = ".worldclock";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
pub struct WorldClockConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Search text to start with when none is given on the command line.
    pub initial_query: Option<String>,
    /// Use ASCII-only glyphs and canvas markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl WorldClockConfig {
    /// Load the config from its default location.
    ///
    /// Returns `Ok(None)` when no path can be determined or the file does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn initial_query(&self) -> Option<&str> {
        self.app.as_ref().and_then(|app| app.initial_query.as_deref())
    }
}

/// Directory holding the config file and logs.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_path().and_then(|path| path.parent().map(Path::to_path_buf))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}
