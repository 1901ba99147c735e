//! Configuration loading
//!
//! Reads `config.toml` from the user's config directory (or an explicit
//! path). The loaded [`Config`] is handed to the fetcher at construction;
//! nothing else reads the filesystem.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FortuneError;

pub use types::{Config, SourceConfig, UiConfig};

/// Default config location: `<config_dir>/fortune/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fortune").join("config.toml"))
}

/// Load configuration
///
/// An explicit `path` must exist. Without one, the default location is
/// tried and a missing file falls back to [`Config::default`].
pub fn load_config(path: Option<&Path>) -> Result<Config, FortuneError> {
    match path {
        Some(explicit) => {
            if !explicit.exists() {
                return Err(FortuneError::ConfigNotFound(explicit.display().to_string()));
            }
            read_config(explicit)
        }
        None => match default_config_path() {
            Some(default) if default.exists() => read_config(&default),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn read_config(path: &Path) -> Result<Config, FortuneError> {
    let content = fs::read_to_string(path)?;
    let config: Config =
        toml::from_str(&content).map_err(|e| FortuneError::InvalidConfig(e.to_string()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
