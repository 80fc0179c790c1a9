//! Application configuration loading.
//!
//! Settings live in a JSON file. An explicitly given file must exist; the
//! default location is optional and falls back to [`AppConfig::default`].

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::AppConfig;

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Get the default config file path.
///
/// Uses the `directories` crate to find the platform-specific config
/// directory.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "cmdo", "cmdo")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Parse an [`AppConfig`] from JSON text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Read an [`AppConfig`] from a file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content)
}

/// Load the application config.
///
/// With `path` set, the file must exist. Without it, the default location is
/// tried and defaults are used when nothing is there.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = path {
        log::debug!("Loading config from {}", path.display());
        return read_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            log::debug!("Loading config from {}", path.display());
            read_config(&path)
        }
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}
