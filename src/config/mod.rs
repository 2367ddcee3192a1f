//! Extension configuration.
//!
//! Configuration lives in `~/.config/niri-windows/config.toml`. Every key is
//! optional; a missing file means defaults, and a broken file is reported
//! and replaced by defaults rather than stopping the extension.

mod types;
mod validation;

pub use types::AppConfig;
pub use validation::{ValidationWarning, sanitize_config, validate_config};

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("niri-windows"))
}

/// Default location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Read and parse a config file.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    let config = toml::from_str::<AppConfig>(&content).map_err(ConfigError::ParseFailed)?;
    Ok(Some(config))
}

/// Load the config from `path` (or the default location), falling back to
/// defaults on any failure. Validation warnings are logged and invalid
/// values replaced.
pub fn load_config(path: Option<&Path>) -> AppConfig {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
        tracing::debug!("No config directory, using defaults");
        return AppConfig::default();
    };

    let config = match read_config(&path) {
        Ok(Some(config)) => {
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        Ok(None) => {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return AppConfig::default();
        }
        Err(e) => {
            tracing::warn!("{} ({:?}), using defaults", e, path);
            return AppConfig::default();
        }
    };

    for warning in validate_config(&config) {
        tracing::warn!(field = %warning.field, "{}", warning.message);
    }

    sanitize_config(config)
}
