//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extension configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Compositor binary invoked for `msg` commands.
    pub compositor: String,
    /// Icon theme to search before the desktop's configured theme.
    pub icon_theme: Option<String>,
    /// Requested icon size in pixels.
    pub icon_size: u16,
    /// Icon reference used when no themed icon is found.
    pub default_icon: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            compositor: "niri".to_string(),
            icon_theme: None,
            icon_size: 64,
            default_icon: PathBuf::from("images/default.svg"),
        }
    }
}
