//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use super::types::AppConfig;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the config, returning warnings for non-fatal issues.
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if config.compositor.trim().is_empty() {
        warnings.push(ValidationWarning {
            field: "compositor".to_string(),
            message: "Compositor command is empty. Falling back to 'niri'.".to_string(),
        });
    }

    if config.icon_size == 0 {
        warnings.push(ValidationWarning {
            field: "icon_size".to_string(),
            message: "Icon size must be positive. Falling back to 64.".to_string(),
        });
    }

    if config.default_icon.as_os_str().is_empty() {
        warnings.push(ValidationWarning {
            field: "default_icon".to_string(),
            message: "Default icon is empty. Falling back to 'images/default.svg'.".to_string(),
        });
    }

    warnings
}

/// Replace invalid values with their defaults.
pub fn sanitize_config(mut config: AppConfig) -> AppConfig {
    let defaults = AppConfig::default();

    if config.compositor.trim().is_empty() {
        config.compositor = defaults.compositor;
    }
    if config.icon_size == 0 {
        config.icon_size = defaults.icon_size;
    }
    if config.default_icon.as_os_str().is_empty() {
        config.default_icon = defaults.default_icon;
    }

    config
}
