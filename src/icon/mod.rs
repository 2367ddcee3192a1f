//! Best-effort icon resolution for windows.
//!
//! Wayland-native clients usually have an app id that matches an icon name,
//! so that is tried first. Clients with a missing or unusual app id fall
//! back to the basename of their executable. A miss at every step yields
//! the configured default icon; no step ever produces an error.

mod theme;

pub use theme::FreedesktopTheme;

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Maps an icon name to a file on disk.
pub trait IconTheme {
    fn lookup(&self, name: &str) -> Option<PathBuf>;
}

impl<T: IconTheme + ?Sized> IconTheme for &T {
    fn lookup(&self, name: &str) -> Option<PathBuf> {
        (**self).lookup(name)
    }
}

/// A resolved window icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Icon {
    /// Found through the icon theme.
    Themed(PathBuf),
    /// Nothing matched; the fixed fallback reference.
    Default(PathBuf),
}

impl Icon {
    pub fn path(&self) -> &Path {
        match self {
            Icon::Themed(path) | Icon::Default(path) => path,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Icon::Default(_))
    }
}

/// Resolve the icon for a window from its app id and process.
///
/// Suppliers are tried in order and the first hit wins:
/// 1. the app id as an icon name
/// 2. the basename of `/proc/<pid>/exe` as an icon name
/// 3. `default`
pub fn resolve_icon<T: IconTheme + ?Sized>(
    app_id: Option<&str>,
    pid: Option<u32>,
    theme: &T,
    default: &Path,
) -> Icon {
    let from_app_id = || app_id.and_then(|name| lookup_logged(theme, name));
    let from_exe = || {
        pid.and_then(exe_basename)
            .and_then(|name| lookup_logged(theme, &name))
    };

    match from_app_id().or_else(from_exe) {
        Some(path) => Icon::Themed(path),
        None => {
            info!(
                app_id = app_id.unwrap_or_default(),
                pid, "Unable to find icon for window"
            );
            Icon::Default(default.to_path_buf())
        }
    }
}

fn lookup_logged<T: IconTheme + ?Sized>(theme: &T, name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    let result = theme.lookup(name);
    let outcome = if result.is_some() { "succeeded" } else { "failed" };
    debug!(name, outcome, "Resolving icon");
    result
}

/// Basename of the executable running as `pid`.
///
/// Returns `None` when the process is gone, its link is unreadable, or the
/// binary has since been removed from disk.
pub fn exe_basename(pid: u32) -> Option<String> {
    let exe = fs::read_link(format!("/proc/{pid}/exe")).ok()?;
    if !exe.exists() {
        return None;
    }
    exe.file_name()?.to_str().map(str::to_string)
}
