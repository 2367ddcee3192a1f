use super::traits::DisplayItem;
use crate::compositor::{Compositor, FocusError, WindowRecord, get_display_title};
use crate::icon::{Icon, IconTheme, resolve_icon};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// An open window together with its resolved icon.
///
/// The icon is resolved once, at construction. Items are rebuilt for every
/// query, so it never needs refreshing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowItem {
    pub window: WindowRecord,
    pub icon: Icon,
}

impl WindowItem {
    /// Create a window item, resolving its icon from the app id and pid.
    pub fn new<T: IconTheme + ?Sized>(window: WindowRecord, theme: &T, default_icon: &Path) -> Self {
        debug!(window_id = ?window.id, "Getting icon for window");
        let app_id = Some(window.app_id.as_str()).filter(|id| !id.is_empty());
        let icon = resolve_icon(app_id, window.pid, theme, default_icon);
        Self { window, icon }
    }

    /// Ask the compositor to focus this window.
    pub fn focus<C: Compositor + ?Sized>(&self, compositor: &C) -> Result<(), FocusError> {
        compositor.focus_window(&self.window)
    }
}

impl DisplayItem for WindowItem {
    fn name(&self) -> &str {
        get_display_title(&self.window.title, &self.window.app_id)
    }

    fn description(&self) -> Option<&str> {
        Some(self.window.app_id.as_str()).filter(|id| !id.is_empty())
    }
}

impl fmt::Display for WindowItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = &self.window;
        let id = w.id.as_ref().map(ToString::to_string).unwrap_or_default();
        let workspace = w
            .workspace_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        write!(
            f,
            "Window(id={id}, title={}, app_id={}, workspace_id={workspace}, \
             is_focused={}, is_floating={}, is_urgent={})\nIcon: {}",
            w.title,
            w.app_id,
            w.is_focused,
            w.is_floating,
            w.is_urgent,
            self.icon.path().display()
        )
    }
}
