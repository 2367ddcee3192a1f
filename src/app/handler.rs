//! Query and selection handling.
//!
//! One query lists the compositor's windows, filters them and resolves
//! icons for what remains. One selection issues a single focus command.
//! Nothing is kept between calls.

use std::path::PathBuf;
use tracing::debug;

use super::events::{HostEvent, HostResponse};
use crate::compositor::{Compositor, FocusError, QueryError, WindowRecord};
use crate::icon::IconTheme;
use crate::items::{ResultItem, WindowItem};
use crate::search::{matches, tokenize};

/// Failure of a single host event.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Focus(#[from] FocusError),
}

/// The window-switching extension.
pub struct WindowsExtension<C, T> {
    compositor: C,
    theme: T,
    default_icon: PathBuf,
}

impl<C: Compositor, T: IconTheme> WindowsExtension<C, T> {
    pub fn new(compositor: C, theme: T, default_icon: impl Into<PathBuf>) -> Self {
        Self {
            compositor,
            theme,
            default_icon: default_icon.into(),
        }
    }

    /// Handle typed query text.
    ///
    /// Returns `Ok(None)` when the text has no search words, in which case
    /// the host should not render anything. Otherwise returns every
    /// unfocused window whose app id and title contain all the words, in
    /// compositor order.
    pub fn handle_query(&self, text: &str) -> Result<Option<Vec<ResultItem>>, QueryError> {
        let tokens = tokenize(text);
        debug!(?tokens, "Search keyword");
        if tokens.is_empty() {
            return Ok(None);
        }

        let items: Vec<ResultItem> = self
            .compositor
            .list_windows()?
            .into_iter()
            .filter(|window| !window.is_focused && matches(window, &tokens))
            .map(|window| self.window_item(window).into())
            .collect();

        debug!(count = items.len(), "Found windows matching the query");
        Ok(Some(items))
    }

    /// Handle a chosen result by focusing its window.
    pub fn handle_selection(&self, window: &WindowRecord) -> Result<(), FocusError> {
        debug!(window_id = ?window.id, "Focusing window");
        self.compositor.focus_window(window)
    }

    /// Every open window with its icon, focused ones included.
    pub fn list(&self) -> Result<Vec<WindowItem>, QueryError> {
        Ok(self
            .compositor
            .list_windows()?
            .into_iter()
            .map(|window| self.window_item(window))
            .collect())
    }

    /// Route a host event to its handler.
    pub fn dispatch(&self, event: HostEvent) -> Result<HostResponse, HandlerError> {
        match event {
            HostEvent::Query(text) => Ok(match self.handle_query(&text)? {
                Some(items) => HostResponse::Render(items),
                None => HostResponse::NoRender,
            }),
            HostEvent::Select(window) => {
                self.handle_selection(&window)?;
                Ok(HostResponse::Focused)
            }
        }
    }

    fn window_item(&self, window: WindowRecord) -> WindowItem {
        WindowItem::new(window, &self.theme, &self.default_icon)
    }
}
