//! Events exchanged with the host launcher.

use crate::compositor::WindowRecord;
use crate::items::ResultItem;

/// Events the host launcher sends to the extension.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The user typed into the launcher; carries the text after the keyword.
    Query(String),
    /// The user picked a result; carries that result's `on_enter` payload.
    Select(WindowRecord),
}

/// What the extension hands back to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostResponse {
    /// Render these items. May be empty when nothing matched.
    Render(Vec<ResultItem>),
    /// Nothing to render: the query had no search words.
    NoRender,
    /// The selected window was focused.
    Focused,
}
