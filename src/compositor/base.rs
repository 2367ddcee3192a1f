//! Helpers shared by compositor consumers.

/// Get the display title for a window, falling back to the app id if the title is empty.
pub fn get_display_title<'a>(title: &'a str, app_id: &'a str) -> &'a str {
    if title.is_empty() { app_id } else { title }
}
