mod traits;
mod window;

pub use traits::DisplayItem;
pub use window::WindowItem;

use crate::compositor::WindowRecord;
use crate::icon::Icon;
use serde::Serialize;

/// One entry of a rendered result list, as handed to the host launcher.
///
/// `on_enter` is returned verbatim by the host when the entry is chosen.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultItem {
    pub icon: Icon,
    pub name: String,
    pub description: String,
    pub on_enter: WindowRecord,
}

impl From<WindowItem> for ResultItem {
    fn from(item: WindowItem) -> Self {
        Self {
            name: item.name().to_string(),
            description: item.description().unwrap_or_default().to_string(),
            icon: item.icon,
            on_enter: item.window,
        }
    }
}
