//! Compositor abstraction for window management.
//!
//! This module provides the window snapshot types and a trait for listing
//! windows and switching focus. The niri implementation talks to the
//! compositor through its `msg` command line interface.

mod base;
mod error;
mod niri;

pub use base::get_display_title;
pub use error::{FocusError, QueryError};
pub use niri::NiriCompositor;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Compositor-assigned identifier.
///
/// niri uses integers, but the value is treated as opaque and passed back
/// verbatim when focusing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompositorId {
    Number(i64),
    Text(String),
}

pub type WindowId = CompositorId;
pub type WorkspaceId = CompositorId;

impl fmt::Display for CompositorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositorId::Number(id) => write!(f, "{id}"),
            CompositorId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for CompositorId {
    fn from(id: i64) -> Self {
        CompositorId::Number(id)
    }
}

/// Snapshot of one open window, as reported by `niri msg -j windows`.
///
/// Every key is optional in the payload. A key that is missing, `null` or
/// of an unexpected type takes its default (empty, `false` or `None`), so
/// one odd window never spoils the whole list. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowRecord {
    /// Required to focus the window.
    #[serde(deserialize_with = "lenient")]
    pub id: Option<WindowId>,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub app_id: String,
    #[serde(deserialize_with = "lenient")]
    pub pid: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub workspace_id: Option<WorkspaceId>,
    #[serde(deserialize_with = "lenient")]
    pub is_focused: bool,
    #[serde(deserialize_with = "lenient")]
    pub is_floating: bool,
    #[serde(deserialize_with = "lenient")]
    pub is_urgent: bool,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Compositor window management operations.
pub trait Compositor {
    /// List all open windows, in the order the compositor reports them.
    fn list_windows(&self) -> Result<Vec<WindowRecord>, QueryError>;

    /// Focus the given window.
    fn focus_window(&self, window: &WindowRecord) -> Result<(), FocusError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_full_payload() {
        let json = r#"{
            "id": 12,
            "title": "Inbox - Mozilla Thunderbird",
            "app_id": "thunderbird",
            "pid": 4242,
            "workspace_id": 3,
            "is_focused": true,
            "is_floating": false,
            "is_urgent": true,
            "layout": {"pos_in_scrolling_layout": [1, 1]}
        }"#;

        let record: WindowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(WindowId::Number(12)));
        assert_eq!(record.title, "Inbox - Mozilla Thunderbird");
        assert_eq!(record.app_id, "thunderbird");
        assert_eq!(record.pid, Some(4242));
        assert_eq!(record.workspace_id, Some(WorkspaceId::Number(3)));
        assert!(record.is_focused);
        assert!(!record.is_floating);
        assert!(record.is_urgent);
    }

    #[test]
    fn test_record_missing_keys_default() {
        let record: WindowRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, WindowRecord::default());
        assert!(record.id.is_none());
        assert_eq!(record.title, "");
        assert!(!record.is_focused);
    }

    #[test]
    fn test_record_null_values_default() {
        let json = r#"{"id": 5, "title": null, "app_id": null, "pid": null, "is_focused": null}"#;
        let record: WindowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(WindowId::Number(5)));
        assert_eq!(record.title, "");
        assert_eq!(record.app_id, "");
        assert_eq!(record.pid, None);
        assert!(!record.is_focused);
    }

    #[test]
    fn test_window_id_string_form() {
        let record: WindowRecord = serde_json::from_str(r#"{"id": "0x5678abcd"}"#).unwrap();
        assert_eq!(record.id, Some(WindowId::Text("0x5678abcd".to_string())));
        assert_eq!(record.id.unwrap().to_string(), "0x5678abcd");
        assert_eq!(WindowId::from(42).to_string(), "42");
        assert_eq!(WindowId::from(-3).to_string(), "-3");
    }

    #[test]
    fn test_record_serializes_back_to_payload() {
        let record = WindowRecord {
            id: Some(WindowId::Number(7)),
            title: "Terminal".to_string(),
            app_id: "foot".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: WindowRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_negative_id_is_kept() {
        let record: WindowRecord = serde_json::from_str(r#"{"id": -3}"#).unwrap();
        assert_eq!(record.id, Some(WindowId::Number(-3)));
    }

    #[test]
    fn test_string_workspace_id_is_kept() {
        let record: WindowRecord =
            serde_json::from_str(r#"{"id": 2, "workspace_id": "ws-2"}"#).unwrap();
        assert_eq!(
            record.workspace_id,
            Some(WorkspaceId::Text("ws-2".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_pid_is_dropped() {
        let record: WindowRecord = serde_json::from_str(r#"{"id": 2, "pid": -1}"#).unwrap();
        assert_eq!(record.id, Some(WindowId::Number(2)));
        assert_eq!(record.pid, None);

        let record: WindowRecord =
            serde_json::from_str(r#"{"id": 2, "pid": 99999999999}"#).unwrap();
        assert_eq!(record.pid, None);
    }

    #[test]
    fn test_mistyped_fields_default() {
        let json = r#"{"id": {"nested": 1}, "title": 7, "app_id": ["x"],
                       "workspace_id": 1.5, "is_focused": "yes", "is_urgent": 1}"#;
        let record: WindowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, WindowRecord::default());
    }
}
