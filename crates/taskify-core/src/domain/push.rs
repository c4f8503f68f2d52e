//! Push payloads and the notifications built from them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound payload from the push transport.
///
/// Every part is optional; the transport does not guarantee any of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub notification: Option<PushNotification>,

    /// Opaque data map. May carry a `taskId` correlation string.
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushNotification {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl PushPayload {
    pub fn title(&self) -> Option<&str> {
        self.notification
            .as_ref()
            .and_then(|n| n.title.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn body(&self) -> Option<&str> {
        self.notification
            .as_ref()
            .and_then(|n| n.body.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// The `taskId` entry of the data map, as a tag string.
    pub fn correlation_tag(&self) -> Option<String> {
        match self.data.as_ref()?.get("taskId")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// A request to show one system notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    /// Notifications with the same tag replace each other.
    pub tag: String,
    /// Stay on screen until dismissed.
    pub require_interaction: bool,
    /// The payload's data map, passed through.
    pub data: Map<String, Value>,
}

/// A window-type client the notification host knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientWindow {
    pub id: String,
    pub url: String,
    /// Whether the host can bring this client to the foreground.
    pub focusable: bool,
}

/// Result of handling a notification click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An existing window was brought to the foreground.
    Focused(ClientWindow),
    /// A new window was opened at the given url.
    Opened(String),
    /// No window could be focused or opened.
    Nothing,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_strings_count_as_absent() {
        let payload: PushPayload = serde_json::from_value(json!({
            "notification": { "title": "", "body": "Pay rent" },
            "data": { "taskId": "" }
        }))
        .unwrap();
        assert_eq!(payload.title(), None);
        assert_eq!(payload.body(), Some("Pay rent"));
        assert_eq!(payload.correlation_tag(), None);
    }

    #[test]
    fn numeric_task_id_becomes_tag() {
        let payload: PushPayload =
            serde_json::from_value(json!({ "data": { "taskId": 12 } })).unwrap();
        assert_eq!(payload.correlation_tag().as_deref(), Some("12"));
    }
}
