use crate::messaging::models::NotificationContent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Icon and badge image served by the web app.
pub const DEFAULT_ICON: &str = "/icons/Icon-192.png";

/// Tag used when the payload has no message id.
pub const DEFAULT_TAG: &str = "notification";

/// Path the notification click routes the user to.
pub const DEFAULT_ROOT_PATH: &str = "/";

/// Options passed to the browser's `showNotification`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebNotificationOptions {
    pub body: String,
    pub icon: String,
    pub badge: String,
    /// Notifications sharing a tag replace each other.
    pub tag: String,
    pub require_interaction: bool,
    /// The payload data, kept for the click handler.
    pub data: HashMap<String, String>,
}

impl From<&NotificationContent> for WebNotificationOptions {
    fn from(content: &NotificationContent) -> Self {
        Self {
            body: content.body.clone(),
            icon: DEFAULT_ICON.to_string(),
            badge: DEFAULT_ICON.to_string(),
            tag: content
                .tag
                .clone()
                .unwrap_or_else(|| DEFAULT_TAG.to_string()),
            require_interaction: false,
            data: content.data.clone(),
        }
    }
}

/// An open window belonging to the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowClient {
    pub id: String,
    pub url: String,
}

/// What a notification click ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An existing window at the root path was focused.
    Focused(String),
    /// A new window was opened at the given URL.
    Opened(String),
}
