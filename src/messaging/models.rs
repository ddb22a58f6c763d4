use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A push message as delivered by FCM to a client.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMessage {
    /// Identifier assigned by FCM. Used as the grouping tag on the web.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Sender of the message (sender id or topic).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Display notification, when the sender attached one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,

    /// Arbitrary key/value payload.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, String>,
}

/// Basic notification template shared by all platforms.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// The notification's title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The notification's body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// The URL of an image to be displayed in the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Display parameters derived from a [`RemoteMessage`], independent of the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    /// Never empty.
    pub title: String,
    pub body: String,
    /// The message id, if the payload carried one.
    pub tag: Option<String>,
    pub data: HashMap<String, String>,
}

/// Set the relative priority for a notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationPriority {
    /// Min priority.
    PriorityMin,
    /// Low priority.
    PriorityLow,
    /// Default priority.
    PriorityDefault,
    /// High priority.
    PriorityHigh,
    /// Max priority. Presented as a heads-up popup.
    PriorityMax,
}

/// Lock screen visibility of a notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Private.
    Private,
    /// Public. Full content shown on a locked screen.
    Public,
    /// Secret.
    Secret,
}

/// Importance of a notification channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Importance {
    None,
    Min,
    Low,
    Default,
    High,
}

/// Alternating off/on durations in milliseconds, starting with a delay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VibrationPattern(pub Vec<u64>);

impl VibrationPattern {
    /// No delay, then two 250ms pulses separated by 250ms.
    pub fn alert() -> Self {
        Self(vec![0, 250, 250, 250])
    }

    pub fn timings(&self) -> &[u64] {
        &self.0
    }
}
