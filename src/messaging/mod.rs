//! Incoming FCM payloads and the normalization policy shared by every receiver.
//!
//! Both the native and the web receivers render notifications from the same
//! [`NotificationContent`], so the fallback rules live here and only here.
//!
//! # Examples
//!
//! ```rust
//! # use firebase_push_receiver::messaging::{normalize, models::RemoteMessage, DEFAULT_TITLE};
//! let message = RemoteMessage::from_json(r#"{"data":{"promo":"X"}}"#).unwrap();
//! let content = normalize(&message);
//! assert_eq!(content.title, DEFAULT_TITLE);
//! assert_eq!(content.body, "");
//! ```

pub mod models;

use crate::messaging::models::{NotificationContent, RemoteMessage};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Title shown when a payload carries no usable title.
pub const DEFAULT_TITLE: &str = "Nouvelle notification";

#[derive(Error, Debug)]
pub enum MessagingError {
    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl RemoteMessage {
    /// Parses a raw FCM payload.
    pub fn from_json(raw: &str) -> Result<Self, MessagingError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Whether the sender attached a display notification.
    pub fn has_notification(&self) -> bool {
        self.notification.is_some()
    }
}

/// Derives display parameters from a payload.
///
/// The title falls back to [`DEFAULT_TITLE`] when absent or empty, the body to
/// empty text. An empty message id gives no tag. Data is carried over verbatim.
pub fn normalize(message: &RemoteMessage) -> NotificationContent {
    let notification = message.notification.as_ref();

    let title = notification
        .and_then(|n| n.title.as_deref())
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let body = notification
        .and_then(|n| n.body.clone())
        .unwrap_or_default();

    NotificationContent {
        title,
        body,
        tag: message.message_id.clone().filter(|id| !id.is_empty()),
        data: message.data.clone(),
    }
}
