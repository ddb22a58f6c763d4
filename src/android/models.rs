use crate::messaging::models::{Importance, NotificationPriority, VibrationPattern, Visibility};
use serde::{Deserialize, Serialize};

/// Id of the channel every FCM notification is posted to.
pub const HIGH_IMPORTANCE_CHANNEL_ID: &str = "high_importance_channel";

/// Small icon resource used for posted notifications.
pub const DEFAULT_SMALL_ICON: &str = "ic_dialog_info";

/// A notification channel, registered with the host before posting on
/// platforms that require one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationChannel {
    pub id: String,
    /// User visible name.
    pub name: String,
    pub description: String,
    pub importance: Importance,
    pub enable_vibration: bool,
    pub vibration_pattern: VibrationPattern,
    pub enable_lights: bool,
}

impl NotificationChannel {
    /// The channel FCM notifications are posted to. High importance so that
    /// notifications appear as popups.
    pub fn high_importance() -> Self {
        Self {
            id: HIGH_IMPORTANCE_CHANNEL_ID.to_string(),
            name: "High Importance Notifications".to_string(),
            description: "This channel is used for important notifications from Firebase Cloud Messaging. Notifications will appear as popups.".to_string(),
            importance: Importance::High,
            enable_vibration: true,
            vibration_pattern: VibrationPattern::alert(),
            enable_lights: true,
        }
    }
}

/// Screen opened when the user taps a notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchTarget {
    /// The application's main entry point.
    MainActivity,
}

/// Action fired when the notification is tapped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingIntent {
    pub target: LaunchTarget,
    /// Discard every screen above the target in the back stack.
    pub clear_top: bool,
    pub immutable: bool,
    /// Replace the extras of an already pending intent.
    pub update_current: bool,
}

impl PendingIntent {
    /// Opens or resumes the main entry point with an empty back stack.
    pub fn open_main() -> Self {
        Self {
            target: LaunchTarget::MainActivity,
            clear_top: true,
            immutable: true,
            update_current: true,
        }
    }
}

/// Sound played when the notification is posted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NotificationSound {
    /// The platform's default notification sound.
    Default,
    Uri(String),
}

/// A fully built native notification, ready to be posted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AndroidNotification {
    pub channel_id: String,
    pub small_icon: String,
    pub title: String,
    pub body: String,
    /// Expanded text, same as the body.
    pub big_text: String,
    /// Dismiss when tapped.
    pub auto_cancel: bool,
    pub sound: NotificationSound,
    pub priority: NotificationPriority,
    pub use_all_defaults: bool,
    pub vibration_pattern: VibrationPattern,
    pub visibility: Visibility,
    pub content_intent: PendingIntent,
}
