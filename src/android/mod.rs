//! Native receiver.
//!
//! Turns FCM payloads delivered to the app process into locally posted
//! notifications, and surfaces refreshed registration tokens.
//!
//! # Examples
//!
//! ```rust
//! # use firebase_push_receiver::android::{NativeReceiver, memory::{InMemoryNotificationManager, RecordingTokenSink}};
//! # use firebase_push_receiver::messaging::models::RemoteMessage;
//! let receiver = NativeReceiver::new(InMemoryNotificationManager::new(), RecordingTokenSink::default());
//!
//! let message = RemoteMessage::from_json(r#"{"notification":{"title":"Hi"}}"#).unwrap();
//! let id = receiver.on_message_received(&message);
//! assert!(id.is_some());
//! ```

pub mod memory;
pub mod models;

use crate::android::models::{
    AndroidNotification, NotificationChannel, NotificationSound, PendingIntent, DEFAULT_SMALL_ICON,
};
use crate::core::{notification_id_from_millis, Clock, SystemClock};
use crate::messaging::models::{
    NotificationContent, NotificationPriority, RemoteMessage, VibrationPattern, Visibility,
};
use crate::messaging::normalize;


/// The host's notification service.
pub trait NotificationManager: Send + Sync {
    /// Whether notifications must be posted to a registered channel.
    fn requires_channels(&self) -> bool;

    /// Registers a channel. Registering an existing id again is a no-op.
    fn create_notification_channel(&self, channel: NotificationChannel);

    /// Posts a notification, replacing any notification with the same id.
    fn notify(&self, id: i32, notification: AndroidNotification);
}

/// Receives device registration tokens issued by FCM.
pub trait TokenSink: Send + Sync {
    fn on_token(&self, token: &str);
}

/// Handles FCM callbacks for the native app process.
pub struct NativeReceiver<M, S, C = SystemClock> {
    manager: M,
    tokens: S,
    clock: C,
}

impl<M, S> NativeReceiver<M, S, SystemClock>
where
    M: NotificationManager,
    S: TokenSink,
{
    pub fn new(manager: M, tokens: S) -> Self {
        Self::with_clock(manager, tokens, SystemClock)
    }
}

impl<M, S, C> NativeReceiver<M, S, C>
where
    M: NotificationManager,
    S: TokenSink,
    C: Clock,
{
    pub fn with_clock(manager: M, tokens: S, clock: C) -> Self {
        Self {
            manager,
            tokens,
            clock,
        }
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Handles a delivered message.
    ///
    /// Posts a notification if and only if the message carries a
    /// `notification` payload and returns its id. Data-only messages are left
    /// to the application and nothing is displayed.
    pub fn on_message_received(&self, message: &RemoteMessage) -> Option<i32> {
        tracing::debug!(
            target: "fcm::native",
            from = ?message.from,
            message_id = ?message.message_id,
            "Message received"
        );

        if !message.data.is_empty() {
            tracing::debug!(target: "fcm::native", data = ?message.data, "Message data payload");
        }

        let notification = message.notification.as_ref()?;
        tracing::debug!(target: "fcm::native", body = ?notification.body, "Message notification body");

        Some(self.send_notification(&normalize(message)))
    }

    /// Handles a refreshed registration token.
    pub fn on_new_token(&self, token: &str) {
        tracing::info!(target: "fcm::native", token, "Refreshed token");
        self.tokens.on_token(token);
    }

    /// Registers the high importance channel where the host needs one.
    pub fn ensure_channel(&self) {
        if self.manager.requires_channels() {
            self.manager
                .create_notification_channel(NotificationChannel::high_importance());
        }
    }

    fn send_notification(&self, content: &NotificationContent) -> i32 {
        let notification = build_notification(content);

        self.ensure_channel();

        let id = notification_id_from_millis(self.clock.now_millis());
        tracing::info!(target: "fcm::native", id, title = %notification.title, "Posting notification");
        self.manager.notify(id, notification);
        id
    }
}

/// Builds the native notification for normalized content.
pub fn build_notification(content: &NotificationContent) -> AndroidNotification {
    AndroidNotification {
        channel_id: NotificationChannel::high_importance().id,
        small_icon: DEFAULT_SMALL_ICON.to_string(),
        title: content.title.clone(),
        body: content.body.clone(),
        big_text: content.body.clone(),
        auto_cancel: true,
        sound: NotificationSound::Default,
        priority: NotificationPriority::PriorityMax,
        use_all_defaults: true,
        vibration_pattern: VibrationPattern::alert(),
        visibility: Visibility::Public,
        content_intent: PendingIntent::open_main(),
    }
}
