//! In-process implementations of the native host traits.

use crate::android::models::{AndroidNotification, NotificationChannel};
use crate::android::{NotificationManager, TokenSink};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct State {
    channels: HashMap<String, NotificationChannel>,
    posted: BTreeMap<i32, AndroidNotification>,
    posts: usize,
}

/// Keeps channels and posted notifications in memory.
///
/// Posting with an id already in use replaces the earlier notification, as
/// hosts do.
#[derive(Debug)]
pub struct InMemoryNotificationManager {
    requires_channels: bool,
    state: Mutex<State>,
}

impl Default for InMemoryNotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryNotificationManager {
    /// A host that requires channels.
    pub fn new() -> Self {
        Self::with_channel_support(true)
    }

    pub fn with_channel_support(requires_channels: bool) -> Self {
        Self {
            requires_channels,
            state: Mutex::new(State::default()),
        }
    }

    pub fn channels(&self) -> Vec<NotificationChannel> {
        self.lock().channels.values().cloned().collect()
    }

    pub fn channel(&self, id: &str) -> Option<NotificationChannel> {
        self.lock().channels.get(id).cloned()
    }

    /// Notifications currently shown, by id.
    pub fn posted(&self) -> BTreeMap<i32, AndroidNotification> {
        self.lock().posted.clone()
    }

    /// Number of `notify` calls, including ones that replaced an earlier post.
    pub fn post_count(&self) -> usize {
        self.lock().posts
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NotificationManager for InMemoryNotificationManager {
    fn requires_channels(&self) -> bool {
        self.requires_channels
    }

    fn create_notification_channel(&self, channel: NotificationChannel) {
        self.lock()
            .channels
            .entry(channel.id.clone())
            .or_insert(channel);
    }

    fn notify(&self, id: i32, notification: AndroidNotification) {
        let mut state = self.lock();
        state.posts += 1;
        state.posted.insert(id, notification);
    }
}

/// Collects every token it receives.
#[derive(Debug, Default)]
pub struct RecordingTokenSink {
    tokens: Mutex<Vec<String>>,
}

impl RecordingTokenSink {
    pub fn tokens(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// The most recently issued token.
    pub fn latest(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.tokens.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenSink for RecordingTokenSink {
    fn on_token(&self, token: &str) {
        self.lock().push(token.to_string());
    }
}
