//! Background web receiver.
//!
//! Mirrors a messaging service worker: renders background messages through
//! the registration's `showNotification`, and routes notification clicks back
//! to an application window.
//!
//! Unlike the native receiver, a background message is always rendered, even
//! when it only carries data.
//!
//! # Examples
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use firebase_push_receiver::config::FirebaseWebConfig;
//! # use firebase_push_receiver::messaging::models::RemoteMessage;
//! # use firebase_push_receiver::web::{WebReceiver, memory::InMemoryWebHost};
//! # async fn run(config: FirebaseWebConfig, message: RemoteMessage) {
//! let host = Arc::new(InMemoryWebHost::default());
//! let receiver = WebReceiver::new(config, host.clone(), host.clone()).unwrap();
//!
//! let _ = receiver.on_background_message(&message).await;
//! # }
//! ```

pub mod memory;
pub mod models;

use crate::config::{ConfigError, FirebaseWebConfig};
use crate::messaging::models::RemoteMessage;
use crate::messaging::normalize;
use crate::web::models::{ClickOutcome, WebNotificationOptions, WindowClient, DEFAULT_ROOT_PATH};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;


#[derive(Error, Debug)]
pub enum WebError {
    /// A browser API call was rejected.
    #[error("Host error: {0}")]
    Host(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// The service worker registration used to display notifications.
#[async_trait]
pub trait ServiceWorkerRegistration: Send + Sync {
    async fn show_notification(
        &self,
        title: &str,
        options: WebNotificationOptions,
    ) -> Result<(), WebError>;
}

/// The windows controlled by the service worker.
#[async_trait]
pub trait Clients: Send + Sync {
    /// Every open window-type client, in the browser's order.
    async fn match_all_windows(&self) -> Result<Vec<WindowClient>, WebError>;

    async fn focus(&self, id: &str) -> Result<(), WebError>;

    async fn open_window(&self, url: &str) -> Result<(), WebError>;
}

/// The notification a click event refers to.
pub trait ClickedNotification: Send + Sync {
    fn close(&self);
}

#[async_trait]
impl<T: ServiceWorkerRegistration + ?Sized> ServiceWorkerRegistration for Arc<T> {
    async fn show_notification(
        &self,
        title: &str,
        options: WebNotificationOptions,
    ) -> Result<(), WebError> {
        (**self).show_notification(title, options).await
    }
}

#[async_trait]
impl<T: Clients + ?Sized> Clients for Arc<T> {
    async fn match_all_windows(&self) -> Result<Vec<WindowClient>, WebError> {
        (**self).match_all_windows().await
    }

    async fn focus(&self, id: &str) -> Result<(), WebError> {
        (**self).focus(id).await
    }

    async fn open_window(&self, url: &str) -> Result<(), WebError> {
        (**self).open_window(url).await
    }
}

/// Handles background messages and notification clicks for web clients.
pub struct WebReceiver<R, C> {
    config: FirebaseWebConfig,
    registration: R,
    clients: C,
    root_path: String,
}

impl<R, C> WebReceiver<R, C>
where
    R: ServiceWorkerRegistration,
    C: Clients,
{
    /// Creates a receiver. Fails if any of the six Firebase values is empty.
    pub fn new(config: FirebaseWebConfig, registration: R, clients: C) -> Result<Self, WebError> {
        config.validate()?;
        tracing::debug!(target: "fcm::web", project_id = %config.project_id, "Web receiver initialized");

        Ok(Self {
            config,
            registration,
            clients,
            root_path: DEFAULT_ROOT_PATH.to_string(),
        })
    }

    /// Routes notification clicks to `root_path` instead of `/`.
    pub fn with_root_path(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    pub fn config(&self) -> &FirebaseWebConfig {
        &self.config
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Renders a message received while no page is focused.
    pub async fn on_background_message(&self, message: &RemoteMessage) -> Result<(), WebError> {
        tracing::info!(
            target: "fcm::web",
            message_id = ?message.message_id,
            has_notification = message.has_notification(),
            "Received background message"
        );

        let content = normalize(message);
        let options = WebNotificationOptions::from(&content);

        self.registration
            .show_notification(&content.title, options)
            .await
    }

    /// Handles a click on a displayed notification.
    ///
    /// The notification is closed first, whatever happens next. Then the first
    /// window whose URL equals the root path is focused; if there is none, one
    /// new window is opened at the root path. The host must keep the click
    /// event alive until the returned future completes.
    pub async fn on_notification_click(
        &self,
        notification: &dyn ClickedNotification,
    ) -> Result<ClickOutcome, WebError> {
        tracing::info!(target: "fcm::web", "Notification click received");

        notification.close();

        let windows = self.clients.match_all_windows().await?;

        if let Some(window) = windows.iter().find(|w| w.url == self.root_path) {
            self.clients.focus(&window.id).await.inspect_err(|e| {
                tracing::warn!(target: "fcm::web", client = %window.id, error = %e, "Focus failed");
            })?;
            return Ok(ClickOutcome::Focused(window.id.clone()));
        }

        tracing::debug!(target: "fcm::web", open = windows.len(), "No window at root path, opening one");
        self.clients.open_window(&self.root_path).await.inspect_err(|e| {
            tracing::warn!(target: "fcm::web", url = %self.root_path, error = %e, "Open window failed");
        })?;

        Ok(ClickOutcome::Opened(self.root_path.clone()))
    }
}
