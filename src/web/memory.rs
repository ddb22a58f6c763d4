//! In-process implementations of the web host traits.

use crate::web::models::{WebNotificationOptions, WindowClient};
use crate::web::{ClickedNotification, Clients, ServiceWorkerRegistration, WebError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// A notification as shown by [`InMemoryWebHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownNotification {
    pub title: String,
    pub options: WebNotificationOptions,
}

#[derive(Debug, Default)]
struct State {
    shown: Vec<ShownNotification>,
    windows: Vec<WindowClient>,
    focused: Option<String>,
    opened: Vec<String>,
}

/// Registration and client list kept in memory.
///
/// Showing a notification with a tag already displayed replaces it, and
/// opening a window adds a client at that URL.
#[derive(Debug, Default)]
pub struct InMemoryWebHost {
    state: Mutex<State>,
    next_id: AtomicUsize,
}

impl InMemoryWebHost {
    pub fn with_windows<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let host = Self::default();
        for url in urls {
            host.add_window(url);
        }
        host
    }

    /// Adds an open window and returns its client id.
    pub fn add_window(&self, url: impl Into<String>) -> String {
        let id = format!("client-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.lock().windows.push(WindowClient {
            id: id.clone(),
            url: url.into(),
        });
        id
    }

    pub fn shown(&self) -> Vec<ShownNotification> {
        self.lock().shown.clone()
    }

    pub fn windows(&self) -> Vec<WindowClient> {
        self.lock().windows.clone()
    }

    pub fn focused(&self) -> Option<String> {
        self.lock().focused.clone()
    }

    /// URLs passed to `open_window`, in call order.
    pub fn opened(&self) -> Vec<String> {
        self.lock().opened.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ServiceWorkerRegistration for InMemoryWebHost {
    async fn show_notification(
        &self,
        title: &str,
        options: WebNotificationOptions,
    ) -> Result<(), WebError> {
        let mut state = self.lock();
        state.shown.retain(|n| n.options.tag != options.tag);
        state.shown.push(ShownNotification {
            title: title.to_string(),
            options,
        });
        Ok(())
    }
}

#[async_trait]
impl Clients for InMemoryWebHost {
    async fn match_all_windows(&self) -> Result<Vec<WindowClient>, WebError> {
        Ok(self.windows())
    }

    async fn focus(&self, id: &str) -> Result<(), WebError> {
        let mut state = self.lock();
        if !state.windows.iter().any(|w| w.id == id) {
            return Err(WebError::Host(format!("No client with id {}", id)));
        }
        state.focused = Some(id.to_string());
        Ok(())
    }

    async fn open_window(&self, url: &str) -> Result<(), WebError> {
        let id = self.add_window(url);
        let mut state = self.lock();
        state.opened.push(url.to_string());
        state.focused = Some(id);
        Ok(())
    }
}

/// A clicked notification that records whether it was closed.
#[derive(Debug, Default)]
pub struct InMemoryNotification {
    closed: AtomicBool,
}

impl InMemoryNotification {
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl ClickedNotification for InMemoryNotification {
    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
