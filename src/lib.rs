//! Client-side receivers for Firebase Cloud Messaging.
//!
//! Push payloads are normalized once ([`messaging::normalize`]) and rendered by
//! two thin adapters: [`android::NativeReceiver`] for the app process and
//! [`web::WebReceiver`] for the background service worker. Hosts plug in
//! through traits; nothing here keeps global state.

pub mod core;
pub mod messaging;

#[cfg(feature = "native")]
pub mod android;
#[cfg(feature = "config")]
pub mod config;
#[cfg(feature = "web")]
pub mod web;

#[cfg(feature = "native")]
use android::{NativeReceiver, NotificationManager, TokenSink};
#[cfg(feature = "config")]
use config::FirebaseWebConfig;
#[cfg(feature = "web")]
use web::{Clients, ServiceWorkerRegistration, WebError, WebReceiver};

/// Entry point holding the app's Firebase configuration.
#[cfg(feature = "config")]
pub struct FirebaseApp {
    config: FirebaseWebConfig,
}

#[cfg(feature = "config")]
impl FirebaseApp {
    pub fn new(config: FirebaseWebConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FirebaseWebConfig {
        &self.config
    }

    #[cfg(feature = "native")]
    pub fn native<M, S>(&self, manager: M, tokens: S) -> NativeReceiver<M, S>
    where
        M: NotificationManager,
        S: TokenSink,
    {
        NativeReceiver::new(manager, tokens)
    }

    #[cfg(feature = "web")]
    pub fn web<R, C>(&self, registration: R, clients: C) -> Result<WebReceiver<R, C>, WebError>
    where
        R: ServiceWorkerRegistration,
        C: Clients,
    {
        WebReceiver::new(self.config.clone(), registration, clients)
    }
}
