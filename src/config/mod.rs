//! Firebase web app configuration.
//!
//! Holds the six values a web client needs to initialize Firebase, and keeps
//! the messaging service worker's embedded copy of them in sync with the
//! app's generated `firebase_options.dart`.

pub mod sync;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub use sync::{replace_service_worker_config, sync_service_worker};

/// One `key: 'value'` pattern per entry of [`FirebaseWebConfig::KEYS`], in order.
static VALUE_PATTERNS: LazyLock<[(&'static str, Regex); 6]> = LazyLock::new(|| {
    FirebaseWebConfig::KEYS.map(|key| {
        let pattern = format!(r#"{}:\s*['"]([^'"]+)['"]"#, regex::escape(key));
        (key, Regex::new(&pattern).expect("config value pattern is valid"))
    })
});

/// Errors that can occur while loading or syncing the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required value is absent or empty.
    #[error("missing Firebase configuration value: {0}")]
    MissingValue(&'static str),
    /// The service worker has no `const firebaseConfig = {...};` block.
    #[error("no firebaseConfig block found in service worker source")]
    BlockNotFound,
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Firebase web app settings, as shown under Project Settings > Your apps.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseWebConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl FirebaseWebConfig {
    /// Field names in the order they appear in generated config files.
    pub const KEYS: [&'static str; 6] = [
        "apiKey",
        "authDomain",
        "projectId",
        "storageBucket",
        "messagingSenderId",
        "appId",
    ];

    fn values(&self) -> [&str; 6] {
        [
            self.api_key.as_str(),
            self.auth_domain.as_str(),
            self.project_id.as_str(),
            self.storage_bucket.as_str(),
            self.messaging_sender_id.as_str(),
            self.app_id.as_str(),
        ]
    }

    /// Checks that every value is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match Self::KEYS
            .iter()
            .zip(self.values())
            .find(|(_, value)| value.is_empty())
        {
            Some((key, _)) => Err(ConfigError::MissingValue(*key)),
            None => Ok(()),
        }
    }

    /// Extracts the web app values from a `firebase_options.dart` source.
    ///
    /// Each value is the first `key: 'value'` (or double-quoted) occurrence in
    /// the file.
    pub fn from_dart_options(source: &str) -> Result<Self, ConfigError> {
        let extract = |index: usize| -> Result<String, ConfigError> {
            let (key, re) = &VALUE_PATTERNS[index];
            re.captures(source)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .ok_or(ConfigError::MissingValue(*key))
        };

        Ok(Self {
            api_key: extract(0)?,
            auth_domain: extract(1)?,
            project_id: extract(2)?,
            storage_bucket: extract(3)?,
            messaging_sender_id: extract(4)?,
            app_id: extract(5)?,
        })
    }

    /// Renders the `const firebaseConfig = {...};` block embedded in the
    /// service worker.
    pub fn to_service_worker_block(&self) -> String {
        let fields = Self::KEYS
            .iter()
            .zip(self.values())
            .map(|(key, value)| format!("  {}: \"{}\"", key, value))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("const firebaseConfig = {{\n{}\n}};", fields)
    }
}
