use crate::config::{ConfigError, FirebaseWebConfig};
use regex::{NoExpand, Regex};
use std::path::Path;
use std::sync::LazyLock;

static CONFIG_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)const firebaseConfig = \{.*?\};").expect("firebaseConfig block pattern is valid")
});

/// Replaces the first `const firebaseConfig = {...};` block in a service
/// worker source with `config`.
pub fn replace_service_worker_config(
    source: &str,
    config: &FirebaseWebConfig,
) -> Result<String, ConfigError> {
    if !CONFIG_BLOCK.is_match(source) {
        return Err(ConfigError::BlockNotFound);
    }

    let block = config.to_service_worker_block();
    Ok(CONFIG_BLOCK
        .replacen(source, 1, NoExpand(&block))
        .into_owned())
}

/// Copies the web app values from `options_path` (a `firebase_options.dart`)
/// into the service worker at `worker_path`, rewriting it in place.
///
/// Returns the configuration that was written.
pub async fn sync_service_worker(
    options_path: impl AsRef<Path>,
    worker_path: impl AsRef<Path>,
) -> Result<FirebaseWebConfig, ConfigError> {
    let options_path = options_path.as_ref();
    let worker_path = worker_path.as_ref();

    let options = read(options_path).await?;
    let config = FirebaseWebConfig::from_dart_options(&options)?;
    tracing::debug!(target: "fcm::config", path = %options_path.display(), project_id = %config.project_id, "Firebase options loaded");

    let worker = read(worker_path).await?;
    let updated = replace_service_worker_config(&worker, &config)?;

    tokio::fs::write(worker_path, updated)
        .await
        .map_err(|source| ConfigError::Io {
            path: worker_path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        target: "fcm::config",
        path = %worker_path.display(),
        project_id = %config.project_id,
        app_id = %config.app_id,
        "Service worker updated"
    );

    Ok(config)
}

async fn read(path: &Path) -> Result<String, ConfigError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
}
