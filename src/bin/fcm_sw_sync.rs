use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use firebase_push_receiver::config::sync_service_worker;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Copies the Firebase web app values from firebase_options.dart into the
/// messaging service worker.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Generated Flutter Firebase options file.
    #[arg(long, default_value = "lib/core/firebase/firebase_options.dart")]
    options: PathBuf,

    /// Service worker source to rewrite.
    #[arg(long, default_value = "web/firebase-messaging-sw.js")]
    worker: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {e}");
    }

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Service worker update failed: {:#}", e);
            tracing::info!(
                worker = %cli.worker.display(),
                "Update the firebaseConfig block manually with the values from Firebase Console > Project Settings > Your apps > Web app"
            );
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = sync_service_worker(&cli.options, &cli.worker).await?;

    tracing::info!(project_id = %config.project_id, app_id = %config.app_id, "Firebase configuration applied");
    Ok(())
}
