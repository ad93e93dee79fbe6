//! CATDESK Server — application entry point.

use std::env;
use std::path::PathBuf;

use catdesk_auth::{AuthConfig, SessionManager, SettingsStore};
use catdesk_db::{DbConfig, select_store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("catdesk=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting CATDESK...");

    let data_dir = env::var("CATDESK_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    let settings = SettingsStore::open(&data_dir);

    let store = select_store(&DbConfig::from_env()).await;
    if store.is_fallback() {
        tracing::warn!("running against the demo user table; changes will not persist");
    }

    let _sessions = SessionManager::new(store, settings, AuthConfig::default());
    tracing::info!("CATDESK core ready");

    // TODO: serve the desk UI once the HTTP surface lands

    tracing::info!("CATDESK stopped.");
}
