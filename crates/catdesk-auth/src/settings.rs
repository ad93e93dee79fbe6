//! Persisted system settings.
//!
//! Settings live as JSON in a single file under a fixed name in the
//! data directory: read once at open, written on every update. There
//! is no versioning or migration; an unreadable or unparsable file
//! yields defaults and is rewritten on the next update.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use catdesk_core::models::settings::SystemSettings;
use tracing::warn;

/// Fixed file name the settings persist under.
pub const SETTINGS_FILE: &str = "catdesk.settings.json";

#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: SystemSettings,
}

impl SettingsStore {
    /// Open the store rooted at `data_dir`, reading the settings file
    /// if present.
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        let settings = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "settings file unparsable, using defaults"
                    );
                    SystemSettings::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => SystemSettings::default(),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "settings file unreadable, using defaults"
                );
                SystemSettings::default()
            }
        };
        Self { path, settings }
    }

    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    /// Replace the settings and persist them immediately.
    pub fn update(&mut self, settings: SystemSettings) -> io::Result<()> {
        let raw = serde_json::to_string_pretty(&settings).map_err(io::Error::other)?;
        fs::write(&self.path, raw)?;
        self.settings = settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catdesk_core::models::settings::BusinessHours;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::open(dir.path());
        assert_eq!(*store.settings(), SystemSettings::default());
        assert!(store.settings().require_verification_code);
    }

    #[test]
    fn update_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let mut store = SettingsStore::open(dir.path());

        let new_settings = SystemSettings {
            require_verification_code: false,
            business_hours: BusinessHours {
                open_time: "09:30".into(),
                close_time: "19:00".into(),
                rest_days: vec!["Monday".into()],
            },
        };
        store.update(new_settings.clone()).unwrap();

        let reopened = SettingsStore::open(dir.path());
        assert_eq!(*reopened.settings(), new_settings);
    }

    #[test]
    fn unparsable_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{not json").unwrap();

        let store = SettingsStore::open(dir.path());
        assert_eq!(*store.settings(), SystemSettings::default());
    }

    #[test]
    fn update_overwrites_a_corrupt_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "garbage").unwrap();

        let mut store = SettingsStore::open(dir.path());
        let mut settings = store.settings().clone();
        settings.require_verification_code = false;
        store.update(settings).unwrap();

        let reopened = SettingsStore::open(dir.path());
        assert!(!reopened.settings().require_verification_code);
    }
}
