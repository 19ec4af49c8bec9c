use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::settings::{Secrets, Settings};

const SETTINGS_FILE: &str = "settings.json";
const SECRETS_FILE: &str = "secrets.json";

/// Holds the loaded settings and secrets together with the directory they
/// persist to. Passed by reference to whatever needs it; there is no
/// process-wide store.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
    pub settings: Settings,
    pub secrets: Secrets,
    first_run: bool,
    secrets_missing: bool,
}

impl Store {
    /// Platform config directory for the application.
    pub fn default_dir() -> Result<PathBuf, StoreError> {
        Ok(dirs::config_dir()
            .ok_or(StoreError::NoConfigDir)?
            .join("brisa"))
    }

    /// Load both documents from `dir`.
    ///
    /// A missing settings file means a first run: defaults are used and
    /// written back immediately. A missing secrets file is tolerated and
    /// reported through [`Store::secrets_missing`] so the caller can run
    /// the setup flow. Malformed files are hard errors.
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();

        let (settings, first_run) = match read_json::<Settings>(&dir.join(SETTINGS_FILE))? {
            Some(settings) => (settings, false),
            None => {
                tracing::info!("no settings file found, starting with defaults");
                (Settings::default(), true)
            }
        };

        let (secrets, secrets_missing) = match read_json::<Secrets>(&dir.join(SECRETS_FILE))? {
            Some(secrets) => (secrets, false),
            None => (Secrets::default(), true),
        };

        let store = Self {
            dir,
            settings,
            secrets,
            first_run,
            secrets_missing,
        };

        if first_run {
            store.save_settings()?;
        }

        Ok(store)
    }

    /// Whether the settings file was absent when loading.
    pub fn first_run(&self) -> bool {
        self.first_run
    }

    /// Whether the secrets file was absent when loading.
    pub fn secrets_missing(&self) -> bool {
        self.secrets_missing
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the settings document wholesale.
    pub fn save_settings(&self) -> Result<(), StoreError> {
        write_json(&self.dir, &self.dir.join(SETTINGS_FILE), &self.settings)
    }

    /// Write the secrets document wholesale.
    pub fn save_secrets(&self) -> Result<(), StoreError> {
        write_json(&self.dir, &self.dir.join(SECRETS_FILE), &self.secrets)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: err,
            })
        }
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|err| StoreError::Malformed {
            path: path.to_path_buf(),
            source: err,
        })
}

fn write_json<T: serde::Serialize>(dir: &Path, path: &Path, value: &T) -> Result<(), StoreError> {
    fs::create_dir_all(dir).map_err(|err| StoreError::Write {
        path: dir.to_path_buf(),
        source: err,
    })?;

    let json = serde_json::to_string_pretty(value).map_err(|err| StoreError::Malformed {
        path: path.to_path_buf(),
        source: err,
    })?;

    fs::write(path, json).map_err(|err| StoreError::Write {
        path: path.to_path_buf(),
        source: err,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::settings::{DistanceUnit, StoredLocation, TemperatureUnit};

    #[test]
    fn missing_files_mean_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::load(dir.path().join("brisa")).unwrap();

        assert!(store.first_run());
        assert!(store.secrets_missing());
        assert_eq!(store.settings, Settings::default());
        // First run writes the defaults back out.
        assert!(dir.path().join("brisa").join(SETTINGS_FILE).exists());
    }

    #[test]
    fn settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::load(dir.path()).unwrap();

        store.settings.language = "es".to_string();
        store.settings.temperature = TemperatureUnit::Fahrenheit;
        store.settings.distance = DistanceUnit::Mi;
        store.settings.show_quota = true;
        store.settings.locations.push(StoredLocation {
            name: "London, City of London, Greater London, United Kingdom".to_string(),
            ident: 2801268,
        });
        store.save_settings().unwrap();

        let reloaded = Store::load(dir.path()).unwrap();
        assert!(!reloaded.first_run());
        assert_eq!(reloaded.settings, store.settings);
    }

    #[test]
    fn secrets_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::load(dir.path()).unwrap();

        store.secrets.weatherapi = "abcdef123456".to_string();
        store.save_secrets().unwrap();

        let reloaded = Store::load(dir.path()).unwrap();
        assert!(!reloaded.secrets_missing());
        assert_eq!(reloaded.secrets, store.secrets);
    }

    #[test]
    fn malformed_settings_are_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{not json").unwrap();

        match Store::load(dir.path()) {
            Err(StoreError::Malformed { .. }) => {}
            other => panic!("expected malformed error, got {other:?}"),
        }
    }
}
