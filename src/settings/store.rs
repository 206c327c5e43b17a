//! Preference file persistence

use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::Durations;

/// Default preference file, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "pomodoro_settings_data.json";

/// Reads and writes the persisted durations
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the preference file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored durations. A missing or malformed file yields the defaults.
    pub fn load(&self) -> Durations {
        match self.try_load() {
            Ok(Some(durations)) => {
                debug!("Loaded durations {:?} from {}", durations, self.path.display());
                durations
            }
            Ok(None) => {
                debug!(
                    "No settings file at {}, using defaults",
                    self.path.display()
                );
                Durations::default()
            }
            Err(e) => {
                warn!("Ignoring unreadable settings file: {:#}", e);
                Durations::default()
            }
        }
    }

    /// Read the stored durations, distinguishing a missing file from a broken one
    pub fn try_load(&self) -> Result<Option<Durations>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read settings file: {}", self.path.display())
                })
            }
        };

        let durations = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", self.path.display()))?;
        Ok(Some(durations))
    }

    /// Overwrite the file with `[work, short, long]`.
    ///
    /// The content goes to a temp file that is renamed over the old one, so an
    /// interrupted save leaves the previous durations intact.
    pub fn save(&self, durations: &Durations) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string(durations).context("Failed to serialize durations")?;

        let temp_path = self.temp_path();
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
        temp_file
            .write_all(content.as_bytes())
            .context("Failed to write settings content")?;
        temp_file
            .sync_all()
            .context("Failed to sync settings file")?;

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to write settings file: {}", self.path.display()))?;

        info!("Saved durations {:?} to {}", durations, self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_keeps_triple() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("prefs.json"));
        let durations = Durations::new(25, 5, 15).unwrap();

        store.save(&durations).unwrap();
        assert_eq!(store.try_load().unwrap(), Some(durations));
        assert_eq!(store.load(), durations);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("absent.json"));
        assert_eq!(store.try_load().unwrap(), None);
        assert_eq!(store.load(), Durations::default());
    }

    #[test]
    fn malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = SettingsStore::new(&path);

        for garbage in ["not json", "[25, 5]", "[25, 5, \"15\"]", "[0, 5, 15]", "[-1, 5, 15]"] {
            std::fs::write(&path, garbage).unwrap();
            assert!(store.try_load().is_err(), "{} should fail", garbage);
            assert_eq!(store.load(), Durations::default());
        }
    }

    #[test]
    fn save_overwrites_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let store = SettingsStore::new(&path);

        store.save(&Durations::new(50, 10, 30).unwrap()).unwrap();
        store.save(&Durations::new(30, 6, 20).unwrap()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[30,6,20]");
    }

    #[test]
    fn save_replaces_file_through_temp_copy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = SettingsStore::new(&path);

        // leftover from a save that died before its rename
        std::fs::write(store.temp_path(), "[25,").unwrap();
        store.save(&Durations::new(35, 7, 21).unwrap()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[35,7,21]");
        assert!(!store.temp_path().exists());
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
