//! TOML-backed preference file

use super::PreferenceStore;
use crate::core::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Preferences persisted to `preferences.toml` in the app config directory.
///
/// Every `set` rewrites the file immediately (write-through, no batching).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Get the default preferences file path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("sacred-union");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("preferences.toml"))
    }

    /// Open the store at the default location
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open (or lazily create) a store at `path`.
    ///
    /// A missing file is an empty store. A file that cannot be read or parsed is
    /// treated the same way, and values that are not strings are dropped one key at
    /// a time, so a corrupted preference never blocks startup.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            load_entries(&path)
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content =
            toml::to_string_pretty(entries).map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Read every string-valued key, warning about whatever had to be skipped
fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Ignoring unreadable preferences at {}: {}", path.display(), e);
            return BTreeMap::new();
        }
    };

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Ignoring unparsable preferences at {}: {}", path.display(), e);
            return BTreeMap::new();
        }
    };

    table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(s) => Some((key, s)),
            other => {
                log::warn!(
                    "Dropping preference '{}': expected a string, found {}",
                    key,
                    other.type_str()
                );
                None
            }
        })
        .collect()
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.persist(&entries) {
            log::warn!("Failed to persist preference '{}': {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, LocaleResolver};
    use crate::store::{LANGUAGE_KEY, THEME_KEY};
    use crate::temporal::{ThemeMode, ThemeStore};

    #[test]
    fn test_write_through_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let store = FileStore::open(&path).unwrap();
        store.set(LANGUAGE_KEY, "bn");
        store.set(THEME_KEY, "dark");
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(LANGUAGE_KEY).as_deref(), Some("bn"));
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.toml")).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "language = [not toml").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY), None);

        // The next write replaces the broken file
        store.set(LANGUAGE_KEY, "mr");
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(LANGUAGE_KEY).as_deref(), Some("mr"));
    }

    #[test]
    fn test_invalid_utf8_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, b"language = \"bn\"\n\xff\xfe\n").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY), None);

        let i18n = LocaleResolver::new(&store);
        assert_eq!(i18n.active_language(), Language::En);

        store.set(THEME_KEY, "dark");
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_foreign_values_do_not_discard_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(
            &path,
            "language = \"bn\"\ntheme = \"dark\"\nvolume = 3\n\n[window]\nwidth = 800\n",
        )
        .unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("bn"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.get("volume"), None);
        assert_eq!(store.get("window"), None);

        assert_eq!(LocaleResolver::new(&store).active_language(), Language::Bn);
        assert_eq!(ThemeStore::new(&store).mode(), ThemeMode::Dark);

        // Rewriting keeps the surviving keys
        store.set(LANGUAGE_KEY, "mr");
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(LANGUAGE_KEY).as_deref(), Some("mr"));
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_creates_parent_directory_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let store = FileStore::open(&path).unwrap();
        store.set(THEME_KEY, "light");
        assert!(path.exists());
    }
}
