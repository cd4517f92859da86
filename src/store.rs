//! Durable storage for the language preference.
//!
//! Exactly one value is persisted: the chosen language code, under the fixed
//! key [`PREFERENCE_KEY`]. The store outlives the process; other keys in the
//! same store belong to other components and are preserved untouched.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::language::Language;

/// The fixed key the language preference is stored under.
pub const PREFERENCE_KEY: &str = "preferredLanguage";

/// Errors a preference store write can produce.
///
/// Reads never fail from the caller's perspective: anything unreadable is
/// treated as "no stored preference".
#[derive(Debug, Error)]
pub enum StoreError {
    /// The preference file could not be read or written
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The preference file held something that is not a JSON object
    #[error("preference file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Abstract durable key-value store for the language preference.
pub trait PreferenceStore {
    /// Read the stored language, if any.
    ///
    /// Absent, unreadable, or unrecognized values all read as `None`; the
    /// caller falls back to its default language.
    fn load(&self) -> Option<Language>;

    /// Persist the language, overwriting any previous value.
    fn save(&mut self, language: Language) -> Result<(), StoreError>;
}

/// File-backed store: a small JSON object in the user's configuration
/// directory (or any explicit path).
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store backed by the given file path.
    ///
    /// The file and its parent directories are created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default preference file location, under the user config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dashboard-i18n").join("preferences.json"))
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Option<BTreeMap<String, serde_json::Value>> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(entries) => Some(entries),
            Err(e) => {
                warn!(
                    "Ignoring malformed preference file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<Language> {
        let entries = self.read_entries()?;
        let code = entries.get(PREFERENCE_KEY)?.as_str()?;
        match Language::from_code(code) {
            Ok(language) => Some(language),
            Err(e) => {
                warn!("Ignoring stored language preference: {}", e);
                None
            }
        }
    }

    fn save(&mut self, language: Language) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Preserve unrelated keys other components may keep in the same file.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(
            PREFERENCE_KEY.to_string(),
            serde_json::Value::String(language.code().to_string()),
        );
        let raw = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store for tests and headless use. Not durable.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Option<Language>,
}

impl MemoryPreferenceStore {
    /// Create an empty store (no preference yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a preference.
    pub fn with_language(language: Language) -> Self {
        Self {
            value: Some(language),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<Language> {
        self.value
    }

    fn save(&mut self, language: Language) -> Result<(), StoreError> {
        self.value = Some(language);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FilePreferenceStore {
        FilePreferenceStore::new(dir.path().join("preferences.json"))
    }

    // ==================== Memory Store Tests ====================

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryPreferenceStore::new();
        store.save(Language::English).unwrap();
        assert_eq!(store.load(), Some(Language::English));

        store.save(Language::Arabic).unwrap();
        assert_eq!(store.load(), Some(Language::Arabic));
    }

    #[test]
    fn test_memory_store_with_language() {
        let store = MemoryPreferenceStore::with_language(Language::English);
        assert_eq!(store.load(), Some(Language::English));
    }

    // ==================== File Store Tests ====================

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.save(Language::English).unwrap();
        assert_eq!(store.load(), Some(Language::English));
    }

    #[test]
    fn test_file_store_survives_new_instance() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        let mut writer = FilePreferenceStore::new(&path);
        writer.save(Language::Arabic).unwrap();

        let reader = FilePreferenceStore::new(&path);
        assert_eq!(reader.load(), Some(Language::Arabic));
    }

    #[test]
    fn test_file_store_overwrites_prior_value() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.save(Language::Arabic).unwrap();
        store.save(Language::English).unwrap();
        assert_eq!(store.load(), Some(Language::English));
    }

    #[test]
    fn test_file_store_uses_fixed_key() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(Language::English).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed[PREFERENCE_KEY], "en");
    }

    #[test]
    fn test_file_store_preserves_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let mut store = FilePreferenceStore::new(&path);
        store.save(Language::Arabic).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["theme"], "dark");
        assert_eq!(parsed[PREFERENCE_KEY], "ar");
    }

    #[test]
    fn test_file_store_malformed_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_unknown_code_loads_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"preferredLanguage":"fr"}"#).unwrap();

        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.json");

        let mut store = FilePreferenceStore::new(&path);
        store.save(Language::English).unwrap();
        assert!(path.exists());
    }
}
