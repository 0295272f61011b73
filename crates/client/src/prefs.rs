//! Persisted user preferences.
//!
//! The only preference today is the UI language. Persistence is best-effort
//! by contract: a missing or unreadable store degrades to the default value
//! and writes become silent no-ops, matching environments where no durable
//! storage exists at all.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use fruitdex_core::Language;

/// Storage key for the selected UI language.
pub const LANGUAGE_KEY: &str = "fruitdex.lang";

/// Key-value preference storage.
///
/// Implementations must never fail loudly: `load` answers `None` for
/// anything it cannot read and `store` swallows write errors.
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
}

/// File-backed preferences, one file per key inside a directory.
pub struct FilePreferences {
    dir: PathBuf,
}

impl FilePreferences {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Some(value.trim().to_string()),
            Err(err) => {
                debug!(key, %err, "preference not readable");
                None
            }
        }
    }

    fn store(&self, key: &str, value: &str) {
        let result = fs::create_dir_all(&self.dir).and_then(|()| fs::write(self.path(key), value));
        if let Err(err) = result {
            debug!(key, %err, "preference not persisted");
        }
    }
}

/// Store for contexts without durable storage; reads nothing, writes nowhere.
pub struct NoopPreferences;

impl PreferenceStore for NoopPreferences {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn store(&self, _key: &str, _value: &str) {}
}

/// Build the store for an optional preferences directory.
#[must_use]
pub fn store_for(dir: Option<&Path>) -> Box<dyn PreferenceStore> {
    match dir {
        Some(dir) => Box::new(FilePreferences::new(dir)),
        None => Box::new(NoopPreferences),
    }
}

/// Read the persisted language, falling back to the default for missing or
/// unknown codes.
#[must_use]
pub fn load_language(store: &dyn PreferenceStore) -> Language {
    store
        .load(LANGUAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persist the language choice. Called on every explicit change.
pub fn store_language(store: &dyn PreferenceStore, lang: Language) {
    store.store(LANGUAGE_KEY, lang.code());
}
