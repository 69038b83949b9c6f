//! Persisted key/value settings
//!
//! The store owns an in-memory copy of all settings and writes through
//! to a backend on every change. The backend is injected so tests run
//! against [`MemoryBackend`] while production uses [`FileBackend`],
//! which serializes a versioned TOML document:
//!
//! ```toml
//! [meta]
//! last_modified = "2026-08-07T12:00:00Z"
//! version = 1
//!
//! [values]
//! search = "rust"
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const SETTINGS_VERSION: u32 = 1;

/// Settings file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SettingsMeta {
    last_modified: DateTime<Utc>,
    version: u32,
}

/// On-disk settings document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SettingsDocument {
    meta: SettingsMeta,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Storage backend for [`SettingsStore`]
pub trait SettingsBackend: Send {
    /// Read all persisted values; an absent store yields an empty map
    fn load(&self) -> Result<BTreeMap<String, String>>;

    /// Persist the full value map
    fn store(&self, values: &BTreeMap<String, String>) -> Result<()>;
}

/// In-memory backend for tests
#[derive(Default)]
pub struct MemoryBackend {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsBackend for MemoryBackend {
    fn load(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.values.lock().expect("settings mutex poisoned").clone())
    }

    fn store(&self, values: &BTreeMap<String, String>) -> Result<()> {
        *self.values.lock().expect("settings mutex poisoned") = values.clone();
        Ok(())
    }
}

/// TOML file backend for production use
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend at the default settings path in the config directory
    pub fn at_default_path() -> Result<Self> {
        Ok(Self::new(crate::paths::settings_path()?))
    }

    fn read_document(path: &Path) -> Result<SettingsDocument> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {:?}", path))
    }
}

impl SettingsBackend for FileBackend {
    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        Ok(Self::read_document(&self.path)?.values)
    }

    fn store(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let document = SettingsDocument {
            meta: SettingsMeta {
                last_modified: Utc::now(),
                version: SETTINGS_VERSION,
            },
            values: values.clone(),
        };
        let content = toml::to_string_pretty(&document)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings file: {:?}", self.path))
    }
}

/// Key/value settings with write-through persistence
pub struct SettingsStore {
    values: BTreeMap<String, String>,
    backend: Box<dyn SettingsBackend>,
}

impl SettingsStore {
    /// Create a store over the given backend, loading existing values.
    ///
    /// A backend that fails to load logs a warning and starts empty; the
    /// application then runs on defaults rather than refusing to start.
    pub fn new(backend: Box<dyn SettingsBackend>) -> Self {
        let values = match backend.load() {
            Ok(values) => values,
            Err(e) => {
                log::warn!("Failed to load settings, starting empty: {}", e);
                BTreeMap::new()
            }
        };
        Self { values, backend }
    }

    /// Get a setting, falling back to `default` when unset
    pub fn get(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Set a setting and write through to the backend
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if self.values.get(&key) == Some(&value) {
            return;
        }
        self.values.insert(key, value);
        if let Err(e) = self.backend.store(&self.values) {
            log::error!("Failed to persist settings: {}", e);
        }
    }
}
