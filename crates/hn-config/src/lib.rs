//! Configuration and settings persistence for hn-stories
//!
//! Two kinds of persistent data live here:
//!
//! - [`AppConfig`]: operator-edited configuration read once at startup
//!   from `config.toml` (API base URL, fetch timeout, defaults).
//! - [`SettingsStore`]: program-written key/value settings (currently
//!   the last search term) behind a pluggable storage backend, so tests
//!   run against memory and production against a TOML file.

pub mod app_config;
pub mod paths;
pub mod settings;

pub use app_config::AppConfig;
pub use paths::{cache_dir, config_dir};
pub use settings::{FileBackend, MemoryBackend, SettingsBackend, SettingsStore};

/// Settings key under which the last search term is persisted
pub const SEARCH_TERM_KEY: &str = "search";
