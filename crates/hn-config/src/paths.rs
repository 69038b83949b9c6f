//! Configuration and data directory paths
//!
//! Uses XDG directories via the `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/hn-stories/`, `~/.cache/hn-stories/`
//! - macOS: `~/Library/Application Support/hn-stories/`, `~/Library/Caches/hn-stories/`
//! - Windows: `%APPDATA%\hn-stories\`, `%LOCALAPPDATA%\hn-stories\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "hn-stories";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get path to the persisted settings file
pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("settings.toml"))
}
