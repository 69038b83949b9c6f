//! Application configuration
//!
//! Configuration loaded from `config.toml` in the app config directory.
//! Every field carries a serde default so a partial or absent file still
//! yields a usable configuration.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the search API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds; a timed-out request counts as a
    /// failed fetch
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Search term used when no term has ever been persisted
    #[serde(default = "default_search_term")]
    pub default_search_term: String,
}

fn default_api_base_url() -> String {
    "https://hn.algolia.com/api/v1".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_search_term() -> String {
    "React".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            default_search_term: default_search_term(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or use defaults
    pub fn load() -> Self {
        let path = match crate::paths::app_config_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Could not resolve config path: {}", e);
                return Self::default();
            }
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("No config file at {:?}, using defaults", path);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "https://hn.algolia.com/api/v1");
        assert_eq!(config.fetch_timeout_secs, 10);
        assert_eq!(config.default_search_term, "React");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str("fetch_timeout_secs = 3").unwrap();
        assert_eq!(config.fetch_timeout_secs, 3);
        assert_eq!(config.api_base_url, "https://hn.algolia.com/api/v1");
        assert_eq!(config.default_search_term, "React");
    }

    #[test]
    fn test_full_file_round_trip() {
        let config = AppConfig {
            api_base_url: "http://localhost:9200".to_string(),
            fetch_timeout_secs: 1,
            default_search_term: "rust".to_string(),
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.api_base_url, "http://localhost:9200");
        assert_eq!(parsed.default_search_term, "rust");
    }
}
