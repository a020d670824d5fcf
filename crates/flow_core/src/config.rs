use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::paths::config_json_path;

/// Default endpoint of the hosted text-generation API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Upper bound on a single completion call when nothing else is configured.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

const CONFIG_FILE_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load `~/.agileflow/config.json`, falling back to `./config.toml`, then apply
    /// environment overrides (`API_KEY`, `API_BASE`, `REQUEST_TIMEOUT_SECS`).
    pub fn new() -> Self {
        let mut config = Self::load_from(&config_json_path(), Path::new(CONFIG_FILE_PATH));
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Read the first of `json_path` / `toml_path` that exists and parses.
    ///
    /// Unreadable or malformed files are logged and skipped.
    pub fn load_from(json_path: &Path, toml_path: &Path) -> Self {
        if json_path.exists() {
            match std::fs::read_to_string(json_path) {
                Ok(content) => match serde_json::from_str::<Config>(&content) {
                    Ok(config) => {
                        log::debug!("Loaded config from {}", json_path.display());
                        return config;
                    }
                    Err(e) => log::warn!("Failed to parse {}: {}", json_path.display(), e),
                },
                Err(e) => log::warn!("Failed to read {}: {}", json_path.display(), e),
            }
        }

        if toml_path.exists() {
            match std::fs::read_to_string(toml_path) {
                Ok(content) => match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        log::debug!("Loaded config from {}", toml_path.display());
                        return config;
                    }
                    Err(e) => log::warn!("Failed to parse {}: {}", toml_path.display(), e),
                },
                Err(e) => log::warn!("Failed to read {}: {}", toml_path.display(), e),
            }
        }

        Self::default()
    }

    /// Override fields from `lookup`, which maps an environment variable name to its
    /// value. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_key) = get("API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Some(api_base) = get("API_BASE") {
            self.api_base = Some(api_base);
        }
        if let Some(timeout) = get("REQUEST_TIMEOUT_SECS") {
            match timeout.trim().parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = Some(secs),
                Err(e) => log::warn!("Ignoring REQUEST_TIMEOUT_SECS={:?}: {}", timeout, e),
            }
        }
    }

    pub fn api_base(&self) -> &str {
        self.api_base
            .as_deref()
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}
