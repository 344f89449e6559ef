//! # Configuration
//!
//! Where the MyFlix API lives.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Origin of the hosted MyFlix API.
pub const DEFAULT_API_URL: &str = "https://myflix-d2kt.onrender.com/";

/// Environment variable that overrides the API URL.
pub const API_URL_ENV: &str = "MYFLIX_API_URL";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configured API URL is not usable as a base URL.
    #[error("invalid API url '{url}': {reason}")]
    InvalidUrl {
        /// The offending value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the MyFlix API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl Config {
    /// Returns the MyFlix config directory.
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("myflix"))
    }

    /// Loads the configuration.
    ///
    /// `MYFLIX_API_URL` wins over `<config dir>/myflix/config.json`, which
    /// wins over the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config = match Self::config_dir() {
            Some(dir) => Self::load_from(&dir.join("config.json")),
            None => {
                tracing::warn!("Could not determine config directory");
                Self::default()
            }
        };

        config.with_env_override(std::env::var(API_URL_ENV).ok())
    }

    /// Loads configuration from `path`, or returns the default if it is
    /// missing or unreadable.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Replaces the API URL with `value` when it is set and non-blank.
    #[must_use]
    pub fn with_env_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!(%url, "API url overridden from environment");
            self.api_url = url.trim().to_string();
        }
        self
    }

    /// Parses the API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the value does not parse or
    /// cannot carry a path (e.g. `mailto:`).
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: self.api_url.clone(),
                reason: "not a base url".to_string(),
            });
        }

        Ok(url)
    }
}
