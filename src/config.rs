//! Application configuration.

use crate::consts::cli_consts::requests::{API_URL_ENV, DEFAULT_API_URL, timeout};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};

/// Persisted settings, stored as JSON in the user's home directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Create Config with the given backend URL.
    pub fn new(api_url: String) -> Self {
        Config { api_url }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Remove the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Path of the configuration file: `~/.tokenomics/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Failed to determine home directory",
        )
    })?;
    Ok(home_path.join(".tokenomics").join("config.json"))
}

/// Connection settings handed to the API client at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: timeout(),
        }
    }
}

impl ApiConfig {
    /// Resolve the backend URL once at startup.
    ///
    /// Precedence: explicit flag, then the `API_SERVICE_URL` environment
    /// variable, then the config file, then the built-in default.
    pub fn resolve(flag: Option<String>, config_path: &Path) -> Self {
        let from_env = std::env::var(API_URL_ENV).ok();
        let from_file = if config_path.exists() {
            Config::load_from_file(config_path).ok().map(|c| c.api_url)
        } else {
            None
        };
        Self::from_sources(flag, from_env, from_file)
    }

    fn from_sources(
        flag: Option<String>,
        env: Option<String>,
        file: Option<String>,
    ) -> Self {
        let base_url = [flag, env, file]
            .into_iter()
            .flatten()
            .map(|url| url.trim().to_string())
            .find(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
