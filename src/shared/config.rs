//! Application Configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that overrides `[feed] api_key`
pub const API_KEY_ENV: &str = "APOD_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Configuration loaded from config.toml
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote feed settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FeedConfig {
    /// API key appended to every request
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Endpoint that takes `?api_key=..&date=..`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Where history, favorites and the log file live
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Overrides the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// Find config.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: <config dir>/apodview, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("apodview").join("config.toml")),
            Some(PathBuf::from("apodview.toml")),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration from the standard locations, defaults if none exists.
    /// A file that exists but does not parse is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        self.apply_api_key(std::env::var(API_KEY_ENV).ok());
    }

    fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.feed.api_key = key.trim().to_string();
        }
    }

    /// Resolved data directory
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("apodview"))
                .unwrap_or_else(|| PathBuf::from(".apodview"))
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("apodview.log")
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
