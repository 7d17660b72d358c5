//! Application configuration.
//!
//! Configuration is stored in `<root>/config.yaml` (see [`crate::paths`]) and
//! includes the ticket endpoint and HTTP timeouts.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BoardError, Result};
use crate::paths;

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "TICKETBOARD_ENDPOINT";

/// Keys accepted by `config get` / `config set`
pub const VALID_CONFIG_KEYS: &[&str] = &["endpoint", "timeout", "connect_timeout"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL of the `{tickets, users}` JSON endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Total request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Connect timeout in seconds (default: 10)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get the endpoint from the environment variable or config file
    pub fn endpoint(&self) -> Option<String> {
        if let Ok(endpoint) = env::var(ENDPOINT_ENV)
            && !endpoint.is_empty()
        {
            return Some(endpoint);
        }

        self.endpoint.clone()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn connect_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Read a config value by key
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "endpoint" => Ok(self.endpoint()),
            "timeout" => Ok(Some(self.timeout.to_string())),
            "connect_timeout" => Ok(Some(self.connect_timeout.to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Validate and set a config value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" => {
                self.endpoint = Some(validate_endpoint(value)?);
            }
            "timeout" => {
                self.timeout = parse_seconds(key, value)?;
            }
            "connect_timeout" => {
                self.connect_timeout = parse_seconds(key, value)?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> BoardError {
    BoardError::Config(format!(
        "unknown config key '{}', expected one of: {}",
        key,
        VALID_CONFIG_KEYS.join(", ")
    ))
}

/// Accept only absolute http(s) URLs
pub fn validate_endpoint(value: &str) -> Result<String> {
    let url = Url::parse(value)
        .map_err(|e| BoardError::Config(format!("invalid endpoint '{value}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        scheme => Err(BoardError::Config(format!(
            "invalid endpoint '{value}': unsupported scheme '{scheme}'"
        ))),
    }
}

fn parse_seconds(key: &str, value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(0) | Err(_) => Err(BoardError::Config(format!(
            "invalid value '{value}' for {key}. Expected a positive number of seconds"
        ))),
        Ok(secs) => Ok(secs),
    }
}
