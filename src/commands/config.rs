//! Configuration commands (`ticketboard config`)
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Validate and store one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{Config, ENDPOINT_ENV};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let endpoint = config.endpoint();
    let endpoint_from_env = std::env::var(ENDPOINT_ENV).is_ok_and(|v| !v.is_empty());

    let json_output = json!({
        "endpoint": endpoint,
        "endpoint_from_env": endpoint_from_env,
        "timeout": config.timeout,
        "connect_timeout": config.connect_timeout,
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text = String::new();
    text.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    match &endpoint {
        Some(url) => {
            let origin = if endpoint_from_env {
                format!(" (from {ENDPOINT_ENV})").dimmed().to_string()
            } else {
                String::new()
            };
            text.push_str(&format!("{}: {url}{origin}\n", "endpoint".cyan()));
        }
        None => text.push_str(&format!(
            "{}: {}\n",
            "endpoint".cyan(),
            "not configured".dimmed()
        )),
    }
    text.push_str(&format!("{}: {}s\n", "timeout".cyan(), config.timeout));
    text.push_str(&format!(
        "{}: {}s\n",
        "connect_timeout".cyan(),
        config.connect_timeout
    ));

    text.push('\n');
    text.push_str(
        &format!("Config file: {}", Config::config_path().display())
            .dimmed()
            .to_string(),
    );

    CommandOutput::new(json_output).with_text(text).print(json)
}

/// Get a configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    let text = match &value {
        Some(v) => v.clone(),
        None => "not set".dimmed().to_string(),
    };

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(text)
    .print(json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    // The file value, not the environment override
    let stored = match key {
        "endpoint" => config.endpoint.clone().unwrap_or_default(),
        _ => config.get(key)?.unwrap_or_default(),
    };

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.cyan(), stored))
    .print(json)
}
