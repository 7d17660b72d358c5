//! Command implementations behind the `ticketboard` subcommands.

mod board;
mod config;
mod grid;
mod prefs;
mod users;

pub use board::{BoardOptions, cmd_board};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use grid::{GridOptions, cmd_grid};
pub use prefs::{cmd_prefs_get, cmd_prefs_set, cmd_prefs_show};
pub use users::cmd_users;

use std::path::Path;

use owo_colors::OwoColorize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::source::source_from_config;
use crate::types::Dataset;

/// Output of a command that supports both text and `--json` output
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as pretty JSON or as text. Without text, JSON is printed either way.
    pub fn print(self, as_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !as_json => println!("{text}"),
            _ => print_json(&self.json)?,
        }
        Ok(())
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Tell the user about stored preferences that were ignored
pub(crate) fn display_preference_warnings(problems: &[BoardError]) {
    for problem in problems {
        eprintln!("{} {problem}, using the default", "Warning:".yellow());
    }
}

/// One-shot fetch for the non-interactive commands
pub(crate) async fn fetch_dataset(file: Option<&Path>) -> Result<Dataset> {
    let config = Config::load()?;
    let source = source_from_config(&config, file)?;
    tracing::debug!(source = %source.describe(), "fetching dataset");
    source.fetch().await
}
