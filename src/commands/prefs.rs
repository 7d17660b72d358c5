//! Preference commands (`ticketboard prefs`)
//!
//! - `prefs show`: Display the stored grouping and ordering
//! - `prefs get`: Print one stored value
//! - `prefs set`: Validate and store one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::error::Result;
use crate::prefs::{FilePreferenceStore, PreferenceKey, Preferences};

/// Show stored preferences, strictly: a corrupt value is an error here
pub fn cmd_prefs_show(json: bool) -> Result<()> {
    let store = FilePreferenceStore::at_default_path();
    let prefs = Preferences::load(&store)?;

    let mut text = format!("{}\n\n", "Preferences:".cyan().bold());
    for key in PreferenceKey::ALL {
        text.push_str(&format!("  {}: {}\n", key.as_str().cyan(), prefs.value_of(key)));
    }
    text.push('\n');
    text.push_str(
        &format!("Preferences file: {}", store.path().display())
            .dimmed()
            .to_string(),
    );

    CommandOutput::new(json!({
        "grouping": prefs.grouping.as_str(),
        "ordering": prefs.ordering.as_str(),
        "preferences_file": store.path().to_string_lossy(),
    }))
    .with_text(text)
    .print(json)
}

pub fn cmd_prefs_get(key: &str, json: bool) -> Result<()> {
    let key: PreferenceKey = key.parse()?;
    let store = FilePreferenceStore::at_default_path();
    let prefs = Preferences::load(&store)?;
    let value = prefs.value_of(key);

    CommandOutput::new(json!({
        "key": key.as_str(),
        "value": value,
    }))
    .with_text(value)
    .print(json)
}

pub fn cmd_prefs_set(key: &str, value: &str, json: bool) -> Result<()> {
    let key: PreferenceKey = key.parse()?;
    let store = FilePreferenceStore::at_default_path();
    let stored = Preferences::save_named(&store, key, value)?;
    tracing::info!(key = key.as_str(), value = stored, "preference saved");

    CommandOutput::new(json!({
        "action": "prefs_set",
        "key": key.as_str(),
        "value": stored,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.as_str().cyan(), stored))
    .print(json)
}
