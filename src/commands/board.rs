//! Kanban board command (`ticketboard board`)

use std::path::PathBuf;
use std::sync::Arc;

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use crate::source::source_from_config;
use crate::tui::KanbanBoard;

#[derive(Debug, Default, Clone)]
pub struct BoardOptions {
    /// Read tickets from a local JSON file instead of the endpoint
    pub file: Option<PathBuf>,
    /// Keep display changes in memory only
    pub no_save: bool,
}

/// Launch the kanban board TUI
pub async fn cmd_board(options: BoardOptions) -> Result<()> {
    let config = Config::load()?;
    let source = source_from_config(&config, options.file.as_deref())?;

    let store: Arc<dyn PreferenceStore> = if options.no_save {
        // Seed from disk so the session starts where the last saved one ended
        let disk = FilePreferenceStore::at_default_path();
        let seeded = MemoryPreferenceStore::new();
        for key in crate::prefs::PreferenceKey::ALL {
            if let Ok(Some(value)) = disk.get(key.as_str()) {
                seeded.set(key.as_str(), &value)?;
            }
        }
        Arc::new(seeded)
    } else {
        Arc::new(FilePreferenceStore::at_default_path())
    };

    tracing::info!(source = %source.describe(), no_save = options.no_save, "starting board");

    element!(KanbanBoard(source: Some(source), store: Some(store)))
        .fullscreen()
        .await
        .map_err(|e| BoardError::Other(format!("TUI error: {e}")))
}
