//! One-shot grid printout (`ticketboard grid`)

use std::io::IsTerminal;
use std::path::PathBuf;

use super::{CommandOutput, display_preference_warnings, fetch_dataset};
use crate::board::{UserIndex, build_grid};
use crate::display::{format_grid, grid_to_json};
use crate::error::Result;
use crate::prefs::{FilePreferenceStore, Preferences};
use crate::types::{Grouping, Ordering};

#[derive(Debug, Default, Clone)]
pub struct GridOptions {
    pub file: Option<PathBuf>,
    /// Overrides the stored grouping for this run only
    pub group_by: Option<Grouping>,
    /// Overrides the stored ordering for this run only
    pub order_by: Option<Ordering>,
    pub json: bool,
}

/// Print the grid for the stored (or overridden) grouping and ordering
pub async fn cmd_grid(options: GridOptions) -> Result<()> {
    let store = FilePreferenceStore::at_default_path();
    let (stored, problems) = Preferences::load_or_default(&store);
    if !options.json {
        display_preference_warnings(&problems);
    }

    let grouping = options.group_by.unwrap_or(stored.grouping);
    let ordering = options.order_by.unwrap_or(stored.ordering);

    let dataset = fetch_dataset(options.file.as_deref()).await?;
    let users = UserIndex::build(&dataset.users);
    let grid = build_grid(&dataset.tickets, grouping, ordering);

    let colored = std::io::stdout().is_terminal();
    CommandOutput::new(grid_to_json(&grid, &users, grouping))
        .with_text(format_grid(&grid, &users, grouping, colored))
        .print(options.json)
}
