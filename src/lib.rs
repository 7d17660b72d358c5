mod macros;

pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod paths;
pub mod prefs;
pub mod source;
pub mod tui;
pub mod types;

pub use board::{BoardController, GridColumn, GridMap, GroupKey, UserIndex, build_grid, build_grid_from_names};
pub use config::Config;
pub use error::{BoardError, Result};
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceKey, PreferenceStore, Preferences};
pub use source::{FileSource, HttpSource, TicketSource, source_from_config};
pub use types::{Dataset, Grouping, Ordering, Ticket, User, priority_label};
