//! TUI module for the interactive kanban board
//!
//! - `board` - Kanban board view with its reducer and key mapping
//! - `components` - Reusable widgets (cards, menu, footer, toasts)

pub mod board;
pub mod components;
pub mod hooks;
pub mod text;
pub mod theme;

pub use board::{KanbanBoard, KanbanBoardProps};
pub use theme::Theme;
