//! Board core: user index, grid builder and the controller tying them to
//! preferences.

pub mod controller;
pub mod grid;
pub mod users;

pub use controller::BoardController;
pub use grid::{GridColumn, GridMap, GroupKey, build_grid, build_grid_from_names};
pub use users::UserIndex;
