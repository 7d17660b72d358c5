//! KanbanBoard model types for testable state management
//!
//! This module separates state (BoardState) from view (BoardViewModel)
//! enabling comprehensive unit testing without the iocraft framework.

use crate::board::BoardController;
use crate::display::{CardParts, column_icon, column_title, status_icon};
use crate::error::BoardError;
use crate::tui::components::empty_state::{EmptyStateKind, compute_empty_state};
use crate::tui::components::footer::FooterMode;
use crate::tui::components::select::Selectable;
use crate::tui::components::toast::Toast;
use crate::types::{Dataset, Grouping, Ordering, Ticket};

/// Width of the display menu popup, border included
pub const MENU_WIDTH: u16 = 32;
/// Height of the display menu popup, border included
pub const MENU_HEIGHT: u16 = 4;
/// Row the display menu popup starts on (just below the header bar)
pub const MENU_TOP: u16 = 1;

/// Field of the display menu that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuField {
    #[default]
    Grouping,
    Ordering,
}

impl MenuField {
    fn toggle(self) -> Self {
        match self {
            MenuField::Grouping => MenuField::Ordering,
            MenuField::Ordering => MenuField::Grouping,
        }
    }
}

/// Open/closed state of the display menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMenuState {
    #[default]
    Closed,
    Open { field: MenuField },
}

impl DisplayMenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, DisplayMenuState::Open { .. })
    }
}

/// Screen rectangle, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && column < self.x.saturating_add(self.width)
            && row < self.y.saturating_add(self.height)
    }
}

/// Where the display menu is drawn for a terminal of the given width.
///
/// It hangs off the right edge of the header bar.
pub fn menu_bounds(terminal_width: u16) -> Rect {
    let width = MENU_WIDTH.min(terminal_width);
    Rect {
        x: terminal_width.saturating_sub(width + 1),
        y: MENU_TOP,
        width,
        height: MENU_HEIGHT,
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct BoardState {
    /// Loaded data, preferences and the current grid
    pub controller: BoardController,
    /// Display menu state machine
    pub menu: DisplayMenuState,
    /// Index of the currently selected column
    pub current_column: usize,
    /// Index of the currently selected row within the column
    pub current_row: usize,
    /// Optional toast notification to display
    pub toast: Option<Toast>,
    /// Generation of a fetch the component still has to start
    pub fetch_request: Option<u64>,
    /// Set once the user asked to quit
    pub should_exit: bool,
}

impl BoardState {
    /// Fresh state with the first fetch requested.
    ///
    /// `problems` are preference values that were ignored at startup; the
    /// first one is surfaced as a warning toast.
    pub fn new(mut controller: BoardController, problems: &[BoardError]) -> Self {
        let generation = controller.begin_load();
        let toast = match problems {
            [] => None,
            [only] => Some(Toast::warning(format!("{only}; using the default"))),
            [first, rest @ ..] => Some(Toast::warning(format!(
                "{first}; using the default (+{} more)",
                rest.len()
            ))),
        };
        Self {
            controller,
            menu: DisplayMenuState::Closed,
            current_column: 0,
            current_row: 0,
            toast,
            fetch_request: Some(generation),
            should_exit: false,
        }
    }
}

/// All possible actions on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    // Data
    /// A fetch completed
    DatasetLoaded { generation: u64, dataset: Dataset },
    /// A fetch failed
    FetchFailed { generation: u64, message: String },
    /// Reload tickets from the source
    Reload,

    // Navigation
    /// Move selection to the left column
    MoveLeft,
    /// Move selection to the right column
    MoveRight,
    /// Move selection up within the column
    MoveUp,
    /// Move selection down within the column
    MoveDown,
    /// Jump to top of column
    GoToTop,
    /// Jump to bottom of column
    GoToBottom,
    /// Page down within column
    PageDown,
    /// Page up within column
    PageUp,

    // Display menu
    /// Open the menu, or close it if open
    ToggleMenu,
    /// Close the menu without a change
    CloseMenu,
    /// Focus the next menu field
    MenuNextField,
    /// Focus the previous menu field
    MenuPrevField,
    /// Step the focused field to its next value
    MenuCycleNext,
    /// Step the focused field to its previous value
    MenuCyclePrev,
    /// Mouse button pressed somewhere on screen
    PointerDown { inside_menu: bool },

    // Actions
    /// Copy the selected ticket's ID to clipboard
    CopyTicketId,
    /// Outcome of a clipboard copy
    CopyFinished { id: String, ok: bool },

    // App
    /// Quit the application
    Quit,
}

impl BoardAction {
    /// Actions that come from the user rather than from a fetch
    fn is_user_input(&self) -> bool {
        !matches!(
            self,
            BoardAction::DatasetLoaded { .. }
                | BoardAction::FetchFailed { .. }
                | BoardAction::CopyFinished { .. }
        )
    }
}

/// Computed view model for rendering
#[derive(Debug, Clone)]
pub struct BoardViewModel {
    /// One view model per grid column, in grid order
    pub columns: Vec<ColumnViewModel>,
    /// Currently selected ticket (if any)
    pub selected_ticket: Option<Ticket>,
    /// Toast notification to display
    pub toast: Option<Toast>,
    /// Empty state to display (if any)
    pub empty_state: Option<EmptyStateKind>,
    /// Fetch error detail for the empty state
    pub fetch_error: Option<String>,
    /// Which shortcut hints the footer shows
    pub footer: FooterMode,
    /// Total number of tickets on the board
    pub total_tickets: usize,
    pub grouping: Grouping,
    pub ordering: Ordering,
    /// Focused field when the display menu is open
    pub menu_field: Option<MenuField>,
}

/// View model for a single column
#[derive(Debug, Clone)]
pub struct ColumnViewModel {
    /// Group key this column represents
    pub key: String,
    /// Display title of the column
    pub title: String,
    /// Icon shown before the title
    pub icon: String,
    /// Whether this column is currently selected
    pub is_active: bool,
    /// Number of tickets in this column
    pub ticket_count: usize,
    /// Cards to display in this column
    pub cards: Vec<CardViewModel>,
    /// Scroll offset for this column (first visible row index)
    pub scroll_offset: usize,
    /// Number of tickets above the visible area
    pub hidden_above: usize,
    /// Number of tickets below the visible area
    pub hidden_below: usize,
}

/// User details shown on a card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardUser {
    pub name: String,
    pub initials: String,
    pub available: bool,
}

/// View model for a single ticket card
#[derive(Debug, Clone, Default)]
pub struct CardViewModel {
    pub ticket: Ticket,
    /// `None` when the board is grouped by user
    pub user: Option<CardUser>,
    /// `None` when the board is grouped by status
    pub status_icon: Option<&'static str>,
    /// Whether this card is currently selected
    pub is_selected: bool,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state
///
/// The `column_height` parameter specifies the number of visible cards per
/// column. The active column scrolls to keep the selection centered; other
/// columns show from the top.
pub fn compute_board_view_model(state: &BoardState, column_height: usize) -> BoardViewModel {
    let controller = &state.controller;
    let grid = controller.grid();
    let users = controller.users();
    let grouping = controller.grouping();
    let parts = CardParts::for_grouping(grouping);
    let total_tickets = grid.ticket_count();

    let empty_state =
        compute_empty_state(controller.is_loading(), controller.fetch_error(), total_tickets);

    let footer = if state.menu.is_open() {
        FooterMode::Menu
    } else if empty_state.is_some() {
        FooterMode::Empty
    } else {
        FooterMode::Board
    };

    let columns = if empty_state.is_some() {
        Vec::new()
    } else {
        grid.columns()
            .iter()
            .enumerate()
            .map(|(col_idx, column)| {
                let is_active = col_idx == state.current_column;
                let total_count = column.tickets.len();
                let scroll_offset = if is_active {
                    adjust_column_scroll(state.current_row, column_height, total_count)
                } else {
                    0
                };

                let start = scroll_offset.min(total_count);
                let end = (scroll_offset + column_height).min(total_count);

                let cards = column
                    .tickets
                    .iter()
                    .enumerate()
                    .skip(start)
                    .take(end - start)
                    .map(|(row_idx, ticket)| CardViewModel {
                        ticket: ticket.clone(),
                        user: parts.show_user.then(|| CardUser {
                            name: users.display_name(&ticket.user_id),
                            initials: users.initials(&ticket.user_id),
                            available: users.is_available(&ticket.user_id),
                        }),
                        status_icon: parts.show_status.then(|| status_icon(&ticket.status)),
                        is_selected: is_active && row_idx == state.current_row,
                    })
                    .collect();

                ColumnViewModel {
                    key: column.key.clone(),
                    title: column_title(grouping, &column.key, users),
                    icon: column_icon(grouping, &column.key, users),
                    is_active,
                    ticket_count: total_count,
                    cards,
                    scroll_offset,
                    hidden_above: start,
                    hidden_below: total_count.saturating_sub(end),
                }
            })
            .collect()
    };

    let menu_field = match state.menu {
        DisplayMenuState::Open { field } => Some(field),
        DisplayMenuState::Closed => None,
    };

    BoardViewModel {
        columns,
        selected_ticket: selected_ticket(state).cloned(),
        toast: state.toast.clone(),
        empty_state,
        fetch_error: controller.fetch_error().map(str::to_string),
        footer,
        total_tickets,
        grouping,
        ordering: controller.ordering(),
        menu_field,
    }
}

/// The ticket under the cursor, if any
pub fn selected_ticket(state: &BoardState) -> Option<&Ticket> {
    state
        .controller
        .grid()
        .column(state.current_column)
        .and_then(|column| column.tickets.get(state.current_row))
}

/// Scroll offset that keeps the selected row vertically centered.
///
/// Clamps to valid scroll bounds (0 to max_scroll) near the top or bottom.
fn adjust_column_scroll(selected_row: usize, column_height: usize, total_items: usize) -> usize {
    if column_height == 0 || total_items == 0 {
        return 0;
    }

    let half_height = column_height / 2;
    let ideal_offset = selected_row.saturating_sub(half_height);
    let max_offset = total_items.saturating_sub(column_height);

    ideal_offset.min(max_offset)
}

fn column_len(state: &BoardState, col: usize) -> usize {
    state
        .controller
        .grid()
        .column(col)
        .map(|c| c.tickets.len())
        .unwrap_or(0)
}

/// Keep the cursor inside the current grid
fn clamp_selection(state: &mut BoardState) {
    let columns = state.controller.grid().len();
    state.current_column = state.current_column.min(columns.saturating_sub(1));
    let rows = column_len(state, state.current_column);
    state.current_row = state.current_row.min(rows.saturating_sub(1));
}

fn apply_menu_cycle(state: &mut BoardState, forward: bool) {
    let DisplayMenuState::Open { field } = state.menu else {
        return;
    };
    match field {
        MenuField::Grouping => {
            let current = state.controller.grouping();
            let next = if forward { current.next() } else { current.prev() };
            state.controller.set_grouping(next);
            state.current_column = 0;
            state.current_row = 0;
        }
        MenuField::Ordering => {
            let current = state.controller.ordering();
            let next = if forward { current.next() } else { current.prev() };
            state.controller.set_ordering(next);
            state.current_row = 0;
        }
    }
    state.menu = DisplayMenuState::Closed;
    clamp_selection(state);
}

/// Pure function: apply action to state (reducer pattern)
///
/// Side effects (starting a fetch, writing to the clipboard, exiting) are
/// requested through state fields and carried out by the component.
///
/// The `column_height` parameter specifies the number of visible cards per
/// column, used for paging.
pub fn reduce_board_state(
    mut state: BoardState,
    action: BoardAction,
    column_height: usize,
) -> BoardState {
    if action.is_user_input() {
        state.toast = None;
    }

    match action {
        // Data
        BoardAction::DatasetLoaded {
            generation,
            dataset,
        } => {
            if state.controller.apply_dataset(generation, dataset) {
                clamp_selection(&mut state);
            }
        }
        BoardAction::FetchFailed {
            generation,
            message,
        } => {
            let error = BoardError::FetchFailure(message);
            if state.controller.apply_fetch_failure(generation, &error) {
                state.toast = Some(Toast::error(error.to_string()));
            }
        }
        BoardAction::Reload => {
            let generation = state.controller.begin_load();
            state.fetch_request = Some(generation);
            state.menu = DisplayMenuState::Closed;
        }

        // Navigation
        BoardAction::MoveLeft => {
            state.current_column = state.current_column.saturating_sub(1);
            clamp_selection(&mut state);
        }
        BoardAction::MoveRight => {
            state.current_column += 1;
            clamp_selection(&mut state);
        }
        BoardAction::MoveUp => {
            state.current_row = state.current_row.saturating_sub(1);
        }
        BoardAction::MoveDown => {
            state.current_row += 1;
            clamp_selection(&mut state);
        }
        BoardAction::GoToTop => {
            state.current_row = 0;
        }
        BoardAction::GoToBottom => {
            state.current_row = column_len(&state, state.current_column).saturating_sub(1);
        }
        BoardAction::PageDown => {
            state.current_row += (column_height / 2).max(1);
            clamp_selection(&mut state);
        }
        BoardAction::PageUp => {
            state.current_row = state.current_row.saturating_sub((column_height / 2).max(1));
        }

        // Display menu
        BoardAction::ToggleMenu => {
            state.menu = match state.menu {
                DisplayMenuState::Closed => DisplayMenuState::Open {
                    field: MenuField::default(),
                },
                DisplayMenuState::Open { .. } => DisplayMenuState::Closed,
            };
        }
        BoardAction::CloseMenu => {
            state.menu = DisplayMenuState::Closed;
        }
        BoardAction::MenuNextField | BoardAction::MenuPrevField => {
            if let DisplayMenuState::Open { field } = state.menu {
                state.menu = DisplayMenuState::Open {
                    field: field.toggle(),
                };
            }
        }
        BoardAction::MenuCycleNext => apply_menu_cycle(&mut state, true),
        BoardAction::MenuCyclePrev => apply_menu_cycle(&mut state, false),
        BoardAction::PointerDown { inside_menu } => {
            if !inside_menu {
                state.menu = DisplayMenuState::Closed;
            }
        }

        // Actions
        BoardAction::CopyTicketId => {
            // The clipboard write happens in the component
        }
        BoardAction::CopyFinished { id, ok } => {
            state.toast = Some(if ok {
                Toast::success(format!("Copied {id} to clipboard"))
            } else {
                Toast::error(format!("Could not copy {id} to clipboard"))
            });
        }

        // App
        BoardAction::Quit => {
            state.should_exit = true;
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::prefs::MemoryPreferenceStore;
    use crate::types::User;

    fn ticket(id: &str, status: &str, priority: i32, title: &str, user: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            tag: vec![],
            user_id: user.to_string(),
            status: status.to_string(),
            priority,
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            tickets: vec![
                ticket("CAM-1", "Todo", 2, "Beta", "usr-1"),
                ticket("CAM-2", "Todo", 1, "Alpha", "usr-2"),
                ticket("CAM-3", "Done", 0, "Gamma", "usr-1"),
            ],
            users: vec![User {
                id: "usr-1".to_string(),
                name: "Anoop Sharma".to_string(),
                available: true,
            }],
        }
    }

    fn fresh_state() -> BoardState {
        let store = Arc::new(MemoryPreferenceStore::new());
        let (controller, problems) = BoardController::from_store(store);
        BoardState::new(controller, &problems)
    }

    fn loaded_state() -> BoardState {
        let state = fresh_state();
        let generation = state.fetch_request.unwrap();
        reduce_board_state(
            state,
            BoardAction::DatasetLoaded {
                generation,
                dataset: dataset(),
            },
            10,
        )
    }

    #[test]
    fn test_new_state_requests_first_fetch() {
        let state = fresh_state();
        assert_eq!(state.fetch_request, Some(1));
        assert!(state.controller.is_loading());
        assert!(state.toast.is_none());

        let vm = compute_board_view_model(&state, 10);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::Loading));
        assert!(vm.columns.is_empty());
    }

    #[test]
    fn test_new_state_warns_about_ignored_preferences() {
        let store = Arc::new(MemoryPreferenceStore::with_values([("grouping", "colour")]));
        let (controller, problems) = BoardController::from_store(store);
        let state = BoardState::new(controller, &problems);
        let toast = state.toast.unwrap();
        assert!(toast.message.contains("colour"));
    }

    #[test]
    fn test_dataset_loaded_builds_columns() {
        let state = loaded_state();
        let vm = compute_board_view_model(&state, 10);
        assert_eq!(vm.empty_state, None);
        assert_eq!(vm.total_tickets, 3);
        let titles: Vec<_> = vm.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Todo", "Done"]);
        let ids: Vec<_> = vm.columns[0].cards.iter().map(|c| c.ticket.id.as_str()).collect();
        assert_eq!(ids, vec!["CAM-2", "CAM-1"]);
        assert!(vm.columns[0].cards[0].is_selected);
        assert_eq!(vm.selected_ticket.unwrap().id, "CAM-2");
    }

    #[test]
    fn test_cards_hide_grouped_field() {
        let state = loaded_state();
        let vm = compute_board_view_model(&state, 10);
        let card = &vm.columns[0].cards[0];
        assert!(card.status_icon.is_none());
        let user = card.user.as_ref().unwrap();
        assert_eq!(user.name, "Unknown user (usr-2)");
        assert_eq!(user.initials, "?");
        assert!(!user.available);
    }

    #[test]
    fn test_fetch_failure_shows_empty_state_and_toast() {
        let state = fresh_state();
        let state = reduce_board_state(
            state,
            BoardAction::FetchFailed {
                generation: 1,
                message: "connection refused".to_string(),
            },
            10,
        );
        assert!(!state.controller.is_loading());
        assert!(state.toast.as_ref().unwrap().message.contains("connection refused"));
        let vm = compute_board_view_model(&state, 10);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::FetchFailed));
        assert!(vm.fetch_error.unwrap().contains("connection refused"));
    }

    #[test]
    fn test_reload_bumps_generation_and_drops_stale_result() {
        let state = fresh_state();
        let state = reduce_board_state(state, BoardAction::Reload, 10);
        assert_eq!(state.fetch_request, Some(2));

        let state = reduce_board_state(
            state,
            BoardAction::DatasetLoaded {
                generation: 1,
                dataset: dataset(),
            },
            10,
        );
        assert!(state.controller.is_loading());
        assert_eq!(state.controller.grid().ticket_count(), 0);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let state = loaded_state();
        let state = reduce_board_state(state, BoardAction::MoveDown, 10);
        let state = reduce_board_state(state, BoardAction::MoveDown, 10);
        assert_eq!(state.current_row, 1);

        let state = reduce_board_state(state, BoardAction::MoveRight, 10);
        assert_eq!(state.current_column, 1);
        assert_eq!(state.current_row, 0);

        let state = reduce_board_state(state, BoardAction::MoveRight, 10);
        assert_eq!(state.current_column, 1);

        let state = reduce_board_state(state, BoardAction::MoveLeft, 10);
        let state = reduce_board_state(state, BoardAction::GoToBottom, 10);
        assert_eq!(state.current_row, 1);
        let state = reduce_board_state(state, BoardAction::GoToTop, 10);
        assert_eq!(state.current_row, 0);
    }

    #[test]
    fn test_menu_toggle_and_field_focus() {
        let state = loaded_state();
        let state = reduce_board_state(state, BoardAction::ToggleMenu, 10);
        assert_eq!(
            state.menu,
            DisplayMenuState::Open {
                field: MenuField::Grouping
            }
        );
        let state = reduce_board_state(state, BoardAction::MenuNextField, 10);
        assert_eq!(
            state.menu,
            DisplayMenuState::Open {
                field: MenuField::Ordering
            }
        );
        let state = reduce_board_state(state, BoardAction::ToggleMenu, 10);
        assert_eq!(state.menu, DisplayMenuState::Closed);
    }

    #[test]
    fn test_menu_change_applies_and_closes() {
        let state = loaded_state();
        let state = reduce_board_state(state, BoardAction::ToggleMenu, 10);
        let state = reduce_board_state(state, BoardAction::MenuCycleNext, 10);
        assert_eq!(state.menu, DisplayMenuState::Closed);
        assert_eq!(state.controller.grouping(), Grouping::Priority);

        let vm = compute_board_view_model(&state, 10);
        let titles: Vec<_> = vm.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Medium", "Low", "No priority"]);
        assert!(vm.columns[0].cards[0].status_icon.is_some());
    }

    #[test]
    fn test_menu_cycle_prev_on_ordering() {
        let state = loaded_state();
        let state = reduce_board_state(state, BoardAction::ToggleMenu, 10);
        let state = reduce_board_state(state, BoardAction::MenuPrevField, 10);
        let state = reduce_board_state(state, BoardAction::MenuCyclePrev, 10);
        assert_eq!(state.controller.ordering(), Ordering::Title);
        assert!(!state.menu.is_open());
    }

    #[test]
    fn test_menu_cycle_when_closed_is_noop() {
        let state = loaded_state();
        let state = reduce_board_state(state, BoardAction::MenuCycleNext, 10);
        assert_eq!(state.controller.grouping(), Grouping::Status);
    }

    #[test]
    fn test_pointer_outside_menu_closes_it() {
        let state = loaded_state();
        let state = reduce_board_state(state, BoardAction::ToggleMenu, 10);
        let state = reduce_board_state(state, BoardAction::PointerDown { inside_menu: true }, 10);
        assert!(state.menu.is_open());
        let state = reduce_board_state(state, BoardAction::PointerDown { inside_menu: false }, 10);
        assert!(!state.menu.is_open());
        assert_eq!(state.controller.grouping(), Grouping::Status);
    }

    #[test]
    fn test_menu_bounds() {
        let rect = menu_bounds(100);
        assert_eq!(rect.x, 100 - MENU_WIDTH - 1);
        assert!(rect.contains(rect.x, MENU_TOP));
        assert!(!rect.contains(rect.x - 1, MENU_TOP));
        assert!(!rect.contains(rect.x, MENU_TOP + MENU_HEIGHT));

        let narrow = menu_bounds(10);
        assert_eq!(narrow.width, 10);
        assert_eq!(narrow.x, 0);
    }

    #[test]
    fn test_copy_finished_sets_toast_and_input_clears_it() {
        let state = loaded_state();
        let state = reduce_board_state(
            state,
            BoardAction::CopyFinished {
                id: "CAM-2".to_string(),
                ok: true,
            },
            10,
        );
        assert!(state.toast.as_ref().unwrap().message.contains("CAM-2"));
        let state = reduce_board_state(state, BoardAction::MoveDown, 10);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_quit() {
        let state = reduce_board_state(fresh_state(), BoardAction::Quit, 10);
        assert!(state.should_exit);
    }

    #[test]
    fn test_adjust_column_scroll_centers_selection() {
        assert_eq!(adjust_column_scroll(0, 4, 10), 0);
        assert_eq!(adjust_column_scroll(5, 4, 10), 3);
        assert_eq!(adjust_column_scroll(9, 4, 10), 6);
        assert_eq!(adjust_column_scroll(3, 0, 10), 0);
        assert_eq!(adjust_column_scroll(3, 4, 0), 0);
    }
}
