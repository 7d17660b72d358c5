//! Kanban board view (`ticketboard board`)
//!
//! Provides an interactive TUI for viewing tickets organized into columns
//! by status, priority or user, with a display menu to change the grouping
//! and ordering.

pub mod handlers;
pub mod model;

use std::sync::Arc;

use clipboard_rs::Clipboard;
use iocraft::prelude::*;

use crate::board::{BoardController, UserIndex};
use crate::prefs::{MemoryPreferenceStore, PreferenceStore};
use crate::source::TicketSource;
use crate::tui::components::{DisplayMenu, EmptyState, Footer, TicketCard, ToastNotification};
use crate::tui::hooks::{dispatch_board_action, use_dataset_loader};
use crate::tui::theme::theme;
use crate::types::Grouping;

use handlers::key_to_action;
use model::{BoardAction, BoardState, compute_board_view_model, menu_bounds, selected_ticket};

/// Rows taken by everything except the card area: header, column headers
/// (two rows plus margin) and footer
const CHROME_HEIGHT: u16 = 5;

/// Rows one card occupies, border and margin included
const CARD_HEIGHT: u16 = 6;

/// Props for the KanbanBoard component
#[derive(Default, Props)]
pub struct KanbanBoardProps {
    /// Where tickets are fetched from
    pub source: Option<Arc<dyn TicketSource>>,
    /// Where grouping and ordering are remembered
    pub store: Option<Arc<dyn PreferenceStore>>,
}

/// Accent color for a column header
fn column_accent(grouping: Grouping, key: &str, users: &UserIndex) -> Color {
    let theme = theme();
    match grouping {
        Grouping::Status => theme.status_color(key),
        Grouping::Priority => key
            .parse::<i32>()
            .map(|p| theme.priority_color(p))
            .unwrap_or(theme.text),
        Grouping::User => theme.availability_color(users.is_available(key)),
    }
}

/// Copy the selected ticket's ID and report the outcome
fn copy_selected_ticket_id(board: &mut State<BoardState>, column_height: usize) {
    let Some(id) = selected_ticket(&board.read()).map(|t| t.id.clone()) else {
        return;
    };

    let ok = clipboard_rs::ClipboardContext::new()
        .and_then(|ctx| ctx.set_text(id.clone()))
        .is_ok();
    if !ok {
        tracing::warn!(id = %id, "clipboard copy failed");
    }
    dispatch_board_action(board, BoardAction::CopyFinished { id, ok }, column_height);
}

/// Main kanban board component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Ticketboard     12 tickets  [d] Display  |
/// +--------+--------+--------+--------+------+
/// | ○ Todo | ◐ In.. | ● Done | ...          |
/// |   3    |   1    |   2    |              |
/// +--------+--------+--------+--------+------+
/// | Card1  | Card1  | Card1  |              |
/// | Card2  | ...    | Card2  |              |
/// +--------+--------+--------+--------+------+
/// | Footer with shortcuts                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn KanbanBoard<'a>(props: &KanbanBoardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let store: Arc<dyn PreferenceStore> = props
        .store
        .clone()
        .unwrap_or_else(|| Arc::new(MemoryPreferenceStore::new()));
    let mut board: State<BoardState> = hooks.use_state(move || {
        let (controller, problems) = BoardController::from_store(store);
        BoardState::new(controller, &problems)
    });

    // Async load handler with minimum 100ms display time to prevent UI flicker
    let load_handler: Handler<u64> =
        hooks.use_async_handler(use_dataset_loader(board, props.source.clone()));

    // Start any fetch the reducer asked for (initial load and reloads)
    let fetch_request = board.read().fetch_request;
    if let Some(generation) = fetch_request {
        let mut state = board.read().clone();
        state.fetch_request = None;
        board.set(state);
        load_handler.clone()(generation);
    }

    let available_height = height.saturating_sub(CHROME_HEIGHT);
    let cards_per_column = (available_height.saturating_sub(2) / CARD_HEIGHT).max(1) as usize;

    // Keyboard and mouse event handling
    hooks.use_terminal_events(move |event| match event {
        TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if kind != KeyEventKind::Release => {
            let menu_open = board.read().menu.is_open();
            let Some(action) = key_to_action(code, modifiers, menu_open) else {
                return;
            };
            let is_copy = action == BoardAction::CopyTicketId;
            dispatch_board_action(&mut board, action, cards_per_column);
            if is_copy {
                copy_selected_ticket_id(&mut board, cards_per_column);
            }
        }
        TerminalEvent::FullscreenMouse(mouse_event) => {
            if let MouseEventKind::Down(_) = mouse_event.kind
                && board.read().menu.is_open()
            {
                let inside_menu = menu_bounds(width).contains(mouse_event.column, mouse_event.row);
                dispatch_board_action(
                    &mut board,
                    BoardAction::PointerDown { inside_menu },
                    cards_per_column,
                );
            }
        }
        _ => {}
    });

    // Exit if requested
    if board.read().should_exit {
        system.exit();
    }

    let state = board.read().clone();
    let vm = compute_board_view_model(&state, cards_per_column);
    let users = state.controller.users();
    let theme = theme();

    let column_count = vm.columns.len().max(1) as u16;
    // Column border and padding take three cells
    let card_width = (width / column_count).saturating_sub(3) as u32;

    let header_status = if state.controller.is_loading() {
        "Loading...".to_string()
    } else {
        format!("{} tickets", vm.total_tickets)
    };
    let display_summary = format!("[d] Display: {} / {}", vm.grouping, vm.ordering);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            position: Position::Relative,
        ) {
            // Header
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                background_color: theme.highlight,
            ) {
                Text(
                    content: "Ticketboard",
                    color: theme.text,
                    weight: Weight::Bold,
                )
                View(flex_direction: FlexDirection::Row, gap: 2) {
                    Text(
                        content: header_status,
                        color: theme.text_dimmed,
                    )
                    Text(
                        content: display_summary,
                        color: if vm.menu_field.is_some() { theme.border_focused } else { theme.text },
                    )
                }
            }

            #(if let Some(kind) = vm.empty_state {
                // Show full-screen empty state
                element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(kind, detail: vm.fetch_error.clone())
                    }
                }
            } else {
                // Normal board view
                element! {
                    View(
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                        width: 100pct,
                        overflow: Overflow::Hidden,
                    ) {
                        // Column headers
                        View(
                            width: 100pct,
                            height: 2,
                            flex_direction: FlexDirection::Row,
                            margin_top: 1,
                        ) {
                            #(vm.columns.iter().map(|column| {
                                let accent = column_accent(vm.grouping, &column.key, users);
                                element! {
                                    View(
                                        flex_grow: 1.0,
                                        flex_shrink: 0.0,
                                        flex_direction: FlexDirection::Column,
                                        align_items: AlignItems::Center,
                                        border_edges: Edges::Bottom,
                                        border_style: BorderStyle::Single,
                                        border_color: if column.is_active { theme.border_focused } else { theme.border },
                                    ) {
                                        Text(
                                            content: format!("{} {}", column.icon, column.title),
                                            color: if column.is_active { accent } else { theme.text_dimmed },
                                            weight: if column.is_active { Weight::Bold } else { Weight::Normal },
                                        )
                                        Text(
                                            content: column.ticket_count.to_string(),
                                            color: theme.text_dimmed,
                                        )
                                    }
                                }
                            }))
                        }

                        // Column content
                        View(
                            flex_grow: 1.0,
                            width: 100pct,
                            flex_direction: FlexDirection::Row,
                            overflow: Overflow::Hidden,
                        ) {
                            #(vm.columns.iter().map(|column| {
                                element! {
                                    View(
                                        flex_grow: 1.0,
                                        flex_shrink: 0.0,
                                        height: 100pct,
                                        flex_direction: FlexDirection::Column,
                                        padding_left: 1,
                                        padding_right: 1,
                                        border_edges: Edges::Right,
                                        border_style: BorderStyle::Single,
                                        border_color: theme.border,
                                        overflow: Overflow::Hidden,
                                    ) {
                                        // "More above" indicator
                                        #((column.hidden_above > 0).then(|| element! {
                                            View(height: 1, padding_left: 1) {
                                                Text(
                                                    content: format!("  {} more above", column.hidden_above),
                                                    color: theme.text_dimmed,
                                                )
                                            }
                                        }))

                                        // Visible cards
                                        #(column.cards.iter().map(|card| element! {
                                            View(margin_top: 1) {
                                                TicketCard(card: card.clone(), width: Some(card_width))
                                            }
                                        }))

                                        // Spacer to push "more below" to bottom
                                        View(flex_grow: 1.0)

                                        // "More below" indicator
                                        #((column.hidden_below > 0).then(|| element! {
                                            View(height: 1, padding_left: 1) {
                                                Text(
                                                    content: format!("  {} more below", column.hidden_below),
                                                    color: theme.text_dimmed,
                                                )
                                            }
                                        }))
                                    }
                                }
                            }))
                        }
                    }
                }
            })

            // Toast notification
            #(vm.toast.clone().map(|toast| element! {
                ToastNotification(toast: Some(toast))
            }))

            // Footer
            Footer(mode: vm.footer)

            // Display menu overlay
            #(vm.menu_field.map(|focused| element! {
                DisplayMenu(
                    focused,
                    grouping: vm.grouping,
                    ordering: vm.ordering,
                    bounds: Some(menu_bounds(width)),
                )
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_accent_for_priority_falls_back_on_bad_key() {
        let users = UserIndex::default();
        assert_eq!(
            column_accent(Grouping::Priority, "4", &users),
            theme().priority_urgent
        );
        assert_eq!(column_accent(Grouping::Priority, "x", &users), theme().text);
    }

    #[test]
    fn test_column_accent_for_user_is_availability() {
        let users = UserIndex::default();
        assert_eq!(
            column_accent(Grouping::User, "usr-1", &users),
            theme().user_away
        );
    }
}
