//! Empty state component
//!
//! Displays a placeholder while tickets load, after a failed fetch, or when
//! the feed has no tickets.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Fetch in flight
    Loading,
    /// The fetch failed and nothing was loaded before
    FetchFailed,
    /// The feed returned no tickets
    #[default]
    NoTickets,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Error detail (for FetchFailed)
    pub detail: Option<String>,
}

/// Pick the empty state for the current load status, if any
pub fn compute_empty_state(
    is_loading: bool,
    fetch_error: Option<&str>,
    total_tickets: usize,
) -> Option<EmptyStateKind> {
    if is_loading {
        Some(EmptyStateKind::Loading)
    } else if total_tickets > 0 {
        None
    } else if fetch_error.is_some() {
        Some(EmptyStateKind::FetchFailed)
    } else {
        Some(EmptyStateKind::NoTickets)
    }
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Loading tickets...", ""),
        EmptyStateKind::FetchFailed => (
            "!",
            "Fetch Failed",
            "Tickets could not be loaded.",
            "Press 'r' to try again, or check 'ticketboard config show'.",
        ),
        EmptyStateKind::NoTickets => (
            "i",
            "No Tickets",
            "The ticket feed is empty.",
            "Press 'r' to reload.",
        ),
    };

    let is_error = props.kind == EmptyStateKind::FetchFailed;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: if is_error { theme.priority_urgent } else { theme.border },
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: if is_error { theme.priority_urgent } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
            }

            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: theme.text_dimmed,
                )
            }

            #(props.detail.as_ref().filter(|_| is_error).map(|detail| element! {
                View(margin_top: 1, max_width: 80) {
                    Text(
                        content: detail.clone(),
                        color: theme.priority_urgent,
                    )
                }
            }))

            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 2) {
                        Text(
                            content: hint,
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_kind_default() {
        assert_eq!(EmptyStateKind::default(), EmptyStateKind::NoTickets);
    }

    #[test]
    fn test_compute_empty_state() {
        assert_eq!(compute_empty_state(true, None, 5), Some(EmptyStateKind::Loading));
        assert_eq!(compute_empty_state(false, None, 5), None);
        assert_eq!(
            compute_empty_state(false, Some("boom"), 0),
            Some(EmptyStateKind::FetchFailed)
        );
        // Earlier data stays visible after a failed reload
        assert_eq!(compute_empty_state(false, Some("boom"), 3), None);
        assert_eq!(compute_empty_state(false, None, 0), Some(EmptyStateKind::NoTickets));
    }
}
