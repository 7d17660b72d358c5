//! Ticket card component for kanban board
//!
//! A compact card view showing the ticket id, user badge, status icon,
//! wrapped title and tags.

use iocraft::prelude::*;

use super::user_badge::UserBadge;
use crate::tui::board::model::CardViewModel;
use crate::tui::text::{truncate_string, wrap_text_lines};
use crate::tui::theme::theme;

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The card to display
    pub card: CardViewModel,
    /// Available width for the card content (in characters)
    pub width: Option<u32>,
}

/// Compact ticket card for kanban board columns
///
/// Layout:
/// ```text
/// +-------------------+
/// |>CAM-4    ◐   AS● |
/// | Fix the login bug |
/// | that prevents...  |
/// | #Bug #Frontend    |
/// +-------------------+
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let card = &props.card;
    let ticket = &card.ticket;

    let border_color = if card.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let bg_color = if card.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = if card.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };

    // Border plus horizontal padding take four columns
    let card_width = props.width.unwrap_or(20);
    let content_width = (card_width.saturating_sub(4) as usize).max(8);

    let title_lines = wrap_text_lines(&ticket.title, content_width, 3);
    let tags = if ticket.tag.is_empty() {
        None
    } else {
        let joined = ticket
            .tag
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        Some(truncate_string(&joined, content_width))
    };

    let indicator = if card.is_selected { ">" } else { " " };

    element! {
        View(
            width: 100pct,
            min_height: 3,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            // ID row with status icon and user badge
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(
                        content: format!("{indicator}{}", ticket.id),
                        color: if card.is_selected { theme.highlight_text } else { theme.id_color },
                        weight: Weight::Bold,
                    )
                    #(card.status_icon.map(|icon| element! {
                        Text(
                            content: icon,
                            color: if card.is_selected {
                                theme.highlight_text
                            } else {
                                theme.status_color(&ticket.status)
                            },
                        )
                    }))
                }
                #(card.user.as_ref().map(|user| element! {
                    UserBadge(
                        initials: user.initials.clone(),
                        available: user.available,
                        is_selected: card.is_selected,
                    )
                }))
            }
            #(title_lines.iter().map(|line| {
                element! {
                    Text(
                        content: line.clone(),
                        color: text_color,
                    )
                }
            }))
            #(tags.map(|tags| element! {
                Text(
                    content: tags,
                    color: if card.is_selected { theme.highlight_text } else { theme.tag_color },
                )
            }))
        }
    }
}
