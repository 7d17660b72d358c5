//! Shortcut hints along the bottom edge of the board.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A key and the board action it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub action: &'static str,
}

const fn shortcut(key: &'static str, action: &'static str) -> Shortcut {
    Shortcut { key, action }
}

const BOARD_SHORTCUTS: &[Shortcut] = &[
    shortcut("h/l", "Column"),
    shortcut("j/k", "Card"),
    shortcut("g/G", "Top/Bottom"),
    shortcut("d", "Display"),
    shortcut("y", "Copy ID"),
    shortcut("r", "Reload"),
    shortcut("q/Esc", "Quit"),
];

const MENU_SHORTCUTS: &[Shortcut] = &[
    shortcut("j/k", "Field"),
    shortcut("h/l", "Change"),
    shortcut("Esc", "Close"),
];

// Navigation keys do nothing without cards
const EMPTY_SHORTCUTS: &[Shortcut] = &[
    shortcut("r", "Reload"),
    shortcut("d", "Display"),
    shortcut("q/Esc", "Quit"),
];

/// Which set of hints the footer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterMode {
    #[default]
    Board,
    Menu,
    Empty,
}

impl FooterMode {
    pub fn shortcuts(self) -> &'static [Shortcut] {
        match self {
            FooterMode::Board => BOARD_SHORTCUTS,
            FooterMode::Menu => MENU_SHORTCUTS,
            FooterMode::Empty => EMPTY_SHORTCUTS,
        }
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub mode: FooterMode,
}

#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.mode.shortcuts().iter().map(|hint| element! {
                View(flex_direction: FlexDirection::Row) {
                    Text(content: hint.key, color: theme.highlight, weight: Weight::Bold)
                    Text(content: format!(" {}", hint.action), color: theme.text)
                }
            }))
        }
    }
}
