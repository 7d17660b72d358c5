//! Display menu popup
//!
//! Small overlay anchored below the header that lets the user change the
//! grouping and ordering of the board.

use iocraft::prelude::*;

use super::select::Select;
use crate::tui::board::model::{MENU_HEIGHT, MenuField, Rect};
use crate::tui::theme::theme;
use crate::types::{Grouping, Ordering};

/// Props for the DisplayMenu component
#[derive(Default, Props)]
pub struct DisplayMenuProps {
    /// Field that currently has focus
    pub focused: MenuField,
    pub grouping: Grouping,
    pub ordering: Ordering,
    /// Where the popup is drawn; from `menu_bounds`
    pub bounds: Option<Rect>,
}

#[component]
pub fn DisplayMenu(props: &DisplayMenuProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(bounds) = props.bounds else {
        return element!(View).into_any();
    };

    element! {
        View(
            position: Position::Absolute,
            top: bounds.y as i32,
            left: bounds.x as i32,
            width: bounds.width as u32,
            height: MENU_HEIGHT as u32,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border_focused,
            background_color: theme.menu_background,
            padding_left: 1,
            padding_right: 1,
        ) {
            Select(
                label: "Grouping",
                value: props.grouping.as_str(),
                has_focus: props.focused == MenuField::Grouping,
            )
            Select(
                label: "Ordering",
                value: props.ordering.as_str(),
                has_focus: props.focused == MenuField::Ordering,
            )
        }
    }
    .into_any()
}
