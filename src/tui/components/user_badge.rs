//! User badge: initials plus an availability dot

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct UserBadgeProps {
    pub initials: String,
    pub available: bool,
    /// Render in the selected card's colors
    pub is_selected: bool,
}

#[component]
pub fn UserBadge(props: &UserBadgeProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };

    element! {
        View(flex_direction: FlexDirection::Row) {
            Text(
                content: props.initials.clone(),
                color: text_color,
                weight: Weight::Bold,
            )
            Text(
                content: availability_dot(props.available),
                color: theme.availability_color(props.available),
            )
        }
    }
}

/// Filled dot when available, hollow otherwise
pub fn availability_dot(available: bool) -> &'static str {
    if available { "●" } else { "○" }
}
