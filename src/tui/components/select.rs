//! One labelled row of the display menu: `Grouping:  ◀ status ▶`

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{Grouping, Ordering};

const LABEL_WIDTH: u32 = 10;

#[derive(Default, Props)]
pub struct SelectProps {
    pub label: &'static str,
    pub value: &'static str,
    pub has_focus: bool,
}

#[component]
pub fn Select(props: &SelectProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let accent = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            View(width: LABEL_WIDTH) {
                Text(content: format!("{}:", props.label), color: accent)
            }
            Text(content: "◀", color: accent)
            Text(
                content: props.value,
                color: theme.text,
                weight: if props.has_focus { Weight::Bold } else { Weight::Normal },
            )
            Text(content: "▶", color: accent)
        }
    }
}

/// A preference the menu cycles through, wrapping at both ends
pub trait Selectable: Copy + PartialEq + 'static {
    fn variants() -> &'static [Self];

    fn next(self) -> Self {
        let variants = Self::variants();
        let at = variants.iter().position(|v| *v == self).unwrap_or(0);
        variants[(at + 1) % variants.len()]
    }

    fn prev(self) -> Self {
        let variants = Self::variants();
        let at = variants.iter().position(|v| *v == self).unwrap_or(0);
        variants[(at + variants.len() - 1) % variants.len()]
    }
}

impl Selectable for Grouping {
    fn variants() -> &'static [Self] {
        Self::VARIANTS
    }
}

impl Selectable for Ordering {
    fn variants() -> &'static [Self] {
        Self::VARIANTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_cycles_in_menu_order() {
        assert_eq!(Grouping::Status.next(), Grouping::Priority);
        assert_eq!(Grouping::Priority.next(), Grouping::User);
        assert_eq!(Grouping::User.next(), Grouping::Status);
        assert_eq!(Grouping::Status.prev(), Grouping::User);
    }

    #[test]
    fn test_ordering_wraps_both_ways() {
        assert_eq!(Ordering::Priority.next(), Ordering::Title);
        assert_eq!(Ordering::Title.next(), Ordering::Priority);
        assert_eq!(Ordering::Priority.prev(), Ordering::Title);
        assert_eq!(Ordering::Title.prev(), Ordering::Priority);
    }
}
