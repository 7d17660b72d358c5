//! One-line status message under the board.
//!
//! A toast stays until the next key press; the reducer clears it.

use iocraft::prelude::*;

use crate::tui::theme::{Theme, theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

/// What kind of outcome the toast reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Recoverable problem, such as a stored preference that was ignored
    Warning,
    /// Failed fetch or clipboard write
    Error,
    Success,
}

impl ToastLevel {
    fn glyph(self) -> &'static str {
        match self {
            ToastLevel::Warning => "!",
            ToastLevel::Error => "✗",
            ToastLevel::Success => "✓",
        }
    }
}

impl Toast {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
        }
    }

    /// Color for the toast's level, taken from the board theme
    pub fn color(&self, theme: &Theme) -> Color {
        match self.level {
            ToastLevel::Warning => theme.priority_high,
            ToastLevel::Error => theme.priority_urgent,
            ToastLevel::Success => theme.user_available,
        }
    }

    /// Message with its level glyph in front
    pub fn line(&self) -> String {
        format!("{} {}", self.level.glyph(), self.message)
    }
}

#[derive(Default, Props)]
pub struct ToastNotificationProps {
    pub toast: Option<Toast>,
}

#[component]
pub fn ToastNotification(props: &ToastNotificationProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View() {
            #(props.toast.as_ref().map(|t| {
                let color = t.color(theme);
                element! {
                    View(
                        width: 100pct,
                        height: 3,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        background_color: theme.menu_background,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: color,
                    ) {
                        Text(content: t.line(), color)
                    }
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_colors_follow_theme() {
        let theme = Theme::default();
        assert_eq!(Toast::error("boom").color(&theme), theme.priority_urgent);
        assert_eq!(Toast::success("copied").color(&theme), theme.user_available);
        assert_eq!(Toast::warning("careful").color(&theme), theme.priority_high);
    }

    #[test]
    fn test_line_prefixes_level_glyph() {
        assert_eq!(Toast::success("Copied CAM-1").line(), "✓ Copied CAM-1");
        assert_eq!(Toast::error("offline").line(), "✗ offline");
        assert_eq!(Toast::warning("stale").line(), "! stale");
    }
}
