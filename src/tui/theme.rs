//! Theme system for TUI colors and styles
//!
//! Colors follow the CLI output in `display::cli_formatting`.

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors (consistent with the CLI)
    pub status_backlog: Color,
    pub status_todo: Color,
    pub status_in_progress: Color,
    pub status_done: Color,
    pub status_canceled: Color,
    pub status_other: Color,

    // Priority colors
    pub priority_urgent: Color,
    pub priority_high: Color,
    pub priority_default: Color,

    // User badge
    pub user_available: Color,
    pub user_away: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub id_color: Color,
    pub tag_color: Color,
    pub menu_background: Color,
}

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_backlog: GREY,
            status_todo: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_done: Color::Green,
            status_canceled: GREY,
            status_other: Color::White,

            priority_urgent: Color::Red,
            priority_high: Color::Yellow,
            priority_default: Color::White,

            user_available: Color::Green,
            user_away: GREY,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            id_color: Color::Cyan,
            tag_color: Color::Magenta,
            menu_background: Color::Rgb {
                r: 30,
                g: 30,
                b: 30,
            },
        }
    }
}

impl Theme {
    /// Get the color for a status string
    pub fn status_color(&self, status: &str) -> Color {
        match status.to_lowercase().as_str() {
            "backlog" => self.status_backlog,
            "todo" => self.status_todo,
            "in progress" | "in_progress" => self.status_in_progress,
            "done" => self.status_done,
            "canceled" | "cancelled" => self.status_canceled,
            _ => self.status_other,
        }
    }

    /// Get the color for a priority ordinal
    pub fn priority_color(&self, priority: i32) -> Color {
        match priority {
            4.. => self.priority_urgent,
            3 => self.priority_high,
            _ => self.priority_default,
        }
    }

    /// Availability dot color
    pub fn availability_color(&self, available: bool) -> Color {
        if available {
            self.user_available
        } else {
            self.user_away
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
