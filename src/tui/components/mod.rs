//! Shared TUI components for the board view

pub mod display_menu;
pub mod empty_state;
pub mod footer;
pub mod select;
pub mod ticket_card;
pub mod toast;
pub mod user_badge;

pub use display_menu::{DisplayMenu, DisplayMenuProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps, compute_empty_state};
pub use footer::{Footer, FooterMode, FooterProps, Shortcut};
pub use select::{Select, SelectProps, Selectable};
pub use ticket_card::{TicketCard, TicketCardProps};
pub use toast::{Toast, ToastLevel, ToastNotification, ToastNotificationProps};
pub use user_badge::{UserBadge, UserBadgeProps};
