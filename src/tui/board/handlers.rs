//! Keyboard mapping for the kanban board view
//!
//! Keys map to abstract [`BoardAction`]s so the mapping can be unit tested
//! without a terminal.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::BoardAction;

/// Convert a key event to a BoardAction (pure function)
///
/// While the display menu is open it captures every key: keys it has no
/// use for close it. Returns `None` if the key doesn't map to any action.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, menu_open: bool) -> Option<BoardAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(BoardAction::Quit),
            _ if menu_open => Some(BoardAction::CloseMenu),
            _ => None,
        };
    }

    if menu_open {
        return Some(menu_key_to_action(code));
    }

    match code {
        // Navigation
        KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::MoveRight),
        KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::MoveUp),
        KeyCode::Char('g') => Some(BoardAction::GoToTop),
        KeyCode::Char('G') => Some(BoardAction::GoToBottom),
        KeyCode::PageDown => Some(BoardAction::PageDown),
        KeyCode::PageUp => Some(BoardAction::PageUp),

        // Actions
        KeyCode::Char('d') => Some(BoardAction::ToggleMenu),
        KeyCode::Char('y') => Some(BoardAction::CopyTicketId),
        KeyCode::Char('r') => Some(BoardAction::Reload),
        KeyCode::Char('q') | KeyCode::Esc => Some(BoardAction::Quit),

        _ => None,
    }
}

fn menu_key_to_action(code: KeyCode) -> BoardAction {
    match code {
        KeyCode::Char('d') => BoardAction::ToggleMenu,
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => BoardAction::MenuNextField,
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => BoardAction::MenuPrevField,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
            BoardAction::MenuCycleNext
        }
        KeyCode::Char('h') | KeyCode::Left => BoardAction::MenuCyclePrev,
        _ => BoardAction::CloseMenu,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Option<BoardAction> {
        key_to_action(code, KeyModifiers::NONE, false)
    }

    fn menu_key(code: KeyCode) -> Option<BoardAction> {
        key_to_action(code, KeyModifiers::NONE, true)
    }

    #[test]
    fn test_key_to_action_navigation() {
        assert_eq!(key(KeyCode::Char('h')), Some(BoardAction::MoveLeft));
        assert_eq!(key(KeyCode::Left), Some(BoardAction::MoveLeft));
        assert_eq!(key(KeyCode::Char('l')), Some(BoardAction::MoveRight));
        assert_eq!(key(KeyCode::Right), Some(BoardAction::MoveRight));
        assert_eq!(key(KeyCode::Char('j')), Some(BoardAction::MoveDown));
        assert_eq!(key(KeyCode::Down), Some(BoardAction::MoveDown));
        assert_eq!(key(KeyCode::Char('k')), Some(BoardAction::MoveUp));
        assert_eq!(key(KeyCode::Up), Some(BoardAction::MoveUp));
        assert_eq!(key(KeyCode::Char('g')), Some(BoardAction::GoToTop));
        assert_eq!(key(KeyCode::Char('G')), Some(BoardAction::GoToBottom));
        assert_eq!(key(KeyCode::PageDown), Some(BoardAction::PageDown));
        assert_eq!(key(KeyCode::PageUp), Some(BoardAction::PageUp));
    }

    #[test]
    fn test_key_to_action_app_actions() {
        assert_eq!(key(KeyCode::Char('d')), Some(BoardAction::ToggleMenu));
        assert_eq!(key(KeyCode::Char('y')), Some(BoardAction::CopyTicketId));
        assert_eq!(key(KeyCode::Char('r')), Some(BoardAction::Reload));
        assert_eq!(key(KeyCode::Char('q')), Some(BoardAction::Quit));
        assert_eq!(key(KeyCode::Esc), Some(BoardAction::Quit));
    }

    #[test]
    fn test_key_to_action_unknown_key() {
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::F(1)), None);
    }

    #[test]
    fn test_ctrl_q_quits_in_any_mode() {
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, false),
            Some(BoardAction::Quit)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, true),
            Some(BoardAction::Quit)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('x'), KeyModifiers::CONTROL, false),
            None
        );
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(menu_key(KeyCode::Char('d')), Some(BoardAction::ToggleMenu));
        assert_eq!(menu_key(KeyCode::Char('j')), Some(BoardAction::MenuNextField));
        assert_eq!(menu_key(KeyCode::Up), Some(BoardAction::MenuPrevField));
        assert_eq!(menu_key(KeyCode::Right), Some(BoardAction::MenuCycleNext));
        assert_eq!(menu_key(KeyCode::Enter), Some(BoardAction::MenuCycleNext));
        assert_eq!(menu_key(KeyCode::Char('h')), Some(BoardAction::MenuCyclePrev));
        assert_eq!(menu_key(KeyCode::Esc), Some(BoardAction::CloseMenu));
    }

    #[test]
    fn test_menu_captures_board_keys() {
        // 'q' closes the menu instead of quitting
        assert_eq!(menu_key(KeyCode::Char('q')), Some(BoardAction::CloseMenu));
        assert_eq!(menu_key(KeyCode::Char('y')), Some(BoardAction::CloseMenu));
    }
}
