//! Keyboard shortcut handling.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Term count +1.
    Increment,
    /// Term count -1.
    Decrement,
    /// Term count +10.
    StepUp,
    /// Term count -10.
    StepDown,
    /// Digit typed into the count input.
    Digit(u8),
    Backspace,
    /// Apply the typed count.
    Apply,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    Copy,
    Save,
    ToggleAbout,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Right => KeyAction::Increment,
        KeyCode::Left => KeyAction::Decrement,
        KeyCode::Char('+') => KeyAction::StepUp,
        KeyCode::Char('-') => KeyAction::StepDown,
        KeyCode::Char(c @ '0'..='9') => KeyAction::Digit(c as u8 - b'0'),
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Enter => KeyAction::Apply,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        KeyCode::Char('y') => KeyAction::Copy,
        KeyCode::Char('s') => KeyAction::Save,
        KeyCode::Char('?') => KeyAction::ToggleAbout,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn count_keys() {
        assert_eq!(map_key(key(KeyCode::Right)), KeyAction::Increment);
        assert_eq!(map_key(key(KeyCode::Left)), KeyAction::Decrement);
        assert_eq!(map_key(key(KeyCode::Char('+'))), KeyAction::StepUp);
        assert_eq!(map_key(key(KeyCode::Char('-'))), KeyAction::StepDown);
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::Apply);
        assert_eq!(map_key(key(KeyCode::Backspace)), KeyAction::Backspace);
    }

    #[test]
    fn digit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('0'))), KeyAction::Digit(0));
        assert_eq!(map_key(key(KeyCode::Char('7'))), KeyAction::Digit(7));
        assert_eq!(map_key(key(KeyCode::Char('9'))), KeyAction::Digit(9));
    }

    #[test]
    fn scroll_keys() {
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::ScrollUp);
        assert_eq!(map_key(key(KeyCode::Char('k'))), KeyAction::ScrollUp);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::ScrollDown);
        assert_eq!(map_key(key(KeyCode::Char('j'))), KeyAction::ScrollDown);
        assert_eq!(map_key(key(KeyCode::PageUp)), KeyAction::PageUp);
        assert_eq!(map_key(key(KeyCode::PageDown)), KeyAction::PageDown);
        assert_eq!(map_key(key(KeyCode::Home)), KeyAction::Home);
        assert_eq!(map_key(key(KeyCode::End)), KeyAction::End);
    }

    #[test]
    fn action_keys() {
        assert_eq!(map_key(key(KeyCode::Char('y'))), KeyAction::Copy);
        assert_eq!(map_key(key(KeyCode::Char('s'))), KeyAction::Save);
        assert_eq!(map_key(key(KeyCode::Char('?'))), KeyAction::ToggleAbout);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), KeyAction::None);
    }
}
