use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Append a digit to the target being typed
    InputDigit(char),
    Backspace,
    /// Reel to the typed target
    Submit,
    /// Clear the typed target
    Clear,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT)
            if c.is_ascii_digit() =>
        {
            Action::InputDigit(c)
        }
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Esc, _) => Action::Clear,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_digits_and_editing() {
        assert_eq!(handle_key_event(key(KeyCode::Char('7'))), Action::InputDigit('7'));
        assert_eq!(handle_key_event(key(KeyCode::Backspace)), Action::Backspace);
        assert_eq!(handle_key_event(key(KeyCode::Enter)), Action::Submit);
        assert_eq!(handle_key_event(key(KeyCode::Esc)), Action::Clear);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), Action::None);
    }
}
