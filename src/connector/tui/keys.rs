use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the chat surface to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    InsertNewline,
    Insert(char),
    Backspace,
    ClearHistory,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Quit,
}

/// Map a key event to an [`Action`].
///
/// Enter submits; Shift+Enter inserts a newline instead. Whether an action is
/// allowed right now (e.g. typing while loading) is decided by the session,
/// not here.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(Action::Quit),
        KeyCode::Char('l') | KeyCode::Char('L') if ctrl => Some(Action::ClearHistory),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(Action::InsertNewline)
        }
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::Insert(c))
        }
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_enter_submits() {
        assert_eq!(
            action_for(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Submit)
        );
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        assert_eq!(
            action_for(press(KeyCode::Enter, KeyModifiers::SHIFT)),
            Some(Action::InsertNewline)
        );
    }

    #[test]
    fn test_characters_are_inserted() {
        assert_eq!(
            action_for(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Action::Insert('a'))
        );
        assert_eq!(
            action_for(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::Insert('A'))
        );
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(
            action_for(press(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Some(Action::ClearHistory)
        );
        assert_eq!(
            action_for(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(action_for(press(KeyCode::Esc, KeyModifiers::NONE)), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Char('x'), KeyModifiers::ALT)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for(release), None);
    }
}
