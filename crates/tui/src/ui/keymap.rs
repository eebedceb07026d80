use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Cancel,
    NextField,
    PrevField,
    Submit,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => AppAction::Quit,
            _ => AppAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::BackTab => AppAction::PrevField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Left => AppAction::Left,
        KeyCode::Right => AppAction::Right,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_and_ctrl_q_quit() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
    }

    #[test]
    fn plain_letters_are_text_input() {
        // 'q' must stay typeable in the purpose field
        assert_eq!(map_key(key(KeyCode::Char('q'))), AppAction::Input('q'));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT)),
            AppAction::Input('S')
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Tab)), AppAction::NextField);
        assert_eq!(map_key(key(KeyCode::BackTab)), AppAction::PrevField);
        assert_eq!(map_key(key(KeyCode::Enter)), AppAction::Submit);
        assert_eq!(map_key(key(KeyCode::Esc)), AppAction::Cancel);
        assert_eq!(map_key(key(KeyCode::F(1))), AppAction::None);
    }
}
