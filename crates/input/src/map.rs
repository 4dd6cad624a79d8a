//! Key mapping from terminal events to simulation actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_life_types::LifeAction;

/// Map keyboard input to simulation actions.
pub fn handle_key_event(key: KeyEvent) -> Option<LifeAction> {
    match key.code {
        // Cursor movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(LifeAction::CursorLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(LifeAction::CursorRight),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(LifeAction::CursorUp),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(LifeAction::CursorDown),

        // Cell editing
        KeyCode::Enter | KeyCode::Char('t') | KeyCode::Char('T') => Some(LifeAction::ToggleCell),

        // Simulation control
        KeyCode::Char(' ') => Some(LifeAction::TogglePause),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(LifeAction::Step),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LifeAction::Randomize),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(LifeAction::Clear),

        // Speed
        KeyCode::Char('+') | KeyCode::Char('=') => Some(LifeAction::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(LifeAction::SlowDown),

        _ => None,
    }
}

/// Check if key should quit the harness.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(LifeAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(LifeAction::CursorRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(LifeAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(LifeAction::CursorDown)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(LifeAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(LifeAction::CursorDown)
        );
    }

    #[test]
    fn test_simulation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(LifeAction::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(LifeAction::Step)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(LifeAction::Randomize)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('C'))),
            Some(LifeAction::Clear)
        );
    }

    #[test]
    fn test_edit_and_speed_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(LifeAction::ToggleCell)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('t'))),
            Some(LifeAction::ToggleCell)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(LifeAction::SpeedUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(LifeAction::SlowDown)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
    }
}
