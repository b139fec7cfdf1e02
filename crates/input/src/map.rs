//! Key mapping from terminal events to move directions.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a direction.
///
/// Up/space/`.` is an explicit "no move" turn; unmapped keys return `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('.') => Some(Direction::None),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Direction::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Direction::Right)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Direction::Down)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(Direction::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(Direction::Right)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('J'))),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_no_move_and_unmapped_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Direction::None)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Direction::None)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
