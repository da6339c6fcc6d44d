//! Key mapping from terminal events to game commands.

use crate::types::{Command, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a command.
pub fn handle_key_event(key: KeyEvent) -> Command {
    if should_quit(key) {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Unknown,
        KeyCode::Char(ch) => Command::from_char(ch),
        _ => Command::Unknown,
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
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Command::Move(Direction::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Command::Move(Direction::Right)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Command::Move(Direction::Up)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Command::Move(Direction::Down)
        );
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Command::Move(Direction::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Command::Move(Direction::Up)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Command::Move(Direction::Down)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('y'))),
            Command::ConfirmYes
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('N'))),
            Command::ConfirmNo
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Command::Restart
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Command::Unknown
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), Command::Unknown);
        // Ctrl-modified letters are not moves.
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            Command::Unknown
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
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
    }
}
