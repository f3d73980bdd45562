use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::geometry::Direction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Turn(Direction),
    /// Freeze the snake in place without ending the game.
    Cancel,
    Quit,
}

impl Command {
    pub fn from_event(event: &Event) -> Option<Command> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Command::from_key_event(key),
            _ => None,
        }
    }

    pub fn from_key_event(key: &KeyEvent) -> Option<Command> {
        // Raw mode swallows SIGINT
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(Command::Turn(Direction::Up))
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(Command::Turn(Direction::Right))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(Command::Turn(Direction::Down))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(Command::Turn(Direction::Left))
            }
            KeyCode::Esc => Some(Command::Cancel),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_wasd_and_arrows() {
        let cases = [
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('d'), Direction::Right),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('W'), Direction::Up),
        ];

        for (code, direction) in cases {
            assert_eq!(
                Command::from_event(&press(code)),
                Some(Command::Turn(direction)),
                "key {:?}",
                code
            );
        }
    }

    #[test]
    fn test_escape_cancels() {
        assert_eq!(
            Command::from_event(&press(KeyCode::Esc)),
            Some(Command::Cancel)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            Command::from_event(&press(KeyCode::Char('q'))),
            Some(Command::Quit)
        );

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(Command::from_event(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn test_ignored_events() {
        assert_eq!(Command::from_event(&press(KeyCode::Char('x'))), None);
        assert_eq!(Command::from_event(&press(KeyCode::Char('c'))), None);
        assert_eq!(Command::from_event(&Event::Resize(80, 24)), None);
        assert_eq!(Command::from_event(&Event::FocusLost), None);

        let release = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Char('w'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        assert_eq!(Command::from_event(&release), None);
    }
}
