use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::grid::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    TogglePause,
    Quit,
    None,
}

/// Maps a key press to what the game should do with it.
pub fn key_action(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Up => KeyAction::Steer(Direction::Up),
        KeyCode::Down => KeyAction::Steer(Direction::Down),
        KeyCode::Left => KeyAction::Steer(Direction::Left),
        KeyCode::Right => KeyAction::Steer(Direction::Right),
        KeyCode::Char(' ') => KeyAction::TogglePause,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}
