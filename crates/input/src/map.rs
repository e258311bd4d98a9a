//! Key mapping from terminal events to input events.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an input event.
///
/// Quit keys (`q`, `Esc`, `Ctrl-C`) map to [`InputEvent::Quit`].
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Char(c) => map_char(c),

        // Movement
        KeyCode::Left => Some(InputEvent::Left),
        KeyCode::Right => Some(InputEvent::Right),
        KeyCode::Down => Some(InputEvent::SoftDrop),

        // Rotation
        KeyCode::Up => Some(InputEvent::RotateCw),

        KeyCode::Enter => Some(InputEvent::HardDrop),

        _ => None,
    }
}

/// Map a single key character (case-insensitive).
///
/// Shared by the terminal and the line-based input sources.
pub fn map_char(c: char) -> Option<InputEvent> {
    match c.to_ascii_lowercase() {
        'h' | 'a' => Some(InputEvent::Left),
        'l' | 'd' => Some(InputEvent::Right),
        'j' | 's' => Some(InputEvent::SoftDrop),
        'k' | 'w' | 'x' => Some(InputEvent::RotateCw),
        'z' | 'y' => Some(InputEvent::RotateCcw),
        ' ' => Some(InputEvent::HardDrop),
        'q' => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
