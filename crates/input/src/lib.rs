//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`] and provides
//! the input sources the game loop polls: one event per turn, read from the
//! terminal or from lines of text.

pub mod map;
pub mod source;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use map::{handle_key_event, map_char, should_quit};
pub use source::{parse_line, LineInput, TerminalInput};
