//! Input sources for the game loop.
//!
//! [`TerminalInput`] blocks on crossterm key events (the terminal must be in
//! raw mode). [`LineInput`] reads one command per line from any reader, which
//! is how the game runs without a TTY.

use std::io::{self, BufRead};

use crossterm::event::{self, Event, KeyEventKind};

use crate::core::InputSource;
use crate::map::{handle_key_event, map_char};
use crate::types::InputEvent;

/// Blocking keyboard input from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    type Error = io::Error;

    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            if let Some(event) = self.poll_event()? {
                return Ok(event);
            }
        }
    }

    /// Blocks until a mapped key arrives or the terminal is resized.
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        loop {
            let key = match event::read()? {
                Event::Key(key) => key,
                Event::Resize(..) => return Ok(None),
                _ => continue,
            };
            // Held keys repeat the move; releases carry no event.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(event) = handle_key_event(key) {
                return Ok(Some(event));
            }
        }
    }
}

/// One command per line: a key character (`h`, `l`, `k`, ...) or an event
/// name (`left`, `hardDrop`, ...).
///
/// Blank and unknown lines are skipped. End of input reads as `Quit`.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Parse one line of text into an event.
pub fn parse_line(line: &str) -> Option<InputEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line == " " {
        return Some(InputEvent::HardDrop);
    }
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => map_char(c),
        (Some(_), Some(_)) => InputEvent::from_str(trimmed),
        _ => None,
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    type Error = io::Error;

    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(InputEvent::Quit);
            }
            if let Some(event) = parse_line(&self.line) {
                return Ok(event);
            }
        }
    }
}
