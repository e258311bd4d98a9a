//! Collaborator seams for the game loop.
//!
//! The loop pulls one [`InputEvent`] per turn from an [`InputSource`] and
//! hands a [`GameSnapshot`] to a [`Renderer`] after every turn. Both are
//! implemented outside the core (terminal, text, scripted).

use std::collections::VecDeque;
use std::convert::Infallible;

use crate::snapshot::GameSnapshot;
use crate::types::InputEvent;

/// Produces one input event per turn.
pub trait InputSource {
    type Error;

    fn next_event(&mut self) -> Result<InputEvent, Self::Error>;

    /// Like [`next_event`](Self::next_event), but may return `None` when the
    /// current frame has to be presented again without a turn (for example
    /// after the terminal was resized).
    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        self.next_event().map(Some)
    }
}

/// Presents a frame after each turn.
pub trait Renderer {
    type Error;

    fn render(&mut self, snap: &GameSnapshot) -> Result<(), Self::Error>;
}

/// Feeds a fixed list of events, then `Quit` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Events not yet delivered
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    type Error = Infallible;

    fn next_event(&mut self) -> Result<InputEvent, Infallible> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Quit))
    }
}

/// Renderer that keeps every frame it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<GameSnapshot>,
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn render(&mut self, snap: &GameSnapshot) -> Result<(), Infallible> {
        self.frames.push(snap.clone());
        Ok(())
    }
}
