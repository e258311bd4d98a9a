//! TerminalScreen: the game loop's renderer for an interactive terminal.

use anyhow::Result;

use crate::core::{GameSnapshot, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Owns the terminal session and redraws the playfield every turn.
pub struct TerminalScreen {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    active: bool,
}

impl TerminalScreen {
    pub fn new(view: GameView) -> Self {
        Self {
            term: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
            active: false,
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()?;
        self.active = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.term.exit()
    }
}

impl Renderer for TerminalScreen {
    type Error = anyhow::Error;

    fn render(&mut self, snap: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
