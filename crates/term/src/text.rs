//! Plain-text playfield: `##` walls, `[]` for occupied cells, and a score
//! line under the floor.
//!
//! ```text
//! ##  []    ##
//! ##[][][]  ##
//! ############
//!   Score: 9
//! ```

use std::io::{self, Write};

use crate::core::{GameSnapshot, Renderer};

pub const WALL: &str = "##";
pub const SQUARE: &str = "[]";
pub const EMPTY: &str = "  ";

const SCORE_LABEL: &str = "Score:";

/// Render one frame as text, one line per grid row.
pub fn render_text(snap: &GameSnapshot) -> String {
    let cols = snap.cols as usize;
    let mut out = String::with_capacity((cols + 2) * 2 * (snap.rows as usize + 2));

    for y in 0..snap.rows {
        out.push_str(WALL);
        for x in 0..snap.cols {
            out.push_str(if snap.is_occupied(x, y) { SQUARE } else { EMPTY });
        }
        out.push_str(WALL);
        out.push('\n');
    }

    for _ in 0..cols + 2 {
        out.push_str(WALL);
    }
    out.push('\n');

    // Score is right-aligned with the inner edge of the right wall.
    let score = snap.score.to_string();
    let pad = (2 * cols).saturating_sub(SCORE_LABEL.len() + score.len());
    out.push_str(EMPTY);
    out.push_str(SCORE_LABEL);
    out.extend(std::iter::repeat(' ').take(pad));
    out.push_str(&score);
    out.push('\n');

    if snap.game_over {
        out.push_str(EMPTY);
        out.push_str("Game over\n");
    }
    out
}

/// Writes every frame as text to a stream, separated by a blank line.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, snap: &GameSnapshot) -> io::Result<()> {
        self.out.write_all(render_text(snap).as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}
