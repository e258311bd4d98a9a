//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw. Later
//! frames only emit the runs of cells that changed since the previous one.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer writing to any sink. Raw mode is still toggled on the
    /// process terminal by [`enter`](Self::enter) and [`exit`](Self::exit).
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. The renderer
    /// diffs against the previous frame, then swaps buffers so the caller can
    /// reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut enc = Encoder::new(&mut self.buf);
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                enc.diff(&prev, fb)?;
                prev
            }
            Some(mut prev) => {
                enc.full(fb)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                enc.full(fb)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        enc.finish()?;
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Queues crossterm commands, emitting style changes only when the style
/// differs from the previous cell written.
struct Encoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Encoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn full(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        for y in 0..fb.height() {
            self.run(0, y, fb.row(y))?;
        }
        Ok(())
    }

    /// Both frames must have the same size.
    fn diff(&mut self, prev: &FrameBuffer, next: &FrameBuffer) -> Result<()> {
        for y in 0..next.height() {
            let row = next.row(y);
            for (start, end) in changed_runs(prev.row(y), row) {
                self.run(start as u16, y, &row[start..end])?;
            }
        }
        Ok(())
    }

    fn run(&mut self, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                self.apply_style(cell.style)?;
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.out
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?
            .queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Half-open column ranges where two equally long rows differ.
fn changed_runs<'r>(
    prev: &'r [Cell],
    next: &'r [Cell],
) -> impl Iterator<Item = (usize, usize)> + 'r {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < next.len() && prev[x] == next[x] {
            x += 1;
        }
        if x == next.len() {
            return None;
        }
        let start = x;
        while x < next.len() && prev[x] != next[x] {
            x += 1;
        }
        Some((start, x))
    })
}
