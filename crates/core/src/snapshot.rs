use crate::placement::Piece;
use crate::types::PieceKind;

/// Read-only copy of the active piece for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [(i16, i16); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            cells: value.cells(),
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// `cells` already include the active piece, since the grid always holds it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub cols: u16,
    pub rows: u16,
    /// Row-major occupancy, `rows * cols` entries.
    pub cells: Vec<bool>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Occupancy of an in-bounds cell; out of bounds reads as empty here.
    pub fn is_occupied(&self, x: u16, y: u16) -> bool {
        if x >= self.cols || y >= self.rows {
            return false;
        }
        self.cells[y as usize * self.cols as usize + x as usize]
    }

    /// True if (x, y) belongs to the active piece.
    pub fn is_active(&self, x: u16, y: u16) -> bool {
        self.active.is_some_and(|a| {
            a.cells
                .iter()
                .any(|&(cx, cy)| cx == x as i16 && cy == y as i16)
        })
    }
}
