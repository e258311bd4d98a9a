//! Placement engine - spawn, collision-checked moves, hard drop
//!
//! The active piece is always written into the grid. A move vacates the
//! piece, checks the candidate cells, and then either commits the candidate
//! or writes the original cells back. After every call exactly one placement
//! of the piece is marked: never both, never neither.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::pieces::{bounds, rotate_ccw, rotate_cw, shape_for, Shape};
use crate::types::{MoveKind, PieceKind};

/// The active piece: a shape plus its grid-absolute anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    /// Absolute grid cells (`offset + anchor` for each offset)
    pub fn cells(&self) -> [(i16, i16); 4] {
        self.shape.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Distinct rows covered by the piece, top to bottom
    pub fn rows(&self) -> ArrayVec<i16, 4> {
        let mut rows: ArrayVec<i16, 4> = self.cells().iter().map(|&(_, y)| y).collect();
        rows.sort_unstable();
        let mut out = ArrayVec::new();
        for y in rows {
            if out.last() != Some(&y) {
                out.push(y);
            }
        }
        out
    }

    /// Candidate piece for a move, before any collision check
    pub fn moved(&self, kind: MoveKind) -> Piece {
        match kind {
            MoveKind::RotateCw => Piece {
                shape: rotate_cw(&self.shape),
                ..*self
            },
            MoveKind::RotateCcw => Piece {
                shape: rotate_ccw(&self.shape),
                ..*self
            },
            _ => {
                let (dx, dy) = kind.delta();
                Piece {
                    x: self.x + dx,
                    y: self.y + dy,
                    ..*self
                }
            }
        }
    }
}

/// Result of [`apply_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece as it now stands on the grid (the original if blocked)
    pub piece: Piece,
    pub moved: bool,
}

/// Anchor that centres a shape horizontally with its top cell on row 0.
///
/// Centring uses the shape's bounding width, so it holds for any rotation.
pub fn spawn_anchor(cols: u16, shape: &Shape) -> (i16, i16) {
    let b = bounds(shape);
    let padding = (cols as i16 - b.width()) / 2;
    (-b.min_x + padding, -b.min_y)
}

fn is_available(grid: &Grid, cells: &[(i16, i16)]) -> bool {
    cells.iter().all(|&(x, y)| !grid.is_occupied(x, y))
}

fn write_cells(grid: &mut Grid, cells: &[(i16, i16)], occupied: bool) {
    for &(x, y) in cells {
        grid.set_occupied(x, y, occupied);
    }
}

/// Place a fresh piece of `kind` at its spawn position.
///
/// Returns `None` when any spawn cell is taken: the board is full at the
/// top and the game is over. The grid is left untouched in that case.
pub fn spawn(grid: &mut Grid, kind: PieceKind) -> Option<Piece> {
    let shape = shape_for(kind);
    let (x, y) = spawn_anchor(grid.cols(), &shape);
    let piece = Piece { kind, shape, x, y };

    let cells = piece.cells();
    if !is_available(grid, &cells) {
        return None;
    }
    write_cells(grid, &cells, true);
    Some(piece)
}

/// Try one move of the active piece, committing it or rolling back.
///
/// A blocked move is not an error: the grid is left as it was and the
/// original piece comes back with `moved == false`.
pub fn apply_move(grid: &mut Grid, piece: Piece, kind: MoveKind) -> MoveOutcome {
    let old = piece.cells();
    write_cells(grid, &old, false);

    let candidate = piece.moved(kind);
    let new = candidate.cells();

    if !is_available(grid, &new) {
        write_cells(grid, &old, true);
        return MoveOutcome {
            piece,
            moved: false,
        };
    }

    write_cells(grid, &new, true);
    MoveOutcome {
        piece: candidate,
        moved: true,
    }
}

/// Drop the piece straight down until it is blocked.
///
/// Returns the landed piece and the number of rows it fell. At most
/// `rows` moves are attempted.
pub fn hard_drop(grid: &mut Grid, mut piece: Piece) -> (Piece, u16) {
    let mut distance = 0;
    for _ in 0..grid.rows() {
        let outcome = apply_move(grid, piece, MoveKind::TranslateDown);
        if !outcome.moved {
            break;
        }
        piece = outcome.piece;
        distance += 1;
    }
    (piece, distance)
}
