//! Pieces module - tetromino catalog and pivot rotation
//!
//! Each shape is four cell offsets around a pivot at `(0, 0)`. Rotation maps
//! every offset around that fixed pivot, not around the bounding-box centre,
//! so some pieces (notably O) shift by a cell when rotated. Collision checks
//! in the placement engine reject any result that does not fit.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece pivot
pub type Offset = (i16, i16);

/// Shape of a piece - 4 cell offsets from the pivot
pub type Shape = [Offset; 4];

/// Get the canonical spawn shape for a piece kind
pub fn shape_for(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        PieceKind::J => [(-1, 1), (0, 1), (0, 0), (0, -1)],
        PieceKind::L => [(1, 1), (0, 1), (0, 0), (0, -1)],
        PieceKind::S => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        PieceKind::Z => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::T => [(-1, 0), (0, 0), (0, 1), (1, 0)],
        PieceKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
    }
}

/// Rotate 90° clockwise: `(x, y) -> (-y, x)`
pub fn rotate_cw(shape: &Shape) -> Shape {
    shape.map(|(x, y)| (-y, x))
}

/// Rotate 90° counter-clockwise: `(x, y) -> (y, -x)`
pub fn rotate_ccw(shape: &Shape) -> Shape {
    shape.map(|(x, y)| (y, -x))
}

/// Axis-aligned bounds of a shape's offsets (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeBounds {
    pub min_x: i16,
    pub max_x: i16,
    pub min_y: i16,
    pub max_y: i16,
}

impl ShapeBounds {
    pub fn width(&self) -> i16 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> i16 {
        self.max_y - self.min_y + 1
    }
}

/// Compute the bounding box of a shape
pub fn bounds(shape: &Shape) -> ShapeBounds {
    let mut b = ShapeBounds {
        min_x: i16::MAX,
        max_x: i16::MIN,
        min_y: i16::MAX,
        max_y: i16::MIN,
    };
    for &(x, y) in shape {
        b.min_x = b.min_x.min(x);
        b.max_x = b.max_x.max(x);
        b.min_y = b.min_y.min(y);
        b.max_y = b.max_y.max(y);
    }
    b
}
