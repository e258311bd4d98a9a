//! Grid module - the occupancy matrix
//!
//! The grid is `cols x rows` booleans, `true` meaning occupied.
//! Uses a flat vector in row-major order (`y * cols + x`) for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Anything outside the grid reads as occupied. That is how walls and the
//! floor stop a piece: there is no separate bounds check.

use crate::types::GridConfig;

/// The occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: u16,
    rows: u16,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(config: GridConfig) -> Self {
        let len = config.cols() as usize * config.rows() as usize;
        Self {
            cols: config.cols(),
            rows: config.rows(),
            cells: vec![false; len],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// True if (x, y) is outside the grid or the stored cell is occupied
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        match self.index(x, y) {
            Some(idx) => self.cells[idx],
            None => true,
        }
    }

    /// Write a cell.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the grid. Callers validate coordinates
    /// through [`Grid::is_occupied`] first, so reaching this is a bug.
    pub fn set_occupied(&mut self, x: i16, y: i16, occupied: bool) {
        let Some(idx) = self.index(x, y) else {
            panic!(
                "set_occupied({}, {}) outside {}x{} grid",
                x, y, self.cols, self.rows
            );
        };
        self.cells[idx] = occupied;
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: u16) -> &[bool] {
        let width = self.cols as usize;
        let start = y as usize * width;
        &self.cells[start..start + width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: u16) -> bool {
        if y >= self.rows {
            return false;
        }
        self.row(y).iter().all(|&cell| cell)
    }

    /// Remove every full row and shift the rows above it down.
    ///
    /// Empty rows are inserted at the top. Rows that survive keep their
    /// relative order. Returns the number of rows removed.
    pub fn clear_completed_rows(&mut self) -> usize {
        let width = self.cols as usize;
        let mut cleared = 0;
        let mut write_y = self.rows as usize;

        // Scan from bottom to top, compacting surviving rows downward
        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y as u16) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Everything above the last written row is fresh and empty
        self.cells[..write_y * width].fill(false);

        cleared
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}
