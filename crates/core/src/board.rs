//! Board module - manages the game grid
//!
//! The board is a width x height grid where each cell is empty or filled with
//! the color of a frozen piece. Uses a flat vector for cache locality; the
//! dimensions are fixed at construction and never change afterwards.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom). Row 0 is the spawn edge, row `height - 1` the floor.

use crate::pieces::Mask;
use crate::types::{Cell, Rgb};

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat vector of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Zero dimensions are raised to one so that every row is addressable.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled(_)))
    }

    /// Check whether `image` fits with its local origin at (x, y).
    ///
    /// Every occupied cell must have a column in `[0, width)` and a row below
    /// `height`. Rows above the top edge (negative) are not checked against the
    /// grid; rows inside the grid must land on empty cells. The missing upper
    /// row bound is part of the game rules and affects spawn/game-over timing.
    pub fn can_place(&self, image: &Mask, x: i32, y: i32) -> bool {
        image.occupied().all(|(dx, dy)| {
            let col = x + dx;
            let row = y + dy;
            if col < 0 || col as usize >= self.width || row >= self.height as i32 {
                return false;
            }
            row < 0 || !self.is_occupied(col, row)
        })
    }

    /// Paint the given absolute cells with `color`.
    ///
    /// Cells outside the grid are skipped. Returns how many were written.
    pub fn lock_cells(&mut self, cells: impl IntoIterator<Item = (i32, i32)>, color: Rgb) -> usize {
        cells
            .into_iter()
            .filter(|&(x, y)| self.set(x, y, Cell::Filled(color)))
            .count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_filled())
    }

    /// Clear all full rows and return how many were cleared.
    ///
    /// Equivalent to scanning top to bottom and, for each full row, removing it
    /// and inserting a fresh empty row at index 0. Implemented as a bottom-up
    /// two-pointer compaction with no allocation: surviving rows keep their
    /// relative order and sink, empty rows fill the top.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        let mut write_y = self.height;

        // Scan from bottom to top
        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(Cell::Empty);

        cleared
    }

    /// Borrow row `y`
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Get a reference to the internal cells vector
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Fill every cell of row `y` except the listed columns.
    pub fn fill_row_except(&mut self, y: i32, holes: &[i32], color: Rgb) {
        for x in 0..self.width as i32 {
            if !holes.contains(&x) {
                self.set(x, y, Cell::Filled(color));
            }
        }
    }
}
