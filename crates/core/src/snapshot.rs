use arrayvec::ArrayVec;

use crate::piece::{Piece, MAX_PIECE_CELLS};
use crate::types::{Cell, Rgb, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub rotation: u8,
    pub color: Rgb,
    pub x: i32,
    pub y: i32,
    /// Absolute (x, y) of every occupied cell
    pub cells: ArrayVec<(i32, i32), MAX_PIECE_CELLS>,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            color: value.color(),
            x: value.x(),
            y: value.y(),
            cells: value.cells(),
        }
    }
}

/// Read-only projection of a game for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RenderSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major grid (y * width + x)
    pub grid: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub game_over: bool,
}

impl RenderSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.grid.clear();
        self.active = None;
        self.score = 0;
        self.game_over = false;
    }

    /// Grid cell at (x, y); anything outside the grid reads as empty
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Cell::Empty;
        }
        self.grid
            .get(y as usize * self.width + x as usize)
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// What a renderer should paint at (x, y): the active piece on top of the grid
    pub fn visible_cell(&self, x: i32, y: i32) -> Cell {
        if let Some(active) = &self.active {
            if active.cells.contains(&(x, y)) {
                return Cell::Filled(active.color);
            }
        }
        self.cell(x, y)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
