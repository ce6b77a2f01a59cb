//! Active piece: a shape template plus placement state and a fixed color.

use arrayvec::ArrayVec;

use crate::pieces::{rotated, Mask, ROTATIONS};
use crate::rng::{choose, RandomSource};
use crate::types::{spawn_column, Rgb, ShapeKind, PALETTE, SPAWN_ROW};

/// Upper bound on occupied cells per piece (every template is a tetromino)
pub const MAX_PIECE_CELLS: usize = 4;

/// Falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    rotation: u8,
    x: i32,
    y: i32,
    color: Rgb,
}

impl Piece {
    /// Create a piece with rotation 0 at (x, y)
    pub fn new(kind: ShapeKind, color: Rgb, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation: 0,
            x,
            y,
            color,
        }
    }

    /// Spawn a random piece at the spawn offset of a `width`-wide board.
    ///
    /// The shape is picked first, then the color, both uniformly.
    pub fn spawn<R: RandomSource + ?Sized>(source: &mut R, width: usize) -> Self {
        let kind = choose(source, &ShapeKind::ALL);
        let color = choose(source, &PALETTE);
        Self::new(kind, color, spawn_column(width), SPAWN_ROW)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Clockwise quarter turns applied, in `[0, 4)`
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Current rotated image, rebuilt from the template on every call
    pub fn image(&self) -> Mask {
        rotated(self.kind, self.rotation)
    }

    /// Absolute (x, y) of every occupied cell
    pub fn cells(&self) -> ArrayVec<(i32, i32), MAX_PIECE_CELLS> {
        self.image()
            .occupied()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Advance the rotation count by one quarter turn.
    ///
    /// Board legality is the game's concern, not the piece's.
    pub fn advance_rotation(&mut self) {
        self.rotation = (self.rotation + 1) % ROTATIONS;
    }

    pub(crate) fn set_rotation(&mut self, rotation: u8) {
        self.rotation = rotation % ROTATIONS;
    }

    pub(crate) fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}
