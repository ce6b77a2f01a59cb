//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so they
//! can be shared by the simulation, the terminal view and the driver.
//!
//! # Board Dimensions
//!
//! The classic playfield is 10 columns by 20 rows, but dimensions are a
//! construction parameter of the game, not a hard constraint:
//!
//! - **Width**: `DEFAULT_BOARD_WIDTH` columns (indexed left to right)
//! - **Height**: `DEFAULT_BOARD_HEIGHT` rows (row 0 is the top / spawn edge)
//! - **Spawn position**: (`spawn_column(width)`, `SPAWN_ROW`), i.e. (3, 0) on a 10-wide board
//!
//! # Pacing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 100 | Frame clock of the driver (10 Hz) |
//! | `GRAVITY_FRAMES` | 5 | Frames per gravity step (~2 steps per second) |
//!
//! # Examples
//!
//! ```
//! use simple_tetris_types::{spawn_column, Cell, ShapeKind, PALETTE, DEFAULT_BOARD_WIDTH};
//!
//! assert_eq!(spawn_column(DEFAULT_BOARD_WIDTH), 3);
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert!(Cell::Filled(PALETTE[0]).is_filled());
//! assert!(Cell::Empty.is_empty());
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Row at which every new piece spawns (the top edge)
pub const SPAWN_ROW: i32 = 0;

/// Driver frame interval in milliseconds (10 Hz)
pub const FRAME_MS: u64 = 100;

/// Number of frames between two gravity steps
pub const GRAVITY_FRAMES: u32 = 5;

/// Spawn column for a board of the given width.
///
/// Two columns left of the horizontal center, clamped at the left wall.
pub const fn spawn_column(width: usize) -> i32 {
    (width / 2).saturating_sub(2) as i32
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors a piece may be painted with.
///
/// There is no "empty" entry: emptiness is [`Cell::Empty`].
pub const PALETTE: [Rgb; 6] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 165, 0),
    Rgb::new(128, 0, 128),
];

/// A cell on the game board
///
/// - `Empty`: nothing frozen here
/// - `Filled(color)`: a frozen piece cell painted with `color`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Rgb),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    /// Color of a filled cell
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// The seven canonical shape templates
///
/// - **I**: 1x4 bar
/// - **O**: 2x2 square
/// - **S**, **Z**: 2x3 skew pieces (mirror images)
/// - **T**: 2x3 tee
/// - **L**, **J**: 2x3 hooks (mirror images)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    S,
    Z,
    T,
    L,
    J,
}

impl ShapeKind {
    /// Every kind, in the order the random source indexes them.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Single-letter name
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::I.as_str(), "I");
    /// assert_eq!(ShapeKind::J.as_str(), "J");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
        }
    }
}

/// Discrete player intents forwarded by the driver.
///
/// Gravity is not an action: the driver calls `Game::tick` on its own cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (same as a gravity step)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
}

impl GameAction {
    /// camelCase name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}
