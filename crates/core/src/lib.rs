//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted source) produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run under any driver (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision checks and line clearing
//! - [`game`]: the play session: active piece, gravity, freezing, scoring
//! - [`piece`]: a shape template with position, rotation and color
//! - [`pieces`]: the seven shape templates and matrix rotation
//! - [`rng`]: injectable uniform-choice source (seeded or scripted)
//! - [`snapshot`]: read-only projection consumed by renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn picks a shape and a color uniformly
//! - **Rotation**: clockwise quarter turns in place, rejected if they collide (no wall kicks)
//! - **Gravity**: one row per tick; a piece that cannot fall is frozen immediately
//! - **Scoring**: clearing `n` rows with one piece scores `n²`
//! - **Game over**: a freshly spawned piece does not fit
//!
//! # Example
//!
//! ```
//! use simple_tetris_core::Game;
//! use simple_tetris_types::GameAction;
//!
//! // Create a game on the classic 10x20 board
//! let mut game = Game::new(10, 20, 12345);
//!
//! // Apply player actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // Let gravity run until the first piece settles
//! while game.tick() {}
//!
//! assert!(game.board().filled_count() > 0);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use simple_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{line_clear_points, FreezeEvent, Game};
pub use piece::Piece;
pub use pieces::{rotated, template, Mask};
pub use rng::{RandomSource, SequenceSource};
pub use snapshot::{ActiveSnapshot, RenderSnapshot};
