//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game has
//! no DAS/ARR of its own: terminal key repeat is the only auto-repeat.

pub mod map;

pub use simple_tetris_types as types;

pub use map::{handle_key_event, should_quit};
