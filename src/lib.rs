//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them under `simple_tetris::{core,input,term,types}` and adds the
//! driver-side pieces: command-line configuration and gravity pacing.

pub mod cli;
pub mod pacing;

pub use simple_tetris_core as core;
pub use simple_tetris_input as input;
pub use simple_tetris_term as term;
pub use simple_tetris_types as types;
