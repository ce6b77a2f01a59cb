//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to a terminal backend.
//!
//! - `game_view` turns a `core::RenderSnapshot` into a framebuffer (pure)
//! - `renderer` flushes framebuffers through crossterm, diffing frames
//! - each board cell is 2 chars wide to compensate for glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use simple_tetris_core as core;
pub use simple_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
