//! Command-line configuration for the terminal driver.

use std::time::Duration;

use clap::Parser;

use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, FRAME_MS, GRAVITY_FRAMES};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "simple-tetris", version, about = "Falling-block puzzle game for the terminal")]
pub struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH as u16, value_parser = clap::value_parser!(u16).range(4..=64))]
    pub width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT as u16, value_parser = clap::value_parser!(u16).range(4..=64))]
    pub height: u16,

    /// Seed for piece and color selection (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frame interval in milliseconds
    #[arg(long, default_value_t = FRAME_MS, value_parser = clap::value_parser!(u64).range(10..=1000))]
    pub frame_ms: u64,

    /// Frames between two gravity steps
    #[arg(long, default_value_t = GRAVITY_FRAMES, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub gravity_frames: u32,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH as u16,
            height: DEFAULT_BOARD_HEIGHT as u16,
            seed: None,
            frame_ms: FRAME_MS,
            gravity_frames: GRAVITY_FRAMES,
        }
    }
}

impl Args {
    pub fn board_size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
