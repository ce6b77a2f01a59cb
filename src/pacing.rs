//! Gravity pacing owned by the driver.
//!
//! The game core has no clock. The driver counts rendered frames and asks for a
//! gravity step every `frames_per_step` frames.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityPacer {
    frames_per_step: u32,
    frame: u32,
}

impl GravityPacer {
    pub fn new(frames_per_step: u32) -> Self {
        Self {
            frames_per_step: frames_per_step.max(1),
            frame: 0,
        }
    }

    /// Count one frame; returns true when gravity is due.
    pub fn on_frame(&mut self) -> bool {
        self.frame += 1;
        if self.frame >= self.frames_per_step {
            self.frame = 0;
            return true;
        }
        false
    }

    pub fn frames_per_step(&self) -> u32 {
        self.frames_per_step
    }
}
