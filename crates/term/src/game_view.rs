//! GameView: maps a `core::RenderSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::RenderSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Cell;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Frame size (board plus border) in terminal cells
    pub fn frame_size(&self, snap: &RenderSnapshot) -> (u16, u16) {
        let w = (snap.width as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.height as u16).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &RenderSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Frozen cells with the active piece painted on top.
        for y in 0..snap.height as i32 {
            for x in 0..snap.width as i32 {
                match snap.visible_cell(x, y) {
                    Cell::Filled(color) => {
                        self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, color)
                    }
                    Cell::Empty => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RenderSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: PLAYFIELD_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, color: Rgb) {
        let style = CellStyle {
            fg: color,
            bg: PLAYFIELD_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &RenderSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECE", label);
        y = y.saturating_add(1);
        if let Some(active) = &snap.active {
            fb.put_str(panel_x, y, active.kind.as_str(), CellStyle { fg: active.color, ..value });
        }
        y = y.saturating_add(2);

        for line in ["← →  move", "↑    rotate", "↓    drop", "q    quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
