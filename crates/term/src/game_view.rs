//! GameView: maps a `GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use blockfall_core::GameState;

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_W: u16 = 12;

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render a state into an existing framebuffer.
    ///
    /// Allocation-free; callers reuse one framebuffer across frames.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let full_rows = state.full_rows();
        for (y, row) in state.grid().rows().enumerate() {
            let blinking = full_rows.contains(&y);
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(kind) => {
                        let mut style = shape_style(*kind);
                        if blinking {
                            style = style.blink();
                        }
                        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
                    }
                    None => {
                        let dot = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
                        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', dot);
                    }
                }
            }
        }

        self.draw_side_panel(fb, state, viewport, start_x, start_y, frame_w);

        if state.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
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

    #[allow(clippy::too_many_arguments)]
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
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "CELLS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.grid().occupied_count() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FULL ROWS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.full_rows().len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        let dim = value.dim();
        for line in ["←/h  left", "→/l  right", "↓/j  down", "q    quit"] {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
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
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn shape_style(kind: ShapeKind) -> CellStyle {
    let fg = match kind {
        ShapeKind::I => Rgb::new(80, 220, 220),
        ShapeKind::O => Rgb::new(240, 220, 80),
        ShapeKind::T => Rgb::new(200, 120, 220),
        ShapeKind::S => Rgb::new(100, 220, 120),
        ShapeKind::Z => Rgb::new(220, 80, 80),
        ShapeKind::J => Rgb::new(80, 120, 220),
        ShapeKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::new(fg, PLAY_BG).bold()
}
