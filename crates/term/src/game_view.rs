//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Tile, BOX_COLOR};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GameStatus;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_WIDTH: u16 = 22;

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

/// A lightweight terminal renderer for the Tetris 2048 grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for a four digit tile plus a gap.
        Self {
            cell_w: 5,
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

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_px_w = (snap.width as u16).saturating_mul(self.cell_w);
        let grid_px_h = (snap.height as u16).saturating_mul(self.cell_h);
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let total_w = frame_w + 2 + PANEL_WIDTH;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(BOX_COLOR, Rgb::new(0, 0, 0));
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            grid_px_w,
            grid_px_h,
            ' ',
            CellStyle::new(PLAY_BG, PLAY_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.height {
            for col in 0..snap.width {
                match snap.tile_at(row, col) {
                    Some(tile) => self.draw_tile(fb, start_x, start_y, snap.height, row, col, tile),
                    None => self.draw_empty_cell(fb, start_x, start_y, snap.height, row, col),
                }
            }
        }

        // Cells above the ceiling are not drawn.
        if let Some(active) = &snap.active {
            for (pos, tile) in &active.cells {
                if pos.x < 0 || pos.y < 0 {
                    continue;
                }
                let (row, col) = (pos.y as usize, pos.x as usize);
                if row < snap.height && col < snap.width {
                    self.draw_tile(fb, start_x, start_y, snap.height, row, col, *tile);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        match snap.status {
            GameStatus::Paused | GameStatus::GameOver | GameStatus::Victory => {
                draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, snap.status.heading());
            }
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal origin of grid cell (row, col); row 0 is the bottom line.
    fn cell_origin(
        &self,
        start_x: u16,
        start_y: u16,
        height: usize,
        row: usize,
        col: usize,
    ) -> (u16, u16) {
        let screen_row = (height - 1 - row) as u16;
        (
            start_x + 1 + (col as u16) * self.cell_w,
            start_y + 1 + screen_row * self.cell_h,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        height: usize,
        row: usize,
        col: usize,
        tile: Tile,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, height, row, col);
        let colors = tile.colors();
        let style = CellStyle::new(colors.foreground, colors.background).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let mut digits = [0u8; 10];
        let label = format_value(tile.value(), &mut digits);
        fb.put_str_centered(px, self.cell_w, py + (self.cell_h - 1) / 2, label, style);
    }

    fn draw_empty_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        height: usize,
        row: usize,
        col: usize,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, height, row, col);
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: PLAY_BG,
            bold: false,
            dim: true,
        };
        fb.put_char(px + self.cell_w / 2, py + (self.cell_h - 1) / 2, '·', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = CellStyle {
            dim: true,
            ..value
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 1;
        fb.put_str(panel_x, y, "GOAL >", hint);
        fb.put_u32(panel_x + 7, y, snap.victory_score, hint);
        y += 2;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if let Some(next) = &snap.next {
            let tiles = &next.tiles;
            for (r, c, tile) in tiles.occupied() {
                let colors = tile.colors();
                let style = CellStyle::new(colors.foreground, colors.background).bold();
                let px = panel_x + (c as u16) * self.cell_w;
                let py = y + r as u16;
                fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
                let mut digits = [0u8; 10];
                let text = format_value(tile.value(), &mut digits);
                fb.put_str_centered(px, self.cell_w, py, text, style);
            }
            y += tiles.rows() as u16;
        }
        y += 1;

        for line in [
            "Move  = ←/→ a/d",
            "Down  = ↓ s",
            "Rotate = ↑ w space",
            "Hard Drop = h/n",
            "Pause = p",
            "Quit  = q",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str_centered(start_x, frame_w, start_y.saturating_add(frame_h / 2), text, style);
}

/// Decimal text of `value` without allocating.
fn format_value(value: u32, buf: &mut [u8; 10]) -> &str {
    let mut n = value;
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    std::str::from_utf8(&buf[i..]).unwrap_or("?")
}
