//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::input::Cursor;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, ItemKind, Status};

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

/// A lightweight terminal renderer for the match-three board.
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

fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 70, 70),
        Color::Blue => Rgb::new(80, 130, 230),
        Color::Yellow => Rgb::new(230, 200, 80),
        Color::Green => Rgb::new(90, 200, 120),
        Color::Purple => Rgb::new(175, 95, 210),
    }
}

fn kind_glyph(kind: ItemKind) -> char {
    match kind {
        ItemKind::Normal => ' ',
        ItemKind::ColorBomb => '@',
        ItemKind::RadiusBomb => '*',
        ItemKind::LineBomb => '+',
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, game: &GameState, cursor: Cursor, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let columns = game.columns() as u16;
        let rows = game.rows() as u16;
        let board_px_w = columns * self.cell_w;
        let board_px_h = rows * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let empty = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
        };

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for column in 0..columns {
            for row in 0..rows {
                let coord = (column as i8, row as i8);
                let x = start_x + 1 + column * self.cell_w;
                let y = start_y + 1 + row * self.cell_h;

                match game.board().get(coord) {
                    Some(item) => {
                        let mut style = CellStyle {
                            fg: Rgb::new(20, 20, 20),
                            bg: color_rgb(item.color),
                            bold: item.kind.is_bomb(),
                        };
                        if game.grabbed() == Some(coord) {
                            style.fg = Rgb::new(255, 255, 255);
                            style.bold = true;
                        }
                        fb.fill_rect(x, y, self.cell_w, self.cell_h, kind_glyph(item.kind), style);
                    }
                    None => {
                        fb.fill_rect(x, y, self.cell_w, self.cell_h, '·', empty);
                    }
                }

                if cursor.coord() == coord {
                    // Bracket the cell under the cursor.
                    let mark = CellStyle {
                        fg: Rgb::new(255, 255, 255),
                        bg: fb.get(x, y).map(|c| c.style.bg).unwrap_or_default(),
                        bold: true,
                    };
                    if let Some(cell) = fb.get(x, y) {
                        fb.set(x, y, if cell.ch == ' ' { '[' } else { cell.ch }, mark);
                    }
                }
            }
        }

        self.draw_status_line(&mut fb, game, start_x, start_y + frame_h);
        fb
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 0..w {
            fb.set(x + dx, y, '─', style);
            fb.set(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.set(x, y + dy, '│', style);
            fb.set(x + w - 1, y + dy, '│', style);
        }
        fb.set(x, y, '┌', style);
        fb.set(x + w - 1, y, '┐', style);
        fb.set(x, y + h - 1, '└', style);
        fb.set(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, game: &GameState, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(160, 160, 170),
            bg: Rgb::new(0, 0, 0),
            bold: game.status() == Status::Collapsing,
        };
        let text = match game.status() {
            Status::Collapsing => "COLLAPSING...",
            Status::Idle if game.columns() == 0 => "DEALING IN...",
            Status::Idle => "arrows move · space grab/drop · r redeal · q quit",
        };
        fb.draw_text(x, y, text, style);
    }
}
