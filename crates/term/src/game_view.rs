//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Banner text for a lock that cleared `lines` rows.
pub fn clear_label(lines: usize) -> Option<&'static str> {
    match lines {
        1 => Some("SINGLE"),
        2 => Some("DOUBLE"),
        3 => Some("TRIPLE"),
        4.. => Some("TETRIS"),
        _ => None,
    }
}

/// Board and side panel layout.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            show_ghost: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `banner` is a transient message (e.g. a line clear label) drawn under
    /// the score.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        banner: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let well_w = (BOARD_WIDTH as u16) * self.cell_w;
        let well_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;
        let origin_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;
        let layout = Layout {
            origin_x,
            origin_y,
            frame_w,
            frame_h,
        };

        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            well_w,
            well_h,
            ' ',
            CellStyle::new(WELL_BG, WELL_BG),
        );
        draw_border(
            fb,
            origin_x,
            origin_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_block(fb, &layout, x as i16, y as i16, *kind, false),
                    None => self.fill_cell(
                        fb,
                        &layout,
                        x as i16,
                        y as i16,
                        '·',
                        CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim(),
                    ),
                }
            }
        }

        if let Some(active) = snap.active {
            let piece = active.piece();
            if self.show_ghost {
                if let Some(ghost) = snap.ghost.filter(|g| *g != active.position) {
                    self.draw_piece(fb, &layout, piece, ghost, true);
                }
            }
            self.draw_piece(fb, &layout, piece, active.position, false);
        }

        self.draw_side_panel(fb, snap, banner, viewport, &layout);

        let overlay = match snap.status {
            GameStatus::Idle => Some("PRESS R TO START"),
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
            GameStatus::Playing => None,
        };
        if let Some(text) = overlay {
            draw_overlay_text(fb, &layout, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        banner: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, banner, viewport, &mut fb);
        fb
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        piece: Piece,
        at: Position,
        ghost: bool,
    ) {
        for (dx, dy) in piece.shape().cells() {
            let x = at.x as i16 + dx as i16;
            let y = at.y as i16 + dy as i16;
            self.draw_block(fb, layout, x, y, piece.kind, ghost);
        }
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        x: i16,
        y: i16,
        kind: PieceKind,
        ghost: bool,
    ) {
        let color = Rgb::from(kind.color_rgb());
        let (ch, style) = if ghost {
            ('░', CellStyle::new(color.scaled(3, 5), WELL_BG).dim())
        } else {
            ('█', CellStyle::new(color, WELL_BG).bold())
        };
        self.fill_cell(fb, layout, x, y, ch, style);
    }

    /// Fill one board cell; cells outside the well (e.g. above row 0) are skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        x: i16,
        y: i16,
        ch: char,
        style: CellStyle,
    ) {
        if !(0..BOARD_WIDTH as i16).contains(&x) || !(0..BOARD_HEIGHT as i16).contains(&y) {
            return;
        }
        let px = layout.origin_x + 1 + x as u16 * self.cell_w;
        let py = layout.origin_y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        banner: Option<&str>,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout.origin_x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = layout.origin_y;
        let counters = [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)];
        for (name, number) in counters {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y = y.saturating_add(3);
        }

        if let Some(text) = banner {
            fb.put_str(panel_x, y, text, CellStyle::new(Rgb::new(255, 215, 0), PANEL_BG).bold());
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        match snap.next {
            Some(kind) => {
                let style = CellStyle::new(Rgb::from(kind.color_rgb()), PANEL_BG);
                let shape = Piece::new(kind).shape();
                for (dx, dy) in shape.cells() {
                    let px = panel_x + dx as u16 * 2;
                    let py = y + dy as u16;
                    fb.put_str(px, py, "██", style);
                }
                y = y.saturating_add(shape.height() as u16 + 1);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
                y = y.saturating_add(2);
            }
        }

        let hint = CellStyle::new(Rgb::new(140, 140, 150), PANEL_BG).dim();
        for line in ["←→ move  ↓ down", "↑ rotate  ␣ drop", "p pause  r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    origin_x: u16,
    origin_y: u16,
    frame_w: u16,
    frame_h: u16,
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

fn draw_overlay_text(fb: &mut FrameBuffer, layout: &Layout, text: &str) {
    let mid_y = layout.origin_y.saturating_add(layout.frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = layout
        .origin_x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
    fb.put_str(x, mid_y, text, CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold());
}
