//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GameSummary, SessionStatus, GRID_HEIGHT, GRID_WIDTH};

/// Preview box size in cells (fits every spawn shape)
const PREVIEW_CELLS: u16 = 4;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
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

/// Modal dialog drawn over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// "Really quit?" prompt.
    ConfirmExit,
    /// Final results of a finished game.
    GameOver(GameSummary),
}

enum DialogLine<'a> {
    Title(&'a str),
    Stat(&'a str, u32),
    Hint(&'a str),
}

impl DialogLine<'_> {
    fn width(&self) -> u16 {
        match self {
            DialogLine::Title(s) | DialogLine::Hint(s) => s.chars().count() as u16,
            DialogLine::Stat(label, value) => label.chars().count() as u16 + 1 + digit_count(*value),
        }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_landing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            show_landing: true,
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

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Toggle the dotted landing preview under the current piece.
    pub fn with_landing_preview(mut self, show: bool) -> Self {
        self.show_landing = show;
        self
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn board_frame_size(&self) -> (u16, u16) {
        (
            (GRID_WIDTH as u16) * self.cell_w + 2,
            (GRID_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_overlay(snap, None, viewport, fb);
    }

    pub fn render_into_with_overlay(
        &self,
        snap: &GameSnapshot,
        overlay: Option<&Overlay>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.board_frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            bg,
        );
        fb.draw_box(start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => {
                        self.draw_block(fb, start_x + 1, start_y + 1, x as u16, y as u16, *color)
                    }
                    None => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Landing preview.
        if let (true, Some(landing_y)) = (self.show_landing, snap.landing_y) {
            let style = CellStyle::new(Rgb::new(140, 140, 140), BOARD_BG).dim();
            let current = &snap.current;
            for (dx, dy) in current.shape.occupied() {
                if let Some((x, y)) = on_board(current.x + dx, landing_y + dy) {
                    self.fill_cell_rect(fb, start_x, start_y, x, y, '░', style);
                }
            }
        }

        // Current piece; cells above the top edge are not drawn.
        for (x, y) in snap.current.cells() {
            if let Some((x, y)) = on_board(x, y) {
                self.draw_block(fb, start_x + 1, start_y + 1, x, y, snap.current.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match overlay {
            Some(Overlay::ConfirmExit) => {
                let lines = [
                    DialogLine::Title("QUIT GAME?"),
                    DialogLine::Hint("Y quit  N back"),
                ];
                self.draw_dialog(fb, start_x, start_y, frame_w, frame_h, &lines);
            }
            Some(Overlay::GameOver(summary)) => {
                let lines = [
                    DialogLine::Title("GAME OVER"),
                    DialogLine::Stat("SCORE", summary.score),
                    DialogLine::Stat("LINES", summary.lines),
                    DialogLine::Stat("LEVEL", summary.level),
                    DialogLine::Hint("R new game"),
                ];
                self.draw_dialog(fb, start_x, start_y, frame_w, frame_h, &lines);
            }
            None => {
                let text = match snap.status {
                    SessionStatus::Idle => Some("PRESS S TO START"),
                    SessionStatus::Paused => Some("PAUSED"),
                    SessionStatus::GameOver => Some("GAME OVER"),
                    SessionStatus::Running => None,
                };
                if let Some(text) = text {
                    self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_overlay(snap, None, viewport)
    }

    pub fn render_with_overlay(
        &self,
        snap: &GameSnapshot,
        overlay: Option<&Overlay>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_overlay(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    /// Draw one block with a lit left edge and a shaded right edge.
    ///
    /// `origin_x`/`origin_y` is the top-left of the cell area (inside any border).
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        color: Color,
    ) {
        let base = Rgb::from(color);
        let px = origin_x + x * self.cell_w;
        let py = origin_y + y * self.cell_h;
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let fg = if dx == 0 {
                    base.scale(5, 4)
                } else if dx + 1 == self.cell_w {
                    base.scale(3, 4)
                } else {
                    base
                };
                let style = CellStyle::new(fg, BOARD_BG).bold();
                fb.put_char(px + dx, py + dy, '█', style);
            }
        }
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

    /// Draw the upcoming piece centred in a bordered box; returns the box height.
    fn draw_next_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: &Piece) -> u16 {
        let inner_w = PREVIEW_CELLS * self.cell_w;
        let inner_h = PREVIEW_CELLS * self.cell_h;
        let border = CellStyle::new(Rgb::new(160, 160, 160), PANEL_BG);
        fb.fill_rect(x + 1, y + 1, inner_w, inner_h, ' ', CellStyle::new(BOARD_BG, BOARD_BG));
        fb.draw_box(x, y, inner_w + 2, inner_h + 2, border);

        let off_x = PREVIEW_CELLS.saturating_sub(next.shape.cols() as u16) / 2;
        let off_y = PREVIEW_CELLS.saturating_sub(next.shape.rows() as u16) / 2;
        for (dx, dy) in next.shape.occupied() {
            self.draw_block(
                fb,
                x + 1,
                y + 1,
                off_x + dx as u16,
                off_y + dy as u16,
                next.color,
            );
        }
        inner_h + 2
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
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
        if panel_w < PREVIEW_CELLS * self.cell_w + 2 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let box_h = self.draw_next_preview(fb, panel_x, y, &snap.next);
        y = y.saturating_add(box_h + 1);

        for (name, v) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, v, value);
            y = y.saturating_add(2);
        }

        if panel_w < 16 {
            return;
        }
        for line in [
            "←/→  move",
            "↑    rotate",
            "↓    soft drop",
            "SPC  hard drop",
            "S start P pause",
            "R reset  Q quit",
        ] {
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
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }

    fn draw_dialog(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[DialogLine<'_>],
    ) {
        let content_w = lines.iter().map(DialogLine::width).max().unwrap_or(0);
        let box_w = content_w + 4;
        let box_h = lines.len() as u16 + 2;
        let x = start_x.saturating_add(frame_w.saturating_sub(box_w) / 2);
        let y = start_y.saturating_add(frame_h.saturating_sub(box_h) / 2);

        let fill = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(20, 20, 20));
        fb.fill_rect(x, y, box_w, box_h, ' ', fill);
        fb.draw_box(x, y, box_w, box_h, fill.bold());

        for (i, line) in lines.iter().enumerate() {
            let ly = y + 1 + i as u16;
            let lx = x + 2 + (content_w - line.width()) / 2;
            match line {
                DialogLine::Title(s) => {
                    fb.put_str(lx, ly, s, fill.bold());
                }
                DialogLine::Stat(label, v) => {
                    let used = fb.put_str(lx, ly, label, fill);
                    fb.put_u32(lx + used + 1, ly, *v, fill.bold());
                }
                DialogLine::Hint(s) => {
                    fb.put_str(lx, ly, s, fill.dim());
                }
            }
        }
    }
}

fn on_board(x: i8, y: i8) -> Option<(u16, u16)> {
    if x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8 {
        Some((x as u16, y as u16))
    } else {
        None
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
