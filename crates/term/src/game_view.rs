//! GameView: maps a `WorldSnapshot` into a terminal framebuffer.
//!
//! The world is drawn in pixels on a [`PixelCanvas`] through the core
//! projector; screens and overlays (start screen, move counter, game menu) are
//! added on top, and text lands in the character layer after composition.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::PixelCanvas;
use crate::core::{Projection, Projector, Surface, WorldConfig, WorldSnapshot};
use crate::error::SurfaceError;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Mode, Rect, Rgb};

/// Smallest terminal that fits the start screen and the game menu.
pub const MIN_VIEWPORT_COLS: u16 = 40;
pub const MIN_VIEWPORT_ROWS: u16 = 12;

const TITLE: Rgb = Rgb::new(0x00, 0xff, 0x00);
const TEXT: Rgb = Rgb::new(0xff, 0xff, 0xff);
const HINT: Rgb = Rgb::new(0x88, 0x88, 0x88);
const BUTTON_FILL: Rgb = Rgb::new(0x3a, 0x3a, 0x3a);
const BUTTON_BORDER: Rgb = Rgb::new(0x4a, 0x4a, 0x4a);
const MENU_FILL: Rgb = Rgb::new(0x2a, 0x2a, 0x2a);

/// Darkening applied behind the start screen and the game menu.
const OVERLAY_ALPHA: f32 = 0.8;

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Canvas size in pixels (two pixel rows per cell row).
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32 * 2)
    }

    pub fn ensure_min(self) -> Result<Self, SurfaceError> {
        if self.width < MIN_VIEWPORT_COLS || self.height < MIN_VIEWPORT_ROWS {
            return Err(SurfaceError::TooSmall {
                width: self.width,
                height: self.height,
                min_width: MIN_VIEWPORT_COLS,
                min_height: MIN_VIEWPORT_ROWS,
            });
        }
        Ok(self)
    }
}

/// Clickable on-screen buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    StartGame,
    EndGame,
}

/// Rect covering `cols` x `rows` cells starting at cell `(col, row)`.
fn cell_rect(col: u16, row: u16, cols: u16, rows: u16) -> Rect {
    Rect::new(
        col as f32,
        row as f32 * 2.0,
        cols as f32,
        rows as f32 * 2.0,
    )
}

/// Top-left cell of a pixel rect produced by [`cell_rect`].
fn rect_cell(rect: Rect) -> (u16, u16) {
    (rect.x.max(0.0) as u16, (rect.y.max(0.0) / 2.0) as u16)
}

pub struct GameView {
    projector: Projector,
    projection: Projection,
    canvas: PixelCanvas,
}

impl GameView {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            projector: Projector::new(config),
            projection: Projection::default(),
            canvas: PixelCanvas::new(0, 0),
        }
    }

    /// Pick up a new tile size after a resize.
    pub fn reconfigure(&mut self, config: &WorldConfig) {
        self.projector = Projector::new(config);
    }

    /// The pixel layer of the last rendered frame.
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers keep one framebuffer across frames; the pixel canvas and the
    /// projection buffer are reused internally.
    pub fn render_into(
        &mut self,
        snap: &WorldSnapshot,
        show_menu: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let (w, h) = viewport.pixel_size();
        self.canvas.resize(w, h);
        self.projector
            .project_into(snap, w, h, &mut self.projection);
        self.projection.draw(&mut self.canvas);

        match snap.mode {
            Mode::Menu => {
                self.canvas.shade(OVERLAY_ALPHA);
                draw_button(&mut self.canvas, Self::start_button(viewport));
                self.canvas.compose_into(fb);
                draw_start_text(fb, viewport);
            }
            Mode::Playing => {
                if show_menu {
                    self.canvas.shade(OVERLAY_ALPHA);
                    let menu = Self::menu_box(viewport);
                    self.canvas.fill_rect(menu, MENU_FILL);
                    self.canvas.stroke_rect(menu, BUTTON_BORDER);
                    draw_button(&mut self.canvas, Self::end_button(viewport));
                }
                self.canvas.compose_into(fb);
                draw_hud(fb, snap.move_count);
                if show_menu {
                    draw_menu_text(fb, viewport);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, snap: &WorldSnapshot, show_menu: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, show_menu, viewport, &mut fb);
        fb
    }

    pub fn start_button(viewport: Viewport) -> Rect {
        cell_rect(
            (viewport.width / 2).saturating_sub(10),
            viewport.height / 2 + 1,
            20,
            3,
        )
    }

    pub fn menu_box(viewport: Viewport) -> Rect {
        cell_rect(
            (viewport.width / 2).saturating_sub(18),
            (viewport.height / 2).saturating_sub(4),
            36,
            9,
        )
    }

    pub fn end_button(viewport: Viewport) -> Rect {
        let (_, menu_row) = rect_cell(Self::menu_box(viewport));
        cell_rect((viewport.width / 2).saturating_sub(8), menu_row + 5, 16, 3)
    }

    /// Which button, if any, sits under pixel `(x, y)`.
    ///
    /// The start button only exists on the start screen and the end button
    /// only while the game menu is open.
    pub fn hit_test(mode: Mode, show_menu: bool, viewport: Viewport, x: f32, y: f32) -> Option<Button> {
        match mode {
            Mode::Menu if Self::start_button(viewport).contains(x, y) => Some(Button::StartGame),
            Mode::Playing if show_menu && Self::end_button(viewport).contains(x, y) => {
                Some(Button::EndGame)
            }
            _ => None,
        }
    }
}

fn draw_button(canvas: &mut PixelCanvas, rect: Rect) {
    canvas.fill_rect(rect, BUTTON_FILL);
    canvas.stroke_rect(rect, BUTTON_BORDER);
}

/// Write text over existing cells, keeping each cell's background color.
fn put_text_over(fb: &mut FrameBuffer, x: u16, y: u16, s: &str, fg: Rgb, bold: bool) {
    for (i, ch) in s.chars().enumerate() {
        let cx = x.saturating_add(i as u16);
        let Some(cell) = fb.get(cx, y) else {
            break;
        };
        let mut style = CellStyle::new(fg, cell.style.bg);
        style.bold = bold;
        fb.put_char(cx, y, ch, style);
    }
}

fn put_label(fb: &mut FrameBuffer, button: Rect, label: &str) {
    let (col, row) = rect_cell(button);
    let cols = button.w as u16;
    let len = label.chars().count() as u16;
    let x = col + cols.saturating_sub(len) / 2;
    put_text_over(fb, x, row + 1, label, TEXT, false);
}

fn centered_col(fb: &FrameBuffer, s: &str) -> u16 {
    fb.width().saturating_sub(s.chars().count() as u16) / 2
}

fn draw_start_text(fb: &mut FrameBuffer, viewport: Viewport) {
    let title = "Pixel Walker";
    let title_row = (viewport.height / 2).saturating_sub(3);
    put_text_over(fb, centered_col(fb, title), title_row, title, TITLE, true);

    put_label(fb, GameView::start_button(viewport), "Start Game");

    let hint = "click or Enter to start, q to quit";
    let hint_row = viewport.height.saturating_sub(2);
    put_text_over(fb, centered_col(fb, hint), hint_row, hint, HINT, false);
}

fn draw_hud(fb: &mut FrameBuffer, move_count: u32) {
    let style = CellStyle::new(TITLE, Rgb::BLACK).bold();
    fb.put_str(2, 1, "Moves: ", style);
    fb.put_u32(9, 1, move_count, style);

    let hint = "wasd/arrows move  esc menu  q quit";
    let row = fb.height().saturating_sub(1);
    put_text_over(fb, 2, row, hint, HINT, false);
}

fn draw_menu_text(fb: &mut FrameBuffer, viewport: Viewport) {
    let (_, menu_row) = rect_cell(GameView::menu_box(viewport));
    let title = "Game Menu";
    put_text_over(fb, centered_col(fb, title), menu_row + 2, title, TITLE, true);
    put_label(fb, GameView::end_button(viewport), "End Game");
}
