//! PixelCanvas: an RGB pixel surface that composes into half-block cells.
//!
//! Each terminal cell shows two vertically stacked pixels using `▀`: the
//! foreground paints the top pixel and the background the bottom one, which
//! gives roughly square pixels on common terminal fonts.

use crate::core::Surface;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Rect, Rgb};

pub const UPPER_HALF_BLOCK: char = '▀';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

/// Pixel span `[start, end)` whose centers fall inside `[from, from + len)`,
/// clipped to `[0, limit)`.
fn covered_span(from: f32, len: f32, limit: u32) -> (u32, u32) {
    if len.is_nan() || len <= 0.0 {
        return (0, 0);
    }
    let start = (from - 0.5).ceil().max(0.0);
    let end = (from + len - 0.5).ceil().min(limit as f32);
    if end <= start {
        return (0, 0);
    }
    (start as u32, end as u32)
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width as usize) * (height as usize)],
        }
    }

    /// Canvas matching a terminal of `cols` x `rows` cells.
    pub fn for_cells(cols: u16, rows: u16) -> Self {
        Self::new(cols as u32, rows as u32 * 2)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize((width as usize) * (height as usize), Rgb::BLACK);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
        }
    }

    fn fill_span(&mut self, (x0, x1): (u32, u32), (y0, y1): (u32, u32), color: Rgb) {
        for y in y0..y1 {
            let row = (y as usize) * (self.width as usize);
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    /// Blend every pixel toward black; `alpha = 0.8` keeps 20% of the color.
    pub fn shade(&mut self, alpha: f32) {
        let keep = (1.0 - alpha).clamp(0.0, 1.0);
        for p in &mut self.pixels {
            p.r = (p.r as f32 * keep).round() as u8;
            p.g = (p.g as f32 * keep).round() as u8;
            p.b = (p.b as f32 * keep).round() as u8;
        }
    }

    /// Compose into `fb`, one cell per pixel pair. Odd trailing rows pair with
    /// black.
    pub fn compose_into(&self, fb: &mut FrameBuffer) {
        let cols = self.width.min(u16::MAX as u32) as u16;
        let rows = self.height.div_ceil(2).min(u16::MAX as u32) as u16;
        fb.resize(cols, rows);

        for row in 0..rows {
            for col in 0..cols {
                let top = self.pixel(col as u32, row as u32 * 2).unwrap_or_default();
                let bottom = self
                    .pixel(col as u32, row as u32 * 2 + 1)
                    .unwrap_or_default();
                fb.set(
                    col,
                    row,
                    Cell {
                        ch: UPPER_HALF_BLOCK,
                        style: CellStyle::new(top, bottom),
                    },
                );
            }
        }
    }
}

impl Surface for PixelCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let xs = covered_span(rect.x, rect.w, self.width);
        let ys = covered_span(rect.y, rect.h, self.height);
        self.fill_span(xs, ys, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        // Outline of the same pixel block `fill_rect` would cover, computed
        // unclipped so edges outside the canvas stay invisible.
        let x0 = (rect.x - 0.5).ceil();
        let x1 = (rect.x + rect.w - 0.5).ceil();
        let y0 = (rect.y - 0.5).ceil();
        let y1 = (rect.y + rect.h - 0.5).ceil();
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let xs = covered_span(rect.x, rect.w, self.width);
        let ys = covered_span(rect.y, rect.h, self.height);
        for (edge, visible) in [(y0, true), (y1 - 1.0, y1 - 1.0 > y0)] {
            if visible && edge >= 0.0 && edge < self.height as f32 {
                self.fill_span(xs, (edge as u32, edge as u32 + 1), color);
            }
        }
        for (edge, visible) in [(x0, true), (x1 - 1.0, x1 - 1.0 > x0)] {
            if visible && edge >= 0.0 && edge < self.width as f32 {
                for y in ys.0..ys.1 {
                    self.set_pixel(edge as u32, y, color);
                }
            }
        }
    }
}
