//! Drawing surface abstraction.
//!
//! The projector only needs rectangle fills and outlines addressed in pixels.
//! Backends (the terminal pixel canvas, test recorders) implement [`Surface`].

use crate::types::{Rect, Rgb};

pub trait Surface {
    /// Surface size in pixels `(width, height)`.
    fn size(&self) -> (u32, u32);

    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// One-pixel outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Rgb);
}

/// A single recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Clear(Rgb),
    Fill(Rect, Rgb),
    Stroke(Rect, Rgb),
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn fills(&self) -> impl Iterator<Item = (Rect, Rgb)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Fill(r, c) => Some((r, c)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ops.push(DrawOp::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        self.ops.push(DrawOp::Stroke(rect, color));
    }
}
