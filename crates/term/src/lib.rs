//! Terminal rendering for the walker.
//!
//! A small, game-oriented rendering layer. The world is drawn into an RGB
//! [`PixelCanvas`] through the core projector, composed into half-block
//! character cells, and flushed to the terminal with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Roughly square pixels (one cell holds two stacked pixels)
//! - Only redraw what changed between frames

pub mod canvas;
pub mod error;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod scheduler;

pub use pixel_walker_core as core;
pub use pixel_walker_types as types;

pub use canvas::{PixelCanvas, UPPER_HALF_BLOCK};
pub use error::SurfaceError;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{Button, GameView, Viewport, MIN_VIEWPORT_COLS, MIN_VIEWPORT_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scheduler::{FrameHandle, FrameScheduler};
