//! Input module (engine-facing).
//!
//! Turns raw terminal events into [`crate::types::Intent`] values and exposes
//! them through the [`IntentSource`] trait, so the application consumes a
//! stream of intents rather than wiring callbacks to devices.

pub mod map;
pub mod source;

pub use pixel_walker_types as types;

pub use map::{cell_to_pixel, handle_event, handle_key_event, handle_mouse_event, should_quit};
pub use source::{IntentBatch, IntentSource, ScriptedIntents, TerminalIntents};
