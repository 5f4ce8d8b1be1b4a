//! Pixel Walker (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `pixel_walker::{core,input,term,types}` and hosts the application layer
//! shared by the interactive runner and the headless replay.

pub mod app;
pub mod replay;

pub use pixel_walker_core as core;
pub use pixel_walker_input as input;
pub use pixel_walker_term as term;
pub use pixel_walker_types as types;
