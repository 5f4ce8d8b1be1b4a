//! Core world logic - pure, deterministic, and testable
//!
//! This crate holds everything that decides *what* is on screen: the player's
//! position, the gliding camera, the tile colors and the projection of the
//! visible grid into pixel rectangles. It has **no dependencies** on terminals
//! or input devices:
//!
//! - **Deterministic**: time is passed in explicitly (`now_ms`), so identical
//!   intent sequences replay identically
//! - **Testable**: every operation is a plain method on owned data
//! - **Portable**: drawing goes through the [`Surface`] trait
//!
//! # Module Structure
//!
//! - [`config`]: tile size, viewport size, glide duration and the resize policy
//! - [`world`]: the world/camera model and its single-glide admission gate
//! - [`tile_color`]: procedural, coordinate-only tile coloring
//! - [`projector`]: snapshot to screen rectangles, and drawing onto a surface
//! - [`surface`]: the drawing trait plus a recording implementation
//! - [`snapshot`]: the read-only world view handed to renderers
//!
//! # Example
//!
//! ```
//! use pixel_walker_core::{World, WorldConfig};
//! use pixel_walker_types::{Direction, Offset, Position};
//!
//! let mut world = World::new(WorldConfig::default());
//! world.start_game();
//!
//! assert!(world.apply_movement(Direction::Up, 0));
//! assert_eq!(world.position(), Position::new(0, -1));
//!
//! // Still gliding: a second move is dropped.
//! assert!(!world.apply_movement(Direction::Up, 10));
//!
//! // Drive frames past the glide duration.
//! let mut now = 0;
//! while world.tick(now) {
//!     now += 16;
//! }
//! assert_eq!(world.camera_offset(), Offset::new(0.0, 8.0));
//! assert!(world.can_accept_move());
//! ```

pub mod config;
pub mod projector;
pub mod snapshot;
pub mod surface;
pub mod tile_color;
pub mod world;

pub use pixel_walker_types as types;

pub use config::WorldConfig;
pub use projector::{Projection, Projector, TileQuad};
pub use snapshot::WorldSnapshot;
pub use surface::{DrawOp, RecordingSurface, Surface};
pub use tile_color::color_of;
pub use world::{ease_out_cubic, AnimationClock, World};
