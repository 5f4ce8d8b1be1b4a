use crate::types::{Mode, Offset, Position};

/// Read-only view of the world handed to renderers and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldSnapshot {
    pub mode: Mode,
    pub position: Position,
    pub move_count: u32,
    /// Raw accumulated camera offset.
    pub camera_offset: Offset,
    /// Camera offset relative to its resting place for `position`.
    pub view_offset: Offset,
    pub animating: bool,
    pub tile_size: u32,
}
