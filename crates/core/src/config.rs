//! World configuration and the tile-size resize policy.

use crate::types::{
    ANIMATION_MS, DEFAULT_TILE_SIZE, MIN_TILE_SIZE, VIEWPORT_TILES_H, VIEWPORT_TILES_W,
};

/// Static configuration shared by the world model and the projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldConfig {
    /// Tile edge length in pixels.
    pub tile_size: u32,
    /// Visible tiles per row.
    pub tiles_w: u32,
    /// Visible tiles per column.
    pub tiles_h: u32,
    /// Camera glide duration in milliseconds.
    pub animation_ms: u32,
    /// Lower bound for [`WorldConfig::fit_tile_size`].
    pub min_tile_size: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            tiles_w: VIEWPORT_TILES_W,
            tiles_h: VIEWPORT_TILES_H,
            animation_ms: ANIMATION_MS,
            min_tile_size: MIN_TILE_SIZE,
        }
    }
}

impl WorldConfig {
    /// Create from `PIXEL_WALKER_*` environment variables.
    ///
    /// Missing, unparsable or zero values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`WorldConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: u32| -> u32 {
            let Some(raw) = lookup(key) else {
                return default;
            };
            match raw.trim().parse::<u32>() {
                Ok(v) if v > 0 => v,
                _ => {
                    tracing::warn!(key, value = %raw, default, "ignoring invalid config value");
                    default
                }
            }
        };

        Self {
            tile_size: read("PIXEL_WALKER_TILE_SIZE", defaults.tile_size),
            tiles_w: read("PIXEL_WALKER_TILES_W", defaults.tiles_w),
            tiles_h: read("PIXEL_WALKER_TILES_H", defaults.tiles_h),
            animation_ms: read("PIXEL_WALKER_ANIMATION_MS", defaults.animation_ms),
            min_tile_size: read("PIXEL_WALKER_MIN_TILE_SIZE", defaults.min_tile_size),
        }
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Tile size that makes the visible grid cover a `surface_w` x `surface_h`
    /// pixel surface.
    ///
    /// The grid may overhang the surface; it is never smaller than it, and the
    /// tile never shrinks below `min_tile_size`.
    pub fn fit_tile_size(&self, surface_w: u32, surface_h: u32) -> u32 {
        let fit_x = surface_w.div_ceil(self.tiles_w.max(1));
        let fit_y = surface_h.div_ceil(self.tiles_h.max(1));
        self.min_tile_size.max(fit_x).max(fit_y)
    }
}
