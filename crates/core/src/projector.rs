//! Render projector - world snapshot to screen-space rectangles
//!
//! Pure: given a [`WorldSnapshot`] and a surface size, computes where every
//! visible tile lands and what color it has, plus the player marker pinned to
//! the center tile. [`Projection::draw`] then replays the result onto any
//! [`Surface`].

use crate::config::WorldConfig;
use crate::snapshot::WorldSnapshot;
use crate::surface::Surface;
use crate::tile_color::color_of;
use crate::types::{
    Mode, Offset, Position, Rect, Rgb, GRID_LINE_MIN_TILE, PLAYER_INSET_RATIO,
};

pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
pub const GRID_LINE: Rgb = Rgb::new(0x33, 0x33, 0x33);
pub const PLAYER: Rgb = Rgb::new(0xff, 0xff, 0x00);

/// One visible tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileQuad {
    pub world: Position,
    pub rect: Rect,
    pub color: Rgb,
}

/// Everything needed to draw one frame of the world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    /// Row-major, `tiles_w * tiles_h` entries.
    pub tiles: Vec<TileQuad>,
    /// Player marker; absent on the static menu backdrop.
    pub player: Option<Rect>,
    pub grid_lines: bool,
}

impl Projection {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(BACKGROUND);
        for tile in &self.tiles {
            surface.fill_rect(tile.rect, tile.color);
            if self.grid_lines {
                surface.stroke_rect(tile.rect, GRID_LINE);
            }
        }
        if let Some(player) = self.player {
            surface.fill_rect(player, PLAYER);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projector {
    tile_size: u32,
    tiles_w: u32,
    tiles_h: u32,
}

impl Projector {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            tile_size: config.tile_size,
            tiles_w: config.tiles_w,
            tiles_h: config.tiles_h,
        }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Top-left of the grid when it is centered on the surface at rest.
    ///
    /// Negative when the grid overhangs the surface.
    pub fn center_offset(&self, surface_w: u32, surface_h: u32) -> Offset {
        let tile = self.tile_size as f32;
        Offset::new(
            (surface_w as f32 - self.tiles_w as f32 * tile) / 2.0,
            (surface_h as f32 - self.tiles_h as f32 * tile) / 2.0,
        )
    }

    /// Player marker rectangle; never moves with the camera.
    pub fn player_rect(&self, surface_w: u32, surface_h: u32) -> Rect {
        let tile = self.tile_size as f32;
        let origin = self.center_offset(surface_w, surface_h);
        let cx = origin.x + (self.tiles_w / 2) as f32 * tile;
        let cy = origin.y + (self.tiles_h / 2) as f32 * tile;
        let inset = (tile * PLAYER_INSET_RATIO).max(1.0);
        Rect::new(cx, cy, tile, tile).inset(inset)
    }

    /// Project into an existing [`Projection`], reusing its tile buffer.
    pub fn project_into(
        &self,
        snap: &WorldSnapshot,
        surface_w: u32,
        surface_h: u32,
        out: &mut Projection,
    ) {
        let (position, offset, player) = match snap.mode {
            Mode::Playing => (
                snap.position,
                snap.view_offset,
                Some(self.player_rect(surface_w, surface_h)),
            ),
            Mode::Menu => (Position::ORIGIN, Offset::ZERO, None),
        };

        let tile = self.tile_size as f32;
        let origin = self.center_offset(surface_w, surface_h);
        let start_x = position.x.wrapping_sub((self.tiles_w / 2) as i32);
        let start_y = position.y.wrapping_sub((self.tiles_h / 2) as i32);

        out.tiles.clear();
        out.tiles
            .reserve((self.tiles_w as usize) * (self.tiles_h as usize));
        for ly in 0..self.tiles_h {
            for lx in 0..self.tiles_w {
                let world = Position::new(
                    start_x.wrapping_add(lx as i32),
                    start_y.wrapping_add(ly as i32),
                );
                let rect = Rect::new(
                    origin.x + lx as f32 * tile + offset.x,
                    origin.y + ly as f32 * tile + offset.y,
                    tile,
                    tile,
                );
                out.tiles.push(TileQuad {
                    world,
                    rect,
                    color: color_of(world.x, world.y),
                });
            }
        }
        out.player = player;
        out.grid_lines = self.tile_size >= GRID_LINE_MIN_TILE;
    }

    pub fn project(&self, snap: &WorldSnapshot, surface_w: u32, surface_h: u32) -> Projection {
        let mut out = Projection::default();
        self.project_into(snap, surface_w, surface_h, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};
    use crate::world::World;
    use crate::types::Direction;

    fn small_config() -> WorldConfig {
        WorldConfig {
            tile_size: 10,
            tiles_w: 5,
            tiles_h: 3,
            ..WorldConfig::default()
        }
    }

    #[test]
    fn center_tile_holds_the_player_position() {
        let cfg = small_config();
        let mut world = World::new(cfg);
        world.start_game();
        world.apply_movement(Direction::Right, 0);
        world.tick(10_000);

        let proj = Projector::new(&cfg).project(&world.snapshot(), 50, 30);
        assert_eq!(proj.tiles.len(), 15);
        // Center tile is local (2, 1) -> index 1*5 + 2.
        let center = proj.tiles[7];
        assert_eq!(center.world, Position::new(1, 0));
        assert_eq!(center.rect, Rect::new(20.0, 10.0, 10.0, 10.0));
        assert_eq!(center.color, color_of(1, 0));
        assert_eq!(proj.tiles[0].world, Position::new(-1, -1));
    }

    #[test]
    fn player_marker_is_inset_center_tile() {
        let proj = Projector::new(&small_config());
        assert_eq!(proj.player_rect(50, 30), Rect::new(21.0, 11.0, 8.0, 8.0));
    }

    #[test]
    fn menu_projection_is_static_and_has_no_player() {
        let cfg = small_config();
        let mut world = World::new(cfg);
        world.start_game();
        world.apply_movement(Direction::Down, 0);
        world.end_game();

        let proj = Projector::new(&cfg).project(&world.snapshot(), 50, 30);
        assert!(proj.player.is_none());
        assert_eq!(proj.tiles[7].world, Position::ORIGIN);
        assert_eq!(proj.tiles[0].rect.x, 0.0);
        assert_eq!(proj.tiles[0].rect.y, 0.0);
    }

    #[test]
    fn draw_clears_then_fills_tiles_then_player() {
        let cfg = small_config();
        let mut world = World::new(cfg);
        world.start_game();
        let proj = Projector::new(&cfg).project(&world.snapshot(), 50, 30);

        let mut surface = RecordingSurface::new(50, 30);
        proj.draw(&mut surface);

        let ops = surface.ops();
        assert_eq!(ops[0], DrawOp::Clear(BACKGROUND));
        // 15 fills + 15 strokes (tile size 10 >= grid line minimum) + player.
        assert_eq!(ops.len(), 1 + 15 * 2 + 1);
        assert_eq!(
            *ops.last().unwrap(),
            DrawOp::Fill(proj.player.unwrap(), PLAYER)
        );
    }
}
