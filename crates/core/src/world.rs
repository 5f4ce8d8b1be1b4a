//! World/camera model - discrete player position plus a gliding camera
//!
//! The player's world position is an integer tile coordinate and changes the
//! instant a move is accepted. The camera offset is a pixel displacement that
//! glides toward its new resting place over a fixed duration, so the screen
//! scrolls smoothly while the logical position is already final.
//!
//! Only one glide may be in flight: [`World::can_accept_move`] is the single
//! admission gate and moves arriving while it is closed are dropped.

use crate::config::WorldConfig;
use crate::snapshot::WorldSnapshot;
use crate::types::{Direction, Mode, Offset, Position};

/// Start timestamp and fixed duration of one camera glide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClock {
    pub start_ms: u64,
    pub duration_ms: u32,
}

impl AnimationClock {
    pub fn new(start_ms: u64, duration_ms: u32) -> Self {
        Self {
            start_ms,
            duration_ms,
        }
    }

    /// Linear progress in `[0, 1]`.
    ///
    /// Timestamps before the start count as zero progress; a zero duration
    /// completes immediately.
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0) as f32
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms as u64)
    }
}

/// Ease-out cubic: fast start, decelerating finish.
pub fn ease_out_cubic(progress: f32) -> f32 {
    let inv = 1.0 - progress;
    1.0 - inv * inv * inv
}

/// The player, the move counter and the camera.
#[derive(Debug, Clone)]
pub struct World {
    config: WorldConfig,
    mode: Mode,
    position: Position,
    move_count: u32,
    camera: Offset,
    target: Offset,
    /// `Some` while a glide is in flight.
    animation: Option<AnimationClock>,
}

impl World {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            config,
            mode: Mode::Menu,
            position: Position::ORIGIN,
            move_count: 0,
            camera: Offset::ZERO,
            target: Offset::ZERO,
            animation: None,
        }
    }

    /// Reset to the origin and enter [`Mode::Playing`].
    pub fn start_game(&mut self) {
        self.position = Position::ORIGIN;
        self.move_count = 0;
        self.camera = Offset::ZERO;
        self.target = Offset::ZERO;
        self.animation = None;
        self.mode = Mode::Playing;
        tracing::debug!("game started");
    }

    /// Return to [`Mode::Menu`], abandoning any glide in flight.
    pub fn end_game(&mut self) {
        self.mode = Mode::Menu;
        self.animation = None;
        tracing::debug!(moves = self.move_count, "game ended");
    }

    pub fn can_accept_move(&self) -> bool {
        self.mode == Mode::Playing && self.animation.is_none()
    }

    /// Commit a one-tile move and start the camera glide at `now_ms`.
    ///
    /// Returns `false` without touching any state when the move is not
    /// admissible (menu showing, or a glide still in flight).
    pub fn apply_movement(&mut self, direction: Direction, now_ms: u64) -> bool {
        if !self.can_accept_move() {
            tracing::debug!(direction = direction.as_str(), "move dropped");
            return false;
        }

        let (dx, dy) = direction.delta();
        let tile = self.config.tile_size as f32;

        // The player is pinned to the screen center, so the world scrolls the
        // opposite way.
        self.target = Offset::new(
            self.camera.x - dx as f32 * tile,
            self.camera.y - dy as f32 * tile,
        );
        self.position = self.position.step(direction);
        self.animation = Some(AnimationClock::new(now_ms, self.config.animation_ms));
        self.move_count = self.move_count.saturating_add(1);

        tracing::debug!(
            direction = direction.as_str(),
            x = self.position.x,
            y = self.position.y,
            moves = self.move_count,
            "move accepted"
        );
        true
    }

    /// Advance the camera glide to `now_ms`.
    ///
    /// Each call eases from wherever the previous call left the offset, so the
    /// glide decelerates regardless of frame timing. Returns `true` whenever a
    /// glide was active during this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(clock) = self.animation else {
            return false;
        };

        let progress = clock.progress(now_ms);
        let eased = ease_out_cubic(progress);

        self.camera.x += (self.target.x - self.camera.x) * eased;
        self.camera.y += (self.target.y - self.camera.y) * eased;

        if progress >= 1.0 {
            self.camera = self.target;
            self.animation = None;
            tracing::trace!(x = self.camera.x, y = self.camera.y, "glide finished");
        }

        true
    }

    /// Change the tile size, rescaling the camera so an in-flight glide keeps
    /// its proportions. Zero is ignored.
    pub fn resize(&mut self, tile_size: u32) {
        if tile_size == 0 || tile_size == self.config.tile_size {
            return;
        }
        let k = tile_size as f32 / self.config.tile_size as f32;
        self.camera = self.camera.scale(k);
        self.target = self.target.scale(k);
        self.config.tile_size = tile_size;
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn camera_offset(&self) -> Offset {
        self.camera
    }

    pub fn animation_target(&self) -> Offset {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Camera offset relative to where it rests for the current position.
    ///
    /// Right after a move this is one tile in the direction of travel; it
    /// reaches zero when the glide finishes.
    pub fn view_offset(&self) -> Offset {
        let tile = self.config.tile_size as f32;
        Offset::new(
            self.camera.x + self.position.x as f32 * tile,
            self.camera.y + self.position.y as f32 * tile,
        )
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            mode: self.mode,
            position: self.position,
            move_count: self.move_count,
            camera_offset: self.camera,
            view_offset: self.view_offset(),
            animating: self.is_animating(),
            tile_size: self.config.tile_size,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> World {
        let mut world = World::default();
        world.start_game();
        world
    }

    #[test]
    fn test_new_world_is_in_menu() {
        let world = World::default();
        assert_eq!(world.mode(), Mode::Menu);
        assert!(!world.can_accept_move());
        assert!(!world.is_animating());
    }

    #[test]
    fn test_clock_progress_clamps() {
        let clock = AnimationClock::new(100, 250);
        assert_eq!(clock.progress(0), 0.0);
        assert_eq!(clock.progress(100), 0.0);
        assert_eq!(clock.progress(225), 0.5);
        assert_eq!(clock.progress(350), 1.0);
        assert_eq!(clock.progress(10_000), 1.0);
        assert_eq!(clock.end_ms(), 350);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut world = World::new(WorldConfig {
            animation_ms: 0,
            ..WorldConfig::default()
        });
        world.start_game();
        assert!(world.apply_movement(Direction::Left, 5));
        assert!(world.tick(5));
        assert!(world.can_accept_move());
        assert_eq!(world.camera_offset(), world.animation_target());
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn test_tick_eases_from_previous_offset() {
        let mut world = playing();
        let tile = world.config().tile_size as f32;
        world.apply_movement(Direction::Left, 0);

        // progress 0.5 -> eased 0.875 of the full distance.
        world.tick(125);
        let first = world.camera_offset().x;
        assert!((first - 0.875 * tile).abs() < 1e-4);

        // The second tick eases the *remaining* distance, not from the start.
        world.tick(125);
        let remaining = tile - first;
        let expected = first + remaining * 0.875;
        assert!((world.camera_offset().x - expected).abs() < 1e-4);
        assert!(world.is_animating());
    }

    #[test]
    fn test_tick_before_start_keeps_offset() {
        let mut world = playing();
        world.apply_movement(Direction::Down, 1_000);
        assert!(world.tick(500));
        assert_eq!(world.camera_offset(), Offset::ZERO);
        assert!(world.is_animating());
    }

    #[test]
    fn test_end_game_cancels_glide() {
        let mut world = playing();
        world.apply_movement(Direction::Right, 0);
        world.end_game();
        assert_eq!(world.mode(), Mode::Menu);
        assert!(!world.is_animating());
        assert!(!world.tick(1_000));
    }

    #[test]
    fn test_start_game_resets_everything() {
        let mut world = playing();
        world.apply_movement(Direction::Right, 0);
        world.tick(10);
        world.start_game();

        assert_eq!(world.position(), Position::ORIGIN);
        assert_eq!(world.move_count(), 0);
        assert_eq!(world.camera_offset(), Offset::ZERO);
        assert_eq!(world.animation_target(), Offset::ZERO);
        assert!(world.can_accept_move());
    }

    #[test]
    fn test_view_offset_runs_from_one_tile_to_zero() {
        let mut world = playing();
        let tile = world.config().tile_size as f32;
        world.apply_movement(Direction::Right, 0);
        assert_eq!(world.view_offset(), Offset::new(tile, 0.0));

        world.tick(1_000);
        assert_eq!(world.view_offset(), Offset::ZERO);
    }

    #[test]
    fn test_resize_rescales_camera() {
        let mut world = playing();
        world.apply_movement(Direction::Up, 0);
        world.tick(1_000);
        assert_eq!(world.camera_offset(), Offset::new(0.0, 8.0));

        world.resize(16);
        assert_eq!(world.config().tile_size, 16);
        assert_eq!(world.camera_offset(), Offset::new(0.0, 16.0));
        assert_eq!(world.view_offset(), Offset::ZERO);

        world.resize(0);
        assert_eq!(world.config().tile_size, 16);
    }
}
