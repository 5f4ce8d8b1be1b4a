//! World/camera model behavior through the public API.

use pixel_walker::core::{World, WorldConfig};
use pixel_walker::types::{Direction, Mode, Offset, Position, ANIMATION_MS, FRAME_MS};

fn playing() -> World {
    let mut world = World::new(WorldConfig::default());
    world.start_game();
    world
}

/// Tick in frame steps from `start` until the glide finishes; returns the
/// timestamp of the final tick.
fn run_glide(world: &mut World, start: u64) -> u64 {
    let mut now = start;
    while world.tick(now) {
        if !world.is_animating() {
            break;
        }
        now += FRAME_MS as u64;
    }
    now
}

#[test]
fn test_start_game_state() {
    let world = playing();
    assert_eq!(world.mode(), Mode::Playing);
    assert_eq!(world.position(), Position::ORIGIN);
    assert_eq!(world.move_count(), 0);
    assert_eq!(world.camera_offset(), Offset::ZERO);
    assert!(world.can_accept_move());
}

#[test]
fn test_single_move_up() {
    let mut world = playing();
    let tile = world.config().tile_size as f32;
    let before = world.camera_offset();

    assert!(world.apply_movement(Direction::Up, 0));
    assert_eq!(world.position(), Position::new(0, -1));
    assert_eq!(world.move_count(), 1);
    assert!(!world.can_accept_move());
    assert_eq!(world.animation_target().y, before.y + tile);
    assert_eq!(world.animation_target().x, before.x);
}

#[test]
fn test_move_while_animating_is_dropped() {
    let mut world = playing();
    world.apply_movement(Direction::Right, 0);
    let position = world.position();
    let target = world.animation_target();

    assert!(!world.apply_movement(Direction::Down, 10));
    assert_eq!(world.position(), position);
    assert_eq!(world.move_count(), 1);
    assert_eq!(world.animation_target(), target);
}

#[test]
fn test_move_in_menu_is_dropped() {
    let mut world = World::new(WorldConfig::default());
    assert!(!world.apply_movement(Direction::Up, 0));
    assert_eq!(world.position(), Position::ORIGIN);
    assert_eq!(world.move_count(), 0);
    assert_eq!(world.animation_target(), Offset::ZERO);
}

#[test]
fn test_tick_past_duration_snaps_to_target() {
    let mut world = playing();
    world.apply_movement(Direction::Left, 1_000);
    assert!(world.tick(1_000 + ANIMATION_MS as u64));
    assert_eq!(world.camera_offset(), world.animation_target());
    assert!(world.can_accept_move());
}

#[test]
fn test_tick_without_animation_is_noop() {
    let mut world = playing();
    let before = world.snapshot();
    assert!(!world.tick(5_000));
    assert_eq!(world.snapshot(), before);
}

#[test]
fn test_closed_loop_returns_to_origin() {
    let mut world = playing();
    let mut now = 0;
    for dir in [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ] {
        assert!(world.apply_movement(dir, now), "{:?} should be accepted", dir);
        now = run_glide(&mut world, now) + FRAME_MS as u64;
    }

    assert_eq!(world.position(), Position::ORIGIN);
    assert_eq!(world.move_count(), 4);
    assert_eq!(world.camera_offset(), Offset::ZERO);
    assert_eq!(world.view_offset(), Offset::ZERO);
}

#[test]
fn test_glide_is_monotonic_toward_target() {
    let mut world = playing();
    world.apply_movement(Direction::Left, 0);
    let target = world.animation_target().x;

    let mut last = world.camera_offset().x;
    let mut now = 0;
    while world.is_animating() {
        now += FRAME_MS as u64;
        world.tick(now);
        let x = world.camera_offset().x;
        assert!(x >= last && x <= target + 1e-4);
        last = x;
    }
    assert_eq!(last, target);
    assert!(now >= ANIMATION_MS as u64);
}

#[test]
fn test_end_game_keeps_position_until_restart() {
    let mut world = playing();
    world.apply_movement(Direction::Down, 0);
    world.end_game();
    assert_eq!(world.mode(), Mode::Menu);
    assert_eq!(world.position(), Position::new(0, 1));

    world.start_game();
    assert_eq!(world.position(), Position::ORIGIN);
    assert_eq!(world.move_count(), 0);
}

#[test]
fn test_long_walk_accumulates_offset() {
    let mut world = playing();
    let tile = world.config().tile_size as f32;
    let mut now = 0;
    for _ in 0..5 {
        world.apply_movement(Direction::Right, now);
        now = run_glide(&mut world, now) + 1;
    }
    assert_eq!(world.position(), Position::new(5, 0));
    assert_eq!(world.camera_offset(), Offset::new(-5.0 * tile, 0.0));
    assert_eq!(world.view_offset(), Offset::ZERO);
}
