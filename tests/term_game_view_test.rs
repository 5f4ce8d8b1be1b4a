use pixel_walker::core::projector::PLAYER;
use pixel_walker::core::{World, WorldConfig};
use pixel_walker::term::{Button, GameView, Viewport, UPPER_HALF_BLOCK};
use pixel_walker::types::{Direction, Mode};

fn config() -> WorldConfig {
    // 120x40 cells -> 120x80 pixels, exactly the 30x20 grid at 4px.
    WorldConfig::default().with_tile_size(4)
}

fn find_row(fb: &pixel_walker::term::FrameBuffer, needle: &str) -> Option<u16> {
    (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_pins_player_to_center_tile() {
    let mut world = World::new(config());
    world.start_game();
    world.apply_movement(Direction::Right, 0);
    world.tick(100);

    let mut view = GameView::new(world.config());
    let vp = Viewport::new(120, 40);
    let fb = view.render(&world.snapshot(), false, vp);

    // Center tile (15, 10) starts at pixel (60, 40); inset by one pixel.
    assert_eq!(view.canvas().pixel(61, 41), Some(PLAYER));
    assert_eq!(view.canvas().pixel(62, 42), Some(PLAYER));
    assert_ne!(view.canvas().pixel(60, 40), Some(PLAYER));

    // Pixel row 41 is the bottom half of cell row 20.
    let cell = fb.get(61, 20).unwrap();
    assert_eq!(cell.ch, UPPER_HALF_BLOCK);
    assert_eq!(cell.style.bg, PLAYER);
}

#[test]
fn term_view_shows_move_counter_while_playing() {
    let mut world = World::new(config());
    world.start_game();
    for (i, dir) in [Direction::Up, Direction::Left, Direction::Up].into_iter().enumerate() {
        let now = i as u64 * 1_000;
        world.apply_movement(dir, now);
        world.tick(now + 500);
    }

    let mut view = GameView::new(world.config());
    let fb = view.render(&world.snapshot(), false, Viewport::new(120, 40));
    assert!(fb.row_text(1).contains("Moves: 3"));
    assert_eq!(find_row(&fb, "Game Menu"), None);
}

#[test]
fn term_view_start_screen_has_title_and_button() {
    let world = World::new(config());
    let vp = Viewport::new(120, 40);
    let mut view = GameView::new(world.config());
    let fb = view.render(&world.snapshot(), false, vp);

    assert_eq!(find_row(&fb, "Pixel Walker"), Some(17));
    assert_eq!(find_row(&fb, "Start Game"), Some(22));
    assert_eq!(find_row(&fb, "Moves:"), None);
    // No player marker on the backdrop.
    assert!((0..80).all(|y| (0..120).all(|x| view.canvas().pixel(x, y) != Some(PLAYER))));
}

#[test]
fn term_view_game_menu_overlay() {
    let mut world = World::new(config());
    world.start_game();
    let vp = Viewport::new(120, 40);
    let mut view = GameView::new(world.config());
    let fb = view.render(&world.snapshot(), true, vp);

    let menu_row = find_row(&fb, "Game Menu").expect("menu title");
    let end_row = find_row(&fb, "End Game").expect("end button label");
    assert!(end_row > menu_row);

    let end = GameView::end_button(vp);
    let (x, y) = (end.x + end.w / 2.0, end.y + end.h / 2.0);
    assert_eq!(
        GameView::hit_test(Mode::Playing, true, vp, x, y),
        Some(Button::EndGame)
    );
}

#[test]
fn term_view_follows_viewport_size_changes() {
    let world = World::new(config());
    let mut view = GameView::new(world.config());

    let fb = view.render(&world.snapshot(), false, Viewport::new(120, 40));
    assert_eq!((fb.width(), fb.height()), (120, 40));

    let fb = view.render(&world.snapshot(), false, Viewport::new(60, 20));
    assert_eq!((fb.width(), fb.height()), (60, 20));
    assert_eq!((view.canvas().width(), view.canvas().height()), (60, 40));
}
