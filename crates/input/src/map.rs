//! Mapping from terminal events to intents.

use crate::types::{Direction, Intent};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map keyboard input to intents.
///
/// Auto-repeat counts as a press so holding a direction keeps walking; the
/// world drops whatever arrives mid-glide.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Intent::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(Intent::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(Intent::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(Intent::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(Intent::Move(Direction::Right))
        }

        // Menus
        KeyCode::Esc => Some(Intent::ToggleMenu),
        KeyCode::Enter => Some(Intent::StartGame),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Intent::EndGame),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a left-button press to a click at the pixel under the cell center.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (x, y) = cell_to_pixel(mouse.column, mouse.row);
            Some(Intent::Click { x, y })
        }
        _ => None,
    }
}

/// Any terminal event to an intent.
pub fn handle_event(event: &Event) -> Option<Intent> {
    match event {
        Event::Key(key) => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        Event::Resize(width, height) => Some(Intent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Center of terminal cell `(col, row)` in canvas pixels.
///
/// A cell is one pixel wide and two pixels tall.
pub fn cell_to_pixel(col: u16, row: u16) -> (f32, f32) {
    (col as f32 + 0.5, row as f32 * 2.0 + 1.0)
}
