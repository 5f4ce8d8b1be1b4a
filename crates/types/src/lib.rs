//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! from the world model, the terminal view and the replay tooling alike.
//!
//! # Coordinate Spaces
//!
//! - **World space**: integer tile coordinates ([`Position`]). The grid is
//!   unbounded; `y` grows downward.
//! - **Surface space**: floating point pixels ([`Offset`], [`Rect`]). The
//!   terminal backend maps one pixel to half a character cell.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TILE_SIZE` | 8 | Tile edge in pixels before the resize policy runs |
//! | `MIN_TILE_SIZE` | 4 | Smallest tile edge the resize policy may pick |
//! | `VIEWPORT_TILES_W` | 30 | Visible tiles per row |
//! | `VIEWPORT_TILES_H` | 20 | Visible tiles per column |
//! | `ANIMATION_MS` | 250 | Duration of one camera glide |
//! | `FRAME_MS` | 16 | Frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use pixel_walker_types::{Direction, Intent, Position};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir.delta(), (0, -1));
//!
//! let pos = Position::ORIGIN.step(dir);
//! assert_eq!(pos, Position::new(0, -1));
//!
//! assert_eq!(Intent::from_str("moveLeft"), Some(Intent::Move(Direction::Left)));
//! assert_eq!(Intent::from_str("toggleMenu"), Some(Intent::ToggleMenu));
//! ```

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 8;

/// Minimum tile edge length in pixels (lower bound of the resize policy).
pub const MIN_TILE_SIZE: u32 = 4;

/// Visible world width in tiles.
pub const VIEWPORT_TILES_W: u32 = 30;

/// Visible world height in tiles.
pub const VIEWPORT_TILES_H: u32 = 20;

/// Camera glide duration in milliseconds.
pub const ANIMATION_MS: u32 = 250;

/// Frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Scale applied to the per-tile hash when varying tile colors.
pub const COLOR_VARIATION_SCALE: f64 = 0.1;

/// Player marker inset as a fraction of the tile size.
pub const PLAYER_INSET_RATIO: f32 = 0.1;

/// Grid lines are only stroked when tiles are at least this many pixels wide.
pub const GRID_LINE_MIN_TILE: u32 = 8;

/// Upper bound on intents consumed per frame.
pub const MAX_INTENTS_PER_FRAME: usize = 16;


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One of the four movement directions.
///
/// Each maps to a unit [`delta`](Direction::delta); there is no diagonal and
/// no zero movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// World-space delta `(dx, dy)`; `y` grows downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Whether the world is being played or the start screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Menu,
    Playing,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Menu => "menu",
            Mode::Playing => "playing",
        }
    }
}

/// Integer world coordinate of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring tile in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

/// A pixel-space displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scale(self, k: f32) -> Self {
        Self {
            x: self.x * k,
            y: self.y * k,
        }
    }
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Hit test; edges count as inside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }

    /// Shrink by `by` pixels on every side (never below zero size).
    pub fn inset(&self, by: f32) -> Self {
        Self {
            x: self.x + by,
            y: self.y + by,
            w: (self.w - 2.0 * by).max(0.0),
            h: (self.h - 2.0 * by).max(0.0),
        }
    }
}

/// Discrete player/system intents consumed by the application.
///
/// Input backends (terminal, scripted replays) produce these; nothing
/// downstream sees raw key or mouse events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Move one tile
    Move(Direction),
    /// Leave the start screen and begin a fresh walk
    StartGame,
    /// Return to the start screen
    EndGame,
    /// Show or hide the in-game menu overlay
    ToggleMenu,
    /// The host surface changed size (terminal cells)
    Resize { width: u16, height: u16 },
    /// Pointer press in surface pixels
    Click { x: f32, y: f32 },
    /// Exit the program
    Quit,
}

impl Intent {
    /// Parse a payload-free intent from its camelCase name.
    ///
    /// `Resize` and `Click` carry data and are never produced here.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(Intent::Move(Direction::Up)),
            "movedown" => Some(Intent::Move(Direction::Down)),
            "moveleft" => Some(Intent::Move(Direction::Left)),
            "moveright" => Some(Intent::Move(Direction::Right)),
            "startgame" => Some(Intent::StartGame),
            "endgame" => Some(Intent::EndGame),
            "togglemenu" => Some(Intent::ToggleMenu),
            "quit" => Some(Intent::Quit),
            _ => None,
        }
    }

    /// camelCase name, the inverse of [`Intent::from_str`] for payload-free intents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Move(Direction::Up) => "moveUp",
            Intent::Move(Direction::Down) => "moveDown",
            Intent::Move(Direction::Left) => "moveLeft",
            Intent::Move(Direction::Right) => "moveRight",
            Intent::StartGame => "startGame",
            Intent::EndGame => "endGame",
            Intent::ToggleMenu => "toggleMenu",
            Intent::Resize { .. } => "resize",
            Intent::Click { .. } => "click",
            Intent::Quit => "quit",
        }
    }
}
