//! Application state machine.
//!
//! [`App`] owns the world, the menu overlay flag and the frame schedule, and
//! turns intents into world operations. It performs no I/O: the interactive
//! runner and the headless replay both drive it with intents and timestamps
//! and flush whatever it draws.

use std::time::Duration;

use crate::core::{World, WorldConfig, WorldSnapshot};
use crate::term::{Button, FrameBuffer, FrameHandle, FrameScheduler, GameView, Viewport};
use crate::types::{Intent, Mode, FRAME_MS};

/// Poll timeout while no frame is scheduled (start screen, idle menu).
const IDLE_POLL_MS: u64 = 250;

/// Whether the loop should keep running after an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    world: World,
    view: GameView,
    show_menu: bool,
    scheduler: FrameScheduler,
    frame: Option<FrameHandle>,
    viewport: Viewport,
    dirty: bool,
}

impl App {
    /// Build for a terminal of `viewport` cells; the tile size is fitted to it.
    pub fn new(config: WorldConfig, viewport: Viewport) -> Self {
        let (w, h) = viewport.pixel_size();
        let config = config.with_tile_size(config.fit_tile_size(w, h));
        Self {
            world: World::new(config),
            view: GameView::new(&config),
            show_menu: false,
            scheduler: FrameScheduler::new(FRAME_MS as u64),
            frame: None,
            viewport,
            dirty: true,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.world.snapshot()
    }

    pub fn show_menu(&self) -> bool {
        self.show_menu
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// True while a frame request is outstanding.
    pub fn frame_pending(&self) -> bool {
        self.frame.is_some()
    }

    pub fn handle_intent(&mut self, intent: Intent, now_ms: u64) -> Flow {
        match intent {
            Intent::Quit => return Flow::Quit,
            Intent::Move(direction) => {
                if self.world.apply_movement(direction, now_ms) {
                    self.dirty = true;
                }
            }
            Intent::StartGame => {
                if self.world.mode() == Mode::Menu {
                    self.start_game(now_ms);
                }
            }
            Intent::EndGame => {
                if self.world.mode() == Mode::Playing {
                    self.end_game();
                }
            }
            Intent::ToggleMenu => {
                if self.world.mode() == Mode::Playing {
                    self.show_menu = !self.show_menu;
                    self.dirty = true;
                }
            }
            Intent::Resize { width, height } => self.resize(Viewport::new(width, height)),
            Intent::Click { x, y } => self.click(x, y, now_ms),
        }
        Flow::Continue
    }

    fn start_game(&mut self, now_ms: u64) {
        self.world.start_game();
        self.show_menu = false;
        self.frame = Some(self.scheduler.request(now_ms));
        self.dirty = true;
        tracing::info!("game started");
    }

    fn end_game(&mut self) {
        let moves = self.world.move_count();
        self.world.end_game();
        self.show_menu = false;
        if let Some(handle) = self.frame.take() {
            self.scheduler.cancel(handle);
        }
        self.dirty = true;
        tracing::info!(moves, "game ended");
    }

    /// Dispatch a left click at cell coordinates.
    ///
    /// While the game menu is open, a click that misses End Game closes the
    /// overlay instead of being ignored, so the mouse alone can dismiss it.
    fn click(&mut self, x: f32, y: f32, now_ms: u64) {
        let mode = self.world.mode();
        match GameView::hit_test(mode, self.show_menu, self.viewport, x, y) {
            Some(Button::StartGame) => self.start_game(now_ms),
            Some(Button::EndGame) => self.end_game(),
            None if mode == Mode::Playing && self.show_menu => {
                self.show_menu = false;
                self.dirty = true;
            }
            None => {}
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        let (w, h) = viewport.pixel_size();
        let tile = self.world.config().fit_tile_size(w, h);
        self.world.resize(tile);
        self.view.reconfigure(self.world.config());
        self.viewport = viewport;
        self.dirty = true;
        tracing::info!(
            cols = viewport.width,
            rows = viewport.height,
            tile,
            "resized"
        );
    }

    /// How long the loop may wait for input before the next frame is due.
    pub fn poll_timeout(&self, now_ms: u64) -> Duration {
        self.scheduler
            .time_until_due(now_ms)
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS))
    }

    /// Run the scheduled frame if it is due, and redraw `fb` when anything
    /// changed. Returns whether `fb` was redrawn.
    pub fn frame(&mut self, now_ms: u64, fb: &mut FrameBuffer) -> bool {
        if self.frame.is_some() && self.scheduler.take_due(now_ms) {
            self.frame = None;
            self.world.tick(now_ms);
            if self.world.mode() == Mode::Playing {
                self.frame = Some(self.scheduler.request(now_ms));
            }
            self.dirty = true;
        }

        if !self.dirty {
            return false;
        }
        let snap = self.world.snapshot();
        self.view
            .render_into(&snap, self.show_menu, self.viewport, fb);
        self.dirty = false;
        true
    }
}
