//! Frame scheduling.
//!
//! A single cancelable "run the next frame" request, the terminal stand-in
//! for a browser's animation-frame callback. The game loop asks for a frame,
//! polls [`FrameScheduler::take_due`], and asks again while a game is running.

use std::time::Duration;

/// Identifies one frame request so a stale handle cannot cancel a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval_ms: u64,
    next_id: u64,
    pending: Option<(FrameHandle, u64)>,
    last_frame_ms: Option<u64>,
}

impl FrameScheduler {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_id: 0,
            pending: None,
            last_frame_ms: None,
        }
    }

    /// Request a frame. The first frame is due immediately; later ones are
    /// spaced by the interval from the previous frame. Replaces any pending
    /// request.
    pub fn request(&mut self, now_ms: u64) -> FrameHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle(self.next_id);
        let due = match self.last_frame_ms {
            Some(last) => now_ms.max(last.saturating_add(self.interval_ms)),
            None => now_ms,
        };
        self.pending = Some((handle, due));
        handle
    }

    /// Cancel `handle` if it is still the pending request.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        match self.pending {
            Some((pending, _)) if pending == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Consume the pending request if it is due at `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> bool {
        match self.pending {
            Some((_, due)) if now_ms >= due => {
                self.pending = None;
                self.last_frame_ms = Some(now_ms);
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending frame, or `None` when nothing is requested.
    pub fn time_until_due(&self, now_ms: u64) -> Option<Duration> {
        self.pending
            .map(|(_, due)| Duration::from_millis(due.saturating_sub(now_ms)))
    }
}
