//! Intent sources.
//!
//! The application pulls intents from an [`IntentSource`] once per loop
//! iteration instead of registering callbacks. The terminal implementation
//! reads crossterm events; the scripted one replays a timed queue and drives
//! headless runs and tests.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event;

use crate::map::handle_event;
use crate::types::{Intent, MAX_INTENTS_PER_FRAME};

/// Intents gathered during one loop iteration.
pub type IntentBatch = ArrayVec<Intent, MAX_INTENTS_PER_FRAME>;

pub trait IntentSource {
    /// Wait up to `timeout` for the next intent.
    fn next_intent(&mut self, timeout: Duration) -> Result<Option<Intent>>;

    /// Wait up to `timeout` for one intent, then drain whatever else is
    /// already pending (bounded by [`MAX_INTENTS_PER_FRAME`]).
    fn poll_batch(&mut self, timeout: Duration) -> Result<IntentBatch> {
        let mut batch = IntentBatch::new();
        let Some(first) = self.next_intent(timeout)? else {
            return Ok(batch);
        };
        batch.push(first);
        while !batch.is_full() {
            match self.next_intent(Duration::ZERO)? {
                Some(intent) => batch.push(intent),
                None => break,
            }
        }
        Ok(batch)
    }
}

/// Reads keyboard, mouse and resize events from the terminal.
#[derive(Debug, Default)]
pub struct TerminalIntents;

impl TerminalIntents {
    pub fn new() -> Self {
        Self
    }
}

impl IntentSource for TerminalIntents {
    fn next_intent(&mut self, timeout: Duration) -> Result<Option<Intent>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }
            // Unmapped events (focus, paste, mouse moves) are skipped.
            if let Some(intent) = handle_event(&event::read()?) {
                return Ok(Some(intent));
            }
            if remaining.is_zero() {
                return Ok(None);
            }
        }
    }
}

/// A queue of intents, each released once the virtual clock reaches its
/// timestamp.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIntents {
    queue: VecDeque<(u64, Intent)>,
    now_ms: u64,
}

impl ScriptedIntents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(at_ms, intent)` pairs; they are released in list order.
    pub fn from_steps(steps: impl IntoIterator<Item = (u64, Intent)>) -> Self {
        Self {
            queue: steps.into_iter().collect(),
            now_ms: 0,
        }
    }

    /// Queue an intent that is available immediately.
    pub fn push(&mut self, intent: Intent) {
        self.queue.push_back((self.now_ms, intent));
    }

    pub fn push_at(&mut self, at_ms: u64, intent: Intent) {
        self.queue.push_back((at_ms, intent));
    }

    /// Advance the virtual clock.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Timestamp of the next queued intent.
    pub fn next_at(&self) -> Option<u64> {
        self.queue.front().map(|(at, _)| *at)
    }
}

impl IntentSource for ScriptedIntents {
    fn next_intent(&mut self, _timeout: Duration) -> Result<Option<Intent>> {
        match self.queue.front() {
            Some(&(at, intent)) if at <= self.now_ms => {
                self.queue.pop_front();
                Ok(Some(intent))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn scripted_releases_only_due_intents() {
        let mut src = ScriptedIntents::from_steps([
            (0, Intent::StartGame),
            (100, Intent::Move(Direction::Up)),
        ]);

        let batch = src.poll_batch(Duration::ZERO).unwrap();
        assert_eq!(batch.as_slice(), &[Intent::StartGame]);
        assert_eq!(src.next_at(), Some(100));

        src.set_now(99);
        assert!(src.poll_batch(Duration::ZERO).unwrap().is_empty());

        src.set_now(100);
        let batch = src.poll_batch(Duration::ZERO).unwrap();
        assert_eq!(batch.as_slice(), &[Intent::Move(Direction::Up)]);
        assert!(src.is_empty());
    }

    #[test]
    fn batch_is_bounded() {
        let mut src = ScriptedIntents::new();
        for _ in 0..(MAX_INTENTS_PER_FRAME + 3) {
            src.push(Intent::ToggleMenu);
        }
        let batch = src.poll_batch(Duration::ZERO).unwrap();
        assert_eq!(batch.len(), MAX_INTENTS_PER_FRAME);
        assert_eq!(src.len(), 3);
    }
}
