//! One-shot timers and the clock they are measured against.
//!
//! The event loop is single-threaded, so a timer is nothing more than a
//! deadline that gets polled on every tick. Cancelling a timer means dropping
//! it; nothing can fire once the owning value is gone.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock for tests and headless runs.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to the controller.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// A single-fire deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    started_at: Instant,
    duration: Duration,
}

impl OneShot {
    /// Start a timer at `now` that fires after `duration`.
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Whether the deadline has passed.
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Elapsed fraction in `0.0..=1.0`. A zero-length timer reports `1.0`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}
