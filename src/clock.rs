//! Injected time sources.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A source of the current time.
///
/// The rate limiter reads time through this trait instead of calling
/// `Instant::now()` directly, so tests can substitute a controllable clock.
pub trait Clock {
    /// Get the current instant.
    fn now(&self) -> Instant;
}

/// The system monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A manually driven clock for deterministic tests.
///
/// Time stands still until `advance` or `set` is called. Interior mutability
/// lets a limiter hold the clock while the test drives it.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    /// Create a manual clock starting at the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a manual clock starting at a specific instant.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by the given duration.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Set the clock to a specific instant.
    pub fn set(&self, to: Instant) {
        self.now.set(to);
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
