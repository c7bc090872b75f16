//! Core rate limiter implementation.

use std::time::{Duration, Instant};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};

/// Enforces a minimum time period between actions, e.g. chat broadcasts.
///
/// The limiter tracks the instant of the last permitted action and gates
/// subsequent attempts until at least `min_interval` has elapsed. It is
/// intended for single-threaded, sequential use: mutation goes through
/// `&mut self`, so concurrent callers must serialize access themselves.
///
/// The time source is injected through [`Clock`]. Production code uses the
/// [`SystemClock`] default; tests drive a [`crate::clock::ManualClock`].
pub struct RateLimiter<C: Clock = SystemClock> {
    /// Minimum elapsed time since the last permitted action before the next
    /// action can occur.
    min_interval: Duration,
    /// When an action was last permitted. `None` until the first grant, so
    /// the first check always succeeds regardless of `min_interval`.
    last_action: Option<Instant>,
    /// Time source.
    clock: C,
}

impl RateLimiter<SystemClock> {
    /// Create a rate limiter reading the system clock.
    pub fn new(min_interval: Duration) -> Self {
        Self::with_clock(min_interval, SystemClock)
    }
}

impl<C: Clock> RateLimiter<C> {
    /// Create a rate limiter with an explicit time source.
    pub fn with_clock(min_interval: Duration, clock: C) -> Self {
        Self {
            min_interval,
            last_action: None,
            clock,
        }
    }

    /// Return `true` if enough time has elapsed for an action to occur now.
    ///
    /// A `true` result records the current time as the new baseline; a
    /// `false` result leaves the limiter unchanged. The first call after
    /// construction (or after [`reset`](Self::reset)) always returns `true`.
    pub fn can_act_now(&mut self) -> bool {
        let now = self.clock.now();

        if let Some(last) = self.last_action {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.min_interval {
                debug!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    min_interval_ms = self.min_interval.as_millis() as u64,
                    "Action throttled"
                );
                return false;
            }
        }

        trace!("Action permitted");
        self.last_action = Some(now);
        true
    }

    /// Get the minimum interval between permitted actions.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Get the time remaining until the next action would be permitted.
    ///
    /// Returns `Duration::ZERO` when a call to
    /// [`can_act_now`](Self::can_act_now) would succeed. Does not mutate the
    /// limiter.
    pub fn time_until_ready(&self) -> Duration {
        match self.last_action {
            None => Duration::ZERO,
            Some(last) => {
                let elapsed = self.clock.now().saturating_duration_since(last);
                self.min_interval.saturating_sub(elapsed)
            }
        }
    }

    /// Forget the last permitted action, so the next check succeeds
    /// immediately.
    pub fn reset(&mut self) {
        self.last_action = None;
    }

    /// Get the injected time source.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn limiter_ms(min_millis: u64) -> RateLimiter<ManualClock> {
        RateLimiter::with_clock(Duration::from_millis(min_millis), ManualClock::new())
    }

    #[test]
    fn test_first_call_always_permitted() {
        // Even an enormous interval cannot block the very first action.
        let mut limiter = limiter_ms(u64::MAX / 2);
        assert!(limiter.can_act_now());
    }

    #[test]
    fn test_zero_interval_always_permits() {
        let mut limiter = limiter_ms(0);
        for _ in 0..10 {
            assert!(limiter.can_act_now());
        }
    }

    #[test]
    fn test_gate_sequence() {
        // min_interval = 1000ms: t=0 true, t=500 false, t=999 false,
        // t=1000 true, t=1001 (baseline now 1000) false.
        let mut limiter = limiter_ms(1000);

        assert!(limiter.can_act_now());

        limiter.clock().advance(Duration::from_millis(500));
        assert!(!limiter.can_act_now());

        limiter.clock().advance(Duration::from_millis(499));
        assert!(!limiter.can_act_now());

        limiter.clock().advance(Duration::from_millis(1));
        assert!(limiter.can_act_now());

        limiter.clock().advance(Duration::from_millis(1));
        assert!(!limiter.can_act_now());
    }

    #[test]
    fn test_denied_calls_do_not_move_baseline() {
        let mut limiter = limiter_ms(1000);
        assert!(limiter.can_act_now());

        // Hammering the limiter during the cooldown must not extend it.
        for _ in 0..5 {
            limiter.clock().advance(Duration::from_millis(100));
            assert!(!limiter.can_act_now());
        }

        limiter.clock().advance(Duration::from_millis(500));
        assert!(limiter.can_act_now());
    }

    #[test]
    fn test_time_until_ready_counts_down() {
        let mut limiter = limiter_ms(1000);
        assert_eq!(limiter.time_until_ready(), Duration::ZERO);

        assert!(limiter.can_act_now());
        assert_eq!(limiter.time_until_ready(), Duration::from_millis(1000));

        limiter.clock().advance(Duration::from_millis(400));
        assert_eq!(limiter.time_until_ready(), Duration::from_millis(600));

        limiter.clock().advance(Duration::from_millis(600));
        assert_eq!(limiter.time_until_ready(), Duration::ZERO);
    }

    #[test]
    fn test_time_until_ready_does_not_mutate() {
        let mut limiter = limiter_ms(1000);
        assert!(limiter.can_act_now());

        limiter.clock().advance(Duration::from_millis(999));
        for _ in 0..3 {
            assert_eq!(limiter.time_until_ready(), Duration::from_millis(1));
        }
        assert!(!limiter.can_act_now());
    }

    #[test]
    fn test_reset_reopens_the_gate() {
        let mut limiter = limiter_ms(1000);
        assert!(limiter.can_act_now());
        assert!(!limiter.can_act_now());

        limiter.reset();
        assert!(limiter.can_act_now());
    }

    #[test]
    fn test_system_clock_default() {
        let mut limiter = RateLimiter::new(Duration::ZERO);
        assert!(limiter.can_act_now());
        assert!(limiter.can_act_now());
    }
}
