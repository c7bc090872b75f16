//! Cooldown-style rate limiting.

mod limiter;

pub use limiter::RateLimiter;
