//! Seedable random-number convenience wrapper.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

/// A random source with range, probability, and choice helpers.
///
/// `GameRng` is passed explicitly to the helpers that need randomness instead
/// of living in shared static state, so callers can inject a fixed seed for
/// deterministic tests.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: StdRng,
}

impl GameRng {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Return a random integer in the inclusive range `[min, max]`.
    ///
    /// Panics if `min > max`.
    pub fn int_in(&mut self, min: i32, max: i32) -> i32 {
        self.inner.gen_range(min..=max)
    }

    /// Return a random double in the range `[0.0, 1.0)`.
    pub fn next_double(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Return a random double in the range `[min, max)`.
    pub fn double_in(&mut self, min: f64, max: f64) -> f64 {
        min + self.inner.gen::<f64>() * (max - min)
    }

    /// Return a random float in the range `[0.0, 1.0)`.
    pub fn next_float(&mut self) -> f32 {
        self.inner.gen()
    }

    /// Return a random float in the range `[min, max)`.
    pub fn float_in(&mut self, min: f32, max: f32) -> f32 {
        min + self.inner.gen::<f32>() * (max - min)
    }

    /// Roll an event with the given probability of happening.
    ///
    /// Total over all inputs: thresholds at or below `0.0` never fire,
    /// thresholds at or above `1.0` always fire.
    pub fn probability(&mut self, threshold: f64) -> bool {
        self.inner.gen::<f64>() < threshold
    }

    /// Choose a uniformly random entry from a slice.
    ///
    /// Returns `None` if the slice is empty.
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.inner)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new()
    }
}

// Delegate RngCore so GameRng composes with the wider rand ecosystem.
impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
