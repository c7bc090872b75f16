//! Cosmetic visual effect helpers.
//!
//! Everything here produces effect *descriptions* only. Spawning the result
//! into a world is the host's job.

mod color;
mod firework;

pub use color::Rgb;
pub use firework::{FireworkEffect, FireworkEffectBuilder, FireworkShape};
