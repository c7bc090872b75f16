//! Firework effect descriptions.
//!
//! The intended use mirrors the builder flow:
//!
//! ```
//! use cobble::effects::{FireworkEffect, FireworkShape, Rgb};
//! use cobble::rng::GameRng;
//!
//! let mut rng = GameRng::seeded(1);
//! let effect = FireworkEffect::builder()
//!     .random_shape(&mut rng, &[FireworkShape::Star, FireworkShape::Burst], 0.3, 0.3)
//!     .random_primaries(&mut rng, 1, 4, Rgb::new(0, 0, 0), Rgb::new(255, 255, 255))
//!     .random_fades(&mut rng, 1, 2, Rgb::new(0, 0, 0), Rgb::new(255, 255, 255))
//!     .power(rng.int_in(0, 2) as u8)
//!     .build();
//! assert!(!effect.colors.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use super::color::Rgb;
use crate::config::FireworkConfig;
use crate::rng::GameRng;

/// Shape of a firework explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireworkShape {
    #[default]
    SmallBall,
    LargeBall,
    Star,
    Burst,
    Creeper,
}

/// A cosmetic firework effect, ready for a host to spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireworkEffect {
    pub shape: FireworkShape,
    pub flicker: bool,
    pub trail: bool,
    /// Primary explosion colors
    pub colors: Vec<Rgb>,
    /// Colors the explosion fades to
    pub fade_colors: Vec<Rgb>,
    /// Flight power from 0 to 128; each unit adds about half a second of
    /// flight time
    pub power: u8,
}

impl FireworkEffect {
    /// Start building an effect.
    pub fn builder() -> FireworkEffectBuilder {
        FireworkEffectBuilder::default()
    }

    /// Build a fully randomized effect from a palette configuration.
    pub fn sample(config: &FireworkConfig, rng: &mut GameRng) -> Self {
        Self::builder()
            .random_shape(rng, &config.shapes, config.flicker_chance, config.trail_chance)
            .random_primaries(
                rng,
                config.primary_count.min,
                config.primary_count.max,
                config.min_color,
                config.max_color,
            )
            .random_fades(
                rng,
                config.fade_count.min,
                config.fade_count.max,
                config.min_color,
                config.max_color,
            )
            .power(rng.int_in(config.power.min as i32, config.power.max as i32) as u8)
            .build()
    }
}

/// Builder for [`FireworkEffect`].
#[derive(Debug, Default)]
pub struct FireworkEffectBuilder {
    shape: FireworkShape,
    flicker: bool,
    trail: bool,
    colors: Vec<Rgb>,
    fade_colors: Vec<Rgb>,
    power: u8,
}

impl FireworkEffectBuilder {
    /// Set the explosion shape.
    pub fn shape(mut self, shape: FireworkShape) -> Self {
        self.shape = shape;
        self
    }

    /// Enable the flicker modifier.
    pub fn flicker(mut self) -> Self {
        self.flicker = true;
        self
    }

    /// Enable the trail modifier.
    pub fn trail(mut self) -> Self {
        self.trail = true;
        self
    }

    /// Add a primary color.
    pub fn color(mut self, color: Rgb) -> Self {
        self.colors.push(color);
        self
    }

    /// Add a fade color.
    pub fn fade(mut self, color: Rgb) -> Self {
        self.fade_colors.push(color);
        self
    }

    /// Set the flight power.
    pub fn power(mut self, power: u8) -> Self {
        self.power = power;
        self
    }

    /// Pick a uniformly random shape from `shapes` and roll the flicker and
    /// trail modifiers with the given chances.
    ///
    /// An empty `shapes` slice leaves the shape unchanged.
    pub fn random_shape(
        mut self,
        rng: &mut GameRng,
        shapes: &[FireworkShape],
        flicker_chance: f64,
        trail_chance: f64,
    ) -> Self {
        if let Some(&shape) = rng.choose(shapes) {
            self.shape = shape;
        }
        if rng.probability(flicker_chance) {
            self.flicker = true;
        }
        if rng.probability(trail_chance) {
            self.trail = true;
        }
        self
    }

    /// Add a random number of random primary colors.
    ///
    /// The count is uniform in the inclusive range `[min, max]`; each color
    /// samples its channels between `min_color` and `max_color`.
    pub fn random_primaries(
        mut self,
        rng: &mut GameRng,
        min: u32,
        max: u32,
        min_color: Rgb,
        max_color: Rgb,
    ) -> Self {
        for _ in 0..rng.int_in(min as i32, max as i32) {
            self.colors.push(Rgb::random_between(rng, min_color, max_color));
        }
        self
    }

    /// Add a random number of random fade colors.
    ///
    /// Same count and channel semantics as
    /// [`random_primaries`](Self::random_primaries).
    pub fn random_fades(
        mut self,
        rng: &mut GameRng,
        min: u32,
        max: u32,
        min_color: Rgb,
        max_color: Rgb,
    ) -> Self {
        for _ in 0..rng.int_in(min as i32, max as i32) {
            self.fade_colors
                .push(Rgb::random_between(rng, min_color, max_color));
        }
        self
    }

    /// Finish building.
    pub fn build(self) -> FireworkEffect {
        FireworkEffect {
            shape: self.shape,
            flicker: self.flicker,
            trail: self.trail,
            colors: self.colors,
            fade_colors: self.fade_colors,
            power: self.power,
        }
    }
}
