//! Configuration parsing shims for plugin settings.
//!
//! Loads a YAML document describing cooldown intervals, an optional RNG
//! seed, and the firework palette, and hands them out as ready-to-use
//! values (`Duration`, `GameRng`, `FireworkConfig`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::effects::{FireworkShape, Rgb};
use crate::error::{CobbleError, Result};
use crate::rng::GameRng;

/// Top-level plugin configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Fixed RNG seed for deterministic behavior; seeds from entropy when
    /// absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Named cooldown intervals in milliseconds, e.g. `broadcast: 1000`
    #[serde(default)]
    pub cooldowns: HashMap<String, u64>,

    /// Palette and odds for randomized firework effects
    #[serde(default)]
    pub fireworks: FireworkConfig,
}

impl PluginConfig {
    /// Load and validate configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading plugin configuration");

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load and validate configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PluginConfig = serde_yaml::from_str(yaml)
            .map_err(|e| CobbleError::Config(format!("Failed to parse plugin config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Get a named cooldown as a `Duration`, ready to feed a
    /// [`RateLimiter`](crate::ratelimit::RateLimiter).
    pub fn cooldown(&self, name: &str) -> Option<Duration> {
        self.cooldowns.get(name).map(|ms| Duration::from_millis(*ms))
    }

    /// Create a random source honoring the configured seed.
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::new(),
        }
    }

    fn validate(&self) -> Result<()> {
        self.fireworks.validate()
    }
}

/// Palette and odds for randomized firework effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireworkConfig {
    /// Shapes to pick from
    #[serde(default = "default_shapes")]
    pub shapes: Vec<FireworkShape>,

    /// Chance of the flicker modifier, in `[0, 1]`
    #[serde(default = "default_flicker_chance")]
    pub flicker_chance: f64,

    /// Chance of the trail modifier, in `[0, 1]`
    #[serde(default = "default_trail_chance")]
    pub trail_chance: f64,

    /// How many primary colors to add
    #[serde(default = "default_primary_count")]
    pub primary_count: CountRange,

    /// How many fade colors to add
    #[serde(default = "default_fade_count")]
    pub fade_count: CountRange,

    /// Per-channel lower bound for sampled colors
    #[serde(default = "default_min_color")]
    pub min_color: Rgb,

    /// Per-channel upper bound for sampled colors
    #[serde(default = "default_max_color")]
    pub max_color: Rgb,

    /// Flight power range, capped at 128
    #[serde(default = "default_power")]
    pub power: CountRange,
}

impl Default for FireworkConfig {
    fn default() -> Self {
        Self {
            shapes: default_shapes(),
            flicker_chance: default_flicker_chance(),
            trail_chance: default_trail_chance(),
            primary_count: default_primary_count(),
            fade_count: default_fade_count(),
            min_color: default_min_color(),
            max_color: default_max_color(),
            power: default_power(),
        }
    }
}

impl FireworkConfig {
    /// Check the palette for values the effect builder cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.shapes.is_empty() {
            return Err(CobbleError::Config(
                "fireworks.shapes must not be empty".to_string(),
            ));
        }
        for (name, chance) in [
            ("fireworks.flicker_chance", self.flicker_chance),
            ("fireworks.trail_chance", self.trail_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(CobbleError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, chance
                )));
            }
        }
        for (name, range) in [
            ("fireworks.primary_count", self.primary_count),
            ("fireworks.fade_count", self.fade_count),
            ("fireworks.power", self.power),
        ] {
            if range.min > range.max {
                return Err(CobbleError::Config(format!(
                    "{}: min {} exceeds max {}",
                    name, range.min, range.max
                )));
            }
        }
        if self.power.max > 128 {
            return Err(CobbleError::Config(format!(
                "fireworks.power.max must be at most 128, got {}",
                self.power.max
            )));
        }
        let channels = [
            ("red", self.min_color.r, self.max_color.r),
            ("green", self.min_color.g, self.max_color.g),
            ("blue", self.min_color.b, self.max_color.b),
        ];
        for (name, min, max) in channels {
            if min > max {
                return Err(CobbleError::Config(format!(
                    "fireworks.min_color {} channel exceeds max_color",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// An inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

fn default_shapes() -> Vec<FireworkShape> {
    vec![
        FireworkShape::SmallBall,
        FireworkShape::LargeBall,
        FireworkShape::Star,
        FireworkShape::Burst,
        FireworkShape::Creeper,
    ]
}

fn default_flicker_chance() -> f64 {
    0.3
}

fn default_trail_chance() -> f64 {
    0.3
}

fn default_primary_count() -> CountRange {
    CountRange { min: 1, max: 4 }
}

fn default_fade_count() -> CountRange {
    CountRange { min: 1, max: 2 }
}

fn default_min_color() -> Rgb {
    Rgb::new(0, 0, 0)
}

fn default_max_color() -> Rgb {
    Rgb::new(255, 255, 255)
}

fn default_power() -> CountRange {
    CountRange { min: 0, max: 2 }
}
