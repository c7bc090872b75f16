//! RGB color handling for effect descriptions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CobbleError;
use crate::rng::GameRng;

/// An RGB color.
///
/// Serializes as a hex string (`"#RRGGBB"`), which is also the accepted
/// configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `"#RRGGBB"` or `"RRGGBB"` hex string.
    pub fn from_hex(s: &str) -> Result<Self, CobbleError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(CobbleError::Color(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| CobbleError::Color(s.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Sample a color with each channel uniform in the inclusive range
    /// spanned by `min` and `max`.
    ///
    /// Panics if any channel of `min` exceeds the same channel of `max`.
    pub fn random_between(rng: &mut GameRng, min: Rgb, max: Rgb) -> Rgb {
        Rgb::new(
            rng.int_in(min.r as i32, max.r as i32) as u8,
            rng.int_in(min.g as i32, max.g as i32) as u8,
            rng.int_in(min.b as i32, max.b as i32) as u8,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = CobbleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_hash() {
        assert_eq!(Rgb::from_hex("#FF8000").unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_from_hex_without_hash() {
        assert_eq!(Rgb::from_hex("0a0B0c").unwrap(), Rgb::new(10, 11, 12));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#FFF").is_err());
        assert!(Rgb::from_hex("GGGGGG").is_err());
        assert!(Rgb::from_hex("#FF80001").is_err());
        assert!(Rgb::from_hex("€€").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let color = Rgb::new(1, 2, 255);
        assert_eq!(color.to_string(), "#0102FF");
        assert_eq!(Rgb::from_hex(&color.to_string()).unwrap(), color);
    }

    #[test]
    fn test_deserialize_from_yaml_string() {
        let color: Rgb = serde_yaml::from_str("\"#102030\"").unwrap();
        assert_eq!(color, Rgb::new(16, 32, 48));
    }

    #[test]
    fn test_random_between_respects_channel_bounds() {
        let mut rng = GameRng::seeded(5);
        let min = Rgb::new(10, 0, 200);
        let max = Rgb::new(20, 0, 255);

        for _ in 0..100 {
            let c = Rgb::random_between(&mut rng, min, max);
            assert!((10..=20).contains(&c.r));
            assert_eq!(c.g, 0);
            assert!((200..=255).contains(&c.b));
        }
    }
}
