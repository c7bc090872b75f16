//! Functions for handling coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in a named world.
///
/// A plain value type with no engine handle attached; hosts convert to and
/// from their own location representation at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Name of the world containing the point
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Create a position in the named world.
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// The block X coordinate (floored).
    pub fn block_x(&self) -> i32 {
        self.x.floor() as i32
    }

    /// The block Y coordinate (floored).
    pub fn block_y(&self) -> i32 {
        self.y.floor() as i32
    }

    /// The block Z coordinate (floored).
    pub fn block_z(&self) -> i32 {
        self.z.floor() as i32
    }

    /// Format as `(world, x, y, z)` with integer block coordinates.
    pub fn parens_world_int(&self) -> String {
        format!(
            "({}, {}, {}, {})",
            self.world,
            self.block_x(),
            self.block_y(),
            self.block_z()
        )
    }

    /// Format as `(world, x, y, z)` with full-precision coordinates.
    pub fn parens_world_double(&self) -> String {
        format!("({}, {}, {}, {})", self.world, self.x, self.y, self.z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parens_world_int())
    }
}
