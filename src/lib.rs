//! Cobble - Helper Utilities for Game-Server Plugins
//!
//! This crate collects small, stateless helpers commonly needed by
//! game-server plugins: cooldown-style rate limiting, a seedable random
//! source with range and choice helpers, coordinate formatting, cosmetic
//! firework effect descriptions, and a YAML configuration layer that ties
//! them together. It performs no engine integration itself; the host feeds
//! the produced values into its own world and entity APIs.

pub mod clock;
pub mod config;
pub mod coords;
pub mod effects;
pub mod error;
pub mod ratelimit;
pub mod rng;
