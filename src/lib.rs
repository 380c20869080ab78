//! Dominion-style deck-building card game engine
//!
//! Cards are data (effect lists and callbacks) registered in a `CardRegistry`;
//! the engine in `game` interprets them one effect at a time, asking pluggable
//! player controllers whenever a decision is needed.

pub mod core;
pub mod error;
pub mod game;
pub mod loader;
pub mod simulate;
pub mod zones;

pub use error::{DominionError, Result};
