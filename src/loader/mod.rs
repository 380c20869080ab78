//! Card registry, built-in catalog, kingdom selection and game setup

pub mod catalog;
pub mod game_init;
pub mod kingdom;
pub mod registry;

pub use game_init::{GameConfig, GameInitializer, MAX_PLAYERS, MIN_PLAYERS};
pub use kingdom::{preset, preset_names, random_kingdom, KingdomChoice};
pub use registry::CardRegistry;
