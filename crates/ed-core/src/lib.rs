//! ed-core: dungeon generation for Endless Dungeon
//!
//! This crate contains the generation logic with no terminal or window
//! dependencies. Every generation phase takes the level it works on by
//! reference, and randomness is injected, so layouts are reproducible in tests.

pub mod config;
pub mod dungeon;
pub mod error;

mod generator;
mod rng;

pub use config::DungeonConfig;
pub use error::ConfigError;
pub use generator::Generator;
pub use rng::GameRng;
