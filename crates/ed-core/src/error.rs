//! Configuration errors
//!
//! Generation itself never fails; the only fallible surface is turning
//! user-supplied settings into a [`DungeonConfig`](crate::DungeonConfig).

use thiserror::Error;

/// Errors raised while loading or validating a dungeon configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tile size must be at least 1")]
    ZeroTileSize,

    #[error("display {width}x{height} is smaller than a single {tile_size}px tile")]
    DisplayTooSmall {
        width: u32,
        height: u32,
        tile_size: u32,
    },

    #[error("invalid room size range {min}..={max}")]
    InvalidRoomSize { min: u32, max: u32 },

    #[error("could not read config: {0}")]
    Io(String),

    #[error("could not parse config: {0}")]
    Parse(String),
}
