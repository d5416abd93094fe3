//! Generation settings
//!
//! Grid dimensions are derived from a display size and a tile unit, the way a
//! pixel renderer would lay tiles out. The terminal front-end keeps the same
//! numbers so a config file means the same dungeon everywhere.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_DISPLAY_WIDTH: u32 = 800;
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 600;
pub const DEFAULT_TILE_SIZE: u32 = 20;
pub const DEFAULT_MAX_ROOMS: usize = 15;
pub const DEFAULT_MIN_ROOM_SIZE: u32 = 4;
pub const DEFAULT_MAX_ROOM_SIZE: u32 = 10;

/// Static configuration for dungeon generation
///
/// Missing fields in a config file fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Display width in pixels
    pub display_width: u32,
    /// Display height in pixels
    pub display_height: u32,
    /// Edge length of one tile in pixels
    pub tile_size: u32,
    /// Number of placement attempts, and the cap on committed rooms
    pub max_rooms: usize,
    /// Smallest room edge in tiles
    pub min_room_size: u32,
    /// Largest room edge in tiles
    pub max_room_size: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            max_rooms: DEFAULT_MAX_ROOMS,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
        }
    }
}

impl DungeonConfig {
    /// Grid width in tiles
    pub fn grid_width(&self) -> usize {
        self.display_width.checked_div(self.tile_size).unwrap_or(0) as usize
    }

    /// Grid height in tiles
    pub fn grid_height(&self) -> usize {
        self.display_height.checked_div(self.tile_size).unwrap_or(0) as usize
    }

    /// Reject settings that cannot describe a grid at all.
    ///
    /// Settings that merely make rooms hard or impossible to fit (a room size
    /// larger than the grid, say) are accepted: generation degrades to fewer
    /// rooms instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.grid_width() == 0 || self.grid_height() == 0 {
            return Err(ConfigError::DisplayTooSmall {
                width: self.display_width,
                height: self.display_height,
                tile_size: self.tile_size,
            });
        }
        if self.min_room_size == 0 || self.min_room_size > self.max_room_size {
            return Err(ConfigError::InvalidRoomSize {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        Ok(())
    }

    /// Parse a JSON config and validate it
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_json(&contents)
    }
}
