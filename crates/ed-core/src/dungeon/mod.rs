//! Dungeon system
//!
//! Contains the tile grid, room geometry, and the generation phases that fill
//! a level: room placement, connection, and start/end selection.

mod corridor;
mod generation;
mod grid;
mod level;
mod placement;
mod rect;
mod room;
mod tile;

pub use corridor::{carve_corridor, connect_rooms, nearest_unconnected};
pub use generation::{generate_level, place_start_end};
pub use grid::Grid;
pub use level::{Level, LevelSummary};
pub use placement::{RoomSource, ScriptedRooms, place_rooms};
pub use rect::{Coord, Rect};
pub use room::Room;
pub use tile::TileType;
