//! Level generation
//!
//! Reset, place rooms, join them, then mark the start and end tiles.

use crate::config::DungeonConfig;

use super::corridor::connect_rooms;
use super::level::Level;
use super::placement::{RoomSource, place_rooms};
use super::tile::TileType;

/// Generate a complete level in place.
///
/// Whatever `level` held before is discarded.
pub fn generate_level(level: &mut Level, config: &DungeonConfig, source: &mut impl RoomSource) {
    level.reset();

    let placed = place_rooms(level, config, source);
    let corridors = connect_rooms(level);
    place_start_end(level);

    log::debug!(
        "generated {}x{} level: {}/{} rooms, {} corridors, start {:?}, end {:?}",
        level.grid.width(),
        level.grid.height(),
        placed,
        config.max_rooms,
        corridors,
        level.start,
        level.end,
    );
}

/// Mark the center of the first room as `Start` and of the last as `End`.
///
/// Skipped entirely when there are fewer than two rooms.
pub fn place_start_end(level: &mut Level) {
    let (first, last) = match level.rooms() {
        [first, .., last] => (first.center(), last.center()),
        _ => return,
    };

    level.grid.set(first, TileType::Start);
    level.start = Some(first);

    level.grid.set(last, TileType::End);
    level.end = Some(last);
}
