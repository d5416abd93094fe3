//! Corridor carving and room connection
//!
//! Rooms are joined greedily: the first connected room in placement order is
//! always the anchor, and it is linked to the nearest unconnected room by
//! Manhattan distance between centers. This is not a minimum spanning tree;
//! corridors fan out from the anchor, which gives layouts their hub-like look.

use super::grid::Grid;
use super::level::Level;
use super::rect::Coord;
use super::room::Room;
use super::tile::TileType;

/// Carve an L-shaped corridor: along x from `from` to `to.x`, then along y.
///
/// `from` itself is not visited. Only `Wall` cells change (to `Corridor`);
/// room floors and existing corridors are left alone, so carving the same
/// path twice is the same as carving it once.
pub fn carve_corridor(grid: &mut Grid, from: Coord, to: Coord) {
    let mut pos = from;

    while pos.x != to.x {
        pos.x += (to.x - pos.x).signum();
        dig(grid, pos);
    }

    while pos.y != to.y {
        pos.y += (to.y - pos.y).signum();
        dig(grid, pos);
    }
}

fn dig(grid: &mut Grid, pos: Coord) {
    if grid.get(pos) == Some(TileType::Wall) {
        grid.set(pos, TileType::Corridor);
    }
}

/// Index of the unconnected room whose center is nearest to `anchor`.
///
/// Ties go to the earliest room in placement order.
pub fn nearest_unconnected(rooms: &[Room], anchor: Coord) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;

    for (i, room) in rooms.iter().enumerate() {
        if room.connected {
            continue;
        }
        let distance = anchor.manhattan(room.center());
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }

    best.map(|(i, _)| i)
}

/// Join every room into one connected structure.
///
/// Does nothing with fewer than two rooms. Returns the number of corridors
/// carved, which is always `rooms - 1` otherwise.
pub fn connect_rooms(level: &mut Level) -> usize {
    let room_count = level.rooms().len();
    if room_count < 2 {
        return 0;
    }

    level.rooms_mut()[0].connected = true;
    let mut carved = 0;

    // Each pass connects exactly one room, so room_count passes always suffice
    for _ in 0..room_count {
        let rooms = level.rooms();
        let Some(anchor) = rooms.iter().position(|r| r.connected) else {
            break;
        };
        let from = rooms[anchor].center();
        let Some(target) = nearest_unconnected(rooms, from) else {
            break;
        };
        let to = rooms[target].center();

        carve_corridor(&mut level.grid, from, to);
        level.rooms_mut()[target].connected = true;
        carved += 1;

        log::trace!("joined room {} {} to room {} {}", anchor, from, target, to);
    }

    carved
}
