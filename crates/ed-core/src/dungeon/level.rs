//! Level: the generation context
//!
//! A level owns the grid, the ordered room sequence and the start/end
//! coordinates. Every generation phase takes it by `&mut`; renderers only ever
//! see `&Level`.

use super::grid::Grid;
use super::rect::{Coord, Rect};
use super::room::Room;
use super::tile::TileType;

/// Padding, in cells, kept around every room during placement
pub const ROOM_PADDING: i32 = 1;

/// One generated dungeon level
#[derive(Debug, Clone)]
pub struct Level {
    pub grid: Grid,
    /// Rooms in placement order
    rooms: Vec<Room>,
    max_rooms: usize,
    /// Start tile, set only when at least two rooms exist
    pub start: Option<Coord>,
    /// End tile, set only when at least two rooms exist
    pub end: Option<Coord>,
}

/// Counts for display and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelSummary {
    pub rooms: usize,
    pub floor_tiles: usize,
    pub corridor_tiles: usize,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
}

impl Level {
    /// Create a level with an `Empty` grid and room for `max_rooms` rooms
    pub fn new(width: usize, height: usize, max_rooms: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            rooms: Vec::with_capacity(max_rooms),
            max_rooms,
            start: None,
            end: None,
        }
    }

    /// Fill the grid with walls and forget all rooms and the start/end tiles
    pub fn reset(&mut self) {
        self.grid.fill(TileType::Wall);
        self.rooms.clear();
        self.start = None;
        self.end = None;
    }

    /// Rooms in placement order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub(crate) fn rooms_mut(&mut self) -> &mut [Room] {
        &mut self.rooms
    }

    /// Maximum number of rooms this level accepts
    pub fn max_rooms(&self) -> usize {
        self.max_rooms
    }

    /// Try to commit a room.
    ///
    /// The candidate is rejected, leaving the level untouched, if its padded
    /// rectangle overlaps any committed room's padded rectangle or the level
    /// is already full. Otherwise every on-grid cell of the candidate becomes
    /// `Floor` and the room is appended unconnected.
    pub fn try_place_room(&mut self, candidate: Rect) -> bool {
        if self.rooms.len() >= self.max_rooms {
            return false;
        }
        if self
            .rooms
            .iter()
            .any(|room| room.overlaps(&candidate, ROOM_PADDING))
        {
            return false;
        }

        for pos in candidate.cells() {
            self.grid.set(pos, TileType::Floor);
        }
        self.rooms.push(Room::new(candidate));
        true
    }

    /// Summarize the level
    pub fn summary(&self) -> LevelSummary {
        LevelSummary {
            rooms: self.rooms.len(),
            floor_tiles: self.grid.count(TileType::Floor),
            corridor_tiles: self.grid.count(TileType::Corridor),
            start: self.start,
            end: self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walled_level() -> Level {
        let mut level = Level::new(40, 30, 15);
        level.reset();
        level
    }

    #[test]
    fn test_new_level_is_empty() {
        let level = Level::new(10, 8, 3);
        assert_eq!(level.grid.count(TileType::Empty), 80);
        assert!(level.rooms().is_empty());
        assert_eq!(level.max_rooms(), 3);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut level = walled_level();
        assert!(level.try_place_room(Rect::new(2, 2, 4, 4)));
        level.start = Some(Coord::new(4, 4));
        level.end = Some(Coord::new(4, 4));
        level.grid.set(Coord::new(20, 20), TileType::Corridor);

        level.reset();

        assert_eq!(level.grid.count(TileType::Wall), 40 * 30);
        assert!(level.rooms().is_empty());
        assert_eq!(level.start, None);
        assert_eq!(level.end, None);
    }

    #[test]
    fn test_place_room_sets_floor() {
        let mut level = walled_level();
        let rect = Rect::new(3, 5, 6, 4);
        assert!(level.try_place_room(rect));

        for pos in rect.cells() {
            assert_eq!(level.grid.get(pos), Some(TileType::Floor));
        }
        assert_eq!(level.grid.count(TileType::Floor), 24);
        assert_eq!(level.rooms().len(), 1);
        assert!(!level.rooms()[0].connected);
    }

    #[test]
    fn test_rejected_room_leaves_level_untouched() {
        let mut level = walled_level();
        assert!(level.try_place_room(Rect::new(2, 2, 4, 4)));
        let before = level.grid.clone();

        // One wall cell between the rooms is not enough
        assert!(!level.try_place_room(Rect::new(7, 2, 4, 4)));
        assert_eq!(level.grid, before);
        assert_eq!(level.rooms().len(), 1);
    }

    #[test]
    fn test_room_clipped_to_grid() {
        let mut level = Level::new(10, 10, 2);
        level.reset();
        assert!(level.try_place_room(Rect::new(7, 7, 6, 6)));
        assert_eq!(level.grid.count(TileType::Floor), 9);
        // The full rect is still recorded
        assert_eq!(level.rooms()[0].rect, Rect::new(7, 7, 6, 6));
    }

    #[test]
    fn test_room_cap_is_enforced() {
        let mut level = Level::new(40, 30, 1);
        level.reset();
        assert!(level.try_place_room(Rect::new(2, 2, 4, 4)));
        assert!(!level.try_place_room(Rect::new(20, 20, 4, 4)));
        assert_eq!(level.rooms().len(), 1);
    }

    #[test]
    fn test_summary_counts() {
        let mut level = walled_level();
        level.try_place_room(Rect::new(2, 2, 4, 4));
        level.grid.set(Coord::new(7, 4), TileType::Corridor);
        let summary = level.summary();
        assert_eq!(summary.rooms, 1);
        assert_eq!(summary.floor_tiles, 16);
        assert_eq!(summary.corridor_tiles, 1);
        assert_eq!(summary.start, None);
    }
}
