//! Room placement by rejection sampling
//!
//! A fixed number of candidates is drawn and each is either committed or
//! thrown away. Rejected candidates are not retried, so a level can end up
//! with fewer rooms than the cap.

use std::collections::VecDeque;

use crate::config::DungeonConfig;
use crate::rng::GameRng;

use super::level::Level;
use super::rect::Rect;

/// Supplies candidate room rectangles
pub trait RoomSource {
    /// Produce the next candidate for a `grid_width` x `grid_height` grid.
    ///
    /// `None` means no candidate could be formed; the attempt still counts.
    fn next_candidate(
        &mut self,
        config: &DungeonConfig,
        grid_width: usize,
        grid_height: usize,
    ) -> Option<Rect>;
}

impl RoomSource for GameRng {
    /// Random size in `[min_room_size, max_room_size]` on both axes, placed so
    /// the room keeps at least one cell of border inside the grid.
    fn next_candidate(
        &mut self,
        config: &DungeonConfig,
        grid_width: usize,
        grid_height: usize,
    ) -> Option<Rect> {
        let width = self.range_inclusive(config.min_room_size, config.max_room_size);
        let height = self.range_inclusive(config.min_room_size, config.max_room_size);

        let span_x = grid_width as i64 - width as i64 - 2;
        let span_y = grid_height as i64 - height as i64 - 2;
        if span_x <= 0 || span_y <= 0 {
            log::trace!("no position fits a {}x{} room", width, height);
            return None;
        }

        let x = self.rn2(span_x as u32) + 1;
        let y = self.rn2(span_y as u32) + 1;

        Some(Rect::new(x as i32, y as i32, width as i32, height as i32))
    }
}

/// Candidates replayed from a fixed list, for deterministic layouts
#[derive(Debug, Clone, Default)]
pub struct ScriptedRooms {
    candidates: VecDeque<Rect>,
}

impl ScriptedRooms {
    pub fn new(candidates: impl IntoIterator<Item = Rect>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }

    /// Candidates not yet handed out
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

impl RoomSource for ScriptedRooms {
    fn next_candidate(&mut self, _config: &DungeonConfig, _w: usize, _h: usize) -> Option<Rect> {
        self.candidates.pop_front()
    }
}

/// Run `config.max_rooms` placement attempts against `level`.
///
/// Returns the number of rooms committed.
pub fn place_rooms(level: &mut Level, config: &DungeonConfig, source: &mut impl RoomSource) -> usize {
    let (width, height) = (level.grid.width(), level.grid.height());
    let mut placed = 0;

    for attempt in 0..config.max_rooms {
        let Some(candidate) = source.next_candidate(config, width, height) else {
            continue;
        };

        if level.try_place_room(candidate) {
            placed += 1;
        } else {
            log::trace!("attempt {}: rejected candidate {:?}", attempt, candidate);
        }
    }

    placed
}
