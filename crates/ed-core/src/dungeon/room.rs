//! Rooms

use super::rect::{Coord, Rect};

/// A committed rectangular room
///
/// The rectangle never changes after placement; only `connected` is updated,
/// and only while rooms are being joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub rect: Rect,
    /// Whether the room has been joined to the connected structure
    pub connected: bool,
}

impl Room {
    /// Create a new, unconnected room
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            connected: false,
        }
    }

    /// Get center point of room
    pub fn center(&self) -> Coord {
        self.rect.center()
    }

    /// Check if this room's padded rectangle overlaps another's
    pub fn overlaps(&self, candidate: &Rect, padding: i32) -> bool {
        self.rect.overlaps_padded(candidate, padding)
    }
}
