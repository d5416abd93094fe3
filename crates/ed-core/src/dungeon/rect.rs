//! Grid coordinates and rectangles
//!
//! Rectangles are half-open: a rect at `x` with `width` covers columns
//! `x..x + width`.

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    pub fn manhattan(&self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left column
    pub x: i32,
    /// Top row
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Center cell, truncating toward the top-left
    pub fn center(&self) -> Coord {
        Coord::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Grow the rectangle by `margin` cells on every side
    pub fn expanded(&self, margin: i32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2 * margin,
            self.height + 2 * margin,
        )
    }

    /// Check if this rectangle shares at least one cell with another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Check if the two rectangles, each grown by `padding`, intersect.
    ///
    /// With a padding of 1 this rejects rooms that touch, including at a
    /// corner, and rooms separated by a single wall cell.
    pub fn overlaps_padded(&self, other: &Rect, padding: i32) -> bool {
        self.expanded(padding).intersects(&other.expanded(padding))
    }

    /// Every cell in the rectangle, column by column
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (self.x..self.right()).flat_map(move |x| (self.y..self.bottom()).map(move |y| Coord::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_truncates() {
        assert_eq!(Rect::new(2, 2, 4, 4).center(), Coord::new(4, 4));
        assert_eq!(Rect::new(2, 2, 5, 5).center(), Coord::new(4, 4));
        assert_eq!(Rect::new(0, 0, 1, 1).center(), Coord::new(0, 0));
    }

    #[test]
    fn test_intersects() {
        let r1 = Rect::new(0, 0, 10, 10);
        let r2 = Rect::new(5, 5, 10, 10);
        let r3 = Rect::new(10, 0, 5, 5);

        assert!(r1.intersects(&r2));
        assert!(r2.intersects(&r1));
        // Half-open: sharing an edge coordinate is not intersecting
        assert!(!r1.intersects(&r3));
    }

    #[test]
    fn test_padded_overlap_rejects_adjacent() {
        let a = Rect::new(2, 2, 4, 4);
        // Directly adjacent on the right
        assert!(a.overlaps_padded(&Rect::new(6, 2, 4, 4), 1));
        // One wall cell between them
        assert!(a.overlaps_padded(&Rect::new(7, 2, 4, 4), 1));
        // Diagonal corner contact through a single cell
        assert!(a.overlaps_padded(&Rect::new(7, 7, 3, 3), 1));
        // Two wall cells between them
        assert!(!a.overlaps_padded(&Rect::new(8, 2, 4, 4), 1));
        assert!(!a.overlaps_padded(&Rect::new(10, 10, 4, 4), 1));
    }

    #[test]
    fn test_cells() {
        let r = Rect::new(1, 2, 3, 2);
        let cells: Vec<_> = r.cells().collect();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|c| (1..4).contains(&c.x) && (2..4).contains(&c.y)));
        assert_eq!(cells[0], Coord::new(1, 2));
        assert_eq!(cells[1], Coord::new(1, 3));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coord::new(4, 4).manhattan(Coord::new(12, 12)), 16);
        assert_eq!(Coord::new(-3, 2).manhattan(Coord::new(1, -1)), 7);
    }
}
