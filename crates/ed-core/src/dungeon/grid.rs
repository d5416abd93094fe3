//! Tile grid
//!
//! Cells are stored column-major and indexed `[x][y]`. Dimensions are fixed
//! at construction.

use std::collections::VecDeque;

use super::rect::Coord;
use super::tile::TileType;

/// Fixed-size 2D array of tile states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<TileType>>,
}

impl Grid {
    /// Create a grid with every cell `Empty`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![TileType::Empty; height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Set every cell to `tile`
    pub fn fill(&mut self, tile: TileType) {
        for column in &mut self.cells {
            column.fill(tile);
        }
    }

    /// Check if a coordinate is on the grid
    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Tile at `pos`, or `None` off the grid
    pub fn get(&self, pos: Coord) -> Option<TileType> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.x as usize][pos.y as usize])
        } else {
            None
        }
    }

    /// Set the tile at `pos`. Writes off the grid are ignored.
    ///
    /// Returns true if the cell was on the grid.
    pub fn set(&mut self, pos: Coord, tile: TileType) -> bool {
        if self.in_bounds(pos) {
            self.cells[pos.x as usize][pos.y as usize] = tile;
            true
        } else {
            false
        }
    }

    /// Iterate over every cell as `(coord, tile)`, column by column
    pub fn iter(&self) -> impl Iterator<Item = (Coord, TileType)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, &tile)| (Coord::new(x as i32, y as i32), tile))
        })
    }

    /// Count cells holding `tile`
    pub fn count(&self, tile: TileType) -> usize {
        self.cells
            .iter()
            .flat_map(|column| column.iter())
            .filter(|&&t| t == tile)
            .count()
    }

    /// 4-connected flood fill over walkable tiles.
    ///
    /// Returns a `[x][y]` mask of the cells reachable from `start`. The mask is
    /// all false if `start` is off the grid or not walkable.
    pub fn reachable_from(&self, start: Coord) -> Vec<Vec<bool>> {
        let mut visited = vec![vec![false; self.height]; self.width];
        let walkable = |pos: Coord| self.get(pos).is_some_and(|t| t.is_walkable());

        if !walkable(start) {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited[start.x as usize][start.y as usize] = true;
        queue.push_back(start);

        while let Some(pos) = queue.pop_front() {
            let neighbors = [
                Coord::new(pos.x + 1, pos.y),
                Coord::new(pos.x - 1, pos.y),
                Coord::new(pos.x, pos.y + 1),
                Coord::new(pos.x, pos.y - 1),
            ];
            for next in neighbors {
                if walkable(next) && !visited[next.x as usize][next.y as usize] {
                    visited[next.x as usize][next.y as usize] = true;
                    queue.push_back(next);
                }
            }
        }

        visited
    }

    /// Check if `to` can be walked to from `from`
    pub fn is_reachable(&self, from: Coord, to: Coord) -> bool {
        if !self.in_bounds(to) {
            return false;
        }
        self.reachable_from(from)[to.x as usize][to.y as usize]
    }
}

impl core::fmt::Display for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width).map(|x| self.cells[x][y].symbol()).collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
