//! Tile states

use strum::{Display, EnumIter};

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u8)]
pub enum TileType {
    /// Freshly allocated, never reset. Not produced by generation.
    #[default]
    Empty = 0,
    Wall = 1,
    Floor = 2,
    Corridor = 3,
    Start = 4,
    End = 5,
}

impl TileType {
    /// Check if this tile can be walked on
    pub const fn is_walkable(&self) -> bool {
        matches!(
            self,
            TileType::Floor | TileType::Corridor | TileType::Start | TileType::End
        )
    }

    /// Plain ASCII symbol, used for dumps and the classic glyph set
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Empty => ' ',
            TileType::Wall => '#',
            TileType::Floor => '.',
            TileType::Corridor => ',',
            TileType::Start => 'S',
            TileType::End => 'E',
        }
    }
}
