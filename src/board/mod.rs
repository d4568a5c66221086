// src/board/mod.rs
pub mod position_pool;

pub use position_pool::GridPositionPool;

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter};

/// Depth of every placed tile. Boards are flat.
pub const BOARD_Z: i32 = 0;

/// A cell on the board. The outer wall ring sits at -1 and at the
/// board's width/height, so coordinates are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Always [`BOARD_Z`].
    pub fn z(&self) -> i32 {
        BOARD_Z
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What kind of object a placement instantiates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
pub enum TileCategory {
    Floor,
    OuterWall,
    Wall,
    Food,
    Enemy,
    Exit,
}

impl TileCategory {
    /// Glyph used for text renderings of a board.
    pub fn symbol(&self) -> char {
        match self {
            TileCategory::Floor => '.',
            TileCategory::OuterWall => '#',
            TileCategory::Wall => 'x',
            TileCategory::Food => 'f',
            TileCategory::Enemy => 'e',
            TileCategory::Exit => 'T',
        }
    }

    /// The overlay a level-file symbol places on top of its floor tile, if any.
    /// Matching ignores case; unknown symbols (spaces included) mean floor only.
    pub fn from_level_symbol(symbol: char) -> Option<TileCategory> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(TileCategory::Wall),
            'F' => Some(TileCategory::Food),
            'E' => Some(TileCategory::Enemy),
            'T' => Some(TileCategory::Exit),
            _ => None,
        }
    }

    /// Draw order when several tiles share a cell; higher sits on top.
    pub fn layer(&self) -> u8 {
        match self {
            TileCategory::Floor => 0,
            TileCategory::OuterWall | TileCategory::Wall => 1,
            TileCategory::Food | TileCategory::Exit => 2,
            TileCategory::Enemy => 3,
        }
    }
}

/// Opaque name of the prefab/asset the host instantiates for a tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileHandle(String);

impl TileHandle {
    pub fn new(name: impl Into<String>) -> Self {
        TileHandle(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TileHandle {
    fn from(name: &str) -> Self {
        TileHandle::new(name)
    }
}

/// A single request to the host: put `handle` of `category` at `position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub category: TileCategory,
    pub handle: TileHandle,
    pub position: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_level_symbols_ignore_case() {
        assert_eq!(TileCategory::from_level_symbol('X'), Some(TileCategory::Wall));
        assert_eq!(TileCategory::from_level_symbol('x'), Some(TileCategory::Wall));
        assert_eq!(TileCategory::from_level_symbol('f'), Some(TileCategory::Food));
        assert_eq!(TileCategory::from_level_symbol('E'), Some(TileCategory::Enemy));
        assert_eq!(TileCategory::from_level_symbol('t'), Some(TileCategory::Exit));
    }

    #[test]
    fn test_unknown_symbols_are_floor_only() {
        for symbol in [' ', '.', '#', '0', 'z', '\t'] {
            assert_eq!(TileCategory::from_level_symbol(symbol), None);
        }
    }

    #[test]
    fn test_symbols_are_distinct() {
        let mut symbols: Vec<char> = TileCategory::iter().map(|c| c.symbol()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), TileCategory::iter().count());
    }

    #[test]
    fn test_coordinate_is_flat() {
        assert_eq!(Coordinate::new(3, -1).z(), BOARD_Z);
        assert_eq!(Coordinate::new(3, -1).to_string(), "(3, -1)");
    }
}
