// src/config/mod.rs
//! Board configuration.
//!
//! Everything a generator needs is passed in explicitly through
//! [`BoardConfig`]; there is no process-wide state. Configs can be built in
//! code, taken from [`Default`], or loaded from JSON. Fields missing from a
//! JSON document keep their default values.
//!
//! Loading only checks what every config needs (well-formed count ranges).
//! Each layout mode checks the rest before it emits anything: random boards
//! through [`BoardConfig::validate`], level files through the tile sets their
//! symbols use.

mod count_range;
mod tile_sets;

pub use count_range::CountRange;
pub use tile_sets::TileSets;

use crate::board::TileCategory;
use crate::error::{BoardError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_COLUMNS: u32 = 8;
pub const DEFAULT_ROWS: u32 = 8;
pub const DEFAULT_WALL_COUNT: CountRange = CountRange::unchecked(5, 9);
pub const DEFAULT_FOOD_COUNT: CountRange = CountRange::unchecked(1, 5);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: u32,
    pub rows: u32,
    pub wall_count: CountRange,
    pub food_count: CountRange,
    pub tiles: TileSets,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            wall_count: DEFAULT_WALL_COUNT,
            food_count: DEFAULT_FOOD_COUNT,
            tiles: TileSets::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading board config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Number of cells a random board can scatter walls and food onto.
    /// Saturates instead of overflowing on huge boards.
    pub fn interior_cells(&self) -> usize {
        if self.columns < 3 || self.rows < 3 {
            0
        } else {
            (self.columns as usize - 2).saturating_mul(self.rows as usize - 2)
        }
    }

    /// Board width and height as coordinates. The outer wall ring sits at
    /// `x = columns` and `y = rows`, so both must fit in `i32`.
    pub fn signed_dimensions(&self) -> Result<(i32, i32)> {
        match (i32::try_from(self.columns), i32::try_from(self.rows)) {
            (Ok(columns), Ok(rows)) => Ok((columns, rows)),
            _ => Err(BoardError::BoardTooLarge {
                columns: self.columns,
                rows: self.rows,
            }),
        }
    }

    /// Checks everything a random board needs. Level layouts don't use the
    /// dimensions, counts or outer wall set and don't call this.
    ///
    /// The worst case (both counts at their maximum) has to fit the interior,
    /// so a config either always succeeds or is rejected outright.
    pub fn validate(&self) -> Result<()> {
        if self.columns < 3 || self.rows < 3 {
            return Err(BoardError::BoardTooSmall {
                columns: self.columns,
                rows: self.rows,
            });
        }
        self.signed_dimensions()?;

        let mut required = vec![TileCategory::Floor, TileCategory::OuterWall];
        if self.wall_count.maximum() > 0 {
            required.push(TileCategory::Wall);
        }
        if self.food_count.maximum() > 0 {
            required.push(TileCategory::Food);
        }
        self.tiles.require(&required)?;

        let requested = self.wall_count.maximum() as usize + self.food_count.maximum() as usize;
        let available = self.interior_cells();
        if requested > available {
            return Err(BoardError::InsufficientFreeCells { requested, available });
        }
        Ok(())
    }
}
