// src/level/level_layout.rs

use crate::board::TileCategory;
use crate::config::TileSets;
use crate::error::Result;
use crate::level::LevelGrid;
use crate::sink::PlacementSink;
use log::debug;
use rand::Rng;

/// Turns a parsed level into placements.
///
/// Every symbol gets a floor tile. `X`, `F`, `E` and `T` (any case) add a
/// wall, food, enemy or exit on top of it; anything else is floor only.
/// Handles are picked independently per cell, except the exit, which is
/// always the configured exit handle.
pub struct LevelLayout<'a> {
    tiles: &'a TileSets,
}

impl<'a> LevelLayout<'a> {
    pub fn new(tiles: &'a TileSets) -> Self {
        LevelLayout { tiles }
    }

    /// Emits the level into `sink` and returns how many placements were made.
    ///
    /// Every tile set the level needs is checked first, so a failing call
    /// emits nothing.
    pub fn layout<R, S>(&self, grid: &LevelGrid, rng: &mut R, sink: &mut S) -> Result<usize>
    where
        R: Rng + ?Sized,
        S: PlacementSink + ?Sized,
    {
        self.tiles.require(&Self::required_categories(grid))?;

        let mut emitted = 0;
        for (position, symbol) in grid.cells() {
            let floor = self.tiles.choose(TileCategory::Floor, rng)?;
            sink.place(TileCategory::Floor, floor, position);
            emitted += 1;

            if let Some(overlay) = TileCategory::from_level_symbol(symbol) {
                let handle = self.tiles.choose(overlay, rng)?;
                sink.place(overlay, handle, position);
                emitted += 1;
            }
        }
        debug!(
            "Laid out {} rows into {} placements",
            grid.total_lines(),
            emitted
        );
        Ok(emitted)
    }

    /// Floor, if the level has any cell at all, plus each overlay it uses.
    fn required_categories(grid: &LevelGrid) -> Vec<TileCategory> {
        let mut required = Vec::new();
        for (_, symbol) in grid.cells() {
            if required.is_empty() {
                required.push(TileCategory::Floor);
            }
            if let Some(overlay) = TileCategory::from_level_symbol(symbol) {
                if !required.contains(&overlay) {
                    required.push(overlay);
                }
            }
        }
        required
    }
}
