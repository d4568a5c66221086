// src/generator/random_board.rs

use crate::board::{Coordinate, GridPositionPool, TileCategory};
use crate::config::{BoardConfig, CountRange};
use crate::error::Result;
use crate::sink::PlacementSink;
use log::{debug, info};
use rand::Rng;

/// Lays out a procedurally generated board.
///
/// The board is `columns x rows` cells of floor surrounded by a ring of outer
/// wall, with a random number of walls and then food scattered over distinct
/// interior cells.
pub struct RandomBoardGenerator<'a> {
    config: &'a BoardConfig,
}

/// How many of each scattered category a run actually placed.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    pub background_count: usize,
    pub wall_count: usize,
    pub food_count: usize,
}

impl<'a> RandomBoardGenerator<'a> {
    pub fn new(config: &'a BoardConfig) -> Self {
        RandomBoardGenerator { config }
    }

    /// Emits the whole board into `sink`.
    ///
    /// The config is validated first, so a bad config fails before anything
    /// has been placed.
    pub fn generate<R, S>(&self, rng: &mut R, sink: &mut S) -> Result<GenerationStats>
    where
        R: Rng + ?Sized,
        S: PlacementSink + ?Sized,
    {
        self.config.validate()?;
        info!(
            "Generating random board of {}x{}",
            self.config.columns, self.config.rows
        );

        let mut stats = GenerationStats {
            background_count: self.board_setup(rng, sink)?,
            ..GenerationStats::default()
        };

        let mut pool = GridPositionPool::new(self.config.columns, self.config.rows);
        stats.wall_count =
            self.layout_at_random(TileCategory::Wall, self.config.wall_count, &mut pool, rng, sink)?;
        stats.food_count =
            self.layout_at_random(TileCategory::Food, self.config.food_count, &mut pool, rng, sink)?;

        debug!("Random board done: {:?}, {} free cells left", stats, pool.len());
        Ok(stats)
    }

    /// Floor everywhere on the board, outer wall on the ring around it.
    /// Every cell of `[-1, columns] x [-1, rows]` gets exactly one tile.
    fn board_setup<R, S>(&self, rng: &mut R, sink: &mut S) -> Result<usize>
    where
        R: Rng + ?Sized,
        S: PlacementSink + ?Sized,
    {
        let (columns, rows) = self.config.signed_dimensions()?;
        let mut emitted = 0;

        for x in -1..=columns {
            for y in -1..=rows {
                let category = if x == -1 || x == columns || y == -1 || y == rows {
                    TileCategory::OuterWall
                } else {
                    TileCategory::Floor
                };
                let handle = self.config.tiles.choose(category, rng)?;
                sink.place(category, handle, Coordinate::new(x, y));
                emitted += 1;
            }
        }
        Ok(emitted)
    }

    /// Places a random count (from `range`) of `category` tiles on cells drawn
    /// from `pool`.
    fn layout_at_random<R, S>(
        &self,
        category: TileCategory,
        range: CountRange,
        pool: &mut GridPositionPool,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<usize>
    where
        R: Rng + ?Sized,
        S: PlacementSink + ?Sized,
    {
        let total = range.sample(rng) as usize;
        debug!("Placing {} {} tiles ({} free cells)", total, category, pool.len());

        for _ in 0..total {
            let position = pool.draw(rng)?;
            let handle = self.config.tiles.choose(category, rng)?;
            sink.place(category, handle, position);
        }
        Ok(total)
    }
}
