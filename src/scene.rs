// src/scene.rs
//! Entry points a host calls to lay out a board.
//!
//! A [`Scene`] bundles the board config, the place level texts come from and
//! the random stream, then runs one of the two layout modes:
//!
//! * [`Scene::setup_scene`] loads level `day<N>` and lays it out symbol by
//!   symbol.
//! * [`Scene::setup_random_board`] generates a procedural board from the
//!   config's dimensions and count ranges.

use crate::config::BoardConfig;
use crate::error::Result;
use crate::generator::{GenerationStats, RandomBoardGenerator};
use crate::level::{level_name, LevelGrid, LevelLayout, LevelSource};
use crate::sink::PlacementSink;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Scene<L: LevelSource> {
    config: BoardConfig,
    levels: L,
    rng: StdRng,
}

impl<L: LevelSource> Scene<L> {
    /// A scene drawing from OS entropy.
    pub fn new(config: BoardConfig, levels: L) -> Self {
        Self {
            config,
            levels,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Makes every later layout reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Loads level `level` and emits its layout into `sink`.
    /// Returns the number of placements made.
    pub fn setup_scene<S>(&mut self, level: u32, sink: &mut S) -> Result<usize>
    where
        S: PlacementSink + ?Sized,
    {
        let text = self.levels.load(level)?;
        let grid = LevelGrid::parse(&text);
        let placed = LevelLayout::new(&self.config.tiles).layout(&grid, &mut self.rng, sink)?;
        info!("Set up {}: {} placements", level_name(level), placed);
        Ok(placed)
    }

    /// Emits a procedurally generated board into `sink`.
    pub fn setup_random_board<S>(&mut self, sink: &mut S) -> Result<GenerationStats>
    where
        S: PlacementSink + ?Sized,
    {
        RandomBoardGenerator::new(&self.config).generate(&mut self.rng, sink)
    }
}
