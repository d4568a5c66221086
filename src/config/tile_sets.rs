// src/config/tile_sets.rs

use crate::board::{TileCategory, TileHandle};
use crate::error::{BoardError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::slice;

/// Interchangeable tile handles for each category.
///
/// Every category but [`TileCategory::Exit`] holds a list that placements pick
/// from uniformly. The exit is a single fixed handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSets {
    pub floor: Vec<TileHandle>,
    pub outer_wall: Vec<TileHandle>,
    pub wall: Vec<TileHandle>,
    pub food: Vec<TileHandle>,
    pub enemy: Vec<TileHandle>,
    pub exit: TileHandle,
}

impl TileSets {
    /// The handles available for `category`.
    pub fn handles(&self, category: TileCategory) -> &[TileHandle] {
        match category {
            TileCategory::Floor => &self.floor,
            TileCategory::OuterWall => &self.outer_wall,
            TileCategory::Wall => &self.wall,
            TileCategory::Food => &self.food,
            TileCategory::Enemy => &self.enemy,
            TileCategory::Exit => slice::from_ref(&self.exit),
        }
    }

    /// Picks a handle for one placement of `category`.
    ///
    /// The exit handle is returned as-is without touching `rng`.
    pub fn choose<R: Rng + ?Sized>(&self, category: TileCategory, rng: &mut R) -> Result<&TileHandle> {
        if category == TileCategory::Exit {
            return Ok(&self.exit);
        }
        let handles = self.handles(category);
        if handles.is_empty() {
            return Err(BoardError::EmptyTileSet(category));
        }
        Ok(&handles[rng.random_range(0..handles.len())])
    }

    /// Fails with [`BoardError::EmptyTileSet`] for the first of `categories`
    /// that has nothing to choose from.
    pub fn require(&self, categories: &[TileCategory]) -> Result<()> {
        for &category in categories {
            if self.handles(category).is_empty() {
                return Err(BoardError::EmptyTileSet(category));
            }
        }
        Ok(())
    }
}

fn numbered(prefix: &str, count: usize) -> Vec<TileHandle> {
    (1..=count)
        .map(|i| TileHandle::new(format!("{}{}", prefix, i)))
        .collect()
}

impl Default for TileSets {
    fn default() -> Self {
        TileSets {
            floor: numbered("Floor", 8),
            outer_wall: numbered("OuterWall", 3),
            wall: numbered("Wall", 8),
            food: vec![TileHandle::new("Food"), TileHandle::new("Soda")],
            enemy: numbered("Enemy", 2),
            exit: TileHandle::new("Exit"),
        }
    }
}
