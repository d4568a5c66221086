// src/board/position_pool.rs

use crate::board::Coordinate;
use crate::error::{BoardError, Result};
use rand::Rng;

/// Free interior cells of a board, handed out at random without repeats.
///
/// The interior excludes a one-cell margin on every side, so a board of
/// `columns x rows` yields `(columns - 2) * (rows - 2)` positions. A pool is
/// owned by one generation pass and thrown away afterwards.
#[derive(Debug, Clone)]
pub struct GridPositionPool {
    positions: Vec<Coordinate>,
    capacity: usize,
}

impl GridPositionPool {
    /// Fills the pool with every interior cell. Boards narrower or shorter
    /// than 3 have no interior and produce an empty pool.
    pub fn new(columns: u32, rows: u32) -> Self {
        let mut positions = Vec::new();
        if columns >= 3 && rows >= 3 {
            let columns = i32::try_from(columns).unwrap_or(i32::MAX);
            let rows = i32::try_from(rows).unwrap_or(i32::MAX);
            for x in 1..columns - 1 {
                for y in 1..rows - 1 {
                    positions.push(Coordinate::new(x, y));
                }
            }
        }
        let capacity = positions.len();
        GridPositionPool { positions, capacity }
    }

    /// Removes and returns a uniformly chosen remaining position.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coordinate> {
        if self.positions.is_empty() {
            return Err(BoardError::InsufficientFreeCells {
                requested: self.capacity + 1,
                available: self.capacity,
            });
        }
        let index = rng.random_range(0..self.positions.len());
        // Order of the remaining cells is irrelevant, so swap_remove keeps this O(1).
        Ok(self.positions.swap_remove(index))
    }

    /// Positions still available.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions the pool started with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
