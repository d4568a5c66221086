// src/config/count_range.rs

use crate::error::{BoardError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive `[minimum, maximum]` bound used to randomize how many of
/// something go on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCountRange")]
pub struct CountRange {
    minimum: u32,
    maximum: u32,
}

#[derive(Deserialize)]
struct RawCountRange {
    minimum: u32,
    maximum: u32,
}

impl TryFrom<RawCountRange> for CountRange {
    type Error = BoardError;

    fn try_from(raw: RawCountRange) -> Result<Self> {
        CountRange::new(raw.minimum, raw.maximum)
    }
}

impl CountRange {
    pub fn new(minimum: u32, maximum: u32) -> Result<Self> {
        if minimum > maximum {
            return Err(BoardError::InvalidCountRange { minimum, maximum });
        }
        Ok(CountRange { minimum, maximum })
    }

    /// Caller guarantees `minimum <= maximum`.
    pub(super) const fn unchecked(minimum: u32, maximum: u32) -> Self {
        CountRange { minimum, maximum }
    }

    /// A range that always yields `count`.
    pub fn exactly(count: u32) -> Self {
        CountRange { minimum: count, maximum: count }
    }

    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Picks a count uniformly from the range, both ends included.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.minimum..=self.maximum)
    }
}
