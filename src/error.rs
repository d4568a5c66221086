// src/error.rs

use thiserror::Error;

use crate::board::TileCategory;

/// Every way a board generation or level layout call can fail.
///
/// All variants are terminal for the call that produced them; nothing in the
/// crate retries or falls back to a default board.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("board of {columns}x{rows} has no interior (both dimensions must be at least 3)")]
    BoardTooSmall { columns: u32, rows: u32 },

    #[error("board of {columns}x{rows} does not fit signed 32-bit coordinates")]
    BoardTooLarge { columns: u32, rows: u32 },

    #[error("invalid count range: minimum {minimum} is greater than maximum {maximum}")]
    InvalidCountRange { minimum: u32, maximum: u32 },

    #[error("insufficient free cells: requested {requested}, only {available} available")]
    InsufficientFreeCells { requested: usize, available: usize },

    #[error("no tile handles configured for category {0}")]
    EmptyTileSet(TileCategory),

    #[error("level not found: {name}")]
    LevelNotFound { level: u32, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
