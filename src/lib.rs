// src/lib.rs

pub mod board;
pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod level;
pub mod scene;
pub mod sink;

pub use board::{Coordinate, GridPositionPool, Placement, TileCategory, TileHandle};
pub use config::{BoardConfig, CountRange, TileSets};
pub use document::BoardDocument;
pub use error::{BoardError, Result};
pub use generator::{GenerationStats, RandomBoardGenerator};
pub use level::{DirectoryLevelSource, LevelGrid, LevelLayout, LevelSource, MemoryLevelSource};
pub use scene::Scene;
pub use sink::PlacementSink;
