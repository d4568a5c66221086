// src/level/mod.rs
pub mod level_grid;
pub mod level_layout;
pub mod level_source;

pub use level_grid::LevelGrid;
pub use level_layout::LevelLayout;
pub use level_source::{level_name, DirectoryLevelSource, LevelSource, MemoryLevelSource};
