// src/generator/mod.rs
pub mod random_board;

pub use random_board::{GenerationStats, RandomBoardGenerator};
