// src/level/level_source.rs

use crate::error::{BoardError, Result};
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const LEVEL_PREFIX: &str = "day";
pub const LEVEL_EXTENSION: &str = "txt";

/// Identifier of a level's text, e.g. `day3`.
pub fn level_name(level: u32) -> String {
    format!("{}{}", LEVEL_PREFIX, level)
}

/// Somewhere level texts can be loaded from by level number.
pub trait LevelSource {
    /// Fails with [`BoardError::LevelNotFound`] when there is no such level.
    fn load(&self, level: u32) -> Result<String>;
}

/// Level files in a directory, named `day<N>.txt`.
#[derive(Debug, Clone)]
pub struct DirectoryLevelSource {
    root: PathBuf,
}

impl DirectoryLevelSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, level: u32) -> PathBuf {
        self.root
            .join(level_name(level))
            .with_extension(LEVEL_EXTENSION)
    }
}

impl LevelSource for DirectoryLevelSource {
    fn load(&self, level: u32) -> Result<String> {
        let path = self.path_for(level);
        debug!("Reading level {} from {}", level, path.display());
        match fs::read_to_string(&path) {
            Ok(text) => {
                info!("Loaded {} ({} bytes)", path.display(), text.len());
                Ok(text)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(BoardError::LevelNotFound {
                level,
                name: level_name(level),
            }),
            Err(err) => Err(err.into()),
        }
    }
}

/// Level texts held in memory, keyed by level number.
#[derive(Debug, Clone, Default)]
pub struct MemoryLevelSource {
    levels: HashMap<u32, String>,
}

impl MemoryLevelSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, level: u32, text: impl Into<String>) -> &mut Self {
        self.levels.insert(level, text.into());
        self
    }
}

impl LevelSource for MemoryLevelSource {
    fn load(&self, level: u32) -> Result<String> {
        self.levels
            .get(&level)
            .cloned()
            .ok_or_else(|| BoardError::LevelNotFound {
                level,
                name: level_name(level),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_name() {
        assert_eq!(level_name(1), "day1");
        assert_eq!(level_name(12), "day12");
    }

    #[test]
    fn test_directory_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("day2.txt"), "XXX\nF T\n").unwrap();

        let source = DirectoryLevelSource::new(dir.path());
        assert_eq!(source.path_for(2), dir.path().join("day2.txt"));
        assert_eq!(source.load(2).unwrap(), "XXX\nF T\n");
    }

    #[test]
    fn test_directory_source_missing_level() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryLevelSource::new(dir.path());
        match source.load(4) {
            Err(BoardError::LevelNotFound { level, name }) => {
                assert_eq!(level, 4);
                assert_eq!(name, "day4");
            }
            other => panic!("expected LevelNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_source_other_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be cannot be read as text.
        fs::create_dir(dir.path().join("day5.txt")).unwrap();
        let source = DirectoryLevelSource::new(dir.path());
        assert!(matches!(source.load(5), Err(BoardError::Io(_))));
    }

    #[test]
    fn test_bundled_levels() {
        let source = DirectoryLevelSource::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("levels"));
        for level in [1, 2] {
            let text = source.load(level).unwrap();
            assert!(text.contains('T'), "{} has no exit", level_name(level));
        }
    }

    #[test]
    fn test_memory_source() {
        let mut source = MemoryLevelSource::new();
        source.insert(1, "X").insert(3, "T");
        assert_eq!(source.load(3).unwrap(), "T");
        assert!(matches!(
            source.load(2),
            Err(BoardError::LevelNotFound { level: 2, .. })
        ));
    }
}
