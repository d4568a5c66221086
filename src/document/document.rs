// src/document/document.rs

use crate::board::{Coordinate, Placement, TileCategory, TileHandle};
use crate::error::Result;
use crate::sink::PlacementSink;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Inclusive rectangle covering every placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {
    pub fn width(&self) -> usize {
        (self.max.x - self.min.x + 1) as usize
    }

    pub fn height(&self) -> usize {
        (self.max.y - self.min.y + 1) as usize
    }
}

/// The record of one laid-out board: every placement, in emission order.
///
/// A `BoardDocument` is the stock [`PlacementSink`]. Hosts that instantiate
/// objects directly can use a closure instead; the document is for
/// inspecting, printing and exporting a layout.
#[derive(Default)]
pub struct BoardDocument {
    pub placements: Arc<RwLock<Vec<Placement>>>,
    /// Where the layout came from, e.g. `day3` or `random`.
    pub source_name: Arc<RwLock<Option<String>>>,
}

impl BoardDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            placements: Arc::new(RwLock::new(Vec::new())),
            source_name: Arc::new(RwLock::new(None)),
        }
    }

    pub fn source_name(&self) -> Option<String> {
        self.source_name.read().clone()
    }

    pub fn set_source_name(&self, name: impl Into<String>) {
        *self.source_name.write() = Some(name.into());
    }

    pub fn len(&self) -> usize {
        self.placements.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.read().is_empty()
    }

    pub fn num_placements(&self, category: TileCategory) -> usize {
        self.placements
            .read()
            .iter()
            .filter(|p| p.category == category)
            .count()
    }

    /// Everything placed at `position`, in emission order.
    #[cfg(test)]
    fn tiles_at(&self, position: Coordinate) -> Vec<Placement> {
        self.placements
            .read()
            .iter()
            .filter(|p| p.position == position)
            .cloned()
            .collect()
    }

    /// `None` for an empty document.
    pub fn bounds(&self) -> Option<Bounds> {
        let placements = self.placements.read();
        let first = placements.first()?.position;
        let mut bounds = Bounds { min: first, max: first };
        for p in placements.iter() {
            bounds.min.x = bounds.min.x.min(p.position.x);
            bounds.min.y = bounds.min.y.min(p.position.y);
            bounds.max.x = bounds.max.x.max(p.position.x);
            bounds.max.y = bounds.max.y.max(p.position.y);
        }
        Some(bounds)
    }

    /// Text picture of the board, highest `y` first. Each cell shows the
    /// symbol of its topmost tile; unoccupied cells are blank.
    pub fn render_ascii(&self) -> String {
        let Some(bounds) = self.bounds() else {
            return String::new();
        };

        let mut top: BTreeMap<Coordinate, TileCategory> = BTreeMap::new();
        for p in self.placements.read().iter() {
            top.entry(p.position)
                .and_modify(|current| {
                    if p.category.layer() >= current.layer() {
                        *current = p.category;
                    }
                })
                .or_insert(p.category);
        }

        let mut out = String::with_capacity((bounds.width() + 1) * bounds.height());
        for y in (bounds.min.y..=bounds.max.y).rev() {
            let row: String = (bounds.min.x..=bounds.max.x)
                .map(|x| top.get(&Coordinate::new(x, y)).map_or(' ', |c| c.symbol()))
                .collect();
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }

    /// All placements as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.placements.read())?)
    }

    pub fn clear(&mut self) {
        self.placements.write().clear();
        *self.source_name.write() = None;
    }
}

impl PlacementSink for BoardDocument {
    fn place(&mut self, category: TileCategory, handle: &TileHandle, position: Coordinate) {
        self.placements.write().push(Placement {
            category,
            handle: handle.clone(),
            position,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(doc: &mut BoardDocument, category: TileCategory, name: &str, x: i32, y: i32) {
        doc.place(category, &TileHandle::new(name), Coordinate::new(x, y));
    }

    #[test]
    fn test_empty_document() {
        let doc = BoardDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.bounds(), None);
        assert_eq!(doc.render_ascii(), "");
        assert_eq!(doc.to_json().unwrap(), "[]");
    }

    #[test]
    fn test_counts_and_lookup() {
        let mut doc = BoardDocument::new();
        put(&mut doc, TileCategory::Floor, "Floor1", 0, 0);
        put(&mut doc, TileCategory::Wall, "Wall3", 0, 0);
        put(&mut doc, TileCategory::Floor, "Floor2", 1, 0);

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.num_placements(TileCategory::Floor), 2);
        assert_eq!(doc.num_placements(TileCategory::Wall), 1);
        assert_eq!(doc.num_placements(TileCategory::Enemy), 0);

        let here = doc.tiles_at(Coordinate::new(0, 0));
        assert_eq!(here.len(), 2);
        assert_eq!(here[1].handle.name(), "Wall3");
    }

    #[test]
    fn test_render_topmost_tile() {
        let mut doc = BoardDocument::new();
        put(&mut doc, TileCategory::Floor, "Floor1", -1, -1);
        put(&mut doc, TileCategory::Enemy, "Enemy1", -1, -1);
        put(&mut doc, TileCategory::Floor, "Floor1", 0, -1);
        put(&mut doc, TileCategory::OuterWall, "OuterWall1", 0, 0);
        put(&mut doc, TileCategory::Exit, "Exit", 1, 0);

        let bounds = doc.bounds().unwrap();
        assert_eq!(bounds.min, Coordinate::new(-1, -1));
        assert_eq!(bounds.max, Coordinate::new(1, 0));
        assert_eq!((bounds.width(), bounds.height()), (3, 2));

        assert_eq!(doc.render_ascii(), " #T\ne.\n");
    }

    #[test]
    fn test_json_export() {
        let mut doc = BoardDocument::new();
        put(&mut doc, TileCategory::Food, "Soda", 2, 3);
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(value[0]["category"], "Food");
        assert_eq!(value[0]["handle"], "Soda");
        assert_eq!(value[0]["position"]["x"], 2);
        assert_eq!(value[0]["position"]["y"], 3);
    }

    #[test]
    fn test_clear() {
        let mut doc = BoardDocument::new();
        doc.set_source_name("day1");
        put(&mut doc, TileCategory::Floor, "Floor1", 0, 0);
        assert_eq!(doc.source_name().as_deref(), Some("day1"));
        doc.clear();
        assert!(doc.is_empty());
        assert_eq!(doc.source_name(), None);
    }
}
