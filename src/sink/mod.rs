// src/sink/mod.rs
//! The host side of a layout: whatever turns placements into objects.

use crate::board::{Coordinate, TileCategory, TileHandle};

/// Receives every placement a generator emits, in emission order.
///
/// Placement is fire-and-forget: a sink reports nothing back, and a
/// generator never inspects what it has already placed.
pub trait PlacementSink {
    fn place(&mut self, category: TileCategory, handle: &TileHandle, position: Coordinate);
}

impl<F> PlacementSink for F
where
    F: FnMut(TileCategory, &TileHandle, Coordinate),
{
    fn place(&mut self, category: TileCategory, handle: &TileHandle, position: Coordinate) {
        self(category, handle, position)
    }
}
