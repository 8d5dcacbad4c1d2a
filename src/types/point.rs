//! Tile coordinates on the unbounded integer grid.

use serde::{Serialize, Serializer};

/// A single tile position. Identity is by value; tiles are held in
/// containers by value and compared coordinate-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePoint {
    pub x: i64,
    pub y: i64,
}

impl TilePoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Return this tile translated by (dx, dy).
    pub fn translated(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

// Wire shape is a 2-array `[x, y]`, matching the existing map.json
// consumers.
impl Serialize for TilePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

/// An ordered sequence of tiles. Order reflects discovery order
/// (row-major scan of the source image) and matters only for
/// reproducibility of the output, not semantics.
pub type TileSet = Vec<TilePoint>;

/// Translate every tile in a set by (dx, dy), preserving order.
pub fn translate_tiles(tiles: &mut TileSet, dx: i64, dy: i64) {
    for tile in tiles.iter_mut() {
        tile.x += dx;
        tile.y += dy;
    }
}
