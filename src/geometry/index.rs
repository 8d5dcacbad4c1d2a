//! Tile membership index and neighbourhood classification.
//!
//! Adjacency queries during tracing are O(1) lookups against a hash
//! set; querying the raw tile list would be O(n) per probe and O(n²)
//! over a large map. Keys are native `(x, y)` values, so distinct
//! coordinates can never collide.

use std::collections::HashSet;

use crate::types::TilePoint;

/// Read-only set-membership index over a tile set, scoped to one
/// tracing pass.
#[derive(Debug)]
pub struct TileIndex {
    tiles: HashSet<TilePoint>,
}

impl TileIndex {
    pub fn new(tiles: &[TilePoint]) -> Self {
        Self {
            tiles: tiles.iter().copied().collect(),
        }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.tiles.contains(&TilePoint::new(x, y))
    }

    /// Count of the 4 orthogonal neighbours of (x, y) present in the
    /// index (0–4).
    pub fn count_sides(&self, x: i64, y: i64) -> u8 {
        [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
            .into_iter()
            .filter(|&(nx, ny)| self.contains(nx, ny))
            .count() as u8
    }

    /// Count of the 4 diagonal neighbours of (x, y) present in the
    /// index (0–4).
    pub fn count_corners(&self, x: i64, y: i64) -> u8 {
        [(x - 1, y - 1), (x - 1, y + 1), (x + 1, y - 1), (x + 1, y + 1)]
            .into_iter()
            .filter(|&(nx, ny)| self.contains(nx, ny))
            .count() as u8
    }

    /// Total occupied neighbours out of the surrounding 8.
    pub fn count_neighbours(&self, x: i64, y: i64) -> u8 {
        self.count_sides(x, y) + self.count_corners(x, y)
    }
}
