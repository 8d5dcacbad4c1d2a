//! Axis-aligned bounding boxes over tile sets.

use crate::types::TilePoint;

/// The tightest axis-aligned bounding box of a tile set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    /// Compute the bounding box of a tile set in a single pass.
    /// Returns `None` for an empty set; callers must guard.
    pub fn of(tiles: &[TilePoint]) -> Option<Self> {
        let first = tiles.first()?;
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        for tile in &tiles[1..] {
            bounds.min_x = bounds.min_x.min(tile.x);
            bounds.max_x = bounds.max_x.max(tile.x);
            bounds.min_y = bounds.min_y.min(tile.y);
            bounds.max_y = bounds.max_y.max(tile.y);
        }

        Some(bounds)
    }

    /// Centre of the box under floor division. Translating by the
    /// negated centre leaves the box straddling the origin as evenly as
    /// integer division allows.
    pub fn center(&self) -> (i64, i64) {
        (
            (self.min_x + self.max_x).div_euclid(2),
            (self.min_y + self.max_y).div_euclid(2),
        )
    }

    /// Width in tiles, inclusive of both extremes.
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x + 1
    }

    /// Height in tiles, inclusive of both extremes.
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y + 1
    }
}
