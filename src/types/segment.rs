//! Wall segments: straight-line runs of contiguous wall tiles.

use serde::{Serialize, Serializer};

use super::TilePoint;

/// A straight line segment between two tile positions. Orientation is
/// not stored; it is inferable from which coordinates differ. A segment
/// with equal endpoints is a degenerate (lone-tile) segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSegment {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl TileSegment {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// A degenerate segment covering a single tile.
    pub fn lone(tile: TilePoint) -> Self {
        Self::new(tile.x, tile.y, tile.x, tile.y)
    }

    /// True when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }

    /// True when the segment covers the given tile. Only meaningful for
    /// axis-aligned segments, which is all the tracer produces.
    pub fn covers(&self, tile: TilePoint) -> bool {
        let (x_lo, x_hi) = (self.x1.min(self.x2), self.x1.max(self.x2));
        let (y_lo, y_hi) = (self.y1.min(self.y2), self.y1.max(self.y2));
        (self.y1 == self.y2 && tile.y == self.y1 && x_lo <= tile.x && tile.x <= x_hi)
            || (self.x1 == self.x2 && tile.x == self.x1 && y_lo <= tile.y && tile.y <= y_hi)
    }
}

// Wire shape is a 4-array `[x1, y1, x2, y2]`.
impl Serialize for TileSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.x1, self.y1, self.x2, self.y2).serialize(serializer)
    }
}
