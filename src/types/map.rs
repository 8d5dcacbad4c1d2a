//! The output data model: one `GameMap` per source tilemap.
//!
//! Field names and the array-of-arrays shape of the serialized form are
//! load-bearing: the game engine reads `wallTiles`, `spawnTiles`,
//! `wallSegments` and `wallSegmentTiles` as arrays of 2- and 4-arrays,
//! so the wire layout must stay bit-for-bit stable.

use serde::Serialize;

use crate::geometry::{trace_segments, Bounds};
use crate::types::{translate_tiles, TilePoint, TileSegment, TileSet};

/// Tile-sampling capability of a decoded source image. The decoder
/// classifies pixels; the assembly only ever asks whether a cell is a
/// wall or a spawn.
pub trait TileSource {
    /// Source dimensions as (width, height) in tiles.
    fn dimensions(&self) -> (u32, u32);

    /// True when the cell at (x, y) is a wall tile.
    fn wall_tile_at(&self, x: u32, y: u32) -> bool;

    /// True when the cell at (x, y) is a spawn tile.
    fn spawn_tile_at(&self, x: u32, y: u32) -> bool;
}

/// Geometric description of one level, created fresh per source image
/// and immutable once serialized.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMap {
    pub wall_tiles: TileSet,
    pub spawn_tiles: TileSet,
    pub wall_segments: Vec<TileSegment>,
    pub wall_segment_tiles: TileSet,
}

impl GameMap {
    /// Build a map from a tile source: collect wall and spawn tiles in
    /// row-major order, centre the pool on the origin, then trace wall
    /// segments.
    pub fn from_source(source: &impl TileSource) -> Self {
        let mut map = GameMap::default();
        let (width, height) = source.dimensions();

        for y in 0..height {
            for x in 0..width {
                let tile = TilePoint::new(x as i64, y as i64);
                if source.wall_tile_at(x, y) {
                    map.wall_tiles.push(tile);
                }
                if source.spawn_tile_at(x, y) {
                    map.spawn_tiles.push(tile);
                }
            }
        }

        map.center();
        map.generate_segments();
        map
    }

    /// Translate all wall and spawn tiles by (dx, dy), preserving
    /// order. Pure translation: pairwise distances are unchanged.
    pub fn translate(&mut self, dx: i64, dy: i64) {
        translate_tiles(&mut self.wall_tiles, dx, dy);
        translate_tiles(&mut self.spawn_tiles, dx, dy);
    }

    /// Centre the combined wall+spawn pool on the origin. Idempotent:
    /// once centred, the midpoint is (0, 0) and a second application
    /// translates by nothing. No-op on an empty pool. Must run before
    /// segments are generated.
    pub fn center(&mut self) {
        let pool: TileSet = self
            .wall_tiles
            .iter()
            .chain(self.spawn_tiles.iter())
            .copied()
            .collect();

        if let Some(bounds) = Bounds::of(&pool) {
            let (cx, cy) = bounds.center();
            self.translate(-cx, -cy);
        }
    }

    /// Trace wall segments from the current wall tiles, replacing any
    /// previously generated segments.
    pub fn generate_segments(&mut self) {
        let output = trace_segments(&self.wall_tiles);
        self.wall_segment_tiles = output.boundary_tiles;
        self.wall_segments = output.segments;
    }

    /// Bounding box of the combined wall+spawn pool, `None` when the
    /// map holds no tiles.
    pub fn bounds(&self) -> Option<Bounds> {
        let pool: TileSet = self
            .wall_tiles
            .iter()
            .chain(self.spawn_tiles.iter())
            .copied()
            .collect();
        Bounds::of(&pool)
    }

    /// True when the source contained neither walls nor spawns.
    pub fn is_empty(&self) -> bool {
        self.wall_tiles.is_empty() && self.spawn_tiles.is_empty()
    }
}
