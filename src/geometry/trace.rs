//! Segment tracing: collapse contiguous runs of boundary wall tiles
//! into straight-line segments.
//!
//! The tracer works in three stages. First, tiles fully enclosed on all
//! 8 neighbours are dropped; interior fill needs no boundary drawn.
//! Second, two directional scans (horizontal then vertical) merge runs
//! of traceable tiles into segments. Third, maximally isolated tiles
//! that no run picked up are emitted as degenerate one-tile segments.
//!
//! A tile sitting at a corner may be covered by both a horizontal and a
//! vertical segment. That redundancy is intentional: corners are always
//! bounded in both directions.

use std::collections::HashSet;

use crate::geometry::{Bounds, TileIndex};
use crate::types::{TilePoint, TileSegment, TileSet};

/// Interior threshold: a tile with all 8 neighbours occupied needs no
/// boundary segment.
const ENCLOSED_NEIGHBOURS: u8 = 8;

/// A tile on a thin or edge-like part of the wall mass has at most this
/// many corners (or sides) occupied and may merge into a run.
const TRACEABLE_MAX: u8 = 3;

/// A tile with at most this many total neighbours is a lone-tile
/// candidate.
const LONE_MAX: u8 = 2;

/// Result of tracing one wall set.
#[derive(Debug, Default)]
pub struct TraceOutput {
    /// The boundary tiles that were considered for tracing (every wall
    /// tile not fully enclosed). Kept for diagnostics and testing.
    pub boundary_tiles: TileSet,

    /// Segments in emission order: horizontal (row-major), vertical
    /// (column-major), then lone tiles in pool order.
    pub segments: Vec<TileSegment>,
}

/// Trace the wall set into a minimal ordered list of segments.
///
/// Pure computation; an empty wall set yields empty outputs. Emission
/// order never depends on hash iteration order, so output is stable for
/// a fixed input ordering.
pub fn trace_segments(walls: &[TilePoint]) -> TraceOutput {
    let index = TileIndex::new(walls);

    let boundary_tiles: TileSet = walls
        .iter()
        .copied()
        .filter(|t| index.count_neighbours(t.x, t.y) < ENCLOSED_NEIGHBOURS)
        .collect();

    let Some(bounds) = Bounds::of(&boundary_tiles) else {
        return TraceOutput::default();
    };

    let mut segments = Vec::new();
    let mut covered: HashSet<TilePoint> = HashSet::new();

    // Horizontal pass: scan each row left to right. A run opens at a
    // traceable tile whose right neighbour is occupied and closes on
    // the first non-traceable cell.
    for y in (bounds.min_y - 1)..=(bounds.max_y + 1) {
        let mut run_start: Option<i64> = None;
        for x in (bounds.min_x - 1)..=(bounds.max_x + 1) {
            let con = traceable(&index, x, y);
            match run_start {
                Some(start_x) => {
                    if con {
                        covered.insert(TilePoint::new(x, y));
                    } else {
                        segments.push(TileSegment::new(start_x, y, x - 1, y));
                        run_start = None;
                    }
                }
                None => {
                    if con && index.contains(x + 1, y) {
                        run_start = Some(x);
                        covered.insert(TilePoint::new(x, y));
                    }
                }
            }
        }
        // The extreme column of the wall set is never interior, so the
        // scan range ends on an unoccupied cell and every run closes
        // inside the loop.
        debug_assert!(run_start.is_none());
    }

    // Vertical pass: symmetric scan over columns, offset (0, 1).
    for x in (bounds.min_x - 1)..=(bounds.max_x + 1) {
        let mut run_start: Option<i64> = None;
        for y in (bounds.min_y - 1)..=(bounds.max_y + 1) {
            let con = traceable(&index, x, y);
            match run_start {
                Some(start_y) => {
                    if con {
                        covered.insert(TilePoint::new(x, y));
                    } else {
                        segments.push(TileSegment::new(x, start_y, x, y - 1));
                        run_start = None;
                    }
                }
                None => {
                    if con && index.contains(x, y + 1) {
                        run_start = Some(y);
                        covered.insert(TilePoint::new(x, y));
                    }
                }
            }
        }
        debug_assert!(run_start.is_none());
    }

    // Lone pass: maximally isolated tiles never satisfy a run start
    // condition; emit them individually. Tiles already inside a run are
    // skipped so a plain strip stays a single segment.
    for tile in &boundary_tiles {
        if index.count_neighbours(tile.x, tile.y) <= LONE_MAX && !covered.contains(tile) {
            segments.push(TileSegment::lone(*tile));
        }
    }

    TraceOutput {
        boundary_tiles,
        segments,
    }
}

/// A tile may continue a run when it exists and sits on a thin or
/// edge-like part of the wall mass.
fn traceable(index: &TileIndex, x: i64, y: i64) -> bool {
    index.contains(x, y)
        && (index.count_corners(x, y) <= TRACEABLE_MAX || index.count_sides(x, y) <= TRACEABLE_MAX)
}
