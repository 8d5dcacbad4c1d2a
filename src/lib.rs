//! mapgeom - pixel-art tilemap to level geometry converter
//!
//! A library for converting tilemap PNG images into compact geometric
//! level descriptions: wall tiles, spawn tiles, and a minimized set of
//! straight-line wall segments.

pub mod cli;
pub mod decode;
pub mod discovery;
pub mod error;
pub mod geometry;
pub mod output;
pub mod types;

pub use decode::DecodedTilemap;
pub use discovery::{is_tilemap, scan_directory, scan_sources, Manifest, MANIFEST_FILENAME};
pub use error::{MapError, Result};
pub use geometry::{trace_segments, Bounds, TileIndex, TraceOutput};
pub use types::{GameMap, TilePoint, TileSegment, TileSet, TileSource};
