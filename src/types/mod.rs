//! Data model for converted maps.

mod map;
mod point;
mod segment;

pub use map::{GameMap, TileSource};
pub use point::{translate_tiles, TilePoint, TileSet};
pub use segment::TileSegment;
