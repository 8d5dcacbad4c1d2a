//! Core geometry: bounds, neighbourhood classification, and segment
//! tracing over tile sets.

mod bounds;
mod index;
mod trace;

pub use bounds::Bounds;
pub use index::TileIndex;
pub use trace::{trace_segments, TraceOutput};
