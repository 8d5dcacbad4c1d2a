//! Tilemap discovery: manifest configuration and directory scanning.

mod manifest;
mod scanner;

pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use scanner::{is_tilemap, scan_directory, scan_sources};
