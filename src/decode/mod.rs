//! PNG tilemap decoding.
//!
//! One pixel is one tile. Classification follows the map-authoring
//! convention: opaque pure black is a wall, opaque pure red is a spawn
//! point, every other colour is ignored.

use std::path::Path;

use image::RgbaImage;

use crate::error::{MapError, Result};
use crate::types::TileSource;

const WALL_RGBA: [u8; 4] = [0, 0, 0, 255];
const SPAWN_RGBA: [u8; 4] = [255, 0, 0, 255];

/// A decoded source tilemap exposing per-cell sampling.
#[derive(Debug)]
pub struct DecodedTilemap {
    pixels: RgbaImage,
}

impl DecodedTilemap {
    /// Open and decode a tilemap image from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|e| MapError::Decode {
            path: path.to_path_buf(),
            message: format!("Failed to decode image: {}", e),
        })?;

        Ok(Self {
            pixels: img.to_rgba8(),
        })
    }

    /// Build a tilemap directly from an RGBA buffer.
    pub fn from_image(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    fn rgba_at(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }
}

impl TileSource for DecodedTilemap {
    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn wall_tile_at(&self, x: u32, y: u32) -> bool {
        self.rgba_at(x, y) == WALL_RGBA
    }

    fn spawn_tile_at(&self, x: u32, y: u32) -> bool {
        self.rgba_at(x, y) == SPAWN_RGBA
    }
}
