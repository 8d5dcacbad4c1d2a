//! File system scanner for discovering tilemap images.
//!
//! Recursively walks source directories collecting `.png` tilemaps,
//! honouring manifest exclude patterns.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// True when the path looks like a source tilemap image.
pub fn is_tilemap(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Scan a directory tree for tilemap images. Results are sorted by
/// path so output ordering is reproducible across runs.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut tilemaps = Vec::new();

    if !root.exists() {
        return tilemaps;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) {
            continue;
        }

        if is_tilemap(path) {
            tilemaps.push(path.to_path_buf());
        }
    }

    tilemaps.sort();
    tilemaps
}

/// Scan the manifest's source directories relative to a base path.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut tilemaps = Vec::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        tilemaps.extend(scan_directory(&source_path, manifest));
    }

    tilemaps
}
