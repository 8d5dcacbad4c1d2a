//! Inspect command implementation.
//!
//! Runs the full decode/assemble/trace pipeline on one tilemap and
//! prints a geometry summary to stdout without writing anything.

use std::path::PathBuf;

use clap::Args;

use crate::decode::DecodedTilemap;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::types::GameMap;

/// Summarize the geometry of a single tilemap without writing output
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Tilemap image to inspect
    pub file: PathBuf,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    printer.status("Inspecting", &display_path(&args.file));

    let tilemap = DecodedTilemap::open(&args.file)?;
    let map = GameMap::from_source(&tilemap);

    println!("{}", summarize(&map));
    Ok(())
}

fn summarize(map: &GameMap) -> String {
    let mut lines = vec![
        format!("wall tiles:         {}", map.wall_tiles.len()),
        format!("spawn tiles:        {}", map.spawn_tiles.len()),
        format!("boundary tiles:     {}", map.wall_segment_tiles.len()),
        format!("wall segments:      {}", map.wall_segments.len()),
    ];

    let lone = map
        .wall_segments
        .iter()
        .filter(|s| s.is_degenerate())
        .count();
    lines.push(format!("  of which lone:    {}", lone));

    match map.bounds() {
        Some(bounds) => lines.push(format!(
            "bounds:             {}x{} ({},{})..({},{})",
            bounds.width(),
            bounds.height(),
            bounds.min_x,
            bounds.min_y,
            bounds.max_x,
            bounds.max_y
        )),
        None => lines.push("bounds:             empty map".to_string()),
    }

    if !map.wall_tiles.is_empty() {
        let saved = map.wall_segment_tiles.len() as i64 - map.wall_segments.len() as i64;
        lines.push(format!(
            "segment reduction:  {} fewer than one per boundary tile",
            plural(saved.max(0) as usize, "primitive", "primitives")
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TilePoint;

    #[test]
    fn test_summarize_empty_map() {
        let map = GameMap::default();
        let summary = summarize(&map);
        assert!(summary.contains("wall tiles:         0"));
        assert!(summary.contains("empty map"));
    }

    #[test]
    fn test_summarize_counts() {
        let mut map = GameMap {
            wall_tiles: vec![
                TilePoint::new(0, 0),
                TilePoint::new(1, 0),
                TilePoint::new(5, 5),
            ],
            ..Default::default()
        };
        map.generate_segments();

        let summary = summarize(&map);
        assert!(summary.contains("wall tiles:         3"));
        assert!(summary.contains("wall segments:      2"));
        assert!(summary.contains("of which lone:    1"));
        assert!(summary.contains("bounds:             6x6 (0,0)..(5,5)"));
    }
}
