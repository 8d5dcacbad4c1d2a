//! Convert command implementation.
//!
//! Decodes tilemap images, assembles level geometry, and writes one
//! `.map.json` per input. Independent inputs are processed in parallel
//! on rayon's bounded worker pool; a failing input is reported and does
//! not abort the others.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rayon::prelude::*;

use crate::decode::DecodedTilemap;
use crate::discovery::{is_tilemap, scan_directory, scan_sources, Manifest};
use crate::error::{MapError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::GameMap;

/// Convert tilemap images into .map.json geometry files
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Tilemap files or directories to convert (default: manifest sources)
    pub paths: Vec<PathBuf>,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Pretty-print the generated JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(Path::new("."))?;
    let output_dir = args.output.unwrap_or_else(|| manifest.output.clone());
    let pretty = args.pretty || manifest.pretty;

    let files = collect_inputs(&args.paths, &manifest, printer);
    if files.is_empty() {
        printer.warning("Nothing", "no tilemap images found");
        return Ok(());
    }

    if !output_dir.exists() {
        fs::create_dir_all(&output_dir).map_err(|e| MapError::Io {
            path: output_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    // Convert in parallel, then report sequentially in input order so
    // terminal output stays reproducible.
    let results: Vec<(PathBuf, Result<PathBuf>)> = files
        .par_iter()
        .map(|file| (file.clone(), convert_file(file, &output_dir, pretty)))
        .collect();

    let mut converted = 0;
    let mut failed = 0;
    for (file, result) in results {
        match result {
            Ok(out_path) => {
                converted += 1;
                printer.status(
                    "Converted",
                    &format!("{} -> {}", display_path(&file), display_path(&out_path)),
                );
            }
            Err(e) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", display_path(&file), e));
            }
        }
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(converted, "map", "maps"),
            display_path(&output_dir)
        ),
    );

    if failed > 0 {
        return Err(MapError::Convert {
            message: format!("{} could not be converted", plural(failed, "map", "maps")),
            help: None,
        });
    }

    Ok(())
}

/// Expand CLI paths into tilemap files; with no paths given, fall back
/// to the manifest's source directories.
fn collect_inputs(paths: &[PathBuf], manifest: &Manifest, printer: &Printer) -> Vec<PathBuf> {
    if paths.is_empty() {
        return scan_sources(&manifest.effective_sources(), Path::new("."), manifest);
    }

    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scan_directory(path, manifest));
        } else if is_tilemap(path) {
            files.push(path.clone());
        } else {
            printer.warning("Skipping", &format!("{} (not a PNG)", display_path(path)));
        }
    }
    files
}

/// Convert one tilemap image to `<stem>.map.json` in the output
/// directory. Failures are fatal to this item only.
fn convert_file(path: &Path, output_dir: &Path, pretty: bool) -> Result<PathBuf> {
    let tilemap = DecodedTilemap::open(path)?;
    let map = GameMap::from_source(&tilemap);

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("level");
    let out_path = output_dir.join(format!("{}.map.json", stem));

    let json = if pretty {
        serde_json::to_vec_pretty(&map)
    } else {
        serde_json::to_vec(&map)
    }
    .map_err(|e| MapError::Convert {
        message: format!("Failed to serialize {}: {}", path.display(), e),
        help: None,
    })?;

    fs::write(&out_path, json).map_err(|e| MapError::Io {
        path: out_path.clone(),
        message: format!("Failed to write map: {}", e),
    })?;

    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    use super::*;

    const WALL: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const SPAWN: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn write_strip_map(path: &Path) {
        // 3 wall tiles in a row plus one spawn below.
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 0, WALL);
        img.put_pixel(1, 0, WALL);
        img.put_pixel(2, 0, WALL);
        img.put_pixel(1, 1, SPAWN);
        img.save(path).unwrap();
    }

    #[test]
    fn test_convert_file_writes_expected_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("arena.png");
        write_strip_map(&input);

        let out_path = convert_file(&input, dir.path(), false).unwrap();
        assert_eq!(out_path, dir.path().join("arena.map.json"));

        let json: serde_json::Value =
            serde_json::from_slice(&fs::read(&out_path).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "wallTiles": [[-1, 0], [0, 0], [1, 0]],
                "spawnTiles": [[0, 1]],
                "wallSegments": [[-1, 0, 1, 0]],
                "wallSegmentTiles": [[-1, 0], [0, 0], [1, 0]],
            })
        );
    }

    #[test]
    fn test_convert_file_missing_input() {
        let dir = tempdir().unwrap();
        let result = convert_file(&dir.path().join("absent.png"), dir.path(), false);
        assert!(matches!(result, Err(MapError::Decode { .. })));
    }

    #[test]
    fn test_run_converts_directory() {
        let dir = tempdir().unwrap();
        let maps_dir = dir.path().join("maps");
        let out_dir = dir.path().join("out");
        fs::create_dir_all(&maps_dir).unwrap();
        write_strip_map(&maps_dir.join("a.png"));
        write_strip_map(&maps_dir.join("b.png"));

        let args = ConvertArgs {
            paths: vec![maps_dir],
            output: Some(out_dir.clone()),
            pretty: false,
        };
        run(args, &Printer::new()).unwrap();

        assert!(out_dir.join("a.map.json").exists());
        assert!(out_dir.join("b.map.json").exists());
    }

    #[test]
    fn test_run_reports_failed_items_but_processes_rest() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("out");
        let good = dir.path().join("good.png");
        let bad = dir.path().join("bad.png");
        write_strip_map(&good);
        fs::write(&bad, b"not a png").unwrap();

        let args = ConvertArgs {
            paths: vec![good, bad],
            output: Some(out_dir.clone()),
            pretty: false,
        };
        let result = run(args, &Printer::new());

        // The decodable input still converts; the command surfaces the
        // failure afterwards.
        assert!(out_dir.join("good.map.json").exists());
        assert!(matches!(result, Err(MapError::Convert { .. })));
    }

    #[test]
    fn test_convert_file_pretty_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("arena.png");
        write_strip_map(&input);

        let out_path = convert_file(&input, dir.path(), true).unwrap();
        let text = fs::read_to_string(&out_path).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("\"wallSegments\""));
    }
}
