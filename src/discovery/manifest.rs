//! Project manifest (mapgeom.yaml) parsing.
//!
//! The manifest replaces the hardcoded source/output directories of the
//! original map pipeline: where to look for tilemap images, where the
//! generated `.map.json` files go, and which paths to skip.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

/// Manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "mapgeom.yaml";

/// Project manifest loaded from mapgeom.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories to scan for tilemap images. Defaults to the current
    /// directory when empty.
    pub sources: Vec<String>,

    /// Output directory for generated map files.
    pub output: PathBuf,

    /// Pretty-print generated JSON.
    pub pretty: bool,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: PathBuf::from("dist"),
            pretty: false,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a mapgeom.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MapError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load the manifest from `dir` when one exists, defaults otherwise.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| MapError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Get effective source paths, defaulting to the current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

/// Simple glob matching: `*.bak` matches a suffix, `dir/*` matches a
/// directory's contents, anything else matches by containment.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    let pattern = pattern.strip_prefix("**/").unwrap_or(pattern);

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
    }

    path.contains(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert!(manifest.sources.is_empty());
        assert!(!manifest.pretty);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
sources:
  - maps/
output: src/maps
pretty: true
excludes:
  - "*.bak"
  - "**/drafts/*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.sources, vec!["maps/"]);
        assert_eq!(manifest.output, PathBuf::from("src/maps"));
        assert!(manifest.pretty);
        assert_eq!(manifest.excludes, vec!["*.bak", "**/drafts/*"]);
    }

    #[test]
    fn test_parse_empty_manifest_uses_defaults() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_effective_sources() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.effective_sources(), vec!["."]);

        manifest.sources = vec!["maps/".to_string()];
        assert_eq!(manifest.effective_sources(), vec!["maps/"]);
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("level.bak")));
        assert!(manifest.is_excluded(Path::new("maps/level.bak")));
        assert!(!manifest.is_excluded(Path::new("level.png")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("drafts/wip.png")));
        assert!(manifest.is_excluded(Path::new("maps/drafts/wip.png")));
        assert!(!manifest.is_excluded(Path::new("maps/final.png")));
    }

    #[test]
    fn test_load_or_default_without_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::load_or_default(dir.path()).unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_load_or_default_reads_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILENAME), "output: generated").unwrap();

        let manifest = Manifest::load_or_default(dir.path()).unwrap();
        assert_eq!(manifest.output, PathBuf::from("generated"));
    }
}
