//! Recursive discovery of image files inside the workspace.
//! Uses the `walkdir` crate for traversal; symlinks are not followed.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::errors::{CoreError, CoreResult};

/// Extensions catalogable as images, matched case-insensitively.
/// Fixed at build time; not a runtime configuration surface.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Ordered, immutable list of discovered image paths.
///
/// Rebuilt wholesale by [`scan`]; never mutated incrementally. Paths are
/// sorted so a fixed extraction always yields the same ordering, keeping
/// selection reproducible under a fixed selector seed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    paths: Vec<PathBuf>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

/// Walk `root` recursively and collect every regular file whose extension
/// is in `extensions` (case-insensitive).
///
/// An empty result is a valid state, not an error; `ScanIo` is reserved
/// for access failures on the root itself. Unreadable entries deeper in
/// the tree are skipped with a warning.
pub fn scan(root: &Path, extensions: &[&str]) -> CoreResult<Catalog> {
    if !root.is_dir() {
        return Err(CoreError::ScanIo(format!(
            "scan root is not a directory: {}",
            root.display()
        )));
    }

    let mut paths = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if e.path().is_none_or(|p| p == root) {
                    return Err(CoreError::ScanIo(e.to_string()));
                }
                log::warn!("skipping unreadable entry: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let extension = entry
            .path()
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if extensions.contains(&extension.as_str()) {
            paths.push(entry.into_path());
        }
    }

    // Walk order varies across file systems; sort for a stable catalog.
    paths.sort();

    Ok(Catalog { paths })
}
