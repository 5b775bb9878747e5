//! ZIP extraction from an in-memory buffer into a workspace directory.

use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use crate::services::fs_utils::path_utils;
use crate::types::errors::{CoreError, CoreResult};

/// Extract every entry of the ZIP archive in `bytes` under `dest_path`.
///
/// `dest_path` must already exist and be writable. Entry order follows the
/// archive's central directory; intermediate directories are created as
/// needed. Returns the number of entries written.
///
/// Any entry whose path would resolve outside `dest_path` (via `..`
/// segments or an absolute path) aborts the whole extraction with
/// [`CoreError::UnsafeEntryPath`] — a hostile archive must not write
/// outside the workspace. On failure the extraction is not rolled back;
/// the caller is expected to destroy the workspace.
pub fn extract_to_dir(bytes: &[u8], dest_path: &Path) -> CoreResult<usize> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| CoreError::ArchiveCorrupt(format!("invalid or corrupt ZIP: {e}")))?;

    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| CoreError::ArchiveCorrupt(format!("failed to read entry {i}: {e}")))?;

        // Entry names may use back-slash separators; normalize before the
        // containment check.
        let name = entry.name().replace('\\', "/");
        let relative = Path::new(&name);
        if !path_utils::is_path_safe(dest_path, relative) {
            return Err(CoreError::UnsafeEntryPath(name));
        }

        let output_path = dest_path.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(|e| {
                CoreError::ExtractionIo(format!(
                    "failed to create dir {}: {e}",
                    output_path.display()
                ))
            })?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    CoreError::ExtractionIo(format!(
                        "failed to create parent of {}: {e}",
                        output_path.display()
                    ))
                })?;
            }
            let mut outfile = fs::File::create(&output_path).map_err(|e| {
                CoreError::ExtractionIo(format!(
                    "failed to create file {}: {e}",
                    output_path.display()
                ))
            })?;
            io::copy(&mut entry, &mut outfile).map_err(|e| {
                CoreError::ExtractionIo(format!(
                    "failed to write file {}: {e}",
                    output_path.display()
                ))
            })?;
        }
        count += 1;
    }

    Ok(count)
}
