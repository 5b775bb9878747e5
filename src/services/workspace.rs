//! Lifecycle of the process-private extraction directory.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::types::errors::{CoreError, CoreResult};

/// Fixed prefix for workspace directories under the platform temp root.
const WORKSPACE_PREFIX: &str = "FlagImages_";

/// Owns at most one live temporary directory.
///
/// `create` synthesizes a collision-resistant name (fixed prefix plus a
/// random suffix) under the system temp root. `destroy` removes the whole
/// tree; errors during destroy are logged and swallowed because it runs
/// during teardown where no further user interaction is possible. Dropping
/// the workspace performs the same best-effort removal.
#[derive(Debug, Default)]
pub struct TempWorkspace {
    dir: Option<TempDir>,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: None }
    }

    /// Create the workspace directory, or return the existing one.
    ///
    /// At most one directory is live per workspace instance.
    pub fn create(&mut self) -> CoreResult<PathBuf> {
        if let Some(dir) = &self.dir {
            return Ok(dir.path().to_path_buf());
        }

        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir()
            .map_err(|e| CoreError::WorkspaceCreate(e.to_string()))?;

        let path = dir.path().to_path_buf();
        log::debug!("created workspace {}", path.display());
        self.dir = Some(dir);
        Ok(path)
    }

    /// Path of the live workspace, if any.
    pub fn path(&self) -> Option<&Path> {
        self.dir.as_ref().map(|d| d.path())
    }

    /// Recursively remove the workspace tree. Idempotent; never fails.
    pub fn destroy(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                log::warn!("failed to remove workspace {}: {e}", path.display());
            } else {
                log::debug!("removed workspace {}", path.display());
            }
        }
    }
}
