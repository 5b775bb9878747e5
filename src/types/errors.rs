use serde::Serialize;
use thiserror::Error;

/// Every fault the core can surface to the presentation shell.
///
/// All variants are recoverable from the controller's perspective; none
/// should bring the process down. The shell decides how each kind is
/// rendered (status label, dialog, ...).
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("No embedded resource with id {0}")]
    ResourceNotFound(u32),
    #[error("Embedded resource {0} is unreadable: {1}")]
    ResourceRead(u32, String),
    #[error("Workspace creation failed: {0}")]
    WorkspaceCreate(String),
    #[error("Invalid or corrupt archive: {0}")]
    ArchiveCorrupt(String),
    #[error("Archive entry escapes the workspace: {0}")]
    UnsafeEntryPath(String),
    #[error("Extraction I/O error: {0}")]
    ExtractionIo(String),
    #[error("Workspace scan failed: {0}")]
    ScanIo(String),
    #[error("No images available to select")]
    EmptyPopulation,
    #[error("Controller is already initialized")]
    AlreadyInitialized,
    #[error("Controller is not ready")]
    NotReady,
    #[error("Controller has been shut down")]
    ControllerShutDown,
}

impl Serialize for CoreError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
