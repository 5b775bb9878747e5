//! Orchestration of the extract → catalog → select lifecycle.

use std::path::PathBuf;

use serde::Serialize;

use crate::services::archive;
use crate::services::catalog::{self, Catalog};
use crate::services::resource::ResourceTable;
use crate::services::selector::Selector;
use crate::services::workspace::TempWorkspace;
use crate::types::errors::{CoreError, CoreResult};

/// Lifecycle states of a [`CoreController`].
///
/// Only `Uninitialized` accepts `initialize()`; `ShutDown` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerState {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
    ShutDown,
}

/// One random pick, handed to the shell for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    /// Absolute path of the selected image inside the workspace.
    pub path: PathBuf,
    /// File stem without path or extension, for the name label.
    pub display_name: String,
    /// 0-based position in the catalog.
    pub index: usize,
    /// Catalog length at selection time.
    pub total: usize,
}

/// Outcome of a successful `initialize()`.
///
/// `image_count == 0` is a soft "nothing to show" state, not a failure;
/// the shell is expected to report it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InitSummary {
    pub image_count: usize,
}

/// Owns the workspace, catalog and selector for one run of the embedded
/// image pack.
///
/// `initialize()` performs blocking I/O (resource read, extraction, scan);
/// an event-driven shell should move the controller to a worker thread for
/// that call (the type is `Send`) and signal completion back itself.
/// Dropping the controller removes the workspace the same way `shutdown()`
/// does, so a shell that forgets to shut down does not leak the directory.
#[derive(Debug)]
pub struct CoreController {
    resources: ResourceTable,
    resource_id: u32,
    state: ControllerState,
    workspace: TempWorkspace,
    catalog: Catalog,
    selector: Option<Selector>,
    last_error: Option<CoreError>,
}

impl CoreController {
    /// A controller serving picks from the blob registered under
    /// `resource_id` in `resources`.
    pub fn new(resources: ResourceTable, resource_id: u32) -> Self {
        Self {
            resources,
            resource_id,
            state: ControllerState::Uninitialized,
            workspace: TempWorkspace::new(),
            catalog: Catalog::default(),
            selector: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The error that moved the controller to `Failed`, if any.
    pub fn last_error(&self) -> Option<&CoreError> {
        self.last_error.as_ref()
    }

    /// Read the embedded archive, extract it into a fresh workspace,
    /// catalog the image files and seed the selector.
    ///
    /// Legal only from `Uninitialized`. On any step failing the controller
    /// moves to `Failed`, records the error and destroys a workspace that
    /// was already created, so a partially populated directory is not
    /// leaked.
    pub fn initialize(&mut self) -> CoreResult<InitSummary> {
        match self.state {
            ControllerState::Uninitialized => {}
            ControllerState::ShutDown => return Err(CoreError::ControllerShutDown),
            _ => return Err(CoreError::AlreadyInitialized),
        }

        self.state = ControllerState::Initializing;
        match self.run_init() {
            Ok(summary) => {
                self.state = ControllerState::Ready;
                Ok(summary)
            }
            Err(e) => {
                self.workspace.destroy();
                self.last_error = Some(e.clone());
                self.state = ControllerState::Failed;
                Err(e)
            }
        }
    }

    fn run_init(&mut self) -> CoreResult<InitSummary> {
        let bytes = self.resources.read(self.resource_id)?;
        log::info!(
            "read embedded resource {} ({} bytes)",
            self.resource_id,
            bytes.len()
        );

        let root = self.workspace.create()?;
        let entry_count = archive::extract_to_dir(bytes, &root)?;
        log::info!("extracted {entry_count} entries to {}", root.display());

        self.catalog = catalog::scan(&root, catalog::IMAGE_EXTENSIONS)?;
        let image_count = self.catalog.len();
        if image_count == 0 {
            log::warn!("no image files found in extracted pack");
        } else {
            log::info!("cataloged {image_count} image files");
        }

        self.selector = Some(Selector::from_entropy());

        Ok(InitSummary { image_count })
    }

    /// Pick a uniformly random image from the catalog.
    ///
    /// Legal only in `Ready`; fails with `EmptyPopulation` when the pack
    /// contained no catalogable images.
    pub fn pick_random(&mut self) -> CoreResult<SelectionResult> {
        match self.state {
            ControllerState::Ready => {}
            ControllerState::ShutDown => return Err(CoreError::ControllerShutDown),
            _ => return Err(CoreError::NotReady),
        }

        let total = self.catalog.len();
        let selector = self.selector.as_mut().ok_or(CoreError::NotReady)?;
        let index = selector.next(total)?;
        let path = self
            .catalog
            .get(index)
            .ok_or(CoreError::EmptyPopulation)?
            .to_path_buf();

        let display_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        log::debug!("selected {}/{total}: {}", index + 1, path.display());

        Ok(SelectionResult {
            path,
            display_name,
            index,
            total,
        })
    }

    /// Destroy the workspace and move to the terminal `ShutDown` state.
    ///
    /// Always legal and idempotent; deletion errors are swallowed because
    /// this runs during teardown.
    pub fn shutdown(&mut self) {
        if self.state == ControllerState::ShutDown {
            return;
        }
        self.workspace.destroy();
        self.catalog = Catalog::default();
        self.selector = None;
        self.state = ControllerState::ShutDown;
    }
}
