//! Core engine for an image pack embedded in the host executable.
//!
//! The crate extracts a ZIP archive compiled into the binary as a resource
//! blob, materializes it into a private temporary directory, catalogs the
//! image files it contains and serves uniformly random picks from that
//! catalog. The presentation shell (window, button, labels) lives outside
//! this crate and drives it through three calls: [`CoreController::initialize`],
//! [`CoreController::pick_random`] and [`CoreController::shutdown`].
//!
//! Image pixel decoding is deliberately out of scope; callers receive file
//! paths and render them with whatever facility they have.

pub mod controller;
pub mod services;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use controller::{ControllerState, CoreController, InitSummary, SelectionResult};
pub use services::resource::{ResourceTable, FLAG_PACK_ID};
pub use types::errors::{CoreError, CoreResult};
