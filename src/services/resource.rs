//! Lookup of binary blobs compiled into the host executable.
//!
//! The original shipped the image pack as an `RT_RCDATA` Windows resource;
//! here the binary embeds blobs with `include_bytes!` and registers them in
//! a static table keyed by the same build-time integer ids.

use crate::types::errors::{CoreError, CoreResult};

/// Build-time id of the image pack archive.
pub const FLAG_PACK_ID: u32 = 1;

/// Static registry of embedded resources, `(id, bytes)` per entry.
///
/// The hosting binary constructs one of these once:
///
/// ```ignore
/// static RESOURCES: &[(u32, &[u8])] = &[(FLAG_PACK_ID, include_bytes!("../assets/flags.zip"))];
/// let table = ResourceTable::new(RESOURCES);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResourceTable {
    entries: &'static [(u32, &'static [u8])],
}

impl ResourceTable {
    pub const fn new(entries: &'static [(u32, &'static [u8])]) -> Self {
        Self { entries }
    }

    /// Look up the blob registered under `id`.
    ///
    /// A registered but zero-length blob is reported as unreadable rather
    /// than handed to the extractor, matching the original's guard on
    /// `SizeofResource` returning 0.
    pub fn read(&self, id: u32) -> CoreResult<&'static [u8]> {
        let (_, bytes) = self
            .entries
            .iter()
            .find(|(key, _)| *key == id)
            .ok_or(CoreError::ResourceNotFound(id))?;

        if bytes.is_empty() {
            return Err(CoreError::ResourceRead(id, "resource has zero size".into()));
        }

        Ok(bytes)
    }
}
