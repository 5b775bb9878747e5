use std::io::{Cursor, Write};
use std::sync::Once;

use zip::write::SimpleFileOptions;

use crate::services::resource::ResourceTable;

static INIT: Once = Once::new();

/// Initialize the test logger once per process.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build an in-memory ZIP archive from `(name, bytes)` pairs.
/// Names ending in `/` become directory entries.
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (name, bytes) in entries {
        if name.ends_with('/') {
            writer
                .add_directory(name.trim_end_matches('/'), options)
                .expect("Failed to add directory entry");
        } else {
            writer.start_file(*name, options).expect("Failed to start entry");
            writer.write_all(bytes).expect("Failed to write entry");
        }
    }

    writer.finish().expect("Failed to finish archive").into_inner()
}

/// Leak `bytes` into a one-entry static resource table, the shape a real
/// binary gets from `include_bytes!`.
pub fn leak_resource_table(id: u32, bytes: Vec<u8>) -> ResourceTable {
    let blob: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    let entries: &'static [(u32, &'static [u8])] = Box::leak(Box::new([(id, blob)]));
    ResourceTable::new(entries)
}
