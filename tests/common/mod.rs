use std::io::{Cursor, Write};
use std::sync::Once;

use flagpack::ResourceTable;
use zip::write::SimpleFileOptions;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build an in-memory ZIP archive from `(name, bytes)` pairs.
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (name, bytes) in entries {
        writer.start_file(*name, options).expect("Failed to start entry");
        writer.write_all(bytes).expect("Failed to write entry");
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
