mod extract;

pub use extract::extract_to_dir;
