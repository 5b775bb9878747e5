pub mod archive;
pub mod catalog;
pub mod fs_utils;
pub mod resource;
pub mod selector;
pub mod workspace;
