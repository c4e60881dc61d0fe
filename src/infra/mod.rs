//! File I/O for the notes file

mod fs;

pub use fs::{FsError, ensure_parent_dir, read_json, write_json};
