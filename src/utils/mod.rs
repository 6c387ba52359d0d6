//! Filesystem and platform helpers
//!
//! - [`fs`] - directory creation, atomic writes, JSON read/write with path context
//! - [`platform`] - home directory discovery and `~`/`$VAR` expansion

pub mod fs;
pub mod platform;

pub use fs::{atomic_write, ensure_dir, ensure_parent_dir, read_json_file, write_json_file};
pub use platform::{get_home_dir, is_windows, resolve_path};
