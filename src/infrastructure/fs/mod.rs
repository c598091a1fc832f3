//! File System Helpers
//!
//! Mirror-side disk operations: directory creation and staged copies.

mod copy;

pub use copy::{copy_staged, ensure_dir, is_dir, is_file};
