//! Staged file copy
//!
//! Content is streamed into a temp file next to the destination and then
//! renamed over it, so an interrupted copy never leaves a truncated file.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// True if `path` exists and is a directory (symlinks followed)
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// True if `path` exists and is a regular file (symlinks followed)
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Create `path` and any missing parents with default permissions
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Copy `source` to `destination`, replacing any existing file.
///
/// Returns the number of bytes copied. The destination's parent must exist.
pub fn copy_staged(source: &Path, destination: &Path) -> io::Result<u64> {
    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut reader = BufReader::new(File::open(source)?);
    let mut staged = NamedTempFile::new_in(parent)?;
    let bytes = io::copy(&mut reader, &mut staged)?;
    staged.flush()?;

    staged.persist(destination).map_err(|e| e.error)?;
    Ok(bytes)
}
