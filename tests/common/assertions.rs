//! Polling helpers and mirror assertions.

#![allow(dead_code)]

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

/// Poll `condition` every 10ms until it holds or `timeout` passes
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(10));
    }
}

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a mirrored file exists with the given content.
///
/// # Example
/// ```ignore
/// assert_mirrored!(env.mirrored("a.txt"), "hello");
/// ```
#[macro_export]
macro_rules! assert_mirrored {
    ($dest:expr, $content:expr) => {{
        let dest: &std::path::Path = $dest.as_ref();
        let actual = std::fs::read_to_string(dest).unwrap_or_else(|e| {
            panic!("Expected mirrored file at '{}': {}", dest.display(), e)
        });
        assert_eq!(actual, $content, "content mismatch at {}", dest.display());
    }};
}
