//! Path resolution
//!
//! Expands command-line paths into the concrete set of watch roots. A
//! directory yields itself plus (when recursing) every directory below it;
//! a file yields itself.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::entities::WatchRoot;
use crate::error::{MirrorError, MirrorResult};

#[derive(Debug, Clone, Copy)]
pub struct PathResolver {
    recurse: bool,
}

impl PathResolver {
    pub fn new(recurse: bool) -> Self {
        Self { recurse }
    }

    /// Resolve `args` in order, dropping duplicates and empty arguments.
    ///
    /// Fails on the first argument that does not exist. Unreadable
    /// subdirectories found while walking are skipped.
    pub fn resolve(&self, args: &[PathBuf]) -> MirrorResult<Vec<WatchRoot>> {
        let mut seen = HashSet::new();
        let mut roots = Vec::new();

        for arg in args.iter().filter(|a| !a.as_os_str().is_empty()) {
            let path = absolute(arg);
            let metadata = fs::metadata(&path).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => MirrorError::PathNotFound { path: arg.clone() },
                _ => MirrorError::StatFailed {
                    path: arg.clone(),
                    source: e,
                },
            })?;

            if !metadata.is_dir() {
                if seen.insert(path.clone()) {
                    roots.push(WatchRoot::file(path));
                }
                continue;
            }

            for dir in self.walk_dirs(&path) {
                if seen.insert(dir.clone()) {
                    roots.push(WatchRoot::directory(dir, self.recurse));
                }
            }
        }

        Ok(roots)
    }

    fn walk_dirs(&self, root: &Path) -> Vec<PathBuf> {
        let depth = if self.recurse { None } else { Some(0) };
        WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .max_depth(depth)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_dir()))
            .map(|entry| entry.into_path())
            .collect()
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
