//! Watch Root Entity

use std::path::{Path, PathBuf};

/// What a watch root points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    Directory,
    /// A single file watched on its own
    File,
}

/// A path registered for change notification.
///
/// Built once at startup by the path resolver and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WatchRoot {
    path: PathBuf,
    recursive: bool,
    kind: RootKind,
}

impl WatchRoot {
    pub fn directory(path: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
            kind: RootKind::Directory,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            recursive: false,
            kind: RootKind::File,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this root came from a recursive resolution
    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn kind(&self) -> RootKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == RootKind::Directory
    }
}
