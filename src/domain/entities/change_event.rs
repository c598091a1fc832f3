//! Change Event Entity

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Kind of filesystem change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Path was created
    Created,
    /// Metadata changed (permissions, timestamps)
    AttributeChanged,
    /// A writer closed the file
    WriteFinished,
    /// Content modified while the file is still open
    Modified,
    Removed,
    Renamed,
    Other,
}

impl ChangeKind {
    /// Whether this kind of change is mirrored
    pub fn triggers_mirror(self) -> bool {
        matches!(
            self,
            ChangeKind::Created | ChangeKind::AttributeChanged | ChangeKind::WriteFinished
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Created => "CREATE",
            ChangeKind::AttributeChanged => "ATTRIB",
            ChangeKind::WriteFinished => "CLOSE_WRITE",
            ChangeKind::Modified => "MODIFY",
            ChangeKind::Removed => "DELETE",
            ChangeKind::Renamed => "RENAME",
            ChangeKind::Other => "OTHER",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One filesystem notification, consumed exactly once by the watch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

impl ChangeEvent {
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.path.display().to_string(), self.kind)
    }
}
