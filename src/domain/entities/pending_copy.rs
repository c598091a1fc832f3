//! Pending Copy Entity

use std::path::{Path, PathBuf};
use std::time::Instant;

/// A delayed mirror copy waiting for its timer.
///
/// One exists per triggering event; repeated events for the same path
/// produce independent copies and the last one to fire wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCopy {
    source: PathBuf,
    destination: PathBuf,
    fire_at: Instant,
}

impl PendingCopy {
    pub fn new(source: PathBuf, destination: PathBuf, fire_at: Instant) -> Self {
        Self {
            source,
            destination,
            fire_at,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn fire_at(&self) -> Instant {
        self.fire_at
    }
}
