//! Mirror Sync implementation

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::config::WatchConfig;
use crate::domain::entities::PendingCopy;
use crate::domain::services::{map_to_mirror, MirrorLayout};
use crate::error::{MirrorError, MirrorResult};
use crate::infrastructure::fs::{copy_staged, ensure_dir, is_dir, is_file};
use crate::infrastructure::scheduler::{Scheduler, TaskHandle};

/// What `MirrorSync::sync` did with a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No usable mirror directory
    Disabled,
    /// Source no longer exists
    SourceMissing,
    /// Source is mirror output for a watched root
    InsideMirror,
    /// Neither a regular file nor a directory
    Unsupported,
    AlreadyMirrored { destination: PathBuf },
    DirectoryCreated { destination: PathBuf },
    CopyScheduled(PendingCopy),
}

impl SyncOutcome {
    /// Whether the path was handled as a change worth running the hook for
    pub fn counts_as_change(&self) -> bool {
        matches!(
            self,
            SyncOutcome::Disabled
                | SyncOutcome::AlreadyMirrored { .. }
                | SyncOutcome::DirectoryCreated { .. }
                | SyncOutcome::CopyScheduled(_)
        )
    }
}

/// Result of a delayed copy once its timer fires
#[derive(Debug)]
pub enum CopyReport {
    Copied {
        source: PathBuf,
        destination: PathBuf,
        bytes: u64,
    },
    /// Source was removed or replaced before the delay elapsed
    SourceVanished { source: PathBuf },
    Failed(MirrorError),
}

impl CopyReport {
    pub fn is_failure(&self) -> bool {
        matches!(self, CopyReport::Failed(_))
    }
}

/// Completion callback for delayed copies; runs on the copy worker thread
pub type CopyReporter = Arc<dyn Fn(CopyReport) + Send + Sync>;

pub struct MirrorSync {
    mirror_dir: Option<PathBuf>,
    delay: Duration,
    layout: MirrorLayout,
    watch_roots: Vec<PathBuf>,
    /// Where the watched roots are reproduced inside the mirror
    root_images: Vec<PathBuf>,
    reporter: CopyReporter,
    scheduler: Scheduler,
    pending: Mutex<Vec<TaskHandle>>,
}

impl MirrorSync {
    pub fn new(mirror_dir: Option<PathBuf>, delay: Duration) -> Self {
        Self {
            mirror_dir: mirror_dir.map(|dir| std::path::absolute(&dir).unwrap_or(dir)),
            delay,
            layout: MirrorLayout::native(),
            watch_roots: Vec::new(),
            root_images: Vec::new(),
            reporter: Arc::new(|_| {}),
            scheduler: Scheduler::new(),
            pending: Mutex::new(Vec::new()),
        }
    }

    pub fn from_config(config: &WatchConfig) -> Self {
        Self::new(config.mirror_dir.clone(), config.delay)
    }

    pub fn with_reporter<F>(mut self, reporter: F) -> Self
    where
        F: Fn(CopyReport) + Send + Sync + 'static,
    {
        self.reporter = Arc::new(reporter);
        self
    }

    pub fn with_layout(mut self, layout: MirrorLayout) -> Self {
        self.layout = layout;
        self.root_images.clear();
        for root in std::mem::take(&mut self.watch_roots) {
            self.observe_root(&root);
        }
        self
    }

    /// Record a watched root so its own mirror output is not mirrored again.
    ///
    /// Files copied from under `root` land under `map_to_mirror(root)`.
    /// Events at or below that location, and for the mirror directories
    /// leading to it, are reported as `InsideMirror` so a mirror nested in
    /// its own watched tree does not copy into itself forever.
    pub fn observe_root(&mut self, root: &Path) {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        if let Some(mirror_dir) = self.mirror_dir.as_deref() {
            let image = map_to_mirror(&root, mirror_dir, self.layout);
            if !self.root_images.iter().any(|known| image.starts_with(known)) {
                self.root_images.retain(|known| !known.starts_with(&image));
                self.root_images.push(image);
            }
        }
        self.watch_roots.push(root);
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The mirror directory, if configured and currently a directory
    pub fn mirror_dir(&self) -> Option<&Path> {
        self.mirror_dir.as_deref().filter(|dir| is_dir(dir))
    }

    /// Where `source` would land in the mirror
    pub fn destination_for(&self, source: &Path) -> Option<PathBuf> {
        self.mirror_dir()
            .map(|dir| map_to_mirror(source, dir, self.layout))
    }

    /// Mirror one changed path.
    ///
    /// Directories are created synchronously. Files get their parent
    /// directory created now and a copy scheduled after the delay; each call
    /// schedules an independent copy.
    pub fn sync(&self, source: &Path) -> MirrorResult<SyncOutcome> {
        let Some(mirror_dir) = self.mirror_dir() else {
            return Ok(SyncOutcome::Disabled);
        };
        if self.is_mirror_output(source) {
            return Ok(SyncOutcome::InsideMirror);
        }

        let metadata = match fs::metadata(source) {
            Ok(metadata) => metadata,
            Err(_) => return Ok(SyncOutcome::SourceMissing),
        };
        let destination = map_to_mirror(source, mirror_dir, self.layout);

        if metadata.is_dir() {
            if is_dir(&destination) {
                return Ok(SyncOutcome::AlreadyMirrored { destination });
            }
            ensure_dir(&destination).map_err(|e| MirrorError::DirectoryCreateFailed {
                path: destination.clone(),
                source: e,
            })?;
            return Ok(SyncOutcome::DirectoryCreated { destination });
        }

        if !metadata.is_file() {
            return Ok(SyncOutcome::Unsupported);
        }

        if let Some(parent) = destination.parent() {
            ensure_dir(parent).map_err(|e| MirrorError::DirectoryCreateFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let (from, to) = (source.to_path_buf(), destination.clone());
        let reporter = Arc::clone(&self.reporter);
        let handle = self
            .scheduler
            .schedule(self.delay, move || reporter(run_copy(&from, &to)))
            .map_err(|e| MirrorError::CopyFailed {
                from: source.to_path_buf(),
                to: destination.clone(),
                source: e,
            })?;
        let pending = PendingCopy::new(source.to_path_buf(), destination, handle.fire_at());

        let mut tracked = self.tracked();
        tracked.retain(|h| !h.is_finished());
        tracked.push(handle);

        Ok(SyncOutcome::CopyScheduled(pending))
    }

    /// Inside a root's image, or one of the directories leading to it
    fn is_mirror_output(&self, source: &Path) -> bool {
        let Some(mirror_dir) = self.mirror_dir.as_deref() else {
            return false;
        };
        self.root_images.iter().any(|image| {
            source.starts_with(image)
                || (source.starts_with(mirror_dir) && image.starts_with(source))
        })
    }

    /// Copies scheduled but not yet finished
    pub fn pending_count(&self) -> usize {
        self.tracked().iter().filter(|h| !h.is_finished()).count()
    }

    /// Cancel every copy whose timer has not fired; returns how many were stopped
    pub fn cancel_pending(&self) -> usize {
        self.tracked().drain(..).filter(|h| h.cancel()).count()
    }

    /// Block until all scheduled copies finish, up to `timeout` each
    pub fn wait_idle(&self, timeout: Duration) -> bool {
        let handles: Vec<TaskHandle> = self.tracked().clone();
        handles.iter().all(|h| h.wait(timeout))
    }

    fn tracked(&self) -> MutexGuard<'_, Vec<TaskHandle>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Body of a delayed copy; rechecks the source before copying
fn run_copy(source: &Path, destination: &Path) -> CopyReport {
    if !is_file(source) {
        return CopyReport::SourceVanished {
            source: source.to_path_buf(),
        };
    }

    match copy_staged(source, destination) {
        Ok(bytes) => CopyReport::Copied {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            bytes,
        },
        Err(e) => CopyReport::Failed(MirrorError::CopyFailed {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            source: e,
        }),
    }
}
