//! Notify-backed event source

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

use notify::event::{AccessKind, AccessMode, ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::entities::{ChangeEvent, ChangeKind};
use crate::domain::ports::EventSource;
use crate::error::{MirrorError, MirrorResult};

/// Map a notify event kind onto a change kind
pub fn classify(kind: &EventKind) -> ChangeKind {
    classify_path(kind, 0)
}

/// Change kind for the `index`th path of an event.
///
/// A file renamed into place is new at its destination, so the target of
/// a rename counts as created: the only path of `Name(To)` and the second
/// path of `Name(Both)`.
pub fn classify_path(kind: &EventKind, index: usize) -> ChangeKind {
    match kind {
        EventKind::Create(_) => ChangeKind::Created,
        EventKind::Modify(ModifyKind::Metadata(_)) => ChangeKind::AttributeChanged,
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => ChangeKind::Created,
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) if index == 1 => ChangeKind::Created,
        EventKind::Modify(ModifyKind::Name(_)) => ChangeKind::Renamed,
        EventKind::Modify(_) => ChangeKind::Modified,
        EventKind::Access(AccessKind::Close(AccessMode::Write)) => ChangeKind::WriteFinished,
        EventKind::Remove(_) => ChangeKind::Removed,
        _ => ChangeKind::Other,
    }
}

/// Event source backed by the platform's recommended watcher.
///
/// Every path is registered non-recursively; the resolver expands
/// directory trees up front.
pub struct NotifyEventSource {
    watcher: Option<RecommendedWatcher>,
    events: Receiver<ChangeEvent>,
    errors: Receiver<MirrorError>,
    watched: Vec<PathBuf>,
}

impl NotifyEventSource {
    pub fn new() -> MirrorResult<Self> {
        let (event_tx, events) = channel();
        let (error_tx, errors) = channel();

        let watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    for (index, path) in event.paths.into_iter().enumerate() {
                        let kind = classify_path(&event.kind, index);
                        let _ = event_tx.send(ChangeEvent::new(path, kind));
                    }
                }
                Err(e) => {
                    let _ = error_tx.send(MirrorError::EventSource {
                        message: e.to_string(),
                    });
                }
            },
            Config::default(),
        )
        .map_err(|e| MirrorError::EventSource {
            message: format!("failed to start watcher: {e}"),
        })?;

        Ok(Self {
            watcher: Some(watcher),
            events,
            errors,
            watched: Vec::new(),
        })
    }
}

impl EventSource for NotifyEventSource {
    fn watch(&mut self, path: &Path) -> MirrorResult<()> {
        let watcher = self
            .watcher
            .as_mut()
            .ok_or_else(|| MirrorError::WatchRegistrationFailed {
                path: path.to_path_buf(),
                message: "event source is closed".to_string(),
            })?;

        watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|e| MirrorError::WatchRegistrationFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        self.watched.push(path.to_path_buf());
        Ok(())
    }

    fn events(&self) -> &Receiver<ChangeEvent> {
        &self.events
    }

    fn errors(&self) -> &Receiver<MirrorError> {
        &self.errors
    }

    fn watched(&self) -> &[PathBuf] {
        &self.watched
    }

    fn close(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            for path in &self.watched {
                let _ = watcher.unwatch(path);
            }
        }
        self.watched.clear();
    }
}
